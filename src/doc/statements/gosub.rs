/*!
# `GOSUB <line number>`

## Purpose
Remember the statement after the `GOSUB` and move execution to the specified line number.

## Remarks
`RETURN` resumes execution at the remembered statement.
If `<line number>` doesn't exist an `UNDEFINED LINE` error will occur.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
HELLO WORLD
```

*/
