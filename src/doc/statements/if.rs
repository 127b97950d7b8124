/*!
# `IF <expression> THEN <statement>`
Also `IF <expression> THEN <line>` and `IF <expression> GOTO <line>`.

## Purpose
Do something contingent on a predicate.

## Remarks
Any nonzero number is true. A string predicate is a `TYPE MISMATCH`.
When the predicate is false the rest of the line is skipped,
including statements after a colon.

## Example
```text
10 A=10
20 IF A<30 THEN PRINT A:GOSUB 100:GOTO 20
90 END
100 A=A+10:RETURN
10
20
```

*/
