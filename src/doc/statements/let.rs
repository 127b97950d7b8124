/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is optional.
Names of builtin functions cannot be assigned.

## Example
```text
10 A = 10
20 PRINT A
30 LET A = 20
40 PRINT A
10
20
```

*/
