/*!
# `STOP`

## Purpose
Interrupt the program with a `BREAK` error.

## Remarks
Typically used for debugging.

## Example
```text
10 STOP
?BREAK IN 10
```

*/
