/*!
# `NEXT [<variable>]`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
`FOR` loops are stack based. Specifying an optional variable
here will use the innermost loop for that variable and discard
any loops opened inside it.
Some confusion (or abuse) can happen if using `GOTO` to break a loop.

## Example
```text
10 FOR I=1 TO 10:NEXT
20 FOR J=1 TO 20:FOR I=1 TO 20:NEXT J
```

*/
