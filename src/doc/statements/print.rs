/*!
# `PRINT [<list of expressions>]`

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline (ASCII 10).
To suppress the newline, use a semicolon (;) or comma (,) at the end.
Separating expressions with nothing or a semicolon (;) will print them with nothing between.
Output is divided into zones of 14 characters. A comma will advance to the start of next zone.

## Example
```text
10 PRINT ,"MAR","APR"
20 PRINT "BOUGHT",100,120
              MAR           APR
BOUGHT        100           120
```

*/
