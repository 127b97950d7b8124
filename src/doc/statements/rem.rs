/*!
# `REM <anything>` or `' <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks do nothing. A remark runs to the end of the line.

## Example
```text
10 REM Authored by Zaphod
20 PRINT 42 ' Answer to everything.
42
```

*/
