/*!
# `INPUT ["<prompt string>";]<variable>[,<variable>...]`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
The prompt is followed by `? `. Each variable is read from its own line.
A response that reads as a number is stored as a number,
anything else is stored as a string with surrounding spaces removed.

## Example
```text
10 INPUT "WHAT IS YOUR NAME AND AGE"; NAME$, AGE
```

*/
