/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 will be assigned to variable I.
Statements execute until a `NEXT` statement.
On subsequent iterations, the variable I gets 2 added to it.
If the result passes 7 the loop breaks and I is left holding 9.
Otherwise the statements get executed again.

The first iteration will evaluate x, then y, then z.
The first iteration always executes even if starting past the end.
A `STEP` of zero is a `FOR STEP IS ZERO` error.

Running `FOR` again with a variable that already has a loop open
discards that loop and every loop opened inside it.

## Example 1
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT "HELLO WORLD ";I
30 NEXT I
40 PRINT I
HELLO WORLD 1
HELLO WORLD 3
HELLO WORLD 5
HELLO WORLD 7
9
```

## Example 2
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X;" ";Y
40 NEXT Y
50 NEXT X
1 5
1 6
2 5
2 6
```

*/
