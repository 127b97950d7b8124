/*!
# Introductory Tutorial

BASIC programs are plain text files. Every line starts with a line number,
any decimal integer between 0 and 65529 inclusive, followed by one or more
statements separated by colons. Lines run in line number order no matter
what order they appear in the file.

Let's tell the computer to print something. Save this as `hello.bas`.

<pre><code>10 PRINT "Hello World"
</code></pre>

Then run it.

<pre><code>&nbsp;$ basic hello.bas
&nbsp;  Hello World
</code></pre>

The whole file is read and checked before anything runs. A mistake
anywhere stops the program before the first line executes and reports
where the problem is. The numbers in parentheses are the columns of the
offending text.

<pre><code>10 PAINT "Hello World"
</code></pre>

<pre><code>&nbsp;$ basic hello.bas
&nbsp;  <b>?SYNTAX ERROR IN 10 (9..22); EXPECTED =, FOUND "Hello World"</b>
</code></pre>

Let's create a multi-line program for the last example of this tutorial.
The program will ask the user for a number, print its square root, and repeat
indefinitely. Because this is an infinite loop, the program will run forever
or until it's interrupted. Typing CTRL-C interrupts a program.

<pre><code>10 INPUT "Your number"; A
20 PRINT "The square root of ";A;" is ";SQR(A)
30 GOTO 100
</code></pre>

<pre><code>&nbsp;$ basic sqrt.bas
&nbsp;  Your number? 9
&nbsp;  The square root of 9 is 3
&nbsp;  <b>?UNDEFINED LINE IN 30 (8..11); 100</b>
</code></pre>

Line 30 was intentionally wrong to demonstrate a runtime error. Runtime
errors stop the program at the statement that failed. Change line 30 to
`GOTO 10` and try again.

<pre><code>&nbsp;$ basic sqrt.bas
&nbsp;  Your number? -8
&nbsp;  <b>?ILLEGAL FUNCTION CALL IN 20 (40..43)</b>
</code></pre>

Reading a variable that was never assigned is an error too. Run with
`--default-zero` to treat such variables as 0, or as an empty string
when the name ends with `$`.

This concludes the introductory tutorial. The remainder of this manual is
reference material covering every statement and function.

*/
