/*!
# Functions

Functions that take no arguments, like `RND`, `DATE$` and `TIME$`,
are written without parentheses.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.123)
    0.123
    ```
    */
}

pub mod ASC {
    /*!
    ## `ASC(X$)` Returns the unicode value of the first character of X$.
    An empty string is an `ILLEGAL FUNCTION CALL`.
    ```text
    PRINT ASC("A")
    65
    ```
    */
}

pub mod ATN {
    /*!
    ## `ATN(X)` Returns the arctangent of X.
    ```text
    PRINT ATN(3)
    1.24904577239825
    ```
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns a character of ASCII X.
    X must be a whole number from 0 to 255.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X in radians.
    ```text
    PRINT COS(0)
    1
    ```
    */
}

pub mod DATE {
    /*!
    ## `DATE$` Returns the local date.
    Formatted as MM-DD-YYYY.
    ```text
    PRINT DATE$
    01-31-2020
    ```
    */
}

pub mod EXP {
    /*!
    ## `EXP(X)` Returns e raised to the power of X.
    ```text
    PRINT EXP(1)
    2.71828182845905
    ```
    */
}

pub mod FIX {
    /*!
    ## `FIX(X)` Returns X with the fraction removed.
    Rounds towards zero. Compare with `INT`.
    ```text
    PRINT FIX(-2.5)
    -2
    ```
    */
}

pub mod INSTR {
    /*!
    ## `INSTR([N,]A$,B$)` Returns the position of B$ in A$.
    Positions start at 1. The search begins at position N when given.
    Returns 0 when B$ is not found.
    ```text
    PRINT INSTR("BANANA","NA")
    3
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest whole number not greater than X.
    ```text
    PRINT INT(-2.5)
    -3
    ```
    */
}

pub mod LEFT {
    /*!
    ## `LEFT$(A$,X)` Returns the leftmost X characters of A$.
    ```text
    PRINT LEFT$("HUNT THE WUMPUS", 4)
    HUNT
    ```
    */
}

pub mod LEN {
    /*!
    ## `LEN(A$)` Returns the number of characters in A$.
    ```text
    PRINT LEN("WUMPUS")
    6
    ```
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X.
    X must be greater than zero.
    ```text
    PRINT LOG(1)
    0
    ```
    */
}

pub mod MID {
    /*!
    ## `MID$(A$,N[,X])` Returns X characters of A$ starting at position N.
    Positions start at 1. Without X, returns the rest of A$.
    ```text
    PRINT MID$("HUNT THE WUMPUS",6,3)
    THE
    ```
    */
}

pub mod RIGHT {
    /*!
    ## `RIGHT$(A$,X)` Returns the rightmost X characters of A$.
    ```text
    PRINT RIGHT$("HUNT THE WUMPUS", 6)
    WUMPUS
    ```
    */
}

pub mod RND {
    /*!
    ## `RND[(X)]` Returns a pseudo-random number.
    Returns a random number between 0 and 1 when X is missing or > 0.
    When X is 0, return the previous random number.
    When X < 0 the random number generator is seeded with X.
    ```text
    PRINT RND
    0.6923401
    ```
    */
}

pub mod SGN {
    /*!
    ## `SGN(X)` Returns the sign of X.
    Returns -1 if X is negative, 1 if positive, and 0 if zero.
    ```text
    PRINT SGN(+1)
    1
    ```
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X in radians.
    ```text
    PRINT SIN(0)
    0
    ```
    */
}

pub mod SPACE {
    /*!
    ## `SPACE$(X)` Returns a string of X spaces.
    ```text
    PRINT "[";SPACE$(3);"]"
    [   ]
    ```
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    A negative X is an `ILLEGAL FUNCTION CALL`.
    ```text
    PRINT SQR(16)
    4
    ```
    */
}

pub mod STR {
    /*!
    ## `STR$(X)` Returns X as a string.
    Formatted exactly as `PRINT` would.
    ```text
    PRINT STR$(1/4)+"!"
    0.25!
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X in radians.
    ```text
    PRINT TAN(0)
    0
    ```
    */
}

pub mod TIME {
    /*!
    ## `TIME$` Returns the local time of day.
    Formatted as HH:MM:SS with a 24 hour clock.
    ```text
    PRINT TIME$
    13:05:59
    ```
    */
}

pub mod VAL {
    /*!
    ## `VAL(A$)` Returns the number at the start of A$.
    Returns 0 when A$ does not start with a number.
    ```text
    PRINT VAL("12.5 LBS")
    12.5
    ```
    */
}
