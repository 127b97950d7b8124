use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn phase(&self) -> Phase {
        self.code.phase()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Attach a line number. An error already located keeps its line.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    /// Attach a column. An error already located keeps its column.
    pub fn in_column(self, column: &Column) -> Error {
        if self.column != (0..0) {
            return self;
        }
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

/// Where in the pipeline an error is raised.
///
/// `Lex`, `Parse` and `Load` errors stop a program before its first
/// statement runs. `Runtime` errors stop it at the offending statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lex,
    Parse,
    Load,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
    UndefinedFunction = 18,
    InternalError = 51,
    FileNotFound = 53,
    IllegalCharacter = 70,
    UnterminatedString = 71,
    DuplicateLine = 72,
    UndefinedVariable = 73,
    WrongNumberOfArguments = 74,
    InfiniteLoopStep = 75,
    UnknownLoopVariable = 76,
    Break = 77,
}

impl ErrorCode {
    pub fn phase(self) -> Phase {
        use ErrorCode::*;
        match self {
            IllegalCharacter | UnterminatedString => Phase::Lex,
            SyntaxError => Phase::Parse,
            DuplicateLine | FileNotFound => Phase::Load,
            NextWithoutFor | ReturnWithoutGosub | IllegalFunctionCall | Overflow | OutOfMemory
            | UndefinedLine | DivisionByZero | TypeMismatch | UndefinedFunction
            | InternalError | UndefinedVariable | WrongNumberOfArguments | InfiniteLoopStep
            | UnknownLoopVariable | Break => Phase::Runtime,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLine => "UNDEFINED LINE",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            UndefinedFunction => "UNDEFINED FUNCTION",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            IllegalCharacter => "ILLEGAL CHARACTER",
            UnterminatedString => "UNTERMINATED STRING",
            DuplicateLine => "DUPLICATE LINE NUMBER",
            UndefinedVariable => "UNDEFINED VARIABLE",
            WrongNumberOfArguments => "WRONG NUMBER OF ARGUMENTS",
            InfiniteLoopStep => "FOR STEP IS ZERO",
            UnknownLoopVariable => "UNKNOWN LOOP VARIABLE",
            Break => "BREAK",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        let mut s = self.code.to_string();
        if !suffix.is_empty() {
            s.push_str(" IN");
            s.push_str(&suffix);
        }
        if !self.message.is_empty() {
            s.push_str("; ");
            s.push_str(&self.message);
        }
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(
            error!(UndefinedLine, 10).to_string(),
            "UNDEFINED LINE IN 10"
        );
        assert_eq!(
            error!(SyntaxError, 20, ..&(3..5); "EXPECTED EXPRESSION").to_string(),
            "SYNTAX ERROR IN 20 (3..5); EXPECTED EXPRESSION"
        );
    }

    #[test]
    fn test_location_is_sticky() {
        let e = error!(TypeMismatch, 10).in_line_number(20);
        assert_eq!(e.line_number(), Some(10));
        let e = error!(TypeMismatch, ..&(1..2)).in_column(&(5..6));
        assert_eq!(e.column(), 1..2);
    }

    #[test]
    fn test_phase() {
        assert_eq!(error!(IllegalCharacter).phase(), Phase::Lex);
        assert_eq!(error!(SyntaxError).phase(), Phase::Parse);
        assert_eq!(error!(DuplicateLine).phase(), Phase::Load);
        assert_eq!(error!(NextWithoutFor).phase(), Phase::Runtime);
    }
}
