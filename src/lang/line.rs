use super::{ast::Statement, lex, parse, token::Token, Column, Error, LineNumber, MAX_LINE_NUMBER};

type Result<T> = std::result::Result<T, Error>;

/// One physical line of program source, lexed and ready to parse.
#[derive(Debug, PartialEq)]
pub struct Line {
    source: String,
    tokens: Vec<(Column, Token)>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line> {
        match lex(s) {
            Ok(tokens) => Ok(Line {
                source: s.trim_end().to_string(),
                tokens,
            }),
            Err(e) => match leading_line_number(s) {
                Some(n) => Err(e.in_line_number(n)),
                None => Err(e),
            },
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        match self.tokens.first() {
            Some((_, Token::LineNumber(n))) => Some(*n),
            _ => None,
        }
    }

    /// Blank lines carry only the end-of-line marker.
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    pub fn ast(&self) -> Result<(LineNumber, Vec<Statement>)> {
        parse(&self.tokens)
    }
}

fn leading_line_number(s: &str) -> Option<LineNumber> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<LineNumber>().ok().filter(|n| *n <= MAX_LINE_NUMBER)
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_number() {
        let line = Line::new("100 END").unwrap();
        assert_eq!(line.number(), Some(100));
        assert_eq!(line.to_string(), "100 END");
        assert!(!line.is_empty());
        assert!(Line::new("   ").unwrap().is_empty());
    }

    #[test]
    fn test_lex_error_knows_line() {
        let e = Line::new("20 PRINT \"OOPS").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnterminatedString);
        assert_eq!(e.line_number(), Some(20));
    }
}
