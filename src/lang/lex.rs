use super::{token::*, Column, Error, LineNumber, MAX_LINE_NUMBER};

type Result<T> = std::result::Result<T, Error>;

/// Tokenize one physical line. The sequence always ends with
/// `Token::EndOfLine`. A leading integer becomes `Token::LineNumber`.
pub fn lex(s: &str) -> Result<Vec<(Column, Token)>> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;
    fn col(&self) -> usize;
    fn bump(&mut self) -> Option<char>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.bump();
        }
    }

    fn digits(&mut self, s: &mut String) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            let ch = *pk;
            s.push(ch);
            self.bump();
        }
    }

    fn exponent_follows(&mut self) -> bool {
        let mut ahead = self.chars().clone();
        match ahead.next() {
            Some('E') | Some('e') => {}
            _ => return false,
        }
        match ahead.next() {
            Some(c) if is_basic_digit(c) => true,
            Some('+') | Some('-') => matches!(ahead.next(), Some(c) if is_basic_digit(c)),
            _ => false,
        }
    }

    fn number(&mut self, line_number_allowed: bool) -> Result<Token> {
        let start = self.col();
        let mut s = String::new();
        self.digits(&mut s);
        let mut integer = true;
        if let Some('.') = self.chars().peek() {
            integer = false;
            s.push('.');
            self.bump();
            self.digits(&mut s);
        }
        if self.exponent_follows() {
            integer = false;
            self.bump();
            s.push('E');
            if let Some(sign) = self.chars().peek() {
                if *sign == '+' || *sign == '-' {
                    let sign = *sign;
                    s.push(sign);
                    self.bump();
                }
            }
            self.digits(&mut s);
        }
        if s == "." {
            return Err(error!(SyntaxError, ..&(start..self.col()); "EXPECTED DIGITS"));
        }
        if line_number_allowed && integer {
            return match s.parse::<LineNumber>() {
                Ok(n) if n <= MAX_LINE_NUMBER => Ok(Token::LineNumber(n)),
                _ => Err(error!(SyntaxError, ..&(start..self.col()); "INVALID LINE NUMBER")),
            };
        }
        Ok(Token::Literal(Literal::Number(s)))
    }

    fn string(&mut self) -> Result<Token> {
        let start = self.col();
        let mut s = String::new();
        self.bump();
        loop {
            match self.bump() {
                Some('"') => {
                    if let Some('"') = self.chars().peek() {
                        self.bump();
                        s.push('"');
                        continue;
                    }
                    return Ok(Token::Literal(Literal::String(s)));
                }
                Some(ch) => s.push(ch),
                None => return Err(error!(UnterminatedString, ..&(start..self.col()))),
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_alphabetic(*pk) && !is_basic_digit(*pk) {
                break;
            }
            let ch = pk.to_ascii_uppercase();
            s.push(ch);
            self.bump();
        }
        if let Some('$') = self.chars().peek() {
            s.push('$');
            self.bump();
        }
        if s == "REM" {
            return self.remark();
        }
        match Token::from_word(&s) {
            Some(token) => token,
            None => Token::Ident(Ident::new(&s)),
        }
    }

    fn remark(&mut self) -> Token {
        let mut s = String::new();
        while let Some(ch) = self.bump() {
            s.push(ch);
        }
        Token::Remark(s.trim().to_string())
    }

    fn minutia(&mut self) -> Result<Token> {
        let start = self.col();
        let mut s = String::new();
        if let Some(ch) = self.bump() {
            s.push(ch);
            if let Some(pk) = self.chars().peek() {
                let pair = format!("{}{}", ch, pk);
                if pair == "<>" || pair == "<=" || pair == ">=" {
                    self.bump();
                    s = pair;
                }
            }
            if ch == '\'' {
                return Ok(self.remark());
            }
            if let Some(t) = Token::from_symbol(&s) {
                return Ok(t);
            }
        }
        Err(error!(IllegalCharacter, ..&(start..self.col()); &format!("UNEXPECTED '{}'", s)))
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
    first: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
    fn col(&self) -> usize {
        self.col
    }
    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<(Column, Token)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let pk = *self.chars.peek()?;
        let start = self.col;
        let first = std::mem::replace(&mut self.first, false);
        let token = if is_basic_digit(pk) || pk == '.' {
            self.number(first)
        } else if is_basic_alphabetic(pk) {
            Ok(self.alphabetic())
        } else if pk == '"' {
            self.string()
        } else {
            self.minutia()
        };
        let end = self.col;
        Some(token.map(|t| (start..end, t)))
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<Vec<(Column, Token)>> {
        let mut lexer = BasicLexer {
            chars: s.chars().peekable(),
            col: 0,
            first: true,
        };
        let mut tokens = vec![];
        while let Some(token) = lexer.next() {
            tokens.push(token?);
        }
        let end = lexer.col;
        tokens.push((end..end, Token::EndOfLine));
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s).unwrap().drain(..).map(|(_, t)| t).collect()
    }

    #[test]
    fn test_line_number_prefix() {
        assert_eq!(
            tokens("10 end"),
            vec![
                Token::LineNumber(10),
                Token::Word(Word::End),
                Token::EndOfLine
            ]
        );
    }

    #[test]
    fn test_only_first_integer_is_line_number() {
        assert_eq!(
            tokens("10 goto 20"),
            vec![
                Token::LineNumber(10),
                Token::Word(Word::Goto),
                Token::Literal(Literal::Number("20".to_string())),
                Token::EndOfLine
            ]
        );
    }

    #[test]
    fn test_columns() {
        let v = lex("10 A=1").unwrap();
        let cols: Vec<Column> = v.iter().map(|(c, _)| c.clone()).collect();
        assert_eq!(cols, vec![0..2, 3..4, 4..5, 5..6, 6..6]);
    }

    #[test]
    fn test_exponent_needs_digits() {
        assert_eq!(
            tokens("1E"),
            vec![
                Token::LineNumber(1),
                Token::Ident(Ident::new("E")),
                Token::EndOfLine
            ]
        );
    }

    #[test]
    fn test_illegal_character() {
        let e = lex("10 A=1 # 2").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalCharacter);
        assert_eq!(e.column(), 7..8);
    }
}
