pub use super::ident::Ident;
use super::LineNumber;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    LineNumber(LineNumber),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    Remark(String),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    EndOfLine,
}

impl Token {
    /// Reserved words and word-like operators. Expects upper case.
    pub fn from_word(s: &str) -> Option<Token> {
        if let Some(word) = Word::from_str(s) {
            return Some(Token::Word(word));
        }
        match s {
            "AND" => Some(Token::Operator(Operator::And)),
            "OR" => Some(Token::Operator(Operator::Or)),
            "NOT" => Some(Token::Operator(Operator::Not)),
            _ => None,
        }
    }

    /// Punctuation and symbolic operators.
    pub fn from_symbol(s: &str) -> Option<Token> {
        use Operator::*;
        Some(match s {
            "(" => Token::LParen,
            ")" => Token::RParen,
            "," => Token::Comma,
            ":" => Token::Colon,
            ";" => Token::Semicolon,
            "^" => Token::Operator(Caret),
            "*" => Token::Operator(Multiply),
            "/" => Token::Operator(Divide),
            "+" => Token::Operator(Plus),
            "-" => Token::Operator(Minus),
            "=" => Token::Operator(Equal),
            "<>" => Token::Operator(NotEqual),
            "<" => Token::Operator(Less),
            "<=" => Token::Operator(LessEqual),
            ">" => Token::Operator(Greater),
            ">=" => Token::Operator(GreaterEqual),
            _ => return None,
        })
    }

    pub fn is_end_of_statement(&self) -> bool {
        matches!(self, Token::Colon | Token::EndOfLine | Token::Remark(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            LineNumber(n) => write!(f, "{}", n),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Remark(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            EndOfLine => write!(f, "END OF LINE"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Return,
    Step,
    Stop,
    Then,
    To,
    Troff,
    Tron,
}

impl Word {
    pub fn from_str(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "END" => End,
            "FOR" => For,
            "GOSUB" => Gosub,
            "GOTO" => Goto,
            "IF" => If,
            "INPUT" => Input,
            "LET" => Let,
            "NEXT" => Next,
            "PRINT" => Print,
            "RETURN" => Return,
            "STEP" => Step,
            "STOP" => Stop,
            "THEN" => Then,
            "TO" => To,
            "TROFF" => Troff,
            "TRON" => Tron,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Return => write!(f, "RETURN"),
            Step => write!(f, "STEP"),
            Stop => write!(f, "STOP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
            Troff => write!(f, "TROFF"),
            Tron => write!(f, "TRON"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Not => write!(f, "NOT"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word() {
        let t = Token::from_word("GOTO");
        assert_eq!(t, Some(Token::Word(Word::Goto)));
        let t = Token::from_word("AND");
        assert_eq!(t, Some(Token::Operator(Operator::And)));
        let t = Token::from_word("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(
            Token::from_symbol("<>"),
            Some(Token::Operator(Operator::NotEqual))
        );
        assert_eq!(Token::from_symbol(";"), Some(Token::Semicolon));
        assert_eq!(Token::from_symbol("<<"), None);
    }

    #[test]
    fn test_display_string_literal() {
        let t = Token::Literal(Literal::String("SAY \"HI\"".to_string()));
        assert_eq!(t.to_string(), "\"SAY \"\"HI\"\"\"");
    }
}
