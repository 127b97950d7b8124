use super::{ast::*, token::*, Column, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of parentheses and unary operators in one expression.
const MAX_NESTING: usize = 100;

/// Parse the tokens of one physical line. The line number is mandatory.
pub fn parse(tokens: &[(Column, Token)]) -> Result<(LineNumber, Vec<Statement>)> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, (Column, Token)>,
    peeked: Option<&'a (Column, Token)>,
    col: Column,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [(Column, Token)]) -> Result<(LineNumber, Vec<Statement>)> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            depth: 0,
        };
        let line_number = match parse.next() {
            Some(Token::LineNumber(n)) => *n,
            Some(t) => {
                let msg = format!("EXPECTED LINE NUMBER, FOUND {}", t);
                return Err(error!(SyntaxError, ..&parse.column(); &msg));
            }
            None => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        };
        match parse.statements() {
            Ok(r) => Ok((line_number, r)),
            Err(e) => Err(e.in_column(&parse.col).in_line_number(line_number)),
        }
    }

    fn statements(&mut self) -> Result<Vec<Statement>> {
        let mut r: Vec<Statement> = vec![];
        loop {
            match self.peek() {
                None | Some(Token::EndOfLine) => break,
                Some(Token::Colon) => {
                    self.next();
                    continue;
                }
                _ => {}
            }
            r.push(self.statement()?);
            match self.peek() {
                None => {}
                Some(t) if t.is_end_of_statement() => {}
                Some(_) => return Err(self.unexpected("END OF STATEMENT")),
            }
        }
        if r.is_empty() {
            return Err(error!(SyntaxError, ..&self.peek_column(); "EXPECTED STATEMENT"));
        }
        Ok(r)
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        let (col, token) = match self.peeked.take() {
            Some(item) => item,
            None => self.token_stream.next()?,
        };
        self.col = col.clone();
        Some(token)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked.map(|(_, t)| t)
    }

    fn peek_column(&mut self) -> Column {
        self.peek();
        match self.peeked {
            Some((col, _)) => col.clone(),
            None => self.col.end..self.col.end,
        }
    }

    fn unexpected(&mut self, expected: &str) -> Error {
        let found = match self.peek() {
            Some(t) => t.to_string(),
            None => Token::EndOfLine.to_string(),
        };
        let col = self.peek_column();
        error!(SyntaxError, ..&col; &format!("EXPECTED {}, FOUND {}", expected, found))
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.peek() {
            Some(Token::Remark(_)) => {
                self.next();
                Ok(Statement::Rem(self.column()))
            }
            Some(Token::Ident(_)) => {
                let column = self.peek_column();
                Statement::r#let(self, column)
            }
            Some(Token::Word(word)) => {
                self.next();
                Statement::for_word(self, *word)
            }
            _ => Err(self.unexpected("STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = this.operand()?;
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => *op,
                    _ => break,
                };
                let op_precedence = match Expression::op_precedence(op) {
                    Some(p) => p,
                    None => break,
                };
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let column = this.column();
                let rhs = if op == Operator::Caret {
                    parse(this, op_precedence)?
                } else {
                    parse(this, op_precedence + 1)?
                };
                lhs = Expression::for_binary_op(column, op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn operand(&mut self) -> Result<Expression> {
        if self.depth >= MAX_NESTING {
            let col = self.peek_column();
            return Err(error!(SyntaxError, ..&col; "EXPRESSION TOO COMPLEX"));
        }
        self.depth += 1;
        let r = self.term();
        self.depth -= 1;
        r
    }

    /// Unary operators bind tighter than every binary operator.
    fn term(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::Operator(Operator::Minus)) => {
                let column = self.column();
                Ok(Expression::Negation(column, Box::new(self.operand()?)))
            }
            Some(Token::Operator(Operator::Not)) => {
                let column = self.column();
                Ok(Expression::Not(column, Box::new(self.operand()?)))
            }
            Some(Token::Operator(Operator::Plus)) => self.operand(),
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Ident(i)) => {
                let column = self.column();
                match self.peek() {
                    Some(Token::LParen) => {
                        let args = self.expression_list()?;
                        Ok(Expression::Function(column, i.clone(), args))
                    }
                    _ => Ok(Expression::Var(column, i.clone())),
                }
            }
            Some(Token::Literal(l)) => Expression::for_literal(self.column(), l),
            Some(t) => {
                let msg = format!("EXPECTED EXPRESSION, FOUND {}", t);
                Err(error!(SyntaxError, ..&self.column(); &msg))
            }
            None => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::LParen)?;
        let mut v: Vec<Expression> = vec![];
        if let Some(Token::RParen) = self.peek() {
            self.next();
            return Ok(v);
        }
        loop {
            v.push(self.expression()?);
            match self.peek() {
                Some(Token::RParen) => {
                    self.next();
                    return Ok(v);
                }
                Some(Token::Comma) => {
                    self.next();
                    continue;
                }
                _ => return Err(self.unexpected("RIGHT PARENTHESIS OR COMMA")),
            }
        }
    }

    fn printer_list(&mut self) -> Result<Vec<PrintItem>> {
        let mut v: Vec<PrintItem> = vec![];
        loop {
            match self.peek() {
                None => return Ok(v),
                Some(t) if t.is_end_of_statement() => return Ok(v),
                Some(Token::Semicolon) => {
                    self.next();
                    v.push(PrintItem::Semicolon(self.column()));
                }
                Some(Token::Comma) => {
                    self.next();
                    v.push(PrintItem::Comma(self.column()));
                }
                _ => v.push(PrintItem::Expression(self.expression()?)),
            };
        }
    }

    fn ident(&mut self) -> Result<(Column, Ident)> {
        match self.peek() {
            Some(Token::Ident(i)) => {
                self.next();
                Ok((self.column(), i.clone()))
            }
            _ => Err(self.unexpected("VARIABLE")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.peek() {
            if *t == token {
                self.next();
                return Ok(());
            }
        }
        let expected = match token {
            Token::LineNumber(_) => "LINE NUMBER",
            Token::Literal(_) => "LITERAL",
            Token::Word(Word::Then) => "THEN",
            Token::Word(Word::To) => "TO",
            Token::Word(_) => "RESERVED WORD",
            Token::Operator(Operator::Equal) => "=",
            Token::Operator(_) => "OPERATOR",
            Token::Ident(_) => "VARIABLE",
            Token::Remark(_) => "REMARK",
            Token::LParen => "LEFT PARENTHESIS",
            Token::RParen => "RIGHT PARENTHESIS",
            Token::Comma => "COMMA",
            Token::Colon => "COLON",
            Token::Semicolon => "SEMICOLON",
            Token::EndOfLine => "END OF LINE",
        };
        Err(self.unexpected(expected))
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            Caret => Expression::Power(col, lhs, rhs),
            Multiply => Expression::Multiply(col, lhs, rhs),
            Divide => Expression::Divide(col, lhs, rhs),
            Plus => Expression::Add(col, lhs, rhs),
            Minus => Expression::Subtract(col, lhs, rhs),
            Equal => Expression::Equal(col, lhs, rhs),
            NotEqual => Expression::NotEqual(col, lhs, rhs),
            Less => Expression::Less(col, lhs, rhs),
            LessEqual => Expression::LessEqual(col, lhs, rhs),
            Greater => Expression::Greater(col, lhs, rhs),
            GreaterEqual => Expression::GreaterEqual(col, lhs, rhs),
            And => Expression::And(col, lhs, rhs),
            Or => Expression::Or(col, lhs, rhs),
            Not => unreachable!("NOT is unary"),
        }
    }

    /// Binding power of binary operators; larger binds tighter.
    fn op_precedence(op: Operator) -> Option<usize> {
        use Operator::*;
        match op {
            Or => Some(1),
            And => Some(2),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => Some(3),
            Plus | Minus => Some(4),
            Multiply | Divide => Some(5),
            Caret => Some(6),
            Not => None,
        }
    }

    fn for_literal(col: Column, lit: &Literal) -> Result<Expression> {
        match lit {
            Literal::Number(s) => match s.parse::<f64>() {
                Ok(n) if !n.is_finite() => Err(error!(Overflow, ..&col)),
                Ok(n) => Ok(Expression::Number(col, n)),
                Err(_) => Err(error!(SyntaxError, ..&col; "INVALID NUMBER")),
            },
            Literal::String(s) => Ok(Expression::String(col, s.as_str().into())),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            End => Ok(Statement::End(column)),
            For => Self::r#for(parse, column),
            Gosub => Ok(Statement::Gosub(column, parse.expression()?)),
            Goto => Ok(Statement::Goto(column, parse.expression()?)),
            If => Self::r#if(parse, column),
            Input => Self::r#input(parse, column),
            Let => Self::r#let(parse, column),
            Next => Self::r#next(parse, column),
            Print => Ok(Statement::Print(column, parse.printer_list()?)),
            Return => Ok(Statement::Return(column)),
            Stop => Ok(Statement::Stop(column)),
            Troff => Ok(Statement::Troff(column)),
            Tron => Ok(Statement::Tron(column)),
            Step | Then | To => Err(error!(SyntaxError, ..&column; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let (_, ident) = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, ident, expr))
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let (_, ident) = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let from = parse.expression()?;
        parse.expect(Token::Word(Word::To))?;
        let to = parse.expression()?;
        let step = match parse.peek() {
            Some(Token::Word(Word::Step)) => {
                parse.next();
                Some(parse.expression()?)
            }
            _ => None,
        };
        Ok(Statement::For(column, ident, from, to, step))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let predicate = parse.expression()?;
        let then = match parse.peek() {
            Some(Token::Word(Word::Goto)) => {
                parse.next();
                let col = parse.column();
                Statement::Goto(col, parse.expression()?)
            }
            Some(Token::Word(Word::Then)) => {
                parse.next();
                match parse.peek() {
                    Some(Token::Literal(Literal::Number(_))) => {
                        let col = parse.peek_column();
                        Statement::Goto(col, parse.expression()?)
                    }
                    _ => parse.statement()?,
                }
            }
            _ => return Err(parse.unexpected("THEN")),
        };
        Ok(Statement::If(column, predicate, Box::new(then)))
    }

    fn r#input(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut prompt = None;
        if let Some(Token::Literal(Literal::String(s))) = parse.peek() {
            parse.next();
            prompt = Some(s.as_str().into());
            match parse.peek() {
                Some(Token::Semicolon) | Some(Token::Comma) => {
                    parse.next();
                }
                _ => return Err(parse.unexpected("SEMICOLON")),
            }
        }
        let mut vars = vec![parse.ident()?];
        while let Some(Token::Comma) = parse.peek() {
            parse.next();
            vars.push(parse.ident()?);
        }
        Ok(Statement::Input(column, prompt, vars))
    }

    fn r#next(parse: &mut Parser, column: Column) -> Result<Statement> {
        match parse.peek() {
            Some(Token::Ident(_)) => {
                let (_, ident) = parse.ident()?;
                Ok(Statement::Next(column, Some(ident)))
            }
            _ => Ok(Statement::Next(column, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;
    use crate::lang::ErrorCode;

    fn parse_str(s: &str) -> Statement {
        let tokens = lex(s).unwrap();
        match parse(&tokens) {
            Ok((_, mut v)) => {
                if v.len() != 1 {
                    panic!();
                }
                v.pop().unwrap()
            }
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        let tokens = lex(s).unwrap();
        parse(&tokens).unwrap_err()
    }

    #[test]
    fn test_let_foo_eq_bar() {
        let answer = Statement::Let(
            3..6,
            Ident::new("TER"),
            Expression::Var(11..14, Ident::new("BAR")),
        );
        assert_eq!(parse_str("10 let ter=bar:"), answer);
        let answer = Statement::Let(
            3..6,
            Ident::new("TER"),
            Expression::Var(7..10, Ident::new("BAR")),
        );
        assert_eq!(parse_str("10 ter=bar:"), answer);
    }

    #[test]
    fn test_literals() {
        let answer = Statement::Let(3..4, Ident::new("A"), Expression::Number(5..7, 12.0));
        assert_eq!(parse_str("10 A=12"), answer);
        let answer = Statement::Let(3..4, Ident::new("A"), Expression::Number(5..10, 1.5e3));
        assert_eq!(parse_str("10 A=1.5e3"), answer);
        let answer = Statement::Let(
            3..5,
            Ident::new("A$"),
            Expression::String(6..12, "food".into()),
        );
        assert_eq!(parse_str("10 A$=\"food\""), answer);
    }

    #[test]
    fn test_functions() {
        let answer = Statement::Let(
            3..4,
            Ident::new("A"),
            Expression::Function(
                5..8,
                Ident::new("COS"),
                vec![Expression::Number(9..13, 3.14)],
            ),
        );
        assert_eq!(parse_str("10 A=cos(3.14)"), answer);
    }

    #[test]
    fn test_precedence() {
        let answer = Statement::Let(
            3..4,
            Ident::new("A"),
            Expression::Add(
                6..7,
                Box::new(Expression::Number(5..6, 2.0)),
                Box::new(Expression::Multiply(
                    8..9,
                    Box::new(Expression::Number(7..8, 3.0)),
                    Box::new(Expression::Number(9..10, 4.0)),
                )),
            ),
        );
        assert_eq!(parse_str("10 A=2+3*4"), answer);
    }

    #[test]
    fn test_power_is_right_associative() {
        let answer = Statement::Let(
            3..4,
            Ident::new("A"),
            Expression::Power(
                6..7,
                Box::new(Expression::Number(5..6, 2.0)),
                Box::new(Expression::Power(
                    8..9,
                    Box::new(Expression::Number(7..8, 3.0)),
                    Box::new(Expression::Number(9..10, 2.0)),
                )),
            ),
        );
        assert_eq!(parse_str("10 A=2^3^2"), answer);
    }

    #[test]
    fn test_unary_binds_tightest() {
        let answer = Statement::Let(
            3..4,
            Ident::new("A"),
            Expression::Power(
                7..8,
                Box::new(Expression::Negation(
                    5..6,
                    Box::new(Expression::Number(6..7, 2.0)),
                )),
                Box::new(Expression::Number(8..9, 2.0)),
            ),
        );
        assert_eq!(parse_str("10 A=-2^2"), answer);
    }

    #[test]
    fn test_logical_precedence() {
        let answer = Statement::Let(
            3..4,
            Ident::new("A"),
            Expression::Or(
                9..11,
                Box::new(Expression::Var(5..6, Ident::new("B"))),
                Box::new(Expression::And(
                    14..17,
                    Box::new(Expression::Var(12..13, Ident::new("C"))),
                    Box::new(Expression::Less(
                        19..20,
                        Box::new(Expression::Var(18..19, Ident::new("D"))),
                        Box::new(Expression::Number(20..21, 1.0)),
                    )),
                )),
            ),
        );
        assert_eq!(parse_str("10 A=B   OR C AND D<1"), answer);
    }

    #[test]
    fn test_printer_list() {
        let tokens = lex("10 print 1 2,3;:print").unwrap();
        assert_eq!(
            parse(&tokens).unwrap(),
            (
                10,
                vec!(
                    Statement::Print(
                        3..8,
                        vec!(
                            PrintItem::Expression(Expression::Number(9..10, 1.0)),
                            PrintItem::Expression(Expression::Number(11..12, 2.0)),
                            PrintItem::Comma(12..13),
                            PrintItem::Expression(Expression::Number(13..14, 3.0)),
                            PrintItem::Semicolon(14..15),
                        )
                    ),
                    Statement::Print(16..21, vec!()),
                )
            )
        );
    }

    #[test]
    fn test_for_step() {
        let answer = Statement::For(
            3..6,
            Ident::new("I"),
            Expression::Number(9..10, 5.0),
            Expression::Number(14..15, 1.0),
            Some(Expression::Negation(
                21..22,
                Box::new(Expression::Number(22..23, 1.0)),
            )),
        );
        assert_eq!(parse_str("10 FOR I=5 TO 1 STEP -1"), answer);
    }

    #[test]
    fn test_if_then_line_number() {
        let answer = Statement::If(
            3..5,
            Expression::Var(6..7, Ident::new("X")),
            Box::new(Statement::Goto(13..16, Expression::Number(13..16, 100.0))),
        );
        assert_eq!(parse_str("10 IF X THEN 100"), answer);
    }

    #[test]
    fn test_input_prompt() {
        let answer = Statement::Input(
            3..8,
            Some("NAME".into()),
            vec![(16..18, Ident::new("N$")), (19..20, Ident::new("A"))],
        );
        assert_eq!(parse_str("10 INPUT \"NAME\";N$,A"), answer);
    }

    #[test]
    fn test_if_then_remark() {
        let answer = Statement::If(
            3..5,
            Expression::Number(6..7, 1.0),
            Box::new(Statement::Rem(13..19)),
        );
        assert_eq!(parse_str("10 IF 1 THEN REM HI"), answer);
    }

    #[test]
    fn test_literal_overflow() {
        let e = parse_err("10 PRINT 1E400");
        assert_eq!(e.code(), ErrorCode::Overflow);
        assert_eq!(e.to_string(), "OVERFLOW IN 10 (9..14)");
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("10 A={}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        let e = parse_err(&deep);
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(e.line_number(), Some(10));
        let e = parse_err(&format!("10 A={}1", "-".repeat(5000)));
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        let shallow = format!("10 A={}1{}", "(".repeat(20), ")".repeat(20));
        assert_eq!(
            parse_str(&shallow),
            Statement::Let(3..4, Ident::new("A"), Expression::Number(25..26, 1.0))
        );
    }

    #[test]
    fn test_missing_line_number() {
        let e = parse_err("PRINT 1");
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(e.line_number(), None);
    }

    #[test]
    fn test_unmatched_parenthesis() {
        let e = parse_err("10 PRINT (1+2");
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(e.line_number(), Some(10));
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN 10 (13..13); EXPECTED RIGHT PARENTHESIS, FOUND END OF LINE"
        );
    }
}
