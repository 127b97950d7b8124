use super::{Address, Function};
use crate::error;
use crate::lang::ast::{AcceptVisitor, Statement, Visitor};
use crate::lang::{Column, Error, Ident, Line, LineNumber};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Every statement of every line lives in one vector in line order, so
/// the executor walks a program with a plain `Address`. The line index
/// maps each line number to its first statement.

#[derive(Debug, Default)]
pub struct Program {
    statements: Vec<(LineNumber, Statement)>,
    lines: BTreeMap<LineNumber, Address>,
}

impl Program {
    /// Lex, parse and index `source`. The first error wins.
    pub fn load(source: &str) -> Result<Program> {
        let mut parsed: BTreeMap<LineNumber, Vec<Statement>> = BTreeMap::new();
        for text in source.lines() {
            let line = Line::new(text)?;
            if line.is_empty() {
                continue;
            }
            let (number, statements) = line.ast()?;
            for statement in &statements {
                ReservedNames::check(statement).map_err(|e| e.in_line_number(number))?;
            }
            if parsed.insert(number, statements).is_some() {
                return Err(error!(DuplicateLine, number));
            }
        }
        let mut program = Program::default();
        for (number, mut statements) in parsed {
            program.lines.insert(number, program.statements.len());
            for statement in statements.drain(..) {
                program.statements.push((number, statement));
            }
        }
        Ok(program)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// First statement of a line.
    pub fn statement_at(&self, line: LineNumber) -> Option<&Statement> {
        let addr = self.address_of(line)?;
        self.get(addr).map(|(_, statement)| statement)
    }

    pub fn next_line_after(&self, line: LineNumber) -> Option<LineNumber> {
        use std::ops::Bound::{Excluded, Unbounded};
        self.lines
            .range((Excluded(line), Unbounded))
            .next()
            .map(|(number, _)| *number)
    }

    pub fn address_of(&self, line: LineNumber) -> Option<Address> {
        self.lines.get(&line).copied()
    }

    pub fn get(&self, addr: Address) -> Option<(LineNumber, &Statement)> {
        self.statements
            .get(addr)
            .map(|(number, statement)| (*number, statement))
    }

    /// Address of the first statement on the line after the one holding
    /// `addr`. Past the end of the program when there is none.
    pub fn next_line_address(&self, addr: Address) -> Address {
        let line = match self.statements.get(addr) {
            Some((line, _)) => *line,
            None => return self.statements.len(),
        };
        match self.next_line_after(line).and_then(|n| self.address_of(n)) {
            Some(next) => next,
            None => self.statements.len(),
        }
    }
}

/// Rejects builtin function names used as assignment targets.
struct ReservedNames {
    error: Option<Error>,
}

impl ReservedNames {
    fn check(statement: &Statement) -> Result<()> {
        let mut this = ReservedNames { error: None };
        statement.accept(&mut this);
        match this.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Visitor for ReservedNames {
    fn visit_assignment(&mut self, col: &Column, ident: &Ident) {
        if self.error.is_none() && Function::is_builtin(ident.name()) {
            self.error = Some(error!(SyntaxError, ..col; "RESERVED FOR BUILT-IN"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_lines_are_sorted() {
        let p = Program::load("20 PRINT 2\n\n10 PRINT 1 : END\n").unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.get(0).map(|(n, _)| n), Some(10));
        assert_eq!(p.address_of(20), Some(2));
        assert_eq!(p.next_line_after(10), Some(20));
        assert_eq!(p.next_line_after(20), None);
        assert_eq!(p.next_line_address(0), 2);
        assert_eq!(p.next_line_address(2), 3);
        assert!(matches!(p.statement_at(10), Some(Statement::Print(..))));
        assert!(p.statement_at(15).is_none());
    }

    #[test]
    fn test_duplicate_line() {
        let e = Program::load("10 END\n10 END").unwrap_err();
        assert_eq!(e.code(), ErrorCode::DuplicateLine);
        assert_eq!(e.line_number(), Some(10));
    }

    #[test]
    fn test_reserved_name() {
        let e = Program::load("10 LET LEN = 3").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(e.to_string(), "SYNTAX ERROR IN 10 (3..6); RESERVED FOR BUILT-IN");
        let e = Program::load("10 FOR RND = 1 TO 2").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
    }

    #[test]
    fn test_first_error_wins() {
        let e = Program::load("10 PRINT 1 #\n20 PRINT (").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalCharacter);
    }
}
