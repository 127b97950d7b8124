// Used in both Token and Ast

use std::rc::Rc;

/// A variable or function name, already upper-cased by the lexer.
/// Names ending in `$` are string names.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    pub fn new(name: &str) -> Ident {
        let name = name.to_ascii_uppercase();
        if name.ends_with('$') {
            Ident::String(name.into())
        } else {
            Ident::Plain(name.into())
        }
    }

    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Plain(s) | Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(Ident::new("a1"), Ident::Plain("A1".into()));
        assert_eq!(Ident::new("name$"), Ident::String("NAME$".into()));
        assert!(Ident::new("X$").is_string());
    }
}
