use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(Rc<str>),
}

impl Val {
    /// Classify a line of user input. Anything that reads as a decimal
    /// number is a Number, everything else is trimmed text.
    pub fn from_input(s: &str) -> Val {
        let s = s.trim();
        let numeric = !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
        if numeric {
            match s.parse::<f64>() {
                Ok(n) if n.is_finite() => return Val::Number(n),
                _ => {}
            }
        }
        Val::String(s.into())
    }

    pub fn from_bool(b: bool) -> Val {
        if b {
            Val::Number(-1.0)
        } else {
            Val::Number(0.0)
        }
    }

    pub fn is_truthy(&self) -> Result<bool> {
        match self {
            Val::Number(n) => Ok(*n != 0.0),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(value: Val) -> std::result::Result<Self, Self::Error> {
        match value {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for Rc<str> {
    type Error = Error;
    fn try_from(value: Val) -> std::result::Result<Self, Self::Error> {
        match value {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for usize {
    type Error = Error;
    fn try_from(value: Val) -> std::result::Result<Self, Self::Error> {
        let n = f64::try_from(value)?.floor();
        if n >= 0.0 && n <= u32::max_value() as f64 {
            Ok(n as usize)
        } else {
            Err(error!(IllegalFunctionCall))
        }
    }
}

/// Integral values print without a decimal point. Everything else is
/// rounded to 15 significant digits and printed in its shortest form.
fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let rounded = format!("{:.14e}", n);
    match rounded.parse::<f64>() {
        Ok(r) => format!("{}", r),
        Err(_) => format!("{}", n),
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", format_number(*n)),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
