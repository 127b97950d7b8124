use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic, string and relational operators
///
/// Relational operators yield -1 for true and 0 for false.
/// AND and OR short-circuit, so they live in the runtime.

pub struct Operation {}

impl Operation {
    fn number(n: f64) -> Result<Val> {
        if n.is_nan() {
            Err(error!(IllegalFunctionCall))
        } else if n.is_infinite() {
            Err(error!(Overflow))
        } else {
            Ok(Val::Number(n))
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Number(n) => Ok(Number(-n)),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::from_bool(!val.is_truthy()?))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => {
                if l == 0.0 && r < 0.0 {
                    return Err(error!(DivisionByZero));
                }
                Operation::number(l.powf(r))
            }
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Operation::number(l * r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(_), Number(r)) if r == 0.0 => Err(error!(DivisionByZero)),
            (Number(l), Number(r)) => Operation::number(l / r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Operation::number(l + r),
            (String(l), String(r)) => Ok(String((l.to_string() + &r).into())),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Operation::number(l - r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? == std::cmp::Ordering::Equal))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? != std::cmp::Ordering::Equal))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? == std::cmp::Ordering::Less))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? != std::cmp::Ordering::Greater))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? == std::cmp::Ordering::Greater))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_bool(Operation::compare(lhs, rhs)? != std::cmp::Ordering::Less))
    }

    /// Numbers compare numerically, strings by character code.
    fn compare(lhs: Val, rhs: Val) -> Result<std::cmp::Ordering> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => match l.partial_cmp(&r) {
                Some(ordering) => Ok(ordering),
                None => Err(error!(IllegalFunctionCall)),
            },
            (String(l), String(r)) => Ok(l.cmp(&r)),
            _ => Err(error!(TypeMismatch)),
        }
    }
}
