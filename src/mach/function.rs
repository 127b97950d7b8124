use super::Val;
use crate::error;
use crate::lang::Error;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::convert::TryFrom;
use std::ops::RangeInclusive;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Random number source for `RND`

pub struct Rnd {
    rng: StdRng,
    last: f64,
}

impl Rnd {
    pub fn new(seed: Option<u64>) -> Rnd {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let last = rng.gen::<f64>();
        Rnd { rng, last }
    }

    fn next(&mut self) -> f64 {
        self.last = self.rng.gen::<f64>();
        self.last
    }

    fn reseed(&mut self, n: f64) -> f64 {
        self.rng = StdRng::seed_from_u64(n.to_bits());
        self.next()
    }
}

impl std::fmt::Debug for Rnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rnd({})", self.last)
    }
}

/// ## Builtin functions

pub struct Function {}

impl Function {
    /// Accepted argument counts, or `None` if `name` is not a builtin.
    pub fn arity(name: &str) -> Option<RangeInclusive<usize>> {
        match name {
            "ABS" | "ASC" | "ATN" | "CHR$" | "COS" | "EXP" | "FIX" | "INT" | "LEN" | "LOG"
            | "SGN" | "SIN" | "SPACE$" | "SQR" | "STR$" | "TAN" | "VAL" => Some(1..=1),
            "LEFT$" | "RIGHT$" => Some(2..=2),
            "INSTR" | "MID$" => Some(2..=3),
            "RND" => Some(0..=1),
            "DATE$" | "TIME$" => Some(0..=0),
            _ => None,
        }
    }

    pub fn is_builtin(name: &str) -> bool {
        Function::arity(name).is_some()
    }

    pub fn call(name: &str, args: Vec<Val>, rnd: &mut Rnd) -> Result<Val> {
        let arity = match Function::arity(name) {
            Some(arity) => arity,
            None => return Err(error!(UndefinedFunction; name)),
        };
        if !arity.contains(&args.len()) {
            return Err(error!(WrongNumberOfArguments; name));
        }
        let mut args = args.into_iter();
        match name {
            "ABS" => Ok(Val::Number(number(&mut args)?.abs())),
            "ASC" => Function::asc(string(&mut args)?),
            "ATN" => finite(number(&mut args)?.atan()),
            "CHR$" => Function::chr(number(&mut args)?),
            "COS" => finite(number(&mut args)?.cos()),
            "DATE$" => Ok(Val::String(
                chrono::Local::now().format("%m-%d-%Y").to_string().into(),
            )),
            "EXP" => finite(number(&mut args)?.exp()),
            "FIX" => Ok(Val::Number(number(&mut args)?.trunc())),
            "INSTR" => Function::instr(args.collect()),
            "INT" => Ok(Val::Number(number(&mut args)?.floor())),
            "LEFT$" => {
                let s = string(&mut args)?;
                let n = count(&mut args)?;
                Ok(Val::String(s.chars().take(n).collect::<String>().into()))
            }
            "LEN" => Ok(Val::Number(string(&mut args)?.chars().count() as f64)),
            "LOG" => {
                let n = number(&mut args)?;
                if n <= 0.0 {
                    return Err(error!(IllegalFunctionCall));
                }
                finite(n.ln())
            }
            "MID$" => Function::mid(args.collect()),
            "RIGHT$" => {
                let s = string(&mut args)?;
                let n = count(&mut args)?;
                let len = s.chars().count();
                let skip = len.saturating_sub(n);
                Ok(Val::String(s.chars().skip(skip).collect::<String>().into()))
            }
            "RND" => match args.next() {
                None => Ok(Val::Number(rnd.next())),
                Some(v) => {
                    let n = f64::try_from(v)?;
                    if n < 0.0 {
                        Ok(Val::Number(rnd.reseed(n)))
                    } else if n == 0.0 {
                        Ok(Val::Number(rnd.last))
                    } else {
                        Ok(Val::Number(rnd.next()))
                    }
                }
            },
            "SGN" => {
                let n = number(&mut args)?;
                Ok(Val::Number(if n > 0.0 {
                    1.0
                } else if n < 0.0 {
                    -1.0
                } else {
                    0.0
                }))
            }
            "SIN" => finite(number(&mut args)?.sin()),
            "SPACE$" => {
                let n = count(&mut args)?;
                if n > 255 {
                    return Err(error!(IllegalFunctionCall));
                }
                Ok(Val::String(" ".repeat(n).into()))
            }
            "SQR" => {
                let n = number(&mut args)?;
                if n < 0.0 {
                    return Err(error!(IllegalFunctionCall));
                }
                Ok(Val::Number(n.sqrt()))
            }
            "STR$" => Ok(Val::String(
                Val::Number(number(&mut args)?).to_string().into(),
            )),
            "TAN" => finite(number(&mut args)?.tan()),
            "TIME$" => Ok(Val::String(
                chrono::Local::now().format("%H:%M:%S").to_string().into(),
            )),
            "VAL" => Ok(Val::Number(Function::val(&string(&mut args)?))),
            _ => Err(error!(InternalError; name)),
        }
    }

    fn asc(s: Rc<str>) -> Result<Val> {
        match s.chars().next() {
            Some(ch) => Ok(Val::Number(ch as u32 as f64)),
            None => Err(error!(IllegalFunctionCall)),
        }
    }

    fn chr(n: f64) -> Result<Val> {
        if n < 0.0 || n > 255.0 || n.fract() != 0.0 {
            return Err(error!(IllegalFunctionCall));
        }
        match std::char::from_u32(n as u32) {
            Some(ch) => Ok(Val::String(ch.to_string().into())),
            None => Err(error!(IllegalFunctionCall)),
        }
    }

    /// `INSTR([start,] haystack, needle)`, 1-based. 0 when not found.
    fn instr(args: Vec<Val>) -> Result<Val> {
        let mut args = args.into_iter();
        let (start, haystack, needle) = if args.len() == 3 {
            let start = count(&mut args)?;
            (start, string(&mut args)?, string(&mut args)?)
        } else {
            (1, string(&mut args)?, string(&mut args)?)
        };
        if start < 1 {
            return Err(error!(IllegalFunctionCall));
        }
        let haystack: Vec<char> = haystack.chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        if start > haystack.len() {
            return Ok(Val::Number(0.0));
        }
        if needle.is_empty() {
            return Ok(Val::Number(start as f64));
        }
        for i in (start - 1)..haystack.len() {
            if haystack[i..].starts_with(&needle) {
                return Ok(Val::Number((i + 1) as f64));
            }
        }
        Ok(Val::Number(0.0))
    }

    /// `MID$(s, start[, len])`, 1-based.
    fn mid(args: Vec<Val>) -> Result<Val> {
        let mut args = args.into_iter();
        let s = string(&mut args)?;
        let start = count(&mut args)?;
        let len = match args.next() {
            Some(v) => usize::try_from(v)?,
            None => usize::max_value(),
        };
        if start < 1 {
            return Err(error!(IllegalFunctionCall));
        }
        Ok(Val::String(
            s.chars().skip(start - 1).take(len).collect::<String>().into(),
        ))
    }

    /// Longest leading decimal number, or 0.
    fn val(s: &str) -> f64 {
        let s = s.trim();
        let prefix: Vec<char> = s
            .chars()
            .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
            .collect();
        for len in (1..=prefix.len()).rev() {
            let candidate: String = prefix[..len].iter().collect();
            if let Ok(n) = candidate.parse::<f64>() {
                return n;
            }
        }
        0.0
    }
}

fn number(args: &mut impl Iterator<Item = Val>) -> Result<f64> {
    match args.next() {
        Some(v) => f64::try_from(v),
        None => Err(error!(WrongNumberOfArguments)),
    }
}

fn string(args: &mut impl Iterator<Item = Val>) -> Result<Rc<str>> {
    match args.next() {
        Some(v) => Rc::<str>::try_from(v),
        None => Err(error!(WrongNumberOfArguments)),
    }
}

fn count(args: &mut impl Iterator<Item = Val>) -> Result<usize> {
    match args.next() {
        Some(v) => usize::try_from(v),
        None => Err(error!(WrongNumberOfArguments)),
    }
}

fn finite(n: f64) -> Result<Val> {
    if n.is_nan() {
        Err(error!(IllegalFunctionCall))
    } else if n.is_infinite() {
        Err(error!(Overflow))
    } else {
        Ok(Val::Number(n))
    }
}
