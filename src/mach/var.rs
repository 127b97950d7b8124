use super::{Undefined, Val};
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
    undefined: Undefined,
}

impl Var {
    pub fn new(undefined: Undefined) -> Var {
        Var {
            vars: HashMap::new(),
            undefined,
        }
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, ident: &Ident) -> Result<Val> {
        if let Some(val) = self.vars.get(ident.name()) {
            return Ok(val.clone());
        }
        match self.undefined {
            Undefined::Error => Err(error!(UndefinedVariable; &ident.to_string())),
            Undefined::Default => {
                if ident.is_string() {
                    Ok(Val::String("".into()))
                } else {
                    Ok(Val::Number(0.0))
                }
            }
        }
    }

    /// Creates or overwrites. Values are never coerced.
    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        if self.vars.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory));
        }
        match self.vars.get_mut(ident.name()) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(ident.name().clone(), value);
            }
        };
        Ok(())
    }
}
