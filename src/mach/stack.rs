use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    /// Index of the topmost element matching `f`.
    pub fn rposition<F>(&self, f: F) -> Option<usize>
    where
        F: Fn(&T) -> bool,
    {
        self.vec.iter().rposition(f)
    }
    /// Discard every element at or above `len`.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_overflow() {
        let mut s: Stack<usize> = Stack::new("STACK OVERFLOW");
        for i in 0..65535 {
            s.push(i).unwrap();
        }
        let e = s.push(65535).unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert_eq!(s.len(), 65535);
    }

    #[test]
    fn test_rposition_and_truncate() {
        let mut s: Stack<char> = Stack::new("");
        for c in "ABCB".chars() {
            s.push(c).unwrap();
        }
        assert_eq!(s.rposition(|c| *c == 'B'), Some(3));
        s.truncate(2);
        assert_eq!(s.last(), Some(&'B'));
        assert_eq!(s.pop(), Some('B'));
        assert_eq!(s.rposition(|c| *c == 'B'), None);
    }
}
