/// What reading an unassigned variable does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undefined {
    /// Raise `UNDEFINED VARIABLE`.
    Error,
    /// Yield 0, or "" for string names.
    Default,
}

impl Default for Undefined {
    fn default() -> Self {
        Undefined::Error
    }
}

/// ## Runtime configuration
///
/// ```
/// use basic::mach::{Config, Undefined};
/// let config = Config::default()
///     .undefined(Undefined::Default)
///     .seed(Some(7));
/// assert_eq!(config.zone_width, 14);
/// ```

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub undefined: Undefined,
    pub zone_width: usize,
    pub seed: Option<u64>,
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            undefined: Undefined::default(),
            zone_width: 14,
            seed: None,
            trace: false,
        }
    }
}

impl Config {
    pub fn undefined(self, undefined: Undefined) -> Config {
        Config { undefined, ..self }
    }

    /// Zero-width zones would never advance; clamp to one column.
    pub fn zone_width(self, zone_width: usize) -> Config {
        Config {
            zone_width: zone_width.max(1),
            ..self
        }
    }

    pub fn seed(self, seed: Option<u64>) -> Config {
        Config { seed, ..self }
    }

    pub fn trace(self, trace: bool) -> Config {
        Config { trace, ..self }
    }
}
