//! # BASIC
//!
//! A line-numbered BASIC in the style of the 8-bit era.
//!
//! Programs are loaded from a text file, checked in full, then run one
//! statement at a time. The `basic` binary runs a file against the terminal.
//! ```text
//! $ basic --seed 1 games/wumpus.bas
//! ```
//!
//! The engine itself never touches files or the terminal. Embed it by
//! loading a `Program` and driving a `Runtime`.
//! ```
//! use basic::mach::{Event, Program, Runtime};
//! let program = Program::load("10 PRINT 2+3*4").unwrap();
//! let mut runtime = Runtime::new(program);
//! assert_eq!(runtime.execute(100), Event::Print("14\n".to_string()));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
