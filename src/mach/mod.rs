/*!
## Rust Machine Module

This Rust module loads BASIC programs and runs them statement by statement.

*/

pub type Address = usize;

mod config;
mod function;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use config::Config;
pub use config::Undefined;
pub use function::Function;
pub use function::Rnd;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Exit;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
