/*!
## Rust Terminal Module

Runs one BASIC program file against the user's terminal.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Config, Event, Program, Runtime};
use crate::error;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Load `path` and run it to completion. Returns false when the program
/// failed to load or stopped with an error.
pub fn main(path: &Path, config: Config) -> bool {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", error);
    }
    let interface = match Interface::new("BASIC") {
        Ok(interface) => interface,
        Err(error) => {
            eprintln!("{}", error);
            return false;
        }
    };
    interface.set_report_signal(Signal::Interrupt, true);
    let program = match load(path) {
        Ok(program) => program,
        Err(error) => {
            report(&interface, &error).ok();
            return false;
        }
    };
    let mut runtime = Runtime::with_config(program, config);
    match main_loop(&interface, &mut runtime, interrupted) {
        Ok(ok) => ok,
        Err(error) => {
            eprintln!("{}", error);
            false
        }
    }
}

fn main_loop<T: Terminal>(
    interface: &Interface<T>,
    runtime: &mut Runtime,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<bool> {
    let mut ok = true;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}", s))?;
            }
            Event::Input(prompt) => {
                interface.set_prompt(&prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.input(&string);
                        interface.add_history_unique(string);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        interface.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => runtime.interrupt(),
                };
            }
            Event::Error(error) => {
                report(interface, &error)?;
                ok = false;
            }
            Event::Stopped => break,
        }
    }
    Ok(ok)
}

fn report<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(format!("?{}", error))
    ))
}

fn load(path: &Path) -> Result<Program, Error> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            return match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg.as_str())),
                _ => Err(error!(InternalError; msg.as_str())),
            };
        }
    };
    Program::load(&source)
}
