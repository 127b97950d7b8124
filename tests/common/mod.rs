#![allow(dead_code)]
use basic::mach::{Config, Event, Program, Runtime, State};

pub fn runtime(source: &str) -> Runtime {
    runtime_with(source, Config::default())
}

pub fn runtime_with(source: &str, config: Config) -> Runtime {
    match Program::load(source) {
        Ok(program) => Runtime::with_config(program, config),
        Err(error) => panic!("{}", error),
    }
}

pub fn run(source: &str) -> String {
    exec(&mut runtime(source))
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

/// Answer each INPUT in turn, echoing the answer like a terminal would.
pub fn exec_with_input(runtime: &mut Runtime, inputs: &[&str]) -> String {
    let mut s = exec(runtime);
    for input in inputs {
        if *runtime.state() != State::AwaitingInput {
            break;
        }
        s.push_str(input);
        s.push('\n');
        runtime.input(input);
        s.push_str(&exec(runtime));
    }
    s
}

pub fn load_error(source: &str) -> String {
    match Program::load(source) {
        Ok(_) => panic!("loaded"),
        Err(error) => error.to_string(),
    }
}
