use super::{Address, Config, Function, Operation, Program, Rnd, Stack, Val, Var};
use crate::error;
use crate::lang::ast::{Expression, PrintItem, Statement};
use crate::lang::{Error, Ident, LineNumber, MAX_LINE_NUMBER};
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution events
///
/// `Runtime::execute` returns after at most the requested number of
/// statements, or earlier when something needs the caller's attention.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Cycle budget used up; call `execute` again.
    Running,
    /// Text to write. Newlines are included.
    Print(String),
    /// Waiting on `Runtime::input`. Carries the prompt to show.
    Input(String),
    /// Program finished. Repeats forever.
    Stopped,
    /// Program terminated with an error. Reported once, then `Stopped`.
    Error(Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Exit {
    Normal,
    Error(Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Running,
    AwaitingInput,
    Terminated(Exit),
}

#[derive(Debug)]
struct LoopFrame {
    var: Ident,
    limit: f64,
    step: f64,
    resume: Address,
}

/// Where execution continues after a statement.
enum Flow {
    Next,
    NextLine,
    Jump(Address),
    Halt,
}

/// ## Tree-walking executor

pub struct Runtime {
    program: Rc<Program>,
    config: Config,
    pc: Address,
    state: State,
    vars: Var,
    loops: Stack<LoopFrame>,
    returns: Stack<Address>,
    rnd: Rnd,
    print_buf: String,
    print_col: usize,
    input_prompt: String,
    pending_input: VecDeque<Ident>,
    tron: bool,
    traced_line: Option<LineNumber>,
    interrupted: bool,
    error_reported: bool,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime::with_config(program, Config::default())
    }

    pub fn with_config(program: Program, config: Config) -> Runtime {
        Runtime {
            program: Rc::new(program),
            pc: 0,
            state: State::Running,
            vars: Var::new(config.undefined),
            loops: Stack::new("TOO MANY NESTED FOR LOOPS"),
            returns: Stack::new("TOO MANY NESTED GOSUBS"),
            rnd: Rnd::new(config.seed),
            print_buf: String::new(),
            print_col: 0,
            input_prompt: String::new(),
            pending_input: VecDeque::new(),
            tron: config.trace,
            traced_line: None,
            interrupted: false,
            error_reported: false,
            config,
        }
    }

    /// Start over from the lowest line with empty variables.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.state = State::Running;
        self.vars.clear();
        self.loops.clear();
        self.returns.clear();
        self.rnd = Rnd::new(self.config.seed);
        self.print_buf.clear();
        self.print_col = 0;
        self.pending_input.clear();
        self.tron = self.config.trace;
        self.traced_line = None;
        self.interrupted = false;
        self.error_reported = false;
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Stop with `BREAK` before the next statement.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Supply one value to a waiting INPUT. Returns false when nothing
    /// was waiting.
    pub fn input(&mut self, raw: &str) -> bool {
        if self.state != State::AwaitingInput {
            return false;
        }
        let ident = match self.pending_input.pop_front() {
            Some(ident) => ident,
            None => {
                self.state = State::Running;
                return false;
            }
        };
        self.print_col = 0;
        if let Err(e) = self.vars.store(&ident, Val::from_input(raw)) {
            let e = self.locate(e);
            self.fail(e);
            return true;
        }
        if self.pending_input.is_empty() {
            self.state = State::Running;
            self.pc += 1;
        } else {
            self.input_prompt = "? ".to_string();
        }
        true
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        let mut cycles = cycles;
        loop {
            if self.interrupted {
                self.interrupted = false;
                if !matches!(self.state, State::Terminated(_)) {
                    let e = self.locate(error!(Break));
                    self.fail(e);
                }
            }
            match self.state {
                State::Terminated(_) => return self.terminated_event(),
                State::AwaitingInput => {
                    if !self.print_buf.is_empty() {
                        return Event::Print(std::mem::take(&mut self.print_buf));
                    }
                    return Event::Input(self.input_prompt.clone());
                }
                State::Running => {}
            }
            if cycles == 0 {
                return Event::Running;
            }
            cycles -= 1;
            if let Err(e) = self.step() {
                self.fail(e);
            }
            if !self.print_buf.is_empty() {
                return Event::Print(std::mem::take(&mut self.print_buf));
            }
        }
    }

    fn terminated_event(&mut self) -> Event {
        if !self.print_buf.is_empty() {
            return Event::Print(std::mem::take(&mut self.print_buf));
        }
        if let State::Terminated(Exit::Error(e)) = &self.state {
            if !self.error_reported {
                self.error_reported = true;
                return Event::Error(e.clone());
            }
        }
        Event::Stopped
    }

    fn fail(&mut self, error: Error) {
        self.state = State::Terminated(Exit::Error(error));
    }

    fn locate(&self, error: Error) -> Error {
        match self.program.get(self.pc) {
            Some((line, _)) => error.in_line_number(line),
            None => error,
        }
    }

    fn write(&mut self, s: &str) {
        for ch in s.chars() {
            if ch == '\n' {
                self.print_col = 0;
            } else {
                self.print_col += 1;
            }
        }
        self.print_buf.push_str(s);
    }

    fn step(&mut self) -> Result<()> {
        let program = Rc::clone(&self.program);
        let (line, statement) = match program.get(self.pc) {
            Some(s) => s,
            None => {
                self.state = State::Terminated(Exit::Normal);
                return Ok(());
            }
        };
        if self.tron && self.traced_line != Some(line) {
            self.write(&format!("[{}]", line));
        }
        self.traced_line = Some(line);
        let flow = match self.statement(statement) {
            Ok(flow) => flow,
            Err(e) => return Err(e.in_column(&statement.column()).in_line_number(line)),
        };
        match flow {
            Flow::Next => self.pc += 1,
            Flow::NextLine => self.pc = program.next_line_address(self.pc),
            Flow::Jump(addr) => {
                self.pc = addr;
                self.traced_line = None;
            }
            Flow::Halt => {}
        }
        Ok(())
    }

    fn statement(&mut self, statement: &Statement) -> Result<Flow> {
        match statement {
            Statement::End(_) => {
                self.state = State::Terminated(Exit::Normal);
                Ok(Flow::Halt)
            }
            Statement::For(_, var, from, to, step) => self.r#for(var, from, to, step.as_ref()),
            Statement::Gosub(_, expr) => {
                let addr = self.line_address(expr)?;
                self.returns.push(self.pc + 1)?;
                Ok(Flow::Jump(addr))
            }
            Statement::Goto(_, expr) => Ok(Flow::Jump(self.line_address(expr)?)),
            Statement::If(_, predicate, then) => {
                let truth = self
                    .expression(predicate)?
                    .is_truthy()
                    .map_err(|e| e.in_column(&predicate.column()))?;
                if truth {
                    self.statement(then)
                        .map_err(|e| e.in_column(&then.column()))
                } else {
                    Ok(Flow::NextLine)
                }
            }
            Statement::Input(_, prompt, vars) => {
                let mut s = match prompt {
                    Some(prompt) => prompt.to_string(),
                    None => String::new(),
                };
                s.push_str("? ");
                self.input_prompt = s;
                self.pending_input = vars.iter().map(|(_, ident)| ident.clone()).collect();
                self.state = State::AwaitingInput;
                Ok(Flow::Halt)
            }
            Statement::Let(_, var, expr) => {
                let val = self.expression(expr)?;
                self.vars.store(var, val)?;
                Ok(Flow::Next)
            }
            Statement::Next(_, var) => self.r#next(var.as_ref()),
            Statement::Print(_, items) => self.print(items),
            Statement::Rem(_) => Ok(Flow::Next),
            Statement::Return(_) => match self.returns.pop() {
                Some(addr) => Ok(Flow::Jump(addr)),
                None => Err(error!(ReturnWithoutGosub)),
            },
            Statement::Stop(_) => Err(error!(Break)),
            Statement::Troff(_) => {
                self.tron = false;
                Ok(Flow::Next)
            }
            Statement::Tron(_) => {
                self.tron = true;
                Ok(Flow::Next)
            }
        }
    }

    fn r#for(
        &mut self,
        var: &Ident,
        from: &Expression,
        to: &Expression,
        step: Option<&Expression>,
    ) -> Result<Flow> {
        if var.is_string() {
            return Err(error!(TypeMismatch));
        }
        let start = self.number(from)?;
        self.vars.store(var, Val::Number(start))?;
        let limit = self.number(to)?;
        let step = match step {
            Some(expr) => self.number(expr)?,
            None => 1.0,
        };
        if step == 0.0 {
            return Err(error!(InfiniteLoopStep));
        }
        if let Some(index) = self.loops.rposition(|frame| frame.var == *var) {
            self.loops.truncate(index);
        }
        self.loops.push(LoopFrame {
            var: var.clone(),
            limit,
            step,
            resume: self.pc + 1,
        })?;
        Ok(Flow::Next)
    }

    fn r#next(&mut self, var: Option<&Ident>) -> Result<Flow> {
        let index = match var {
            Some(var) => self.loops.rposition(|frame| frame.var == *var),
            None => self.loops.len().checked_sub(1),
        };
        match index {
            Some(index) => self.loops.truncate(index + 1),
            None => return Err(error!(NextWithoutFor)),
        }
        let (var, limit, step, resume) = match self.loops.last() {
            Some(frame) => (frame.var.clone(), frame.limit, frame.step, frame.resume),
            None => return Err(error!(NextWithoutFor)),
        };
        let current = match self.vars.fetch(&var) {
            Ok(Val::Number(n)) => n,
            _ => return Err(error!(UnknownLoopVariable; &var.to_string())),
        };
        let next = current + step;
        self.vars.store(&var, Val::Number(next))?;
        if (step > 0.0 && next <= limit) || (step < 0.0 && next >= limit) {
            Ok(Flow::Jump(resume))
        } else {
            self.loops.pop();
            Ok(Flow::Next)
        }
    }

    fn print(&mut self, items: &[PrintItem]) -> Result<Flow> {
        let mut vals: Vec<Option<Val>> = Vec::with_capacity(items.len());
        for item in items {
            vals.push(match item {
                PrintItem::Expression(expr) => Some(self.expression(expr)?),
                PrintItem::Comma(_) | PrintItem::Semicolon(_) => None,
            });
        }
        for (item, val) in items.iter().zip(vals) {
            match item {
                PrintItem::Comma(_) => {
                    let zone = self.config.zone_width.max(1);
                    let pad = zone - self.print_col % zone;
                    self.write(&" ".repeat(pad));
                }
                PrintItem::Semicolon(_) => {}
                PrintItem::Expression(_) => {
                    if let Some(val) = val {
                        self.write(&val.to_string());
                    }
                }
            }
        }
        match items.last() {
            Some(PrintItem::Comma(_)) | Some(PrintItem::Semicolon(_)) => {}
            _ => self.write("\n"),
        }
        Ok(Flow::Next)
    }

    /// Address of the line an expression names.
    fn line_address(&mut self, expr: &Expression) -> Result<Address> {
        let n = self.number(expr)?;
        let found = if n.fract() == 0.0 && n >= 0.0 && n <= MAX_LINE_NUMBER as f64 {
            self.program.address_of(n as LineNumber)
        } else {
            None
        };
        match found {
            Some(addr) => Ok(addr),
            None => Err(error!(UndefinedLine, ..&expr.column(); &Val::Number(n).to_string())),
        }
    }

    fn number(&mut self, expr: &Expression) -> Result<f64> {
        let val = self.expression(expr)?;
        f64::try_from(val).map_err(|e| e.in_column(&expr.column()))
    }

    fn truth(&mut self, expr: &Expression) -> Result<bool> {
        let val = self.expression(expr)?;
        val.is_truthy().map_err(|e| e.in_column(&expr.column()))
    }

    fn binary(
        &mut self,
        lhs: &Expression,
        rhs: &Expression,
        op: fn(Val, Val) -> Result<Val>,
    ) -> Result<Val> {
        let lhs = self.expression(lhs)?;
        let rhs = self.expression(rhs)?;
        op(lhs, rhs)
    }

    fn expression(&mut self, expr: &Expression) -> Result<Val> {
        let result = match expr {
            Expression::Number(_, n) => Ok(Val::Number(*n)),
            Expression::String(_, s) => Ok(Val::String(s.clone())),
            Expression::Var(_, ident) => {
                let zero_arity = match Function::arity(ident.name()) {
                    Some(arity) => arity.contains(&0),
                    None => false,
                };
                if zero_arity {
                    Function::call(ident.name(), vec![], &mut self.rnd)
                } else {
                    self.vars.fetch(ident)
                }
            }
            Expression::Function(_, ident, args) => {
                let mut vals = Vec::with_capacity(args.len());
                for arg in args {
                    vals.push(self.expression(arg)?);
                }
                Function::call(ident.name(), vals, &mut self.rnd)
            }
            Expression::Negation(_, e) => Operation::negate(self.expression(e)?),
            Expression::Not(_, e) => Operation::not(self.expression(e)?),
            Expression::Power(_, l, r) => self.binary(l, r, Operation::power),
            Expression::Multiply(_, l, r) => self.binary(l, r, Operation::multiply),
            Expression::Divide(_, l, r) => self.binary(l, r, Operation::divide),
            Expression::Add(_, l, r) => self.binary(l, r, Operation::sum),
            Expression::Subtract(_, l, r) => self.binary(l, r, Operation::subtract),
            Expression::Equal(_, l, r) => self.binary(l, r, Operation::equal),
            Expression::NotEqual(_, l, r) => self.binary(l, r, Operation::not_equal),
            Expression::Less(_, l, r) => self.binary(l, r, Operation::less),
            Expression::LessEqual(_, l, r) => self.binary(l, r, Operation::less_equal),
            Expression::Greater(_, l, r) => self.binary(l, r, Operation::greater),
            Expression::GreaterEqual(_, l, r) => self.binary(l, r, Operation::greater_equal),
            Expression::And(_, l, r) => {
                if self.truth(l)? {
                    Ok(Val::from_bool(self.truth(r)?))
                } else {
                    Ok(Val::from_bool(false))
                }
            }
            Expression::Or(_, l, r) => {
                if self.truth(l)? {
                    Ok(Val::from_bool(true))
                } else {
                    Ok(Val::from_bool(self.truth(r)?))
                }
            }
        };
        result.map_err(|e| e.in_column(&expr.column()))
    }
}
