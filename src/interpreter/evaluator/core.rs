use std::collections::VecDeque;

use log::trace;

use crate::{
    ast::{Position, Program, Statement},
    error::RuntimeNotice,
    interpreter::{environment::Environment, evaluator::sink::EffectSink, value::core::Value},
};

/// An item of the statement queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// A statement still to be executed.
    Run(Statement),
    /// The end of an actor call. Pops the innermost call frame and restores
    /// the caller's `it` and `self`.
    Return,
}

/// One active actor call.
///
/// Frames form the call stack: a call whose actor and message equal those of
/// an active frame is suppressed.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The resolved actor name.
    pub actor:      String,
    /// The evaluated message, absent for a bare call.
    pub message:    Option<Value>,
    /// The variable the message was read from, target of `> any`.
    pub origin:     Option<String>,
    /// The caller's binding of `it`.
    pub saved_it:   Option<Value>,
    /// The caller's binding of `self`.
    pub saved_self: Option<Value>,
}

/// The state of the rewrite engine: remaining work, environment and whether
/// the fixpoint has been reached.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Statements and call ends still to be processed, front first.
    pub program: VecDeque<Task>,
    /// The bindings, pattern tables and fallbacks of the run.
    pub env:     Environment,
    /// Set once the queue has run empty.
    pub done:    bool,
}

impl State {
    /// Creates the initial state for `program`: an empty environment and a
    /// queue holding the program as a single block.
    ///
    /// # Example
    /// ```
    /// use arrow::{interpreter::evaluator::core::State, parse_source};
    ///
    /// let program = parse_source("\"x\" > y;").unwrap();
    /// let state = State::new(program);
    ///
    /// assert_eq!(state.program.len(), 1);
    /// assert!(state.env.is_empty());
    /// assert!(!state.done);
    /// ```
    #[must_use]
    pub fn new(program: Program) -> Self {
        let root = Statement::Block { body:     program,
                                      position: Position::new(1, 1), };

        Self { program: VecDeque::from([Task::Run(root)]),
               env:     Environment::new(),
               done:    false, }
    }
}

/// Runs a program against an effect sink.
///
/// The interpreter owns the rewrite state, the call stack of active actor
/// calls and every runtime notice raised so far. Notices never stop a run.
///
/// ## Usage
///
/// Create it from a parsed program, then either call [`Interpreter::step`]
/// repeatedly, [`Interpreter::rewrite`] to run to the fixpoint, or
/// [`Interpreter::run`] to run under [`Limits`](crate::interpreter::evaluator::supervisor::Limits).
pub struct Interpreter<S: EffectSink> {
    pub(in crate::interpreter::evaluator) state:   State,
    pub(in crate::interpreter::evaluator) frames:  Vec<Frame>,
    pub(in crate::interpreter::evaluator) notices: Vec<RuntimeNotice>,
    pub(in crate::interpreter::evaluator) sink:    S,
    pub(in crate::interpreter::evaluator) steps:   usize,
}

impl<S: EffectSink> Interpreter<S> {
    /// Creates an interpreter that will run `program` and send every printed
    /// value to `sink`.
    pub fn new(program: Program, sink: S) -> Self {
        Self::from_state(State::new(program), sink)
    }

    /// Creates an interpreter that continues from `state`.
    pub fn from_state(state: State, sink: S) -> Self {
        Self { state,
               frames: Vec::new(),
               notices: Vec::new(),
               sink,
               steps: 0 }
    }

    /// Performs one rewrite step.
    ///
    /// Pops the first queue item and executes it. Once the queue is empty the
    /// state is marked done; that transition still counts as a change.
    ///
    /// # Returns
    /// `false` only when the state was already done, i.e. at the fixpoint.
    ///
    /// # Example
    /// ```
    /// use arrow::{
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    ///     parse_source,
    /// };
    ///
    /// let program = parse_source("\"hi\" > @print;").unwrap();
    /// let mut interpreter = Interpreter::new(program, Vec::<Value>::new());
    ///
    /// while interpreter.step() {}
    ///
    /// assert!(interpreter.is_done());
    /// assert!(!interpreter.step());
    /// assert_eq!(interpreter.sink().len(), 1);
    /// ```
    pub fn step(&mut self) -> bool {
        if self.state.done {
            return false;
        }

        let Some(task) = self.state.program.pop_front() else {
            self.state.done = true;
            return true;
        };

        self.steps += 1;
        trace!("step {}: {} queued, {} active calls",
               self.steps,
               self.state.program.len(),
               self.frames.len());

        match task {
            Task::Run(statement) => self.execute(statement),
            Task::Return => self.exit_frame(),
        }

        true
    }

    /// Steps until the fixpoint is reached.
    ///
    /// There is no limit on the number of steps; see
    /// [`Interpreter::run`] for a supervised variant.
    pub fn rewrite(&mut self) -> &State {
        while self.step() {}
        &self.state
    }

    /// Returns `true` once the fixpoint has been reached.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.state.done
    }

    /// The current rewrite state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// The current environment.
    #[must_use]
    pub const fn env(&self) -> &Environment {
        &self.state.env
    }

    /// Every notice raised so far, in order.
    #[must_use]
    pub fn notices(&self) -> &[RuntimeNotice] {
        &self.notices
    }

    /// The effect sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of queue items processed so far.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Number of actor calls currently active.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Consumes the interpreter, returning its state, sink and notices.
    pub fn into_parts(self) -> (State, S, Vec<RuntimeNotice>) {
        (self.state, self.sink, self.notices)
    }

    /// Puts `tasks` at the front of the queue, keeping their order.
    pub(in crate::interpreter::evaluator) fn splice<I>(&mut self, tasks: I)
        where I: IntoIterator<Item = Task>,
              I::IntoIter: DoubleEndedIterator
    {
        for task in tasks.into_iter().rev() {
            self.state.program.push_front(task);
        }
    }
}
