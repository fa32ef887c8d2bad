use std::time::{Duration, Instant};

use log::info;

use crate::interpreter::evaluator::{core::Interpreter, sink::EffectSink};

/// Budget for a supervised run. `None` disables a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Wall-clock time the run may take.
    pub timeout:   Option<Duration>,
    /// Number of queue items the run may process.
    pub max_steps: Option<usize>,
}

impl Limits {
    /// No limits at all.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { timeout:   None,
               max_steps: None, }
    }

    /// Limits the run to `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Limits the run to `max_steps` processed queue items.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

/// How a supervised run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The fixpoint was reached.
    Terminated {
        /// Queue items processed.
        steps: usize,
    },
    /// A limit was hit first.
    TimedOut {
        /// Queue items processed.
        steps: usize,
    },
}

impl Outcome {
    /// Queue items processed during the run.
    #[must_use]
    pub const fn steps(&self) -> usize {
        match self {
            Self::Terminated { steps } | Self::TimedOut { steps } => *steps,
        }
    }

    /// Returns `true` if the run was cut short.
    #[must_use]
    pub const fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }
}

impl<S: EffectSink> Interpreter<S> {
    /// Steps until the fixpoint or until a limit is hit.
    ///
    /// The clock and the step budget are checked between steps, so a run
    /// never stops in the middle of one. Steps counted are those of this
    /// call only.
    ///
    /// # Example
    /// ```
    /// use arrow::{
    ///     interpreter::{
    ///         evaluator::{
    ///             core::Interpreter,
    ///             supervisor::{Limits, Outcome},
    ///         },
    ///         value::core::Value,
    ///     },
    ///     parse_source,
    /// };
    ///
    /// let program = parse_source("\"a\" > @print; \"b\" > @print;").unwrap();
    /// let mut interpreter = Interpreter::new(program, Vec::<Value>::new());
    ///
    /// let outcome = interpreter.run(&Limits::unlimited().with_max_steps(2));
    /// assert!(outcome.is_timed_out());
    /// assert_eq!(interpreter.sink(), &vec![Value::from("a")]);
    ///
    /// let outcome = interpreter.run(&Limits::unlimited());
    /// assert!(matches!(outcome, Outcome::Terminated { .. }));
    /// assert_eq!(interpreter.sink().len(), 2);
    /// ```
    pub fn run(&mut self, limits: &Limits) -> Outcome {
        let start = Instant::now();
        let first = self.steps;

        let outcome = loop {
            let steps = self.steps - first;

            if self.is_done() {
                break Outcome::Terminated { steps };
            }
            if limits.max_steps.is_some_and(|max| steps >= max)
               || limits.timeout.is_some_and(|timeout| start.elapsed() >= timeout)
            {
                break Outcome::TimedOut { steps };
            }

            self.step();
        };

        info!("run {} after {} steps in {:?}",
              if outcome.is_timed_out() { "timed out" } else { "terminated" },
              outcome.steps(),
              start.elapsed());
        outcome
    }
}
