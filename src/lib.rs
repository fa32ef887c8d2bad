//! # arrow
//!
//! arrow is an interpreter for a tiny actor-oriented, pattern-matching
//! rewrite language written in Rust. Programs send messages to actors with
//! `>`, actors answer through `=>` pattern cases, and the single observable
//! effect is the builtin `@print` actor.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, RuntimeNotice},
    interpreter::{
        environment::Environment,
        evaluator::{
            core::Interpreter,
            supervisor::{Limits, Outcome},
        },
        lexer::tokenize,
        parser::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Data` types that
/// represent the syntactic structure of source code. The tree is built by the
/// parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of statement shapes.
/// - Attaches source positions to statements for notices.
/// - Renders programs back to canonical source text.
pub mod ast;
/// Renders fatal errors as compiler-style reports.
///
/// Points at the offending line and column of the source with a caret.
pub mod diagnostics;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines every fatal error of the front end and the non-fatal
/// notices raised while a program runs. All of them carry the line and column
/// they refer to.
///
/// # Responsibilities
/// - Defines error enums for lexing and parsing failures.
/// - Defines the notices of the rewrite engine.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Colors source text with ANSI escape codes.
pub mod highlight;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment, evaluation
/// and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator
///   and value types.
/// - Provides entry points for running programs step by step or to the end.
pub mod interpreter;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct Run {
    /// The values emitted by `@print`, in order.
    pub emitted: Vec<Value>,
    /// The final environment.
    pub env:     Environment,
    /// Every notice raised during the run, in order.
    pub notices: Vec<RuntimeNotice>,
    /// Whether the run reached the fixpoint or hit a limit.
    pub outcome: Outcome,
}

/// Tokenizes and parses source text.
///
/// # Errors
/// Returns the first lexing or parsing error. Lexing errors inside nested
/// block literals are reported as [`Error::Lex`].
///
/// # Examples
/// ```
/// use arrow::{error::Error, parse_source};
///
/// let program = parse_source("\"hello\" > v; v > @print;").unwrap();
/// assert_eq!(program.len(), 2);
///
/// let error = parse_source("{ \"x\" > y;").unwrap_err();
/// assert!(matches!(error, Error::Lex(_)));
/// assert_eq!((error.line(), error.column()), (1, 1));
/// ```
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

/// Runs source text to the end, collecting everything it prints.
///
/// Fatal errors stop the pipeline before evaluation starts, so an `Err`
/// means nothing ran. Runtime notices never fail a run; they are returned
/// in [`Run::notices`].
///
/// # Errors
/// Returns an error if lexing or parsing fails.
///
/// # Examples
/// ```
/// use arrow::{interpreter::{evaluator::supervisor::Limits, value::core::Value}, run_source};
///
/// let source = "{ \"stop\" => \"ok\" > @print; } > actor; \"stop\" > @actor;";
/// let run = run_source(source, &Limits::unlimited()).unwrap();
///
/// assert_eq!(run.emitted, vec![Value::from("ok")]);
/// assert!(run.notices.is_empty());
///
/// // An unknown message is not an error.
/// let source = "{ \"x\" => \"1\" > @print; } > actor; \"y\" > @actor;";
/// let run = run_source(source, &Limits::unlimited()).unwrap();
///
/// assert!(run.emitted.is_empty());
/// assert_eq!(run.notices.len(), 1);
/// ```
pub fn run_source(source: &str, limits: &Limits) -> Result<Run, Error> {
    let program = parse_source(source)?;
    let mut interpreter = Interpreter::new(program, Vec::<Value>::new());
    let outcome = interpreter.run(limits);
    let (state, emitted, notices) = interpreter.into_parts();

    Ok(Run { emitted,
             env: state.env,
             notices,
             outcome })
}
