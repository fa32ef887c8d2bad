/// Core rewrite engine and interpreter state.
///
/// Contains the statement queue, the step/fixpoint loop and the interpreter
/// that owns the environment, the call stack and the collected notices.
pub mod core;

/// Statement evaluation.
///
/// Executes blocks, pattern definitions and assignments, including actor
/// definitions by block assignment.
pub mod statement;

/// Actor calls.
///
/// Resolves actor names, dispatches messages against pattern tables and
/// fallbacks, guards against recursive signatures and manages call frames.
pub mod actor;

/// Utility functions for evaluation.
///
/// Data evaluation and notice bookkeeping shared by the other modules.
pub mod utils;

/// Effect sinks.
///
/// Consumers of the values emitted by the builtin `print` actor.
pub mod sink;

/// Supervised runs.
///
/// Runs the rewrite engine under a wall-clock deadline and a step budget.
pub mod supervisor;
