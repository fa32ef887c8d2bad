/// Runtime values.
///
/// Defines the `Value` enum produced by evaluating data: strings, booleans,
/// actor references, unevaluated code blocks and pattern tables.
pub mod core;

/// Pattern tables.
///
/// Defines the `(key, actions)` pairs registered for an actor and the table
/// that holds them in registration order.
pub mod pattern;
