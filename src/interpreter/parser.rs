/// Parser entry points.
///
/// Filters trivia out of the token stream and parses the remaining tokens
/// into a program, merging `=>` overloads into the pattern case before them.
pub mod core;

/// Statement parsing.
///
/// Classifies each statement as an assignment, an actor call or a pattern
/// definition at parse time.
pub mod statement;

/// Block literal parsing.
///
/// Re-tokenizes and parses the contents of `{ ... }` literals into nested
/// programs whose positions refer to the enclosing source.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectations, data parsing and error construction shared by the
/// other parser modules.
pub mod utils;

pub use self::core::{ParseResult, parse};
