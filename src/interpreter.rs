/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// operators, terminators, string and block literals, identifiers and actor
/// references, plus the whitespace, newlines and comments between them. Every
/// token carries the exact source slice and its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source locations.
/// - Decodes string escapes and captures nested block literals unparsed.
/// - Reports lexical errors for unterminated literals and stray characters.
pub mod lexer;
/// The parser module builds the program tree from tokens.
///
/// The parser classifies every statement as an assignment, an actor call or a
/// pattern definition, and parses block literals into nested programs as soon
/// as it meets them.
///
/// # Responsibilities
/// - Converts tokens into statements grouped in programs.
/// - Merges `=>` overloads into the pattern definition they extend.
/// - Validates the grammar, reporting errors with location info.
pub mod parser;
/// The environment module stores the bindings of a run.
///
/// Holds plain name → value bindings together with the pattern tables and
/// fallback commands registered for each actor.
pub mod environment;
/// The evaluator module runs programs.
///
/// The evaluator is a rewrite engine: it repeatedly takes the first
/// statement off a queue and executes it, splicing the actions of actor calls
/// back onto the front of the queue until nothing is left.
///
/// # Responsibilities
/// - Binds values and defines actors.
/// - Dispatches messages to pattern cases and fallbacks.
/// - Suppresses calls that would repeat an active signature.
/// - Emits printed values to an effect sink.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Every piece of data evaluates to one value: a string, a boolean, an actor
/// reference, an unevaluated code block or a pattern table.
pub mod value;
