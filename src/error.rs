/// Lexing errors.
///
/// Defines every failure the tokenizer can report: unterminated string and
/// block literals, a trailing escape at end of input, and characters that do
/// not start any token. All of them are fatal and carry the line and column
/// where the offending literal or character starts.
pub mod lex_error;
/// Parsing errors.
///
/// Contains all error types raised while turning the token stream into a
/// program: unexpected tokens, premature end of input, overloads without a
/// primary pattern case, misplaced `any` targets and lexing failures inside
/// nested block literals.
pub mod parse_error;
/// Runtime notices.
///
/// Non-fatal conditions detected while the rewrite engine runs. A notice
/// never aborts evaluation; the offending statement is dropped and the run
/// continues to a terminal state.
pub mod runtime_notice;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_notice::RuntimeNotice;

/// Any fatal error of the front end.
///
/// Lexing and parsing failures both abort the pipeline before evaluation
/// starts, so callers that run source text end to end only need to handle
/// this one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be tokenized.
    Lex(LexError),
    /// The token stream did not form a valid program.
    Parse(ParseError),
}

impl Error {
    /// Line of the primary error location.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
        }
    }

    /// Column of the primary error location.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Lex(e) => e.column(),
            Self::Parse(e) => e.column(),
        }
    }

    /// The error message without location information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Lex(e) => e.message(),
            Self::Parse(e) => e.message(),
        }
    }

    /// Stable diagnostic code, e.g. `E0002`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Lex(e) => e.code(),
            Self::Parse(e) => e.code(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::NestedLex(inner) => Self::Lex(inner),
            other => Self::Parse(other),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
