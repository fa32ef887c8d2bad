use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token of the wrong kind.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token text encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input while a statement was still open.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The line of the end of input.
        line:     usize,
        /// The column of the end of input.
        column:   usize,
    },
    /// A `=>` overload appeared without a primary pattern case before it.
    DanglingOverload {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// `any` was used as the target of a command outside a pattern case.
    MisplacedAny {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The contents of a block literal failed to tokenize.
    NestedLex(LexError),
}

impl ParseError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::DanglingOverload { line, .. }
            | Self::MisplacedAny { line, .. } => *line,
            Self::NestedLex(e) => e.line(),
        }
    }

    /// The source column where the error occurred.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::DanglingOverload { column, .. }
            | Self::MisplacedAny { column, .. } => *column,
            Self::NestedLex(e) => e.column(),
        }
    }

    /// The error message without location information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                format!("Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { expected, .. } => {
                format!("Expected {expected}, found end of input.")
            },
            Self::DanglingOverload { .. } => {
                "Overload '=>' has no primary pattern case before it.".to_string()
            },
            Self::MisplacedAny { .. } => {
                "'any' is only a valid target inside a pattern case.".to_string()
            },
            Self::NestedLex(e) => e.message(),
        }
    }

    /// Stable diagnostic code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. } => "E0101",
            Self::UnexpectedEndOfInput { .. } => "E0102",
            Self::DanglingOverload { .. } => "E0103",
            Self::MisplacedAny { .. } => "E0104",
            Self::NestedLex(e) => e.code(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::NestedLex(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}, column {}: {}",
               self.line(),
               self.column(),
               self.message())
    }
}

impl std::error::Error for ParseError {}
