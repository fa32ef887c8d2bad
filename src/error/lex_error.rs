#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The line of the opening quote.
        line:   usize,
        /// The column of the opening quote.
        column: usize,
    },
    /// A block literal `{` had no matching `}`.
    UnterminatedBlock {
        /// The line of the opening brace.
        line:   usize,
        /// The column of the opening brace.
        column: usize,
    },
    /// The input ended right after a `\` inside a string literal.
    InvalidTrailingEscape {
        /// The line of the opening quote of the string.
        line:   usize,
        /// The column of the opening quote of the string.
        column: usize,
    },
    /// A character that does not begin any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
}

impl LexError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::UnterminatedBlock { line, .. }
            | Self::InvalidTrailingEscape { line, .. }
            | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// The source column where the error occurred.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnterminatedString { column, .. }
            | Self::UnterminatedBlock { column, .. }
            | Self::InvalidTrailingEscape { column, .. }
            | Self::UnexpectedCharacter { column, .. } => *column,
        }
    }

    /// The error message without location information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnterminatedString { .. } => "Unterminated string literal.".to_string(),
            Self::UnterminatedBlock { .. } => {
                "Unterminated block literal, missing '}'.".to_string()
            },
            Self::InvalidTrailingEscape { .. } => "Invalid escape at end of input.".to_string(),
            Self::UnexpectedCharacter { character, .. } => {
                format!("Unexpected character {character:?}.")
            },
        }
    }

    /// Stable diagnostic code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnterminatedString { .. } => "E0001",
            Self::UnterminatedBlock { .. } => "E0002",
            Self::InvalidTrailingEscape { .. } => "E0003",
            Self::UnexpectedCharacter { .. } => "E0004",
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}, column {}: {}",
               self.line(),
               self.column(),
               self.message())
    }
}

impl std::error::Error for LexError {}
