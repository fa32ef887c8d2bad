#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every non-fatal condition reported by the rewrite engine.
///
/// Notices are collected on the interpreter in the order they occur. The
/// statement that triggered one has already been dropped when the notice is
/// recorded.
pub enum RuntimeNotice {
    /// Called an actor that has no definition, pattern case or fallback.
    UnknownActor {
        /// The name of the actor.
        name:   String,
        /// The source line of the call.
        line:   usize,
        /// The source column of the call.
        column: usize,
    },
    /// Called a name that is bound to a plain value instead of an actor.
    NotAnActor {
        /// The name that was called.
        name:   String,
        /// The source line of the call.
        line:   usize,
        /// The source column of the call.
        column: usize,
    },
    /// No pattern case matched and the actor has no fallback commands.
    Unmatched {
        /// The actor that received the message.
        actor:   String,
        /// The rendered message.
        message: String,
        /// The source line of the call.
        line:    usize,
        /// The source column of the call.
        column:  usize,
    },
    /// A statement whose shape has no meaning where it was executed.
    MalformedStatement {
        /// Why the statement was rejected.
        details: String,
        /// The source line of the statement.
        line:    usize,
        /// The source column of the statement.
        column:  usize,
    },
    /// A call repeated a signature that is already active on the call stack.
    RecursionSuppressed {
        /// The actor that would have been re-entered.
        actor:   String,
        /// The rendered message.
        message: String,
        /// The source line of the call.
        line:    usize,
        /// The source column of the call.
        column:  usize,
    },
}

impl RuntimeNotice {
    /// The source line of the statement that caused the notice.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownActor { line, .. }
            | Self::NotAnActor { line, .. }
            | Self::Unmatched { line, .. }
            | Self::MalformedStatement { line, .. }
            | Self::RecursionSuppressed { line, .. } => *line,
        }
    }

    /// The source column of the statement that caused the notice.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnknownActor { column, .. }
            | Self::NotAnActor { column, .. }
            | Self::Unmatched { column, .. }
            | Self::MalformedStatement { column, .. }
            | Self::RecursionSuppressed { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for RuntimeNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownActor { name, line, column } => {
                write!(f, "Notice on line {line}, column {column}: Unknown actor '@{name}'.")
            },
            Self::NotAnActor { name, line, column } => write!(f,
                                                              "Notice on line {line}, column {column}: '{name}' holds a value, not an actor."),
            Self::Unmatched { actor,
                              message,
                              line,
                              column, } => write!(f,
                                                  "Notice on line {line}, column {column}: No pattern of '@{actor}' matches {message}."),
            Self::MalformedStatement { details,
                                       line,
                                       column, } => {
                write!(f, "Notice on line {line}, column {column}: Malformed statement: {details}.")
            },
            Self::RecursionSuppressed { actor,
                                        message,
                                        line,
                                        column, } => write!(f,
                                                            "Notice on line {line}, column {column}: Recursive call to '@{actor}' with {message} suppressed."),
        }
    }
}

impl std::error::Error for RuntimeNotice {}
