use std::{fmt, rc::Rc};

use crate::{
    ast::{self, Program},
    interpreter::value::pattern::PatternTable,
};

/// Represents a runtime value in the interpreter.
///
/// Every piece of data evaluates to exactly one `Value`. Values compare
/// structurally; code blocks compare by the shape of their program.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, either from a string literal or from an unbound identifier.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// A reference to an actor, stored without the `@` sigil.
    ActorRef(String),
    /// A block literal, kept unevaluated.
    CodeBlock(Rc<Program>),
    /// The pattern cases registered for an actor.
    PatternTable(Rc<PatternTable>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Program> for Value {
    fn from(program: Program) -> Self {
        Self::CodeBlock(Rc::new(program))
    }
}

impl Value {
    /// Renders the value for diagnostics, quoting strings.
    ///
    /// # Example
    /// ```
    /// use arrow::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("stop").describe(), "\"stop\"");
    /// assert_eq!(Value::ActorRef("print".into()).describe(), "@print");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::String(text) => {
                let mut out = String::new();
                // Writing into a String cannot fail.
                let _ = ast::write_string_literal(&mut out, text);
                out
            },
            other => other.to_string(),
        }
    }

    /// The name of the value's type, for log output.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::ActorRef(_) => "actor reference",
            Self::CodeBlock(_) => "code block",
            Self::PatternTable(_) => "pattern table",
        }
    }
}

/// Renders the value the way `print` emits it: strings without quotes,
/// blocks in canonical source form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => f.write_str(text),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::ActorRef(name) => write!(f, "@{name}"),
            Self::CodeBlock(program) => ast::write_block(f, program, 0),
            Self::PatternTable(table) => write!(f, "{table}"),
        }
    }
}
