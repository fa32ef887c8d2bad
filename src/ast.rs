use std::fmt;

/// A 1-based line/column location in the outermost source text.
///
/// Statements parsed from inside block literals keep positions relative to
/// the file they came from, not to the block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An ordered sequence of statements.
///
/// Used for the whole source file as well as for the body of every block
/// literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Wraps a list of statements.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Returns `true` if the program has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of top-level statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// How deeply block literals nest inside this program.
    ///
    /// A program without any block literal has depth 0.
    ///
    /// # Example
    /// ```
    /// use arrow::parse_source;
    ///
    /// let program = parse_source("{ { \"x\" > y; } > inner; } > outer;").unwrap();
    /// assert_eq!(program.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        self.statements
            .iter()
            .map(Statement::depth)
            .max()
            .unwrap_or(0)
    }
}

/// The data half of a command: what gets assigned or sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// A string literal, escapes already decoded.
    String(String),
    /// A block literal, parsed into its own program.
    Block(Program),
    /// A plain name, resolved against the environment at run time.
    Identifier(String),
    /// An `@name` reference, stored without the sigil.
    ActorRef(String),
    /// The `any` keyword.
    Any,
}

impl Data {
    fn depth(&self) -> usize {
        match self {
            Self::Block(program) => program.depth() + 1,
            _ => 0,
        }
    }
}

/// Where an assignment stores its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A named binding.
    Name(String),
    /// The variable the triggering message was read from. Only valid inside
    /// pattern-case actions.
    Any,
}

/// A single statement, classified at parse time.
///
/// Equality compares the shape only; source positions are ignored so that
/// programs parsed from different texts can be compared structurally.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `data > name`, `data > any` or `> name`.
    Assign {
        /// The value to store, if any was written.
        data:     Option<Data>,
        /// The target of the assignment.
        slot:     Slot,
        /// Location of the first token.
        position: Position,
    },
    /// `data > @actor` or `> @actor`.
    Send {
        /// The message, if any was written.
        data:     Option<Data>,
        /// The receiving actor, without the sigil.
        actor:    String,
        /// Location of the first token.
        position: Position,
    },
    /// `key => action (=> action)*`.
    PatternDef {
        /// The pattern key compared against incoming messages.
        key:      Data,
        /// The actions run on a match, in order. Always `Assign` or `Send`.
        actions:  Vec<Self>,
        /// Location of the key.
        position: Position,
    },
    /// A sequence of statements run in order.
    Block {
        /// The statements of the block.
        body:     Program,
        /// Location of the block.
        position: Position,
    },
}

impl Statement {
    /// Gets the source position of `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Assign { position, .. }
            | Self::Send { position, .. }
            | Self::PatternDef { position, .. }
            | Self::Block { position, .. } => *position,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::Assign { data, .. } | Self::Send { data, .. } => {
                data.as_ref().map_or(0, Data::depth)
            },
            Self::PatternDef { key, actions, .. } => {
                actions.iter()
                       .map(Self::depth)
                       .chain(std::iter::once(key.depth()))
                       .max()
                       .unwrap_or(0)
            },
            Self::Block { body, .. } => body.depth(),
        }
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Assign { data: a, slot: s, .. }, Self::Assign { data: b, slot: t, .. }) => {
                a == b && s == t
            },
            (Self::Send { data: a, actor: x, .. }, Self::Send { data: b, actor: y, .. }) => {
                a == b && x == y
            },
            (Self::PatternDef { key: k, actions: a, .. },
             Self::PatternDef { key: l, actions: b, .. }) => k == l && a == b,
            (Self::Block { body: a, .. }, Self::Block { body: b, .. }) => a == b,
            _ => false,
        }
    }
}

const INDENT: &str = "    ";

/// Writes `text` as a string literal that lexes back to the same contents.
pub(crate) fn write_string_literal(f: &mut impl fmt::Write, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in text.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

/// Writes `{`, the indented body and `}`. An empty body renders as `{}`.
pub(crate) fn write_block(f: &mut fmt::Formatter<'_>, body: &Program, depth: usize) -> fmt::Result {
    if body.is_empty() {
        return f.write_str("{}");
    }

    f.write_str("{\n")?;
    write_program(f, body, depth + 1)?;
    write!(f, "{}}}", INDENT.repeat(depth))
}

fn write_program(f: &mut fmt::Formatter<'_>, program: &Program, depth: usize) -> fmt::Result {
    for statement in &program.statements {
        if let Statement::Block { body, .. } = statement {
            write_program(f, body, depth)?;
        } else {
            f.write_str(&INDENT.repeat(depth))?;
            write_statement(f, statement, depth)?;
            f.write_str(";\n")?;
        }
    }
    Ok(())
}

fn write_data(f: &mut fmt::Formatter<'_>, data: &Data, depth: usize) -> fmt::Result {
    match data {
        Data::String(text) => write_string_literal(f, text),
        Data::Block(body) => write_block(f, body, depth),
        Data::Identifier(name) => f.write_str(name),
        Data::ActorRef(name) => write!(f, "@{name}"),
        Data::Any => f.write_str("any"),
    }
}

fn write_command(f: &mut fmt::Formatter<'_>,
                 data: Option<&Data>,
                 target: &str,
                 depth: usize)
                 -> fmt::Result {
    if let Some(data) = data {
        write_data(f, data, depth)?;
        f.write_str(" ")?;
    }
    write!(f, "> {target}")
}

pub(crate) fn write_statement(f: &mut fmt::Formatter<'_>,
                              statement: &Statement,
                              depth: usize)
                              -> fmt::Result {
    match statement {
        Statement::Assign { data, slot, .. } => {
            let target = match slot {
                Slot::Name(name) => name.as_str(),
                Slot::Any => "any",
            };
            write_command(f, data.as_ref(), target, depth)
        },
        Statement::Send { data, actor, .. } => {
            write_command(f, data.as_ref(), &format!("@{actor}"), depth)
        },
        Statement::PatternDef { key, actions, .. } => {
            write_data(f, key, depth)?;
            for action in actions {
                f.write_str(" => ")?;
                write_statement(f, action, depth)?;
            }
            Ok(())
        },
        Statement::Block { body, .. } => write_block(f, body, depth),
    }
}

/// Renders the canonical source form: one statement per line, each
/// terminated by `;`, block bodies indented by four spaces.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_program(f, self, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_data(f, self, 0)
    }
}
