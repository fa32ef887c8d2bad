use std::fmt;

use crate::ast::{self, Data, Position, Program, Statement};

/// One pattern case of an actor: a key and the actions run when it matches.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternCase {
    /// The key compared against incoming messages. `Data::Any` matches every
    /// message.
    pub key:     Data,
    /// The `Assign`/`Send` statements run, in order, on a match.
    pub actions: Vec<Statement>,
}

impl PatternCase {
    /// Creates a pattern case.
    #[must_use]
    pub const fn new(key: Data, actions: Vec<Statement>) -> Self {
        Self { key, actions }
    }

    /// Returns `true` if the key matches every message.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self.key, Data::Any)
    }

    fn to_statement(&self) -> Statement {
        Statement::PatternDef { key:      self.key.clone(),
                                actions:  self.actions.clone(),
                                position: Position::default(), }
    }
}

/// The ordered pattern cases of one actor.
///
/// Cases are tried in registration order; the table only ever grows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternTable {
    /// Every registered case, oldest first.
    pub cases: Vec<PatternCase>,
}

impl PatternTable {
    /// Appends a case after every case registered so far.
    pub fn push(&mut self, case: PatternCase) {
        self.cases.push(case);
    }

    /// Number of registered cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if no case has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterates over the cases in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternCase> {
        self.cases.iter()
    }
}

/// Renders the table as a block of pattern definitions.
impl fmt::Display for PatternTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = Program::new(self.cases
                                       .iter()
                                       .map(PatternCase::to_statement)
                                       .collect());
        ast::write_block(f, &program, 0)
    }
}
