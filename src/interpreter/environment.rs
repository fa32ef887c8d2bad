use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Data, Statement},
    interpreter::value::{
        core::Value,
        pattern::{PatternCase, PatternTable},
    },
};

/// The mutable name → value store of one run.
///
/// Besides plain bindings, the environment keeps a pattern table and a list
/// of fallback commands per actor name. Both only ever grow: defining an
/// actor again appends to what is already there.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    patterns:  HashMap<String, PatternTable>,
    fallbacks: HashMap<String, Vec<Statement>>,
}

/// A read-only view of everything registered for one actor.
#[derive(Debug, Clone, Copy)]
pub struct Actor<'a> {
    /// The actor's name.
    pub name:       &'a str,
    /// The stored definition, if the actor was defined by assigning a block.
    pub definition: Option<&'a Value>,
    /// Pattern cases, in registration order.
    pub cases:      &'a [PatternCase],
    /// Fallback commands, in registration order.
    pub fallbacks:  &'a [Statement],
}

impl Actor<'_> {
    /// The value bound to `self` while the actor runs: its stored definition,
    /// or a reference to it when it has none.
    #[must_use]
    pub fn self_value(&self) -> Value {
        self.definition
            .cloned()
            .unwrap_or_else(|| Value::ActorRef(self.name.to_string()))
    }
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `name`.
    ///
    /// Returns the plain binding when there is one, otherwise the actor's
    /// pattern table when cases have been registered under that name.
    ///
    /// # Example
    /// ```
    /// use arrow::{
    ///     ast::Data,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set("greeting", Value::from("hi"));
    /// env.register_pattern_case("actor", Data::String("stop".into()), Vec::new());
    ///
    /// assert_eq!(env.get("greeting"), Some(Value::from("hi")));
    /// assert!(matches!(env.get("actor"), Some(Value::PatternTable(_))));
    /// assert_eq!(env.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }

        self.patterns
            .get(name)
            .filter(|table| !table.is_empty())
            .map(|table| Value::PatternTable(Rc::new(table.clone())))
    }

    /// The plain binding of `name`, without falling back to pattern tables.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Appends a pattern case to the table of `actor`, creating the table on
    /// first use.
    pub fn register_pattern_case(&mut self,
                                 actor: impl Into<String>,
                                 key: Data,
                                 actions: Vec<Statement>) {
        self.patterns
            .entry(actor.into())
            .or_default()
            .push(PatternCase::new(key, actions));
    }

    /// Appends a fallback command to the list of `actor`.
    pub fn register_fallback(&mut self, actor: impl Into<String>, statement: Statement) {
        self.fallbacks
            .entry(actor.into())
            .or_default()
            .push(statement);
    }

    /// Returns everything registered for `name`, or `None` if `name` is not
    /// an actor.
    ///
    /// A name counts as an actor once it has pattern cases, fallback commands
    /// or a block bound to it.
    #[must_use]
    pub fn actor<'a>(&'a self, name: &'a str) -> Option<Actor<'a>> {
        let definition = self.values
                             .get(name)
                             .filter(|value| matches!(value, Value::CodeBlock(_)));
        let cases = self.patterns
                        .get(name)
                        .map_or(&[][..], |table| &table.cases[..]);
        let fallbacks = self.fallbacks.get(name).map_or(&[][..], Vec::as_slice);

        if definition.is_none() && cases.is_empty() && fallbacks.is_empty() {
            return None;
        }

        Some(Actor { name,
                     definition,
                     cases,
                     fallbacks })
    }

    /// Every bound or registered name, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values
                                       .keys()
                                       .chain(self.patterns.keys())
                                       .chain(self.fallbacks.keys())
                                       .map(String::as_str)
                                       .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Returns `true` if nothing has been bound or registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.patterns.is_empty() && self.fallbacks.is_empty()
    }

    /// Puts a saved binding back, removing `name` when there was none.
    ///
    /// Used to restore `it` and `self` when an actor call returns.
    pub(crate) fn restore(&mut self, name: &str, saved: Option<Value>) {
        match saved {
            Some(value) => {
                self.values.insert(name.to_string(), value);
            },
            None => {
                self.values.remove(name);
            },
        }
    }
}
