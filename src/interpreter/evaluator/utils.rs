use log::{debug, warn};

use crate::{
    ast::{Data, Position},
    error::RuntimeNotice,
    interpreter::{
        evaluator::{actor::SELF, core::Interpreter, sink::EffectSink},
        value::core::Value,
    },
};

/// Renders an optional message for notices and logs.
///
/// # Example
/// ```
/// use arrow::interpreter::{evaluator::utils::describe_message, value::core::Value};
///
/// assert_eq!(describe_message(Some(&Value::from("x"))), "\"x\"");
/// assert_eq!(describe_message(None), "no message");
/// ```
#[must_use]
pub fn describe_message(message: Option<&Value>) -> String {
    message.map_or_else(|| "no message".to_string(), Value::describe)
}

impl<S: EffectSink> Interpreter<S> {
    /// Evaluates data to a single value.
    ///
    /// - A string literal evaluates to its text.
    /// - A bound identifier evaluates to its value. `true` and `false`
    ///   evaluate to booleans unless bound; any other unbound identifier
    ///   evaluates to its own name.
    /// - `@name` evaluates to an actor reference; `@self` refers to the
    ///   actor currently running.
    /// - A block literal evaluates to an unevaluated code block.
    /// - `any` evaluates to the current message.
    ///
    /// # Returns
    /// The value, or `None` for `any` when there is no current message.
    pub fn eval_data(&self, data: &Data) -> Option<Value> {
        match data {
            Data::String(text) => Some(Value::String(text.clone())),
            Data::Identifier(name) => Some(self.eval_identifier(name)),
            Data::ActorRef(name) => {
                let name = match self.frames.last() {
                    Some(frame) if name == SELF => frame.actor.clone(),
                    _ => name.clone(),
                };
                Some(Value::ActorRef(name))
            },
            Data::Block(program) => Some(Value::from(program.clone())),
            Data::Any => self.frames
                             .last()
                             .and_then(|frame| frame.message.clone()),
        }
    }

    fn eval_identifier(&self, name: &str) -> Value {
        if let Some(value) = self.state.env.get(name) {
            return value;
        }

        match name {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            _ => {
                debug!("'{name}' is unbound, using it as a symbol");
                Value::String(name.to_string())
            },
        }
    }

    /// Records a notice and logs it.
    pub(in crate::interpreter::evaluator) fn notice(&mut self, notice: RuntimeNotice) {
        warn!("{notice}");
        self.notices.push(notice);
    }

    /// Records a `MalformedStatement` notice.
    pub(in crate::interpreter::evaluator) fn malformed(&mut self,
                                                       details: &str,
                                                       position: Position) {
        self.notice(RuntimeNotice::MalformedStatement { details: details.to_string(),
                                                        line:    position.line,
                                                        column:  position.column, });
    }
}
