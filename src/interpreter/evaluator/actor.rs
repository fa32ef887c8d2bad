use std::collections::HashSet;

use log::debug;

use crate::{
    ast::{Data, Position, Statement},
    error::RuntimeNotice,
    interpreter::{
        evaluator::{
            core::{Frame, Interpreter, Task},
            sink::EffectSink,
            utils::describe_message,
        },
        value::core::Value,
    },
};

/// Name of the builtin actor that emits its message.
pub const PRINT: &str = "print";
/// Name that refers to the actor currently running.
pub const SELF: &str = "self";
/// Binding that holds the current message inside an actor.
pub const IT: &str = "it";

impl<S: EffectSink> Interpreter<S> {
    /// Sends a message to an actor.
    ///
    /// `@print` emits the message to the sink, an absent message as the empty
    /// string. Any other actor is resolved, checked against the call stack
    /// and, when the call may proceed, the callee's frame is entered and the
    /// selected actions are spliced onto the queue followed by a
    /// [`Task::Return`]. A call that selects nothing leaves the frame again
    /// right away.
    pub(in crate::interpreter::evaluator) fn execute_send(&mut self,
                                                          data: Option<&Data>,
                                                          actor: &str,
                                                          position: Position) {
        let message = data.and_then(|data| self.eval_data(data));

        if actor == PRINT {
            let value = message.unwrap_or_else(|| Value::from(""));
            debug!("printing {}", value.describe());
            self.sink.emit(&value);
            return;
        }

        let Some(actor) = self.resolve_actor(actor, position) else {
            return;
        };

        if self.frames
               .iter()
               .any(|frame| frame.actor == actor && frame.message == message)
        {
            self.notice(RuntimeNotice::RecursionSuppressed { actor,
                                                             message: describe_message(message.as_ref()),
                                                             line: position.line,
                                                             column: position.column });
            return;
        }

        let origin = self.message_origin(data);
        self.enter_frame(actor.clone(), message.clone(), origin);

        let Some(actions) = self.select_actions(&actor, message.as_ref()) else {
            self.exit_frame();
            self.notice(RuntimeNotice::Unmatched { actor,
                                                   message: describe_message(message.as_ref()),
                                                   line: position.line,
                                                   column: position.column });
            return;
        };

        self.splice(actions.into_iter()
                           .map(Task::Run)
                           .chain(std::iter::once(Task::Return)));
    }

    /// Resolves the name an actor call was written with to the name the
    /// actor is registered under.
    ///
    /// `self` names the actor currently running. A name bound to an actor
    /// reference is followed until a registered actor is found; a cycle of
    /// references ends the search.
    ///
    /// # Returns
    /// The resolved name, or `None` after recording a notice.
    pub(in crate::interpreter::evaluator) fn resolve_actor(&mut self,
                                                           name: &str,
                                                           position: Position)
                                                           -> Option<String> {
        let mut current = name.to_string();
        let mut visited = HashSet::new();

        loop {
            if current == SELF {
                if let Some(frame) = self.frames.last() {
                    current = frame.actor.clone();
                }
            }

            if self.state.env.actor(&current).is_some() {
                return Some(current);
            }

            if !visited.insert(current.clone()) {
                break;
            }

            match self.state.env.binding(&current) {
                Some(Value::ActorRef(target)) => {
                    debug!("following @{current} to @{target}");
                    current = target.clone();
                },
                Some(_) => {
                    self.notice(RuntimeNotice::NotAnActor { name:   current,
                                                            line:   position.line,
                                                            column: position.column, });
                    return None;
                },
                None => break,
            }
        }

        self.notice(RuntimeNotice::UnknownActor { name:   name.to_string(),
                                                  line:   position.line,
                                                  column: position.column, });
        None
    }

    /// Picks the statements an actor runs for `message`.
    ///
    /// Pattern cases are tried in registration order and the first whose key
    /// equals the message wins; an `any` key matches every message,
    /// including an absent one. Without a match the fallback commands run.
    ///
    /// Keys are evaluated inside the callee's frame, so `it` and `self` in a
    /// key refer to the incoming message and the callee.
    ///
    /// # Returns
    /// The statements to run, or `None` if nothing matched and the actor has
    /// no fallbacks.
    fn select_actions(&self, actor: &str, message: Option<&Value>) -> Option<Vec<Statement>> {
        let view = self.state.env.actor(actor)?;

        for case in view.cases {
            let matched = case.is_wildcard()
                          || message.is_some_and(|message| {
                                        self.eval_data(&case.key).as_ref() == Some(message)
                                    });

            if matched {
                debug!("@{actor} matched {} on {}", case.key, describe_message(message));
                return Some(case.actions.clone());
            }
        }

        if view.fallbacks.is_empty() {
            return None;
        }

        debug!("@{actor} runs {} fallback commands for {}",
               view.fallbacks.len(),
               describe_message(message));
        Some(view.fallbacks.to_vec())
    }

    /// The variable a message was read from, written through by `> any`.
    ///
    /// Forwarding the current message with `any` keeps the origin of the
    /// call that received it.
    fn message_origin(&self, data: Option<&Data>) -> Option<String> {
        match data? {
            Data::Identifier(name) => Some(name.clone()),
            Data::Any => self.frames.last()?.origin.clone(),
            _ => None,
        }
    }

    /// Pushes a call frame and binds `it` and `self` for the callee.
    fn enter_frame(&mut self, actor: String, message: Option<Value>, origin: Option<String>) {
        let env = &mut self.state.env;
        let saved_it = env.binding(IT).cloned();
        let saved_self = env.binding(SELF).cloned();
        let self_value = env.actor(&actor)
                            .map_or_else(|| Value::ActorRef(actor.clone()), |view| view.self_value());

        debug!("entering @{actor} with {}", describe_message(message.as_ref()));

        env.restore(IT, message.clone());
        env.set(SELF, self_value);

        self.frames.push(Frame { actor,
                                 message,
                                 origin,
                                 saved_it,
                                 saved_self });
    }

    /// Pops the innermost call frame and restores the caller's `it` and
    /// `self`.
    pub(in crate::interpreter::evaluator) fn exit_frame(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };

        debug!("leaving @{}", frame.actor);
        self.state.env.restore(IT, frame.saved_it);
        self.state.env.restore(SELF, frame.saved_self);
    }
}
