use std::rc::Rc;

use log::debug;

use crate::{
    ast::{Data, Position, Program, Slot, Statement},
    interpreter::{
        evaluator::{
            core::{Interpreter, Task},
            sink::EffectSink,
        },
        value::core::Value,
    },
};

impl<S: EffectSink> Interpreter<S> {
    /// Executes a single statement popped from the queue.
    ///
    /// Blocks are spliced onto the queue, assignments bind values and sends
    /// call actors. Pattern cases only take effect as part of a block that
    /// defines an actor; one reaching the queue on its own is dropped with a
    /// notice.
    pub(in crate::interpreter::evaluator) fn execute(&mut self, statement: Statement) {
        match statement {
            Statement::Block { body, .. } => {
                self.splice(body.statements.into_iter().map(Task::Run));
            },
            Statement::PatternDef { position, .. } => {
                self.malformed("pattern case outside of an actor definition", position);
            },
            Statement::Assign { data,
                                slot,
                                position, } => self.execute_assign(data, slot, position),
            Statement::Send { data,
                              actor,
                              position, } => self.execute_send(data.as_ref(), &actor, position),
        }
    }

    /// Executes an assignment.
    ///
    /// A block assigned to a name defines an actor; any other data is
    /// evaluated and bound. A `> any` target writes through to the variable
    /// the current message was read from.
    fn execute_assign(&mut self, data: Option<Data>, slot: Slot, position: Position) {
        let Some(data) = data else {
            self.malformed("assignment without data", position);
            return;
        };

        let name = match slot {
            Slot::Name(name) => name,
            Slot::Any => match self.frames.last().and_then(|frame| frame.origin.clone()) {
                Some(origin) => origin,
                None => {
                    self.malformed("'any' target without a variable message", position);
                    return;
                },
            },
        };

        let value = match data {
            Data::Block(program) => Value::from(program),
            other => match self.eval_data(&other) {
                Some(value) => value,
                None => {
                    self.malformed("'any' has no message outside of an actor", position);
                    return;
                },
            },
        };

        match value {
            Value::CodeBlock(program) => self.define_actor(name, program),
            value => {
                debug!("assigning {} {} to '{name}'", value.type_name(), value.describe());
                self.state.env.set(name, value);
            },
        }
    }

    /// Defines `name` as an actor from a block literal.
    ///
    /// The block is stored unevaluated, whether it was written literally or
    /// read from another variable. Its pattern definitions join the
    /// actor's pattern table and every other statement becomes a fallback
    /// command; both append to what an earlier definition registered.
    pub(in crate::interpreter::evaluator) fn define_actor(&mut self,
                                                          name: String,
                                                          program: Rc<Program>) {
        debug!("defining actor @{name} with {} statements", program.len());

        for statement in &program.statements {
            match statement {
                Statement::PatternDef { key, actions, .. } => {
                    debug!("registering pattern case {key} => ... for @{name}");
                    self.state
                        .env
                        .register_pattern_case(name.as_str(), key.clone(), actions.clone());
                },
                other => {
                    debug!("registering fallback `{other}` for @{name}");
                    self.state
                        .env
                        .register_fallback(name.as_str(), other.clone());
                },
            }
        }

        self.state.env.set(name, Value::CodeBlock(program));
    }
}
