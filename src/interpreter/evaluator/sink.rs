use std::io::Write;

use log::error;

use crate::interpreter::value::core::Value;

/// Consumes the values emitted by `@print`, in emission order.
pub trait EffectSink {
    /// Receives one emitted value.
    fn emit(&mut self, value: &Value);
}

/// Collects every emitted value.
impl EffectSink for Vec<Value> {
    fn emit(&mut self, value: &Value) {
        self.push(value.clone());
    }
}

impl<S: EffectSink + ?Sized> EffectSink for &mut S {
    fn emit(&mut self, value: &Value) {
        (**self).emit(value);
    }
}

/// Writes each emitted value on its own line.
///
/// # Example
/// ```
/// use arrow::interpreter::{
///     evaluator::sink::{ConsoleSink, EffectSink},
///     value::core::Value,
/// };
///
/// let mut sink = ConsoleSink::new(Vec::<u8>::new());
/// sink.emit(&Value::from("hello"));
/// sink.emit(&Value::from(true));
///
/// assert_eq!(sink.into_inner(), b"hello\ntrue\n");
/// ```
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EffectSink for ConsoleSink<W> {
    fn emit(&mut self, value: &Value) {
        if let Err(e) = writeln!(self.writer, "{value}").and_then(|()| self.writer.flush()) {
            error!("failed to write printed value: {e}");
        }
    }
}
