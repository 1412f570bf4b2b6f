//! An emitter that keeps every message in memory.
//!
//! Useful for tests and for buffering output that is inspected later.

use std::convert::Infallible;

use crate::Emitter;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct CollectingEmitter {
    messages: Vec<String>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl Emitter for CollectingEmitter {
    type Error = Infallible;

    fn emit(&mut self, message: &str) -> Result<(), Infallible> {
        self.messages.push(message.to_owned());
        Ok(())
    }
}
