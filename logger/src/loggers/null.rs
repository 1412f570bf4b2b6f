use std::convert::Infallible;

use crate::Emitter;

/// Discards every message.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullEmitter {}

impl NullEmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Emitter for NullEmitter {
    type Error = Infallible;

    fn emit(&mut self, _message: &str) -> Result<(), Infallible> {
        Ok(())
    }
}
