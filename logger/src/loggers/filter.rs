use log::{debug, trace};

use crate::{Emitter, EmitterError, Predicate};

/// An emitter that forwards only the messages its predicate accepts.
///
/// Rejected messages are dropped silently and reported as success. Errors
/// from the wrapped emitter are returned as they are.
#[derive(Clone, Debug)]
pub struct FilteredEmitter<E, P> {
    next_emitter: E,
    predicate: P,
}

impl<E, P> Emitter for FilteredEmitter<E, P>
where
    E: Emitter,
    P: Predicate,
{
    type Error = E::Error;

    fn emit(&mut self, message: &str) -> Result<(), Self::Error> {
        if self.predicate.test(message) {
            self.next_emitter.emit(message)
        } else {
            trace!("message rejected by filter");
            Ok(())
        }
    }
}

impl<E, P> FilteredEmitter<E, P> {
    pub fn new(emitter: E, predicate: P) -> Self {
        Self {
            next_emitter: emitter,
            predicate,
        }
    }

    /// Build a filtered emitter from parts that may be missing.
    ///
    /// The emitter is checked before the predicate.
    pub fn try_new(emitter: Option<E>, predicate: Option<P>) -> Result<Self, EmitterError> {
        let composed = match (emitter, predicate) {
            (Some(emitter), Some(predicate)) => Ok(Self::new(emitter, predicate)),
            (None, _) => Err(EmitterError::InvalidArgument("base emitter")),
            (_, None) => Err(EmitterError::InvalidArgument("predicate")),
        };
        composed.inspect_err(|e| debug!("cannot compose filtered emitter: {e}"))
    }

    pub fn get_ref(&self) -> &E {
        &self.next_emitter
    }

    pub fn get_mut(&mut self) -> &mut E {
        &mut self.next_emitter
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Unwrap the filter, returning the wrapped emitter.
    pub fn into_inner(self) -> E {
        self.next_emitter
    }

    pub fn into_parts(self) -> (E, P) {
        (self.next_emitter, self.predicate)
    }
}

/// Wrap `emitter` with `predicate`, failing if either is absent.
pub fn with_filter<E, P>(
    emitter: Option<E>,
    predicate: Option<P>,
) -> Result<FilteredEmitter<E, P>, EmitterError>
where
    E: Emitter,
    P: Predicate,
{
    FilteredEmitter::try_new(emitter, predicate)
}
