//! Emitters backed by closures.

use std::{fmt, marker::PhantomData};

use crate::Emitter;

/// Emitter calling a closure for every message. Created by [`from_fn`].
pub struct FnEmitter<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Turn `f` into an [`Emitter`].
///
/// ```
/// use logger::{Emitter, loggers::func::from_fn};
///
/// let mut lines = Vec::new();
/// let mut emitter = from_fn(|m: &str| {
///     lines.push(m.len());
///     Ok::<_, std::convert::Infallible>(())
/// });
/// emitter.emit("four").unwrap();
/// drop(emitter);
/// assert_eq!(lines, [4]);
/// ```
pub fn from_fn<F, E>(f: F) -> FnEmitter<F, E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    FnEmitter {
        f,
        _error: PhantomData,
    }
}

impl<F, E> Emitter for FnEmitter<F, E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    type Error = E;

    fn emit(&mut self, message: &str) -> Result<(), E> {
        (self.f)(message)
    }
}

impl<F, E> fmt::Debug for FnEmitter<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEmitter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_error_is_returned_as_is() {
        let mut emitter = from_fn(|m: &str| if m.is_empty() { Err("empty") } else { Ok(()) });
        assert_eq!(emitter.emit("fine"), Ok(()));
        assert_eq!(emitter.emit(""), Err("empty"));
    }
}
