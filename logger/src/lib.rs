//! Composable message emitters.
//!
//! An [`Emitter`] accepts a text message and does something with it. Any
//! emitter can be wrapped with a [`Predicate`] to obtain a
//! [`FilteredEmitter`], which only forwards messages the predicate accepts.
//! Filtered emitters are emitters themselves, so filters chain.
//!
//! ```
//! use logger::{Emitter, loggers::collecting::CollectingEmitter};
//!
//! let mut sink = CollectingEmitter::new();
//! let mut info = (&mut sink).with_filter(|m: &str| m.starts_with("INFO"));
//! info.emit("INFO: start").unwrap();
//! info.emit("DEBUG: x").unwrap();
//! assert_eq!(sink.messages(), ["INFO: start"]);
//! ```

pub mod error;
pub mod loggers;
pub mod predicate;

pub use error::EmitterError;
pub use loggers::filter::{FilteredEmitter, with_filter};
pub use predicate::{Predicate, PrefixFilter};

/// Accepts a text message and emits it somewhere.
///
/// Failures of the underlying sink are reported through [`Emitter::Error`]
/// and are never altered by wrappers.
///
/// `emit` takes `&mut self`, so sinks can keep state without interior
/// mutability. The flip side is that one emitter cannot be shared between
/// threads as is, even when the sink underneath (such as `Stdout`) could be.
/// Callers that need that put the emitter behind a `Mutex`; composition adds
/// no locking of its own.
pub trait Emitter {
    type Error;

    fn emit(&mut self, message: &str) -> Result<(), Self::Error>;

    /// Wrap this emitter so that only messages accepted by `predicate` are
    /// forwarded to it.
    fn with_filter<P>(self, predicate: P) -> FilteredEmitter<Self, P>
    where
        Self: Sized,
        P: Predicate,
    {
        FilteredEmitter::new(self, predicate)
    }
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    type Error = E::Error;

    fn emit(&mut self, message: &str) -> Result<(), Self::Error> {
        (**self).emit(message)
    }
}

impl<E: Emitter + ?Sized> Emitter for Box<E> {
    type Error = E::Error;

    fn emit(&mut self, message: &str) -> Result<(), Self::Error> {
        (**self).emit(message)
    }
}
