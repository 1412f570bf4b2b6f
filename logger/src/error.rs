use thiserror::Error;

/// Errors raised while composing emitters.
///
/// Sink failures are not represented here; they keep the error type of
/// the emitter that produced them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),
}
