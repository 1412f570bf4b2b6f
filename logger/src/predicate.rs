//! Message predicates used to filter emitters.

use serde::{Deserialize, Serialize};

/// Decides whether a message should be emitted.
///
/// Implemented for every `Fn(&str) -> bool`, so closures and function
/// pointers can be used directly.
pub trait Predicate {
    /// Return `true` if `message` should be forwarded.
    fn test(&self, message: &str) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool + ?Sized,
{
    fn test(&self, message: &str) -> bool {
        self(message)
    }
}

/// Accepts messages starting with any of a set of prefixes.
///
/// A filter with no prefixes rejects everything.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixFilter {
    #[serde(default)]
    prefixes: Vec<String>,
}

impl PrefixFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter accepting only messages that start with `prefix`.
    pub fn starts_with(prefix: impl Into<String>) -> Self {
        Self::default().with_prefix(prefix)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Predicate for PrefixFilter {
    fn test(&self, message: &str) -> bool {
        self.prefixes.iter().any(|p| message.starts_with(p.as_str()))
    }
}
