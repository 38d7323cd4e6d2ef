//! Primary failure with the secondary failures captured after it

use std::fmt;

/// A primary declared failure plus any failures suppressed during cleanup.
///
/// Secondary failures are kept in the order they were recorded. None of
/// them is ever dropped: translating a `Failure` carries the whole set into
/// the ambient [`Error`](super::Error).
#[derive(Debug)]
pub struct Failure<E> {
    primary: E,
    suppressed: Vec<E>,
}

impl<E> Failure<E> {
    /// Create a failure set with no suppressed failures
    pub fn new(primary: E) -> Self {
        Self {
            primary,
            suppressed: Vec::new(),
        }
    }

    /// Attach a secondary failure
    pub fn add_suppressed(&mut self, failure: E) {
        self.suppressed.push(failure);
    }

    /// Record a failure: the first one becomes primary, later ones are suppressed
    pub fn record(slot: &mut Option<Self>, failure: E) {
        match slot {
            Some(existing) => existing.add_suppressed(failure),
            None => *slot = Some(Self::new(failure)),
        }
    }

    pub fn primary(&self) -> &E {
        &self.primary
    }

    pub fn suppressed(&self) -> &[E] {
        &self.suppressed
    }

    /// Split into the primary failure and its suppressed set
    pub fn into_parts(self) -> (E, Vec<E>) {
        (self.primary, self.suppressed)
    }

    pub fn into_primary(self) -> E {
        self.primary
    }
}

impl<E> From<E> for Failure<E> {
    fn from(primary: E) -> Self {
        Self::new(primary)
    }
}

impl<E: fmt::Display> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if !self.suppressed.is_empty() {
            write!(f, " ({} suppressed)", self.suppressed.len())?;
        }
        Ok(())
    }
}

impl<E> std::error::Error for Failure<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.primary)
    }
}
