//! Relation loading state.
//!
//! Repositories decide whether a relation is fetched eagerly; presenters
//! only consult the recorded outcome. [`Rel`] makes that outcome explicit
//! on the view type, so a presenter's embed decision is a plain pattern
//! match instead of a dynamic attribute-presence check, and a presenter can
//! never trigger an on-demand fetch (the N+1 pattern the gate exists to
//! prevent).

/// Per-instance, per-relation loading gate.
///
/// `Loaded(None)` covers the case where the relation was fetched but the
/// target row no longer exists (e.g. deleted out from under a dangling
/// foreign key); callers must treat it as "present but empty", never as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rel<T> {
    /// The relation was not eagerly fetched; nothing is known about it.
    NotLoaded,
    /// The relation was fetched; the target row may or may not exist.
    Loaded(Option<T>),
}

impl<T> Rel<T> {
    /// Wrap a related record that was found.
    pub fn found(value: T) -> Self {
        Rel::Loaded(Some(value))
    }

    /// Record that the relation was fetched but the target row is gone.
    pub fn missing() -> Self {
        Rel::Loaded(None)
    }

    /// Whether the data-access layer materialized this relation.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Rel::Loaded(_))
    }

    /// The loaded value, if the relation was fetched and the row exists.
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Rel::Loaded(Some(value)) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Rel<U> {
        match self {
            Rel::NotLoaded => Rel::NotLoaded,
            Rel::Loaded(inner) => Rel::Loaded(inner.map(f)),
        }
    }
}

impl<T> Default for Rel<T> {
    fn default() -> Self {
        Rel::NotLoaded
    }
}

impl<T> From<Option<T>> for Rel<T> {
    /// Convert a fetched `Option` (e.g. the nullable side of a LEFT JOIN)
    /// into a loaded gate.
    fn from(value: Option<T>) -> Self {
        Rel::Loaded(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_loaded() {
        let rel: Rel<i32> = Rel::default();
        assert!(!rel.is_loaded());
        assert_eq!(rel.as_loaded(), None);
    }

    #[test]
    fn test_found_is_loaded_with_value() {
        let rel = Rel::found(7);
        assert!(rel.is_loaded());
        assert_eq!(rel.as_loaded(), Some(&7));
    }

    #[test]
    fn test_missing_is_loaded_without_value() {
        let rel: Rel<i32> = Rel::missing();
        assert!(rel.is_loaded());
        assert_eq!(rel.as_loaded(), None);
    }

    #[test]
    fn test_from_option_marks_loaded() {
        assert_eq!(Rel::from(Some(1)), Rel::found(1));
        assert_eq!(Rel::<i32>::from(None), Rel::missing());
    }

    #[test]
    fn test_map_preserves_gate_state() {
        assert_eq!(Rel::found(2).map(|n| n * 10), Rel::found(20));
        assert_eq!(Rel::<i32>::missing().map(|n| n * 10), Rel::missing());
        assert_eq!(Rel::<i32>::NotLoaded.map(|n| n * 10), Rel::NotLoaded);
    }
}
