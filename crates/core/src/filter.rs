//! Structured query predicates for the document store.
//!
//! Handlers never build store-native query strings. They describe what they
//! want as a [`Filter`] - a conjunction of field conditions plus at most one
//! OR-group - and each store adapter translates that into its own query
//! language. Keeping the predicate structured means user-supplied search
//! terms are always treated as literal values, never as query syntax.

/// A single condition on one document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The field equals the value exactly.
    Eq {
        /// Field name.
        field: &'static str,
        /// Value the field must equal.
        value: String,
    },
    /// The field contains the term as a case-insensitive substring.
    Contains {
        /// Field name.
        field: &'static str,
        /// Substring to search for, matched literally.
        term: String,
    },
}

impl Condition {
    /// Exact-equality condition.
    #[must_use]
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self::Eq {
            field,
            value: value.into(),
        }
    }

    /// Case-insensitive substring condition.
    #[must_use]
    pub fn contains(field: &'static str, term: impl Into<String>) -> Self {
        Self::Contains {
            field,
            term: term.into(),
        }
    }
}

/// A query predicate: every `all` condition must hold, and if `any` is
/// non-empty, at least one of its conditions must hold as well.
///
/// An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    all: Vec<Condition>,
    any: Vec<Condition>,
}

impl Filter {
    /// A filter matching all documents.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a condition that must hold.
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.all.push(condition);
        self
    }

    /// Add a group of conditions of which at least one must hold.
    ///
    /// A filter carries at most one OR-group; calling this twice merges the
    /// groups into a single disjunction.
    #[must_use]
    pub fn any_of(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.any.extend(conditions);
        self
    }

    /// Conditions that must all hold.
    #[must_use]
    pub fn required(&self) -> &[Condition] {
        &self.all
    }

    /// Conditions of which at least one must hold (empty means unconstrained).
    #[must_use]
    pub fn alternatives(&self) -> &[Condition] {
        &self.any
    }

    /// Returns true if the filter has no conditions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.any.is_empty()
    }
}
