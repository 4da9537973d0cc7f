//! Type-safe wrappers for implicant handles and literals.
//!
//! Expression trees never own implicants. They refer to them through
//! [`ImplicantId`], an index into the implicant arena of the function
//! being reduced, so a tree can never outlive the data it points to
//! in a way the compiler cannot see.
use std::fmt;

use crate::utils::{implicant_label, literal_name};

/// Index of an implicant inside its function's arena.
///
/// # Invariants
///
/// - Ids are only meaningful for the function that issued them
/// - Ids are stable once essential filtering has run
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ImplicantId(usize);

impl ImplicantId {
    /// Creates an id for the given arena slot.
    pub fn new(index: usize) -> Self {
        ImplicantId(index)
    }

    /// Returns the arena slot.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ImplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", implicant_label(self.0))
    }
}

/// An input variable or its complement inside a product term.
///
/// The variable is identified by its truth-table column:
/// column 0 is the leftmost input, i.e. the most significant bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal {
    column: u32,
    negated: bool,
}

impl Literal {
    pub fn new(column: u32, negated: bool) -> Self {
        Literal { column, negated }
    }

    pub fn column(self) -> u32 {
        self.column
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }

    pub fn name(self) -> char {
        literal_name(self.column)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), if self.negated { "'" } else { "" })
    }
}
