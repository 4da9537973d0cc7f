//! Input combinations of a logic function.

use std::cmp::Ordering;
use std::fmt;

/// A single input combination, either required (the function must be 1)
/// or a don't-care (the function may take any value).
///
/// The population count is computed once at construction.
#[derive(Debug, Copy, Clone)]
pub struct Minterm {
    value: u32,
    dont_care: bool,
    bit_count: u32,
}

impl Minterm {
    /// Creates a required minterm.
    pub fn new(value: u32) -> Self {
        Minterm {
            value,
            dont_care: false,
            bit_count: value.count_ones(),
        }
    }

    /// Creates a don't-care minterm.
    pub fn dont_care(value: u32) -> Self {
        Minterm {
            dont_care: true,
            ..Minterm::new(value)
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_dont_care(&self) -> bool {
        self.dont_care
    }

    /// Number of ones in the value.
    pub fn bit_count(&self) -> u32 {
        self.bit_count
    }
}

// Minterms are compared by value only; the don't-care flag is an attribute.
impl PartialEq for Minterm {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Minterm {}

impl PartialOrd for Minterm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minterm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Minterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dont_care {
            write!(f, "d{}", self.value)
        } else {
            write!(f, "m{}", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minterm() {
        let m = Minterm::new(0b1011);
        assert_eq!(m.value(), 11);
        assert_eq!(m.bit_count(), 3);
        assert!(!m.is_dont_care());
        assert_eq!(m.to_string(), "m11");

        let d = Minterm::dont_care(4);
        assert!(d.is_dont_care());
        assert_eq!(d.bit_count(), 1);
        assert_eq!(d.to_string(), "d4");
    }

    #[test]
    fn test_ordering_by_value() {
        let mut v = vec![Minterm::new(5), Minterm::dont_care(1), Minterm::new(3)];
        v.sort();
        let values: Vec<_> = v.iter().map(|m| m.value()).collect();
        assert_eq!(values, vec![1, 3, 5]);
        assert_eq!(Minterm::new(7), Minterm::dont_care(7));
    }
}
