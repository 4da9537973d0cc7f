//! Implicants: groups of input combinations expressible as one product term.

use std::fmt;

use log::trace;

use crate::minterm::Minterm;
use crate::types::Literal;
use crate::utils::width_mask;

/// A group of `2^k` input combinations that agree on every significant bit.
///
/// The significance mask has a 1 for each input bit that is constant across
/// all covered values and a 0 for each bit that has been generalized away.
/// For example, `m(4,12)` over four inputs has the mask `0111`, because bit 3
/// differs between `4 = 0100` and `12 = 1100`.
///
/// # Invariants
///
/// - `covered` is sorted ascending and duplicate-free
/// - all covered values agree on the bits selected by `mask`
/// - `ones` is the number of ones among the significant bits
#[derive(Debug, Clone)]
pub struct Implicant {
    covered: Vec<u32>,
    mask: u32,
    ones: u32,
    essential: bool,
    name: Option<String>,
}

impl Implicant {
    /// Degenerate implicant made of a single input combination.
    ///
    /// Don't-cares start non-essential: they never need to be covered.
    pub fn from_minterm(minterm: &Minterm, width: u32) -> Self {
        Implicant {
            covered: vec![minterm.value()],
            mask: width_mask(width),
            ones: minterm.bit_count(),
            essential: !minterm.is_dont_care(),
            name: None,
        }
    }

    /// Number of covered input combinations.
    pub fn len(&self) -> usize {
        self.covered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }

    /// Covered values in ascending order.
    pub fn values(&self) -> &[u32] {
        &self.covered
    }

    /// Representative pattern: the smallest covered value.
    pub fn representative(&self) -> u32 {
        self.covered[0]
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn is_essential(&self) -> bool {
        self.essential
    }

    pub fn set_essential(&mut self, essential: bool) {
        self.essential = essential;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Test if the given value is one of the covered combinations.
    pub fn covers(&self, value: u32) -> bool {
        self.covered.binary_search(&value).is_ok()
    }

    /// Test if the product term of this implicant is true for `input`.
    ///
    /// Unlike [`covers`](Self::covers), this works for any input, and agrees
    /// with it on every value in the input domain.
    pub fn matches(&self, input: u32) -> bool {
        (input ^ self.representative()) & self.mask == 0
    }

    /// Try to merge two implicants differing in exactly one significant bit.
    ///
    /// Both must have the same mask and the same size. The result has the
    /// differing bit cleared from its mask, covers the union of both inputs,
    /// and is essential unless both inputs were non-essential.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.mask != other.mask || self.len() != other.len() {
            return None;
        }
        // Implicants one bit apart always sit in adjacent popcount groups.
        if self.ones.abs_diff(other.ones) != 1 {
            return None;
        }

        let diff = (self.representative() ^ other.representative()) & self.mask;
        if diff.count_ones() != 1 {
            return None;
        }

        let mut covered = Vec::with_capacity(self.len() * 2);
        let (mut i, mut j) = (0, 0);
        while i < self.covered.len() && j < other.covered.len() {
            if self.covered[i] < other.covered[j] {
                covered.push(self.covered[i]);
                i += 1;
            } else {
                covered.push(other.covered[j]);
                j += 1;
            }
        }
        covered.extend_from_slice(&self.covered[i..]);
        covered.extend_from_slice(&other.covered[j..]);

        let merged = Implicant {
            covered,
            mask: self.mask & !diff,
            ones: self.ones.min(other.ones),
            essential: self.essential || other.essential,
            name: None,
        };
        trace!("combine({} , {}) -> {}", self, other, merged);
        Some(merged)
    }

    /// Literals of the product term, ordered by truth-table column.
    pub fn literals(&self, width: u32) -> impl Iterator<Item = Literal> + '_ {
        (0..width).filter_map(move |column| {
            let bit = width - 1 - column;
            if (self.mask >> bit) & 1 == 1 {
                let negated = (self.representative() >> bit) & 1 == 0;
                Some(Literal::new(column, negated))
            } else {
                None
            }
        })
    }

    /// Number of gates needed to build this product term.
    ///
    /// Each significant bit is one AND input, plus a NOT when the literal is
    /// complemented. `k` literals need `k - 1` ANDs, so the count starts at -1;
    /// the constant-true term (no literals) costs nothing.
    pub fn operation_count(&self, width: u32) -> u32 {
        let mut count: i64 = -1;
        for bit in 0..width {
            if (self.mask >> bit) & 1 == 1 {
                count += 1;
                if (self.representative() >> bit) & 1 == 0 {
                    count += 1;
                }
            }
        }
        count.max(0) as u32
    }
}

// Equal iff the covered sets are equal; `covered` is kept sorted.
impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.covered == other.covered
    }
}

impl Eq for Implicant {}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} = ", name)?;
        }
        write!(f, "m(")?;
        for (i, value) in self.covered.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn single(value: u32, width: u32) -> Implicant {
        Implicant::from_minterm(&Minterm::new(value), width)
    }

    #[test]
    fn test_singleton() {
        let imp = single(5, 3);
        assert_eq!(imp.values(), &[5]);
        assert_eq!(imp.mask(), 0b111);
        assert!(imp.is_essential());
        assert!(!Implicant::from_minterm(&Minterm::dont_care(5), 3).is_essential());
    }

    #[test]
    fn test_combine_one_bit() {
        let a = single(4, 4);
        let b = single(12, 4);
        let ab = a.combine(&b).unwrap();
        assert_eq!(ab.values(), &[4, 12]);
        assert_eq!(ab.mask(), 0b0111);
        assert!(ab.is_essential());
        // Order of operands does not matter
        assert_eq!(b.combine(&a).unwrap(), ab);
    }

    #[test]
    fn test_combine_rejects() {
        // Two bits apart
        assert!(single(1, 2).combine(&single(2, 2)).is_none());
        // Identical
        assert!(single(3, 2).combine(&single(3, 2)).is_none());
        // Different masks
        let ab = single(0, 3).combine(&single(1, 3)).unwrap();
        assert!(ab.combine(&single(2, 3)).is_none());
        // Different masks, same size
        let cd = single(0, 3).combine(&single(2, 3)).unwrap();
        assert!(ab.combine(&cd).is_none());
    }

    #[test]
    fn test_combine_groups() {
        let a = single(0, 3).combine(&single(1, 3)).unwrap();
        let b = single(2, 3).combine(&single(3, 3)).unwrap();
        let ab = a.combine(&b).unwrap();
        assert_eq!(ab.values(), &[0, 1, 2, 3]);
        assert_eq!(ab.mask(), 0b100);
    }

    #[test]
    fn test_combine_dont_cares() {
        let d1 = Implicant::from_minterm(&Minterm::dont_care(6), 3);
        let d2 = Implicant::from_minterm(&Minterm::dont_care(7), 3);
        assert!(!d1.combine(&d2).unwrap().is_essential());

        let m = single(2, 3);
        assert!(m.combine(&d1).unwrap().is_essential());
    }

    #[test]
    fn test_equality_is_set_equality() {
        let x = single(0, 2).combine(&single(1, 2)).unwrap();
        let x = x.combine(&single(2, 2).combine(&single(3, 2)).unwrap()).unwrap();
        let y = single(0, 2).combine(&single(2, 2)).unwrap();
        let y = y.combine(&single(1, 2).combine(&single(3, 2)).unwrap()).unwrap();
        assert_eq!(x, y);
        assert_ne!(single(0, 2), single(1, 2));
    }

    #[test]
    fn test_literals() {
        // 0b10- over three inputs: a b'
        let imp = single(4, 3).combine(&single(5, 3)).unwrap();
        let lits: Vec<_> = imp.literals(3).map(|l| l.to_string()).collect();
        assert_eq!(lits, vec!["a", "b'"]);
    }

    #[test]
    fn test_matches() {
        let imp = single(4, 3).combine(&single(5, 3)).unwrap();
        for input in 0..8 {
            assert_eq!(imp.matches(input), imp.covers(input));
        }
    }

    #[test]
    fn test_operation_count() {
        // a b' c: two ANDs, one NOT
        assert_eq!(single(0b101, 3).operation_count(3), 3);
        // a' b': one AND, two NOTs
        assert_eq!(single(0b00, 2).operation_count(2), 3);
        // a: no gates at all
        let a = single(2, 2).combine(&single(3, 2)).unwrap();
        assert_eq!(a.operation_count(2), 0);
        // a': one NOT
        let na = single(0, 2).combine(&single(1, 2)).unwrap();
        assert_eq!(na.operation_count(2), 1);
        // constant true
        let t = na.combine(&a).unwrap();
        assert_eq!(t.mask(), 0);
        assert_eq!(t.operation_count(2), 0);
    }

    #[test]
    fn test_display() {
        let mut imp = single(4, 4).combine(&single(12, 4)).unwrap();
        assert_eq!(imp.to_string(), "m(4,12)");
        imp.set_name("B");
        assert_eq!(imp.to_string(), "B = m(4,12)");
        assert_eq!(imp.name(), Some("B"));
    }
}
