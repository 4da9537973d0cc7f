//! A chosen set of implicants, detached from the function it came from.

use std::fmt;

use crate::function::Function;
use crate::implicant::Implicant;
use crate::petrick::{Expr, Operator};
use crate::render::RenderConfig;
use crate::types::ImplicantId;

/// A sum of product terms over `width` inputs.
///
/// The cover owns copies of its implicants, so it stays valid after the
/// function (and its arena) has been dropped. An empty cover is the
/// constant-false function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    width: u32,
    implicants: Vec<Implicant>,
}

impl Cover {
    pub fn new(width: u32, implicants: Vec<Implicant>) -> Self {
        Cover { width, implicants }
    }

    /// The constant-false cover.
    pub fn empty(width: u32) -> Self {
        Cover::new(width, Vec::new())
    }

    /// Extract the implicants of a selected Petrick cover, in arena order.
    ///
    /// `expr` must be a single cover: a leaf or a product of leaves, as
    /// returned by [`select`][crate::cost::select]. Its gate count then
    /// equals [`Cover::operation_count`]. Passing a sum is a logic error.
    pub fn from_expr(expr: &Expr, function: &Function) -> Self {
        let mut ids = Vec::new();
        Self::collect(expr, &mut ids);
        ids.sort_unstable();
        ids.dedup();
        let implicants = ids.into_iter().map(|id| function.implicant(id).clone()).collect();
        Cover::new(function.width(), implicants)
    }

    fn collect(expr: &Expr, out: &mut Vec<ImplicantId>) {
        debug_assert!(!expr.is_sum(), "selected cover is not a product: {}", expr);
        match expr {
            Expr::Empty | Expr::Node(Operator::Sum, _) => {}
            Expr::Leaf(id) => out.push(*id),
            Expr::Node(Operator::Product, children) => {
                for child in children {
                    Self::collect(child, out);
                }
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Test if this cover is the constant-true function.
    pub fn is_tautology(&self) -> bool {
        self.implicants.iter().any(|imp| imp.mask() == 0)
    }

    /// Gate count of this cover: the implicants' own gates plus the ORs joining them.
    pub fn operation_count(&self) -> u32 {
        let joins = self.implicants.len().saturating_sub(1) as u32;
        joins + self.implicants.iter().map(|imp| imp.operation_count(self.width)).sum::<u32>()
    }

    /// Render with the given configuration.
    pub fn render(&self, config: &RenderConfig) -> String {
        config.render(self)
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(width: u32, minterms: &[u32], dont_cares: &[u32]) -> Function {
        let mut f = Function::new("Q", width, minterms, dont_cares).unwrap();
        f.generate_implicants();
        f.retain_essential().unwrap();
        f
    }

    #[test]
    fn test_from_product() {
        let f = prepared(2, &[1, 2], &[]);
        let expr = Expr::Leaf(ImplicantId::new(0)).product(Expr::Leaf(ImplicantId::new(1)));
        let cover = Cover::from_expr(&expr, &f);
        assert_eq!(cover.len(), 2);
        assert_eq!(cover.operation_count(), expr.operation_count(&f));
        drop(f);
        // Still usable after the function is gone
        assert_eq!(cover.implicants()[0].values(), &[1]);
    }

    #[test]
    fn test_arena_order() {
        let f = prepared(2, &[1, 2], &[]);
        let expr = Expr::Leaf(ImplicantId::new(1)).product(Expr::Leaf(ImplicantId::new(0)));
        let cover = Cover::from_expr(&expr, &f);
        assert_eq!(cover.implicants()[0].values(), &[1]);
        assert_eq!(cover.implicants()[1].values(), &[2]);
    }

    #[test]
    fn test_count_matches_selection() {
        // Σm(0,1,2,5,6,7): no essential prime, every cover is a product of three
        let f = prepared(3, &[0, 1, 2, 5, 6, 7], &[]);
        let result = crate::petrick::petrick(&f);
        for alt in result.children() {
            let cover = Cover::from_expr(alt, &f);
            assert_eq!(cover.operation_count(), alt.operation_count(&f));
        }
        let selection = crate::cost::select(&result, &f);
        let cover = Cover::from_expr(selection.cover, &f);
        assert_eq!(cover.len(), 3);
        assert_eq!(cover.operation_count(), selection.operation_count);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not a product")]
    fn test_from_sum_rejected() {
        let f = prepared(2, &[0, 1, 3], &[]);
        let choice = Expr::Node(
            Operator::Sum,
            vec![Expr::Leaf(ImplicantId::new(0)), Expr::Leaf(ImplicantId::new(1))],
        );
        Cover::from_expr(&choice, &f);
    }

    #[test]
    fn test_tautology() {
        let f = prepared(3, &[0, 1, 2, 3, 4, 5, 6, 7], &[]);
        let cover = Cover::from_expr(&Expr::Leaf(ImplicantId::new(0)), &f);
        assert!(cover.is_tautology());
        assert_eq!(cover.operation_count(), 0);
        assert!(!Cover::empty(3).is_tautology());
        assert_eq!(Cover::empty(3).operation_count(), 0);
    }
}
