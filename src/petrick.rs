//! Petrick's method: choosing prime implicants that cover every required input.
//!
//! Each required input gives one row of the prime-implicant chart: the SUM of
//! the implicants covering it ("pick at least one of these"). The PRODUCT of
//! all rows is true exactly for the selections covering every row. Expanding
//! that product into a sum of products enumerates the candidate covers.
//!
//! Naive expansion is exponential in the number of rows, so after every row
//! the expression is flattened and absorption (`A + A·B = A`) is applied
//! until nothing changes. Only irredundant covers survive.
//!
//! Note that SUM and PRODUCT here are operators over *choices of implicants*:
//! a PRODUCT of implicants is one cover, which reads as an OR of product terms
//! once rendered.

use std::fmt;

use log::{debug, trace};
use num_bigint::BigUint;

use crate::bitset::BitSet;
use crate::function::Function;
use crate::types::ImplicantId;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operator {
    Sum,
    Product,
}

/// A node of a Petrick expression.
///
/// # Invariants
///
/// - `Node` children never have the node's own operator (the tree is leveled)
/// - `Node` has at least two children
/// - a `Product` only has leaves as children, each implicant at most once
#[derive(Debug, Clone)]
pub enum Expr {
    /// Identity element, used as the initial accumulator.
    Empty,
    Leaf(ImplicantId),
    Node(Operator, Vec<Expr>),
}

impl Expr {
    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::Empty)
    }

    pub fn is_sum(&self) -> bool {
        matches!(self, Expr::Node(Operator::Sum, _))
    }

    /// Children of an internal node; empty for leaves.
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Node(_, children) => children,
            _ => &[],
        }
    }

    /// Set of implicants appearing anywhere in this expression.
    pub fn leaves(&self) -> BitSet {
        let mut leaves = BitSet::empty();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut BitSet) {
        match self {
            Expr::Empty => {}
            Expr::Leaf(id) => {
                leaves.insert(id.index());
            }
            Expr::Node(_, children) => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Expr::size).sum::<usize>()
    }

    /// Leaves behave as one-element products.
    fn is_product_like(&self) -> bool {
        matches!(self, Expr::Leaf(_) | Expr::Node(Operator::Product, _))
    }

    /// Test if `other` is contained in `self`: both have the same operator
    /// and every leaf of `other` appears among the leaves of `self`.
    pub fn contains(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Leaf(a), Expr::Leaf(b)) => a == b,
            _ if self.is_product_like() && other.is_product_like() => other.leaves().is_subset(&self.leaves()),
            (Expr::Node(Operator::Sum, mine), Expr::Node(Operator::Sum, theirs)) => {
                theirs.len() <= mine.len() && theirs.iter().all(|t| mine.iter().any(|m| m == t))
            }
            _ => false,
        }
    }

    /// `X + Y`, with `Empty` as identity and `X + X = X`.
    pub fn sum(self, other: Expr) -> Expr {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() || self == other {
            return self;
        }
        Expr::leveled(Operator::Sum, vec![self, other])
    }

    /// `X · Y`, fully distributed over sums, with `Empty` as identity,
    /// `X · X = X` and `X · (X · Y) = X · Y`.
    pub fn product(self, other: Expr) -> Expr {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() || self == other {
            return self;
        }

        // Distributive law: (a1 + a2 + ...) · b = a1·b + a2·b + ...
        if let Expr::Node(Operator::Sum, terms) = self {
            let products = terms.into_iter().map(|term| other.clone().product(term)).collect();
            return Expr::leveled(Operator::Sum, products);
        }
        if let Expr::Node(Operator::Sum, terms) = other {
            let products = terms.into_iter().map(|term| self.clone().product(term)).collect();
            return Expr::leveled(Operator::Sum, products);
        }

        if self.contains(&other) {
            return self;
        }
        if other.contains(&self) {
            return other;
        }
        Expr::leveled(Operator::Product, vec![self, other])
    }

    /// Build an n-ary node, splicing in children that have the same operator.
    /// Duplicate leaves are dropped from products.
    fn leveled(op: Operator, children: Vec<Expr>) -> Expr {
        let mut flat = Vec::with_capacity(children.len());
        let mut seen = BitSet::empty();
        let mut stack: Vec<Expr> = children.into_iter().rev().collect();
        while let Some(child) = stack.pop() {
            match child {
                Expr::Node(child_op, grandchildren) if child_op == op => {
                    stack.extend(grandchildren.into_iter().rev());
                }
                Expr::Empty => {}
                Expr::Leaf(id) if op == Operator::Product => {
                    if seen.insert(id.index()) {
                        flat.push(child);
                    }
                }
                _ => flat.push(child),
            }
        }

        match flat.len() {
            0 => Expr::Empty,
            1 => flat.pop().unwrap_or(Expr::Empty),
            _ => Expr::Node(op, flat),
        }
    }

    /// Re-flatten nested nodes of the same operator, recursively.
    pub fn level(self) -> Expr {
        match self {
            Expr::Node(op, children) => Expr::leveled(op, children.into_iter().map(Expr::level).collect()),
            other => other,
        }
    }

    /// Absorption `A + A·B = A` over a sum, including duplicate terms.
    ///
    /// Leaf sets are computed once per term. Terms are visited from the
    /// fewest leaves up, so a single pass reaches the fixed point. Survivors
    /// keep their relative order; of two equal terms the first one stays.
    /// Returns `true` if any term was removed.
    pub fn absorb(&mut self) -> bool {
        let Expr::Node(Operator::Sum, terms) = self else {
            return false;
        };
        if !terms.iter().all(Expr::is_product_like) {
            return false;
        }

        let sets: Vec<BitSet> = terms.iter().map(Expr::leaves).collect();
        let mut order: Vec<usize> = (0..terms.len()).collect();
        order.sort_by_key(|&i| sets[i].len());

        let mut kept: Vec<usize> = Vec::with_capacity(terms.len());
        let mut keep = vec![false; terms.len()];
        for i in order {
            if let Some(&k) = kept.iter().find(|&&k| sets[k].is_subset(&sets[i])) {
                trace!("absorb: {} absorbs {}", terms[k], terms[i]);
                continue;
            }
            kept.push(i);
            keep[i] = true;
        }

        let before = terms.len();
        let mut flags = keep.into_iter();
        terms.retain(|_| flags.next().unwrap_or(false));
        let changed = terms.len() != before;

        if terms.len() == 1 {
            if let Some(term) = terms.pop() {
                *self = term;
            }
        }
        changed
    }

    /// Flatten, then absorb.
    pub fn simplify(self) -> Expr {
        let mut expr = self.level();
        expr.absorb();
        expr
    }
}

// Order-independent structural equality.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Empty, Expr::Empty) => true,
            (Expr::Leaf(a), Expr::Leaf(b)) => a == b,
            (Expr::Node(op1, c1), Expr::Node(op2, c2)) => {
                op1 == op2 && c1.len() == c2.len() && c1.iter().all(|a| c2.iter().any(|b| a == b))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Empty => write!(f, "[]"),
            Expr::Leaf(id) => write!(f, "{}", id),
            Expr::Node(op, children) => {
                let sep = match op {
                    Operator::Sum => "+",
                    Operator::Product => "*",
                };
                write!(f, "[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", sep)?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// One row of the prime-implicant chart.
#[derive(Debug, Clone)]
pub struct ChartRow {
    /// The required input this row is about.
    pub minterm: u32,
    /// Prime implicants covering it.
    pub implicants: Vec<ImplicantId>,
}

impl ChartRow {
    /// The row as a Petrick sum.
    pub fn to_expr(&self) -> Expr {
        self.implicants
            .iter()
            .fold(Expr::Empty, |acc, &id| acc.sum(Expr::Leaf(id)))
    }
}

/// The prime-implicant chart of a function whose arena holds only prime implicants.
#[derive(Debug, Clone)]
pub struct PrimeChart {
    pub rows: Vec<ChartRow>,
}

impl PrimeChart {
    pub fn new(function: &Function) -> Self {
        let rows = function
            .required()
            .map(|m| ChartRow {
                minterm: m.value(),
                implicants: function.ids().filter(|&id| function.implicant(id).covers(m.value())).collect(),
            })
            .collect();
        PrimeChart { rows }
    }

    /// Number of products a naive expansion of the chart would produce:
    /// the product of all row widths.
    pub fn naive_expansion(&self) -> BigUint {
        self.rows
            .iter()
            .fold(BigUint::from(1u32), |acc, row| acc * BigUint::from(row.implicants.len()))
    }

    /// Multiply all rows together, simplifying after each one.
    pub fn solve(&self) -> Expr {
        let mut result = Expr::Empty;
        for row in &self.rows {
            let sum = row.to_expr();
            trace!("row m{}: {}", row.minterm, sum);
            result = result.product(sum).simplify();
            debug!("after m{}: {} node(s)", row.minterm, result.size());
            trace!("after m{}: {}", row.minterm, result);
        }
        result
    }
}

/// Run Petrick's method on a function whose arena holds only prime implicants.
///
/// The result is a single cover (a product or a leaf), or a sum of alternative
/// covers. It is `Expr::Empty` when the function has no required input.
pub fn petrick(function: &Function) -> Expr {
    let chart = PrimeChart::new(function);
    debug!(
        "{}: chart has {} row(s), naive expansion {} product(s)",
        function.name(),
        chart.rows.len(),
        chart.naive_expansion()
    );
    let result = chart.solve();
    debug!(
        "{}: petrick result {} ({} node(s))",
        function.name(),
        result,
        result.size()
    );
    result
}
