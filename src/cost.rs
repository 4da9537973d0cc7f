//! Gate-count cost of covers and selection of the cheapest one.
//!
//! ```text
//! cost(leaf)            = operation_count(implicant)
//! cost(node [c1..ck])   = (k - 1) + cost(c1) + ... + cost(ck)
//! ```
//!
//! The `k - 1` term counts the OR gates joining the product terms of a cover.

use log::debug;

use crate::function::Function;
use crate::petrick::Expr;

impl Expr {
    /// Number of AND, NOT and OR gates needed to implement this expression.
    pub fn operation_count(&self, function: &Function) -> u32 {
        match self {
            Expr::Empty => 0,
            Expr::Leaf(id) => function.implicant(*id).operation_count(function.width()),
            Expr::Node(_, children) => {
                let joins = children.len().saturating_sub(1) as u32;
                joins + children.iter().map(|c| c.operation_count(function)).sum::<u32>()
            }
        }
    }
}

/// The winning cover of a Petrick result.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub cover: &'a Expr,
    pub operation_count: u32,
    /// Number of alternative covers that were ranked.
    pub alternatives: usize,
}

/// Pick the cheapest alternative of a Petrick result.
///
/// A sum is ranked alternative by alternative, keeping the first one on ties;
/// anything else is already a single cover.
pub fn select<'a>(result: &'a Expr, function: &Function) -> Selection<'a> {
    if !result.is_sum() {
        return Selection {
            cover: result,
            operation_count: result.operation_count(function),
            alternatives: 1,
        };
    }

    let alternatives = result.children();
    let mut best = &alternatives[0];
    let mut best_count = best.operation_count(function);
    for alt in &alternatives[1..] {
        let count = alt.operation_count(function);
        debug!("{}: alternative {} costs {}", function.name(), alt, count);
        if count < best_count {
            best = alt;
            best_count = count;
        }
    }

    Selection {
        cover: best,
        operation_count: best_count,
        alternatives: alternatives.len(),
    }
}
