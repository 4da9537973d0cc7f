//! Rendering covers as algebraic expressions.
//!
//! Literals are named `a`, `b`, … after their truth-table column, `a` being
//! the leftmost column (the most significant input bit). A product term is
//! its literals written side by side, and product terms are joined by ` + `.
//!
//! ```text
//! a'b + ab'        // plain
//! 1                // constant true
//! 0                // constant false
//! ```
//!
//! In colored mode a complemented literal is printed in red and a plain
//! one in green, without the complement marker.

use colored::Colorize;

use crate::cover::Cover;
use crate::implicant::Implicant;
use crate::types::Literal;

/// Options for rendering covers.
///
/// # Examples
///
/// ```
/// use petrick_rs::reduce::minimize;
/// use petrick_rs::render::RenderConfig;
///
/// let reduction = minimize("Q", 2, &[1, 2], &[]).unwrap();
/// let config = RenderConfig { complement: "~", ..RenderConfig::default() };
/// assert_eq!(reduction.cover.render(&config), "a~b + ab~");
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Color literals instead of marking complements (default: false)
    pub colored: bool,
    /// Marker appended to complemented literals in plain mode (default: "'")
    pub complement: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            colored: false,
            complement: "'",
        }
    }
}

impl RenderConfig {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn colored() -> Self {
        RenderConfig {
            colored: true,
            ..Self::default()
        }
    }

    pub fn literal(&self, literal: Literal) -> String {
        let name = literal.name().to_string();
        match (self.colored, literal.is_negated()) {
            (true, true) => name.red().to_string(),
            (true, false) => name.green().to_string(),
            (false, true) => format!("{}{}", name, self.complement),
            (false, false) => name,
        }
    }

    /// Render one product term; the constant-true term renders as `1`.
    pub fn term(&self, implicant: &Implicant, width: u32) -> String {
        let term: String = implicant.literals(width).map(|lit| self.literal(lit)).collect();
        if term.is_empty() {
            "1".to_string()
        } else {
            term
        }
    }

    /// Render a whole cover; the empty cover renders as `0`.
    pub fn render(&self, cover: &Cover) -> String {
        if cover.is_empty() {
            return "0".to_string();
        }
        cover
            .implicants()
            .iter()
            .map(|imp| self.term(imp, cover.width()))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// The result line printed for one output column.
pub fn result_line(label: &str, expression: &str, operation_count: u32) -> String {
    format!("{}: {}  Number of operations: {}", label, expression, operation_count)
}
