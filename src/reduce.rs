//! The reduction driver: one function in, one minimal cover out.

use log::debug;

use crate::cost::select;
use crate::cover::Cover;
use crate::error::Result;
use crate::function::Function;
use crate::petrick::petrick;
use crate::render::{result_line, RenderConfig};

/// Outcome of reducing one function.
#[derive(Debug, Clone)]
pub struct Reduction {
    pub name: String,
    pub cover: Cover,
    /// Gate count of `cover`.
    pub operation_count: u32,
    /// Number of irredundant covers Petrick's method produced.
    pub alternatives: usize,
}

impl Reduction {
    pub fn expression(&self, config: &RenderConfig) -> String {
        self.cover.render(config)
    }

    /// `<name>: <expression>  Number of operations: <n>`
    pub fn line(&self, config: &RenderConfig) -> String {
        result_line(&self.name, &self.expression(config), self.operation_count)
    }
}

/// Reduce `function`: generate its prime implicants, solve the prime chart
/// with Petrick's method and keep the cheapest cover.
///
/// The implicant arena of `function` is replaced by its prime implicants.
/// A function without required inputs is the constant 0 and skips all of it.
pub fn reduce(function: &mut Function) -> Result<Reduction> {
    if !function.has_required() {
        debug!("{}: no required input, constant 0", function.name());
        return Ok(Reduction {
            name: function.name().to_string(),
            cover: Cover::empty(function.width()),
            operation_count: 0,
            alternatives: 1,
        });
    }

    function.generate_implicants();
    function.retain_essential()?;

    let result = petrick(function);
    let selection = select(&result, function);
    let cover = Cover::from_expr(selection.cover, function);
    debug!(
        "{}: picked {} of {} alternative(s), {} operation(s)",
        function.name(),
        selection.cover,
        selection.alternatives,
        selection.operation_count
    );

    Ok(Reduction {
        name: function.name().to_string(),
        cover,
        operation_count: selection.operation_count,
        alternatives: selection.alternatives,
    })
}

/// Build and reduce a function in one step.
///
/// # Examples
///
/// ```
/// use petrick_rs::reduce::minimize;
///
/// let reduction = minimize("Q", 2, &[1, 2], &[]).unwrap();
/// assert_eq!(reduction.cover.to_string(), "a'b + ab'");
/// assert_eq!(reduction.operation_count, 5);
/// ```
pub fn minimize(name: &str, width: u32, minterms: &[u32], dont_cares: &[u32]) -> Result<Reduction> {
    let mut function = Function::new(name, width, minterms, dont_cares)?;
    reduce(&mut function)
}
