use crate::cover::Cover;
use crate::function::Function;
use crate::implicant::Implicant;

/// Evaluate a boolean function on one input combination.
///
/// The input is a value in `[0, 2^width)`, bit `width - 1` being the
/// leftmost truth-table column.
pub trait Eval {
    fn eval(&self, input: u32) -> bool;
}

impl Eval for Implicant {
    fn eval(&self, input: u32) -> bool {
        self.matches(input)
    }
}

impl Eval for Cover {
    fn eval(&self, input: u32) -> bool {
        self.implicants().iter().any(|imp| imp.eval(input))
    }
}

/// Check that `cover` implements `function`: true on every required input,
/// false wherever the function is 0. Don't-cares may go either way.
///
/// Returns the first offending input, if any.
pub fn verify(cover: &Cover, function: &Function) -> Result<(), u32> {
    for input in 0..(1u64 << function.width()) {
        let input = input as u32;
        let ok = match function.lookup(input) {
            Some(true) => true,
            Some(false) => cover.eval(input),
            None => !cover.eval(input),
        };
        if !ok {
            return Err(input);
        }
    }
    Ok(())
}
