//! Debug utilities for inspecting a function being reduced.
//!
//! These back the `--verbose` and `--table` flags of the binaries and are
//! handy in tests.

use std::fmt;

use crate::function::Function;
use crate::implicant::Implicant;
use crate::utils::{literal_name, width_mask};

/// One line of the implicant table.
#[derive(Debug, Clone)]
pub struct ImplicantInfo {
    pub label: String,
    pub values: Vec<u32>,
    /// Generalized bits: 1 where the implicant does not depend on the input.
    pub free: u32,
    pub essential: bool,
}

impl ImplicantInfo {
    pub fn new(implicant: &Implicant, index: usize, width: u32) -> Self {
        ImplicantInfo {
            label: implicant
                .name()
                .map_or_else(|| format!("#{}", index), str::to_string),
            values: implicant.values().to_vec(),
            free: !implicant.mask() & width_mask(width),
            essential: implicant.is_essential(),
        }
    }
}

impl fmt::Display for ImplicantInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = m(", self.label)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ") Mask: {}", self.free)?;
        if self.essential {
            write!(f, " Essential")?;
        }
        Ok(())
    }
}

/// All implicants of a function, in arena order.
#[derive(Debug, Clone)]
pub struct ImplicantTable {
    pub name: String,
    pub rows: Vec<ImplicantInfo>,
}

impl fmt::Display for ImplicantTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Implicants of {} ({}):", self.name, self.rows.len())?;
        for row in &self.rows {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}

/// The full truth table of a function: `1` for required inputs, `x` for
/// don't-cares and `0` elsewhere.
#[derive(Debug, Clone)]
pub struct FunctionTable<'a> {
    function: &'a Function,
}

impl fmt::Display for FunctionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.function.width();
        for column in 0..width {
            write!(f, "{} ", literal_name(column))?;
        }
        writeln!(f, "| {}", self.function.name())?;

        for input in 0..(1u64 << width) {
            let input = input as u32;
            for bit in (0..width).rev() {
                write!(f, "{} ", (input >> bit) & 1)?;
            }
            let output = match self.function.lookup(input) {
                Some(true) => "x",
                Some(false) => "1",
                None => "0",
            };
            writeln!(f, "| {}", output)?;
        }
        Ok(())
    }
}

impl Function {
    /// Snapshot the implicant arena for printing.
    pub fn implicant_table(&self) -> ImplicantTable {
        ImplicantTable {
            name: self.name().to_string(),
            rows: self
                .implicants()
                .iter()
                .enumerate()
                .map(|(i, imp)| ImplicantInfo::new(imp, i, self.width()))
                .collect(),
        }
    }

    /// Displayable truth table of this function.
    pub fn truth_table(&self) -> FunctionTable<'_> {
        FunctionTable { function: self }
    }
}
