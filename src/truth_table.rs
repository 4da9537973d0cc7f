//! Truth-table front-end.
//!
//! A truth table is a text file with one row per line:
//!
//! ```text
//! # a b c | Q0 Q1
//! 0 0 x   | 1  0
//! 0 1 0   | x  1
//! 1 1 1   | 0  1
//! ```
//!
//! Inputs are `0`, `1` or `x` (both values); the leftmost input is the most
//! significant bit. After the `|` come the outputs: `1` marks a required
//! input, `x` a don't-care, and anything else a 0. `x` may be uppercase on
//! either side. Blank lines and lines
//! starting with `#` are skipped. The first row fixes the number of inputs
//! and outputs.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::function::Function;
use crate::utils::MAX_WIDTH;

/// Required and don't-care inputs of one output column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputColumn {
    pub name: String,
    /// Sorted, duplicate-free.
    pub minterms: Vec<u32>,
    /// Sorted, duplicate-free.
    pub dont_cares: Vec<u32>,
}

impl OutputColumn {
    pub fn function(&self, width: u32) -> Result<Function> {
        Function::new(self.name.clone(), width, &self.minterms, &self.dont_cares)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    pub width: u32,
    pub columns: Vec<OutputColumn>,
}

impl TruthTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut table: Option<TruthTable> = None;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = |reason: String| Error::TruthTable { line: line_no, reason };

            let (inputs, outputs) = line
                .split_once('|')
                .ok_or_else(|| malformed("missing `|` separator".to_string()))?;
            let inputs: Vec<&str> = inputs.split_whitespace().collect();
            let outputs: Vec<&str> = outputs.split_whitespace().collect();
            if inputs.is_empty() {
                return Err(malformed("no inputs".to_string()));
            }
            if outputs.is_empty() {
                return Err(malformed("no outputs".to_string()));
            }

            let table = table.get_or_insert_with(|| TruthTable {
                width: inputs.len() as u32,
                columns: (0..outputs.len())
                    .map(|i| OutputColumn {
                        name: format!("Q{}", i),
                        ..OutputColumn::default()
                    })
                    .collect(),
            });
            if inputs.len() as u32 != table.width {
                return Err(malformed(format!("expected {} inputs, found {}", table.width, inputs.len())));
            }
            if outputs.len() != table.columns.len() {
                return Err(malformed(format!(
                    "expected {} outputs, found {}",
                    table.columns.len(),
                    outputs.len()
                )));
            }

            let values = expand(&inputs).map_err(malformed)?;
            for (column, output) in table.columns.iter_mut().zip(&outputs) {
                match *output {
                    "1" => column.minterms.extend(&values),
                    "x" | "X" => column.dont_cares.extend(&values),
                    _ => {}
                }
            }
        }

        let mut table = table.ok_or(Error::TruthTable {
            line: 0,
            reason: "no rows".to_string(),
        })?;
        for column in &mut table.columns {
            column.minterms.sort_unstable();
            column.minterms.dedup();
            column.dont_cares.sort_unstable();
            column.dont_cares.dedup();
            debug!(
                "{}: {} minterm(s), {} don't-care(s)",
                column.name,
                column.minterms.len(),
                column.dont_cares.len()
            );
        }
        Ok(table)
    }

    /// One function per output column. A column that cannot form a
    /// function does not affect the others.
    pub fn functions(&self) -> Vec<Result<Function>> {
        self.columns.iter().map(|column| column.function(self.width)).collect()
    }
}

/// All input values matched by a row of `0`, `1` and `x` literals.
fn expand(inputs: &[&str]) -> std::result::Result<Vec<u32>, String> {
    if inputs.len() > MAX_WIDTH as usize {
        return Err(format!("too many inputs ({}, at most {})", inputs.len(), MAX_WIDTH));
    }
    let mut values = vec![0u32];
    for literal in inputs {
        match *literal {
            "0" => values.iter_mut().for_each(|v| *v <<= 1),
            "1" => values.iter_mut().for_each(|v| *v = (*v << 1) | 1),
            "x" | "X" => {
                values = values.iter().flat_map(|&v| [v << 1, (v << 1) | 1]).collect();
            }
            other => return Err(format!("invalid input literal `{}`", other)),
        }
    }
    Ok(values)
}
