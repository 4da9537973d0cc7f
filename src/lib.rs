//! # petrick-rs: two-level logic minimization in Rust
//!
//! **`petrick-rs`** turns the truth table of a boolean function into a minimal
//! sum-of-products expression, counting the gates needed to build it.
//!
//! ## How it works
//!
//! A function of `N` inputs is given by the input combinations it must be true
//! for (*minterms*) and the ones whose output does not matter (*don't-cares*).
//! Reduction runs in four steps:
//!
//! 1. **Prime implicants** ([`function`]): Quine–McCluskey rounds merge input
//!    combinations differing in one bit, until nothing merges anymore.
//! 2. **Essentiality filter** ([`function`]): only primes covering at least one
//!    required combination are kept, and named `A`, `B`, ….
//! 3. **Petrick's method** ([`petrick`]): the prime chart is turned into a
//!    product of sums and expanded, with absorption after every row, into the
//!    irredundant covers.
//! 4. **Selection** ([`cost`]): the cover needing the fewest AND, OR and NOT
//!    gates wins.
//!
//! ## Basic Usage
//!
//! ```rust
//! use petrick_rs::reduce::minimize;
//! use petrick_rs::render::RenderConfig;
//!
//! // f(a, b) = a XOR b
//! let reduction = minimize("Q", 2, &[1, 2], &[]).unwrap();
//!
//! assert_eq!(reduction.cover.to_string(), "a'b + ab'");
//! // Two ANDs, two NOTs, one OR
//! assert_eq!(reduction.operation_count, 5);
//! assert_eq!(
//!     reduction.line(&RenderConfig::default()),
//!     "Q: a'b + ab'  Number of operations: 5"
//! );
//! ```
//!
//! ## Conventions
//!
//! - Input `a` is the leftmost truth-table column, i.e. the most significant bit.
//! - At most [`MAX_WIDTH`][crate::utils::MAX_WIDTH] inputs, one letter each.
//! - The constant-true cover renders as `1`, the constant-false one as `0`.
//!
//! ## Core Components
//!
//! - **[`reduce`]**: The entry point, running the whole pipeline on one function.
//! - **[`petrick`]**: The expression algebra behind Petrick's method.
//! - **[`truth_table`]**: Reading multi-output truth tables from text files.
//! - **[`render`]**: Printing covers, plain or colored.
//! - **[`debug`]**: Implicant and truth-table dumps.

pub mod bitset;
pub mod cost;
pub mod cover;
pub mod debug;
pub mod error;
pub mod eval;
pub mod function;
pub mod implicant;
pub mod list;
pub mod minterm;
pub mod petrick;
pub mod reduce;
pub mod render;
pub mod truth_table;
pub mod types;
pub mod utils;
