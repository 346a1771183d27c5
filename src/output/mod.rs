//! Terminal output formatting
//!
//! Display utilities for line mode and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_solve_result, write_board};
