//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AocSolution` derive macro, and the crate declares
//! itself a solution module, so discovery finds every solution without any
//! registration code in the binary.

aoc_solver::solution_module!();

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
