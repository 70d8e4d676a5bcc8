//! Vietnamese personal income tax engine for monthly salaries.
//!
//! Computes mandatory insurance, deductions, and progressive bracket tax
//! under the 7-bracket old law and the 5-bracket 2026 law, compares the
//! two, and inverts the calculation to find the gross salary behind a
//! desired net salary. Every operation is a pure function of its input.

pub mod calculations;
pub mod error;
pub mod models;

pub use error::InvalidInput;
pub use models::*;
