//! Salary tax calculations for the old and new personal income tax regimes.
//!
//! Data flows one way: insurance, then deductions, then taxable income,
//! then bracket tax, then net salary. Comparison and the gross-from-net
//! solver are built on the single-regime evaluation.

pub mod common;
pub mod comparison;
pub mod insurance;
pub mod progressive;
pub mod regime;
pub mod solver;

pub use comparison::compare;
pub use insurance::compute_insurance;
pub use progressive::{BracketSchedule, NOT_TAXABLE_LABEL, compute_progressive_tax};
pub use regime::{RegimeEvaluator, evaluate_regime};
pub use solver::{GrossSearch, search_gross_for_net, solve_gross_for_net};
