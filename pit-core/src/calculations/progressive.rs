//! Progressive bracket taxation.
//!
//! Taxable income is sliced across the schedule from the bottom up; each
//! slice is taxed at its bracket's marginal rate. Upper limits are
//! inclusive, so an income exactly on a boundary stays in the lower bracket.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::compute_progressive_tax;
//! use pit_core::OLD_BRACKETS;
//!
//! let result = compute_progressive_tax(dec!(16000000), &OLD_BRACKETS);
//!
//! // 5M × 5% + 5M × 10% + 6M × 15%
//! assert_eq!(result.tax, dec!(1650000));
//! assert_eq!(result.bracket_label, "Bracket 3");
//! assert_eq!(result.lines.len(), 3);
//! assert!(result.lines[2].is_highest_reached);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::min;
use crate::models::{BracketLine, ProgressiveTax, TaxBracket};

/// Label reported when there is no positive taxable income.
pub const NOT_TAXABLE_LABEL: &str = "not taxable";

/// Applies a bracket schedule to taxable income.
///
/// `brackets` must be sorted by strictly ascending `upper_limit` and end with
/// exactly one open-ended bracket. The constant schedules satisfy this; it
/// is checked by their tests rather than here.
#[derive(Debug, Clone, Copy)]
pub struct BracketSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketSchedule<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Computes the total tax, the highest bracket reached, and one line
    /// per bracket the income reaches.
    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> ProgressiveTax {
        if taxable_income <= Decimal::ZERO {
            debug!(%taxable_income, "no positive taxable income");
            return ProgressiveTax {
                tax: Decimal::ZERO,
                bracket_label: NOT_TAXABLE_LABEL.to_string(),
                lines: Vec::new(),
            };
        }

        let mut tax = Decimal::ZERO;
        let mut previous_limit = Decimal::ZERO;
        let mut lines: Vec<BracketLine> = Vec::with_capacity(self.brackets.len());

        for (index, bracket) in self.brackets.iter().enumerate() {
            if taxable_income <= previous_limit {
                break;
            }

            let line = self.line(index, bracket, previous_limit, taxable_income);
            tax += line.tax_amount;
            lines.push(line);

            match bracket.upper_limit {
                Some(limit) if taxable_income > limit => previous_limit = limit,
                _ => break,
            }
        }

        let bracket_label = match lines.last_mut() {
            Some(last) => {
                last.is_highest_reached = true;
                last.label.clone()
            }
            None => NOT_TAXABLE_LABEL.to_string(),
        };

        ProgressiveTax {
            tax,
            bracket_label,
            lines,
        }
    }

    /// The slice of `taxable_income` falling into one bracket.
    fn line(
        &self,
        index: usize,
        bracket: &TaxBracket,
        lower_bound: Decimal,
        taxable_income: Decimal,
    ) -> BracketLine {
        let slice_top = match bracket.upper_limit {
            Some(limit) => min(taxable_income, limit),
            None => taxable_income,
        };
        let taxable_amount = slice_top - lower_bound;

        BracketLine {
            bracket_index: index + 1,
            label: bracket.label.to_string(),
            rate: bracket.rate,
            lower_bound,
            upper_bound: bracket.upper_limit,
            taxable_amount,
            tax_amount: taxable_amount * bracket.rate,
            is_highest_reached: false,
        }
    }
}

/// Applies `brackets` to `taxable_income`. See [`BracketSchedule::calculate`].
pub fn compute_progressive_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> ProgressiveTax {
    BracketSchedule::new(brackets).calculate(taxable_income)
}
