//! Side-by-side comparison of the old and new regimes.

use rust_decimal::Decimal;

use crate::calculations::regime::evaluate_regime;
use crate::error::InvalidInput;
use crate::models::{ComparisonResult, NEW_REGIME, OLD_REGIME, TaxInput};

/// Evaluates `input` under both regimes and derives the savings.
///
/// `savings_percent` is relative to the old net salary and is zero when the
/// old net salary is not positive.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the input fails validation.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::compare;
/// use pit_core::TaxInput;
///
/// let result = compare(&TaxInput::new(dec!(30000000))).unwrap();
///
/// assert!(result.new_regime.tax_amount < result.old_regime.tax_amount);
/// assert_eq!(
///     result.savings_amount,
///     result.new_regime.net_salary - result.old_regime.net_salary
/// );
/// ```
pub fn compare(input: &TaxInput) -> Result<ComparisonResult, InvalidInput> {
    let old_regime = evaluate_regime(input, &OLD_REGIME)?;
    let new_regime = evaluate_regime(input, &NEW_REGIME)?;

    let savings_amount = new_regime.net_salary - old_regime.net_salary;
    let savings_percent = savings_percent(savings_amount, old_regime.net_salary);

    Ok(ComparisonResult {
        old_regime,
        new_regime,
        savings_amount,
        savings_percent,
    })
}

fn savings_percent(
    savings_amount: Decimal,
    old_net: Decimal,
) -> Decimal {
    if old_net > Decimal::ZERO {
        savings_amount / old_net * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}
