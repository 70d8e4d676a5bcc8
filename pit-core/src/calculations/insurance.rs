//! Mandatory employee insurance contributions.
//!
//! | Category     | Rate | Base ceiling |
//! |--------------|------|--------------|
//! | Social       | 8%   | 46,800,000 (20 × base salary) |
//! | Health       | 1.5% | 46,800,000 |
//! | Unemployment | 1%   | 20 × regional minimum wage, see [`Region::unemployment_ceiling`] |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::compute_insurance;
//! use pit_core::{InsuranceMode, Region};
//!
//! let insurance =
//!     compute_insurance(dec!(200000000), Region::One, InsuranceMode::Official, None).unwrap();
//!
//! assert_eq!(insurance.social, dec!(3744000));
//! assert_eq!(insurance.health, dec!(702000));
//! assert_eq!(insurance.unemployment, dec!(992000));
//! assert_eq!(insurance.total, dec!(5438000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::min;
use crate::error::InvalidInput;
use crate::models::{InsuranceBreakdown, InsuranceMode, Region};

pub const SOCIAL_RATE: Decimal = dec!(0.08);
pub const HEALTH_RATE: Decimal = dec!(0.015);
pub const UNEMPLOYMENT_RATE: Decimal = dec!(0.01);

/// Ceiling on the social and health insurance base.
pub const SOCIAL_HEALTH_CEILING: Decimal = dec!(46800000);

/// Combined employee rate, 10.5%.
pub const TOTAL_RATE: Decimal = dec!(0.105);

/// Computes the employee's insurance contributions for one month.
///
/// # Errors
///
/// Returns [`InvalidInput::MissingCustomInsurance`] when `mode` is
/// [`InsuranceMode::Custom`] and no amount is given.
pub fn compute_insurance(
    gross_salary: Decimal,
    region: Region,
    mode: InsuranceMode,
    custom_amount: Option<Decimal>,
) -> Result<InsuranceBreakdown, InvalidInput> {
    match mode {
        InsuranceMode::None => Ok(InsuranceBreakdown::zero()),
        InsuranceMode::Custom => {
            let amount = custom_amount.ok_or(InvalidInput::MissingCustomInsurance)?;
            Ok(split_custom(amount))
        }
        InsuranceMode::Official => Ok(official(gross_salary, region)),
    }
}

/// Statutory contributions on capped bases.
fn official(
    gross_salary: Decimal,
    region: Region,
) -> InsuranceBreakdown {
    let social_health_base = min(gross_salary, SOCIAL_HEALTH_CEILING);
    let unemployment_base = min(gross_salary, region.unemployment_ceiling());

    let social = social_health_base * SOCIAL_RATE;
    let health = social_health_base * HEALTH_RATE;
    let unemployment = unemployment_base * UNEMPLOYMENT_RATE;

    InsuranceBreakdown {
        social,
        health,
        unemployment,
        total: social + health + unemployment,
    }
}

/// Distributes a fixed total across categories in proportion to their rates.
/// The supplied amount stays the authoritative total.
fn split_custom(amount: Decimal) -> InsuranceBreakdown {
    InsuranceBreakdown {
        social: amount * SOCIAL_RATE / TOTAL_RATE,
        health: amount * HEALTH_RATE / TOTAL_RATE,
        unemployment: amount * UNEMPLOYMENT_RATE / TOTAL_RATE,
        total: amount,
    }
}
