//! Inverse calculation: the gross salary that yields a desired net salary.
//!
//! Net salary is strictly increasing in gross salary for every insurance
//! mode and both regimes (all marginal rates are below 100%), so the gross
//! salary can be found by bisection.
//!
//! # Algorithm
//!
//! 1. Start with `low = target`, `high = 2 × target`.
//! 2. While the net at `high` is below target and `high < 5 × target`,
//!    grow `high` by 1.5×.
//! 3. Bisect on `floor((low + high) / 2)` until the interval is at most
//!    [`TOLERANCE`] wide or [`MAX_ITERATIONS`] is reached.
//! 4. Return the rounded midpoint of the final interval.
//!
//! If step 2 stops without the net at `high` reaching the target (for
//! example a custom insurance amount far above the target), the search
//! still runs and the result undershoots; this is logged as a warning and
//! reported in [`GrossSearch::target_bracketed`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::solve_gross_for_net;
//! use pit_core::{InsuranceMode, Regime};
//!
//! let gross = solve_gross_for_net(dec!(35405000), 2, 1, InsuranceMode::Official, None, Regime::New)
//!     .unwrap();
//!
//! assert!((gross - dec!(40000000)).abs() <= dec!(1000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::calculations::common::round_to_dong;
use crate::calculations::regime::RegimeEvaluator;
use crate::error::InvalidInput;
use crate::models::{InsuranceMode, Regime, TaxInput};

/// Width of the final search interval, in VND.
pub const TOLERANCE: Decimal = dec!(1000);

/// Hard cap on bisection steps.
pub const MAX_ITERATIONS: u32 = 100;

const INITIAL_HIGH_FACTOR: Decimal = dec!(2);
const EXPANSION_FACTOR: Decimal = dec!(1.5);
const EXPANSION_LIMIT_FACTOR: Decimal = dec!(5);

/// Outcome of a gross-from-net search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossSearch {
    /// Solved gross salary, rounded to whole VND.
    pub gross_salary: Decimal,
    /// Bisection steps performed.
    pub iterations: u32,
    /// Whether the net salary at the expanded upper bound reached the target.
    pub target_bracketed: bool,
}

/// Searches for the gross salary whose net salary under `regime` matches
/// `target_net` within [`TOLERANCE`].
///
/// `template` supplies dependents, region, and insurance settings; its
/// gross salary is ignored.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `target_net` is negative or the template
/// fails validation.
pub fn search_gross_for_net(
    target_net: Decimal,
    template: &TaxInput,
    regime: Regime,
) -> Result<GrossSearch, InvalidInput> {
    if target_net < Decimal::ZERO {
        return Err(InvalidInput::NegativeTargetNet(target_net));
    }

    let evaluator = RegimeEvaluator::new(regime.config());
    let net_at = |gross: Decimal| -> Result<Decimal, InvalidInput> {
        Ok(evaluator.evaluate(&template.with_gross(gross))?.net_salary)
    };

    let mut low = target_net;
    let mut high = target_net * INITIAL_HIGH_FACTOR;
    let expansion_limit = target_net * EXPANSION_LIMIT_FACTOR;

    let mut high_net = net_at(high)?;
    while high_net < target_net && high < expansion_limit {
        high *= EXPANSION_FACTOR;
        high_net = net_at(high)?;
    }

    let target_bracketed = high_net >= target_net;
    if !target_bracketed {
        warn!(
            target = %target_net,
            high = %high,
            high_net = %high_net,
            "upper bound does not reach target net salary; result is approximate"
        );
    }

    let mut iterations = 0;
    while high - low > TOLERANCE && iterations < MAX_ITERATIONS {
        let mid = ((low + high) / Decimal::TWO).floor();
        let mid_net = net_at(mid)?;
        trace!(iteration = iterations, %low, %high, %mid, %mid_net, "bisection step");

        if mid_net < target_net {
            low = mid;
        } else {
            high = mid;
        }
        iterations += 1;
    }

    let gross_salary = round_to_dong((low + high) / Decimal::TWO);
    debug!(
        target = %target_net,
        gross = %gross_salary,
        iterations,
        regime = %regime,
        "gross salary solved"
    );

    Ok(GrossSearch {
        gross_salary,
        iterations,
        target_bracketed,
    })
}

/// Gross salary whose net salary under `regime` is `target_net`, within
/// [`TOLERANCE`]. See [`search_gross_for_net`].
pub fn solve_gross_for_net(
    target_net: Decimal,
    dependents: i32,
    region: u8,
    insurance_mode: InsuranceMode,
    custom_amount: Option<Decimal>,
    regime: Regime,
) -> Result<Decimal, InvalidInput> {
    let template = TaxInput {
        gross_salary: Decimal::ZERO,
        dependents,
        region,
        insurance_mode,
        custom_insurance: custom_amount,
    };
    search_gross_for_net(target_net, &template, regime).map(|search| search.gross_salary)
}
