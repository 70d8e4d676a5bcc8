//! Evaluation of one monthly salary under one regime.
//!
//! # Steps
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Insurance contributions |
//! | 2    | Dependent deduction (per-dependent amount × dependents) |
//! | 3    | Total deduction (personal + dependent) |
//! | 4    | Taxable income (gross − insurance − total deduction, minimum 0) |
//! | 5    | Tax from the regime's bracket schedule |
//! | 6    | Net salary (gross − insurance − tax) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::evaluate_regime;
//! use pit_core::{OLD_REGIME, TaxInput};
//!
//! let input = TaxInput {
//!     dependents: 2,
//!     ..TaxInput::new(dec!(40000000))
//! };
//!
//! let result = evaluate_regime(&input, &OLD_REGIME).unwrap();
//!
//! assert_eq!(result.insurance.total, dec!(4200000));
//! assert_eq!(result.total_deduction, dec!(19800000));
//! assert_eq!(result.taxable_income, dec!(16000000));
//! assert_eq!(result.tax_amount, dec!(1650000));
//! assert_eq!(result.net_salary, dec!(34150000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::insurance::compute_insurance;
use crate::calculations::progressive::BracketSchedule;
use crate::error::InvalidInput;
use crate::models::{RegimeConfig, RegimeResult, TaxInput};

/// Calculator binding a [`TaxInput`] to a [`RegimeConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RegimeEvaluator<'a> {
    config: &'a RegimeConfig,
}

impl<'a> RegimeEvaluator<'a> {
    pub fn new(config: &'a RegimeConfig) -> Self {
        Self { config }
    }

    /// Runs every step and assembles the result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if the input fails [`TaxInput::validate`].
    /// Nothing is computed in that case.
    pub fn evaluate(
        &self,
        input: &TaxInput,
    ) -> Result<RegimeResult, InvalidInput> {
        let region = input.validate()?;

        let insurance = compute_insurance(
            input.gross_salary,
            region,
            input.insurance_mode,
            input.custom_insurance,
        )?;

        let dependent_deduction = self.dependent_deduction(input.dependents);
        let total_deduction = self.total_deduction(dependent_deduction);
        let taxable_income =
            self.taxable_income(input.gross_salary, insurance.total, total_deduction);

        let progressive = BracketSchedule::new(self.config.brackets).calculate(taxable_income);

        let net_salary = self.net_salary(input.gross_salary, insurance.total, progressive.tax);

        debug!(
            brackets = self.config.brackets.len(),
            gross = %input.gross_salary,
            taxable = %taxable_income,
            tax = %progressive.tax,
            net = %net_salary,
            "regime evaluated"
        );

        Ok(RegimeResult {
            gross_salary: input.gross_salary,
            insurance,
            personal_deduction: self.config.personal_deduction,
            dependent_deduction,
            total_deduction,
            taxable_income,
            tax_amount: progressive.tax,
            net_salary,
            current_bracket_label: progressive.bracket_label,
            bracket_lines: progressive.lines,
        })
    }

    fn dependent_deduction(
        &self,
        dependents: i32,
    ) -> Decimal {
        self.config.per_dependent_deduction * Decimal::from(dependents)
    }

    fn total_deduction(
        &self,
        dependent_deduction: Decimal,
    ) -> Decimal {
        self.config.personal_deduction + dependent_deduction
    }

    fn taxable_income(
        &self,
        gross_salary: Decimal,
        insurance_total: Decimal,
        total_deduction: Decimal,
    ) -> Decimal {
        max(gross_salary - insurance_total - total_deduction, Decimal::ZERO)
    }

    fn net_salary(
        &self,
        gross_salary: Decimal,
        insurance_total: Decimal,
        tax: Decimal,
    ) -> Decimal {
        gross_salary - insurance_total - tax
    }
}

/// Evaluates `input` under `config`. See [`RegimeEvaluator::evaluate`].
pub fn evaluate_regime(
    input: &TaxInput,
    config: &RegimeConfig,
) -> Result<RegimeResult, InvalidInput> {
    RegimeEvaluator::new(config).evaluate(input)
}
