use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::insurance::InsuranceMode;
use super::region::Region;
use crate::error::InvalidInput;

/// A single monthly-salary calculation request.
///
/// Fields hold raw caller values; [`TaxInput::validate`] is the gate every
/// engine operation passes through before computing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub gross_salary: Decimal,
    pub dependents: i32,
    /// Zone number, 1 to 4.
    pub region: u8,
    pub insurance_mode: InsuranceMode,
    /// Required when `insurance_mode` is [`InsuranceMode::Custom`], ignored otherwise.
    pub custom_insurance: Option<Decimal>,
}

impl TaxInput {
    /// Official insurance, zone 1, no dependents.
    pub fn new(gross_salary: Decimal) -> Self {
        Self {
            gross_salary,
            dependents: 0,
            region: 1,
            insurance_mode: InsuranceMode::Official,
            custom_insurance: None,
        }
    }

    /// Copy of this input with a different gross salary.
    pub fn with_gross(
        &self,
        gross_salary: Decimal,
    ) -> Self {
        Self {
            gross_salary,
            ..self.clone()
        }
    }

    /// Checks every field and returns the resolved region.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if:
    /// - `gross_salary` is negative
    /// - `dependents` is negative
    /// - `region` is outside 1..=4
    /// - custom insurance is selected without an amount, or with a negative one
    pub fn validate(&self) -> Result<Region, InvalidInput> {
        if self.gross_salary < Decimal::ZERO {
            return Err(InvalidInput::NegativeGrossSalary(self.gross_salary));
        }
        if self.dependents < 0 {
            return Err(InvalidInput::NegativeDependents(self.dependents));
        }
        let region = Region::from_id(self.region)?;
        if self.insurance_mode == InsuranceMode::Custom {
            match self.custom_insurance {
                None => return Err(InvalidInput::MissingCustomInsurance),
                Some(amount) if amount < Decimal::ZERO => {
                    return Err(InvalidInput::NegativeCustomInsurance(amount));
                }
                Some(_) => {}
            }
        }
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        let input = TaxInput::new(dec!(30000000));

        assert_eq!(input.validate(), Ok(Region::One));
    }

    #[test]
    fn validate_rejects_negative_gross() {
        let input = TaxInput::new(dec!(-1));

        assert_eq!(
            input.validate(),
            Err(InvalidInput::NegativeGrossSalary(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_negative_dependents() {
        let input = TaxInput {
            dependents: -2,
            ..TaxInput::new(dec!(30000000))
        };

        assert_eq!(input.validate(), Err(InvalidInput::NegativeDependents(-2)));
    }

    #[test]
    fn validate_rejects_unknown_region() {
        let input = TaxInput {
            region: 5,
            ..TaxInput::new(dec!(30000000))
        };

        assert_eq!(input.validate(), Err(InvalidInput::UnknownRegion(5)));
    }

    #[test]
    fn validate_requires_custom_amount() {
        let input = TaxInput {
            insurance_mode: InsuranceMode::Custom,
            ..TaxInput::new(dec!(30000000))
        };

        assert_eq!(input.validate(), Err(InvalidInput::MissingCustomInsurance));
    }

    #[test]
    fn validate_rejects_negative_custom_amount() {
        let input = TaxInput {
            insurance_mode: InsuranceMode::Custom,
            custom_insurance: Some(dec!(-500)),
            ..TaxInput::new(dec!(30000000))
        };

        assert_eq!(
            input.validate(),
            Err(InvalidInput::NegativeCustomInsurance(dec!(-500)))
        );
    }

    #[test]
    fn validate_ignores_custom_amount_outside_custom_mode() {
        let input = TaxInput {
            custom_insurance: Some(dec!(-500)),
            ..TaxInput::new(dec!(30000000))
        };

        assert!(input.validate().is_ok());
    }

    #[test]
    fn with_gross_keeps_other_fields() {
        let input = TaxInput {
            dependents: 2,
            region: 3,
            ..TaxInput::new(dec!(10000000))
        };

        let changed = input.with_gross(dec!(20000000));

        assert_eq!(changed.gross_salary, dec!(20000000));
        assert_eq!(changed.dependents, 2);
        assert_eq!(changed.region, 3);
    }
}
