//! A salary request as a user states it: either the gross salary or the
//! net salary they want to take home.

use std::fmt;

use pit_core::calculations::{compare, search_gross_for_net};
use pit_core::{ComparisonResult, InsuranceMode, InvalidInput, Regime, TaxInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Regime used to turn a net salary into a gross one before comparing.
pub const NET_RESOLUTION_REGIME: Regime = Regime::New;

/// Whether [`Scenario::salary`] is the gross or the net amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryBasis {
    #[default]
    Gross,
    Net,
}

impl SalaryBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gross => "gross",
            Self::Net => "net",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gross" => Some(Self::Gross),
            "net" => Some(Self::Net),
            _ => None,
        }
    }
}

impl fmt::Display for SalaryBasis {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comparison request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub basis: SalaryBasis,
    pub salary: Decimal,
    pub dependents: i32,
    pub region: u8,
    pub insurance_mode: InsuranceMode,
    pub custom_insurance: Option<Decimal>,
}

impl Scenario {
    /// Builds the engine input. A net salary is first inverted to gross
    /// under [`NET_RESOLUTION_REGIME`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] for any field the engine rejects.
    pub fn resolve_input(&self) -> Result<TaxInput, InvalidInput> {
        let template = TaxInput {
            gross_salary: self.salary,
            dependents: self.dependents,
            region: self.region,
            insurance_mode: self.insurance_mode,
            custom_insurance: self.custom_insurance,
        };

        match self.basis {
            SalaryBasis::Gross => {
                template.validate()?;
                Ok(template)
            }
            SalaryBasis::Net => {
                let search = search_gross_for_net(self.salary, &template, NET_RESOLUTION_REGIME)?;
                Ok(template.with_gross(search.gross_salary))
            }
        }
    }

    /// Resolves the input and runs the old/new comparison on it.
    pub fn compare(&self) -> Result<ComparisonResult, InvalidInput> {
        compare(&self.resolve_input()?)
    }
}
