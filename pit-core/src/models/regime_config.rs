use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tax_bracket::{NEW_BRACKETS, OLD_BRACKETS, TaxBracket};

/// Deductions and bracket schedule of one legal regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegimeConfig {
    pub personal_deduction: Decimal,
    pub per_dependent_deduction: Decimal,
    pub brackets: &'static [TaxBracket],
}

pub const OLD_REGIME: RegimeConfig = RegimeConfig {
    personal_deduction: dec!(11000000),
    per_dependent_deduction: dec!(4400000),
    brackets: &OLD_BRACKETS,
};

pub const NEW_REGIME: RegimeConfig = RegimeConfig {
    personal_deduction: dec!(15500000),
    per_dependent_deduction: dec!(6200000),
    brackets: &NEW_BRACKETS,
};

/// The two rule-sets compared side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn all() -> &'static [Regime] {
        &[Regime::Old, Regime::New]
    }

    pub fn config(&self) -> &'static RegimeConfig {
        match self {
            Self::Old => &OLD_REGIME,
            Self::New => &NEW_REGIME,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Old => "Old law (7 brackets)",
            Self::New => "New law 2026 (5 brackets)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
