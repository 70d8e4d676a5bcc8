use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the employee's mandatory insurance contribution is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceMode {
    /// Statutory rates on the capped salary base.
    #[default]
    Official,
    /// No contribution at all.
    None,
    /// A caller-supplied total, split across categories for display.
    Custom,
}

impl InsuranceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::None => "none",
            Self::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "official" => Some(Self::Official),
            "none" => Some(Self::None),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Employee contributions by category.
///
/// `total` is authoritative: in custom mode it is the supplied amount, and
/// the three parts are a proportional split that may differ from it by
/// decimal rounding noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBreakdown {
    pub social: Decimal,
    pub health: Decimal,
    pub unemployment: Decimal,
    pub total: Decimal,
}

impl InsuranceBreakdown {
    pub fn zero() -> Self {
        Self {
            social: Decimal::ZERO,
            health: Decimal::ZERO,
            unemployment: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(InsuranceMode::parse("Official"), Some(InsuranceMode::Official));
        assert_eq!(InsuranceMode::parse("NONE"), Some(InsuranceMode::None));
        assert_eq!(InsuranceMode::parse(" custom "), Some(InsuranceMode::Custom));
        assert_eq!(InsuranceMode::parse("partial"), None);
    }

    #[test]
    fn default_mode_is_official() {
        assert_eq!(InsuranceMode::default(), InsuranceMode::Official);
    }

    #[test]
    fn zero_breakdown_has_zero_total() {
        assert_eq!(InsuranceBreakdown::zero().total, Decimal::ZERO);
    }
}
