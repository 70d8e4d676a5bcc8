use pit_core::{InsuranceMode, Regime};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a VND amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must be non-negative, got '{0}'")]
    Negative(String),
}

/// Strips whitespace and the separators people type between thousands
/// (`30,000,000`, `30.000.000`, `30_000_000`, `30 000 000`).
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | '_') && !c.is_whitespace())
        .collect()
}

/// Parses a whole, non-negative VND amount.
///
/// VND has no minor unit, so `.` and `,` are only ever thousands separators.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    let amount: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;
    if amount < Decimal::ZERO {
        return Err(ParseAmountError::Negative(s.to_string()));
    }
    Ok(amount)
}

pub fn parse_insurance_mode(s: &str) -> Result<InsuranceMode, String> {
    InsuranceMode::parse(s)
        .ok_or_else(|| format!("unknown insurance mode '{s}' (expected official, none or custom)"))
}

pub fn parse_regime(s: &str) -> Result<Regime, String> {
    Regime::parse(s).ok_or_else(|| format!("unknown regime '{s}' (expected old or new)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_accepts_thousands_separators() {
        assert_eq!(parse_amount("30,000,000").unwrap(), dec!(30000000));
        assert_eq!(parse_amount("30.000.000").unwrap(), dec!(30000000));
        assert_eq!(parse_amount("30_000_000").unwrap(), dec!(30000000));
        assert_eq!(parse_amount("30 000 000").unwrap(), dec!(30000000));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  5000000 ").unwrap(), dec!(5000000));
    }

    #[test]
    fn parse_amount_rejects_empty() {
        assert!(matches!(parse_amount(""), Err(ParseAmountError::Empty)));
        assert!(matches!(parse_amount(" , "), Err(ParseAmountError::Empty)));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("30tr"),
            Err(ParseAmountError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert!(matches!(
            parse_amount("-1000"),
            Err(ParseAmountError::Negative(_))
        ));
    }

    #[test]
    fn parse_insurance_mode_reports_choices() {
        assert_eq!(parse_insurance_mode("none"), Ok(InsuranceMode::None));
        let err = parse_insurance_mode("half").unwrap_err();
        assert!(err.contains("official, none or custom"));
    }

    #[test]
    fn parse_regime_accepts_old_and_new() {
        assert_eq!(parse_regime("old"), Ok(Regime::Old));
        assert_eq!(parse_regime("New"), Ok(Regime::New));
        assert!(parse_regime("2025").is_err());
    }
}
