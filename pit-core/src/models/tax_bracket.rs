use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One marginal-rate band of a progressive schedule.
///
/// `upper_limit` is an inclusive bound on taxable income; `None` marks the
/// open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
    pub label: &'static str,
}

/// Seven-bracket schedule in force before 2026.
pub const OLD_BRACKETS: [TaxBracket; 7] = [
    TaxBracket {
        upper_limit: Some(dec!(5000000)),
        rate: dec!(0.05),
        label: "Bracket 1",
    },
    TaxBracket {
        upper_limit: Some(dec!(10000000)),
        rate: dec!(0.10),
        label: "Bracket 2",
    },
    TaxBracket {
        upper_limit: Some(dec!(18000000)),
        rate: dec!(0.15),
        label: "Bracket 3",
    },
    TaxBracket {
        upper_limit: Some(dec!(32000000)),
        rate: dec!(0.20),
        label: "Bracket 4",
    },
    TaxBracket {
        upper_limit: Some(dec!(52000000)),
        rate: dec!(0.25),
        label: "Bracket 5",
    },
    TaxBracket {
        upper_limit: Some(dec!(80000000)),
        rate: dec!(0.30),
        label: "Bracket 6",
    },
    TaxBracket {
        upper_limit: None,
        rate: dec!(0.35),
        label: "Bracket 7",
    },
];

/// Five-bracket schedule effective 1 January 2026.
pub const NEW_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        upper_limit: Some(dec!(10000000)),
        rate: dec!(0.05),
        label: "Bracket 1",
    },
    TaxBracket {
        upper_limit: Some(dec!(30000000)),
        rate: dec!(0.15),
        label: "Bracket 2",
    },
    TaxBracket {
        upper_limit: Some(dec!(60000000)),
        rate: dec!(0.25),
        label: "Bracket 3",
    },
    TaxBracket {
        upper_limit: Some(dec!(100000000)),
        rate: dec!(0.30),
        label: "Bracket 4",
    },
    TaxBracket {
        upper_limit: None,
        rate: dec!(0.35),
        label: "Bracket 5",
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Checks the shape every schedule must have: strictly ascending limits,
    /// rates within [0, 1], and a single open-ended bracket in last position.
    fn assert_well_formed(brackets: &[TaxBracket]) {
        assert!(!brackets.is_empty());

        let unbounded = brackets.iter().filter(|b| b.upper_limit.is_none()).count();
        assert_eq!(unbounded, 1, "exactly one bracket must be open-ended");
        assert!(brackets.last().unwrap().upper_limit.is_none());

        let limits: Vec<Decimal> = brackets.iter().filter_map(|b| b.upper_limit).collect();
        for pair in limits.windows(2) {
            assert!(pair[0] < pair[1], "limits must be strictly ascending: {pair:?}");
        }
        assert!(limits[0] > Decimal::ZERO);

        for bracket in brackets {
            assert!(bracket.rate >= Decimal::ZERO && bracket.rate <= Decimal::ONE);
        }
    }

    #[test]
    fn old_brackets_are_well_formed() {
        assert_well_formed(&OLD_BRACKETS);
    }

    #[test]
    fn new_brackets_are_well_formed() {
        assert_well_formed(&NEW_BRACKETS);
    }

    #[test]
    fn rates_increase_with_each_bracket() {
        for brackets in [&OLD_BRACKETS[..], &NEW_BRACKETS[..]] {
            for pair in brackets.windows(2) {
                assert!(pair[0].rate < pair[1].rate);
            }
        }
    }

    #[test]
    fn both_schedules_share_the_top_rate() {
        assert_eq!(OLD_BRACKETS[6].rate, dec!(0.35));
        assert_eq!(NEW_BRACKETS[4].rate, dec!(0.35));
    }

    #[test]
    fn labels_are_numbered_from_one() {
        for (i, bracket) in NEW_BRACKETS.iter().enumerate() {
            assert_eq!(bracket.label, format!("Bracket {}", i + 1));
        }
    }
}
