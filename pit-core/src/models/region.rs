use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Regional minimum-wage zone. The zone only affects the ceiling on the
/// unemployment-insurance base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    One,
    Two,
    Three,
    Four,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[Region::One, Region::Two, Region::Three, Region::Four]
    }

    pub fn id(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Resolves a zone number; anything outside 1..=4 is rejected rather
    /// than silently mapped to zone 1.
    pub fn from_id(id: u8) -> Result<Self, InvalidInput> {
        match id {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(InvalidInput::UnknownRegion(other)),
        }
    }

    /// Twenty times the zone's 2026 regional minimum wage.
    pub fn unemployment_ceiling(&self) -> Decimal {
        match self {
            Self::One => dec!(99200000),
            Self::Two => dec!(88200000),
            Self::Three => dec!(77200000),
            Self::Four => dec!(69000000),
        }
    }
}

impl TryFrom<u8> for Region {
    type Error = InvalidInput;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_id_resolves_all_zones() {
        for region in Region::all() {
            assert_eq!(Region::from_id(region.id()), Ok(*region));
        }
    }

    #[test]
    fn from_id_rejects_zero_and_five() {
        assert_eq!(Region::from_id(0), Err(InvalidInput::UnknownRegion(0)));
        assert_eq!(Region::from_id(5), Err(InvalidInput::UnknownRegion(5)));
    }

    #[test]
    fn ceilings_decrease_by_zone() {
        let ceilings: Vec<Decimal> = Region::all()
            .iter()
            .map(Region::unemployment_ceiling)
            .collect();

        assert_eq!(
            ceilings,
            vec![dec!(99200000), dec!(88200000), dec!(77200000), dec!(69000000)]
        );
    }

    #[test]
    fn try_from_matches_from_id() {
        assert_eq!(Region::try_from(3), Ok(Region::Three));
        assert!(Region::try_from(9).is_err());
    }
}
