//! Bay locations for capital ships and small craft.
//!
//! Location codes follow the rules engine's numbering, but the order bays are
//! printed in does not. Warship sheets list the nose first, then the forward
//! sides, the broadsides, the aft sides and finally the aft, so the display
//! order lives in its own [`Location::weight`] table.
//!
//! Small craft and dropship wings reuse codes 1 and 2, so
//! [`Location::LEFT_WING`] and [`Location::RIGHT_WING`] are aliases of the
//! forward sides rather than separate variants.

use serde::{Deserialize, Serialize};

/// Display weight given to the aft and to any location outside the table.
pub const FALLBACK_WEIGHT: u8 = 9;

/// A structural location a weapon bay can be mounted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Nose,
    ForwardLeft,
    ForwardRight,
    Aft,
    AftLeft,
    AftRight,
    LeftBroadside,
    RightBroadside,
    /// Any location code the print tables do not know about.
    Other(u8),
}

impl Location {
    pub const LEFT_WING: Location = Location::ForwardLeft;
    pub const RIGHT_WING: Location = Location::ForwardRight;

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Nose,
            1 => Self::ForwardLeft,
            2 => Self::ForwardRight,
            3 => Self::Aft,
            4 => Self::AftLeft,
            5 => Self::AftRight,
            6 => Self::LeftBroadside,
            7 => Self::RightBroadside,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Nose => 0,
            Self::ForwardLeft => 1,
            Self::ForwardRight => 2,
            Self::Aft => 3,
            Self::AftLeft => 4,
            Self::AftRight => 5,
            Self::LeftBroadside => 6,
            Self::RightBroadside => 7,
            Self::Other(code) => code,
        }
    }

    /// Short label used in the location column of the weapon table.
    pub fn abbreviation(self) -> String {
        match self {
            Self::Nose => "N".to_string(),
            Self::ForwardLeft => "FLS".to_string(),
            Self::ForwardRight => "FRS".to_string(),
            Self::Aft => "A".to_string(),
            Self::AftLeft => "ALS".to_string(),
            Self::AftRight => "ARS".to_string(),
            Self::LeftBroadside => "LBS".to_string(),
            Self::RightBroadside => "RBS".to_string(),
            Self::Other(code) => format!("LOC{code}"),
        }
    }

    /// Whether the rear flag changes how this location prints.
    ///
    /// Only the forward sides (wings on small craft) carry separate forward
    /// and rear-facing bays.
    pub fn is_side_mount(self) -> bool {
        matches!(self, Self::ForwardLeft | Self::ForwardRight)
    }

    /// Sort weight for the printed weapon table.
    ///
    /// | Location | Weight |
    /// |----------|--------|
    /// | Nose | 0 |
    /// | Forward left | 1 (rear: 2) |
    /// | Forward right | 3 (rear: 4) |
    /// | Left broadside | 5 |
    /// | Right broadside | 6 |
    /// | Aft left | 7 |
    /// | Aft right | 8 |
    /// | Aft, anything else | 9 |
    pub fn weight(self, rear: bool) -> u8 {
        match self {
            Self::Nose => 0,
            Self::ForwardLeft => {
                if rear {
                    2
                } else {
                    1
                }
            }
            Self::ForwardRight => {
                if rear {
                    4
                } else {
                    3
                }
            }
            Self::LeftBroadside => 5,
            Self::RightBroadside => 6,
            Self::AftLeft => 7,
            Self::AftRight => 8,
            Self::Aft | Self::Other(_) => FALLBACK_WEIGHT,
        }
    }

    /// The mirror image of this location across the centreline, if it has one.
    pub fn mirror(self) -> Option<Location> {
        match self {
            Self::ForwardLeft => Some(Self::ForwardRight),
            Self::ForwardRight => Some(Self::ForwardLeft),
            Self::AftLeft => Some(Self::AftRight),
            Self::AftRight => Some(Self::AftLeft),
            Self::LeftBroadside => Some(Self::RightBroadside),
            Self::RightBroadside => Some(Self::LeftBroadside),
            Self::Nose | Self::Aft | Self::Other(_) => None,
        }
    }
}

/// Whether two bays sit on opposing sides of the hull.
///
/// Forward sides (and wings) only pair when both bays face the same way.
/// Aft sides and broadsides have no rear-facing variant, so their rear flags
/// are ignored.
pub fn is_opposing(a: Location, b: Location, rear_a: bool, rear_b: bool) -> bool {
    if a.mirror() != Some(b) {
        return false;
    }
    if a.is_side_mount() {
        rear_a == rear_b
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [Location; 8] = [
        Location::Nose,
        Location::ForwardLeft,
        Location::ForwardRight,
        Location::Aft,
        Location::AftLeft,
        Location::AftRight,
        Location::LeftBroadside,
        Location::RightBroadside,
    ];

    #[test]
    fn test_code_round_trip() {
        for loc in TABLE {
            assert_eq!(Location::from_code(loc.code()), loc);
        }
        assert_eq!(Location::from_code(12), Location::Other(12));
        assert_eq!(Location::Other(12).code(), 12);
    }

    #[test]
    fn test_wings_alias_forward_sides() {
        assert_eq!(Location::LEFT_WING.code(), 1);
        assert_eq!(Location::RIGHT_WING.code(), 2);
        assert_eq!(Location::LEFT_WING, Location::ForwardLeft);
    }

    #[test]
    fn test_weight_table() {
        assert_eq!(Location::Nose.weight(false), 0);
        assert_eq!(Location::ForwardLeft.weight(false), 1);
        assert_eq!(Location::ForwardLeft.weight(true), 2);
        assert_eq!(Location::ForwardRight.weight(false), 3);
        assert_eq!(Location::ForwardRight.weight(true), 4);
        assert_eq!(Location::LeftBroadside.weight(false), 5);
        assert_eq!(Location::RightBroadside.weight(true), 6);
        assert_eq!(Location::AftLeft.weight(false), 7);
        assert_eq!(Location::AftRight.weight(false), 8);
        assert_eq!(Location::Aft.weight(false), 9);
        assert_eq!(Location::Other(42).weight(true), FALLBACK_WEIGHT);
    }

    #[test]
    fn test_weight_differs_from_code_order() {
        // Broadsides have higher codes than the aft sides but print before them.
        assert!(Location::LeftBroadside.code() > Location::AftLeft.code());
        assert!(Location::LeftBroadside.weight(false) < Location::AftLeft.weight(false));
    }

    #[test]
    fn test_forward_sides_need_matching_rear() {
        let (fl, fr) = (Location::ForwardLeft, Location::ForwardRight);
        assert!(is_opposing(fl, fr, false, false));
        assert!(is_opposing(fl, fr, true, true));
        assert!(!is_opposing(fl, fr, false, true));
        assert!(!is_opposing(fr, fl, true, false));
    }

    #[test]
    fn test_aft_sides_and_broadsides_ignore_rear() {
        assert!(is_opposing(Location::AftLeft, Location::AftRight, false, true));
        assert!(is_opposing(Location::AftRight, Location::AftLeft, true, false));
        assert!(is_opposing(
            Location::LeftBroadside,
            Location::RightBroadside,
            true,
            false
        ));
    }

    #[test]
    fn test_non_mirrors_never_oppose() {
        assert!(!is_opposing(Location::ForwardLeft, Location::AftLeft, false, false));
        assert!(!is_opposing(Location::ForwardLeft, Location::ForwardLeft, false, false));
        assert!(!is_opposing(Location::Nose, Location::Aft, false, false));
        assert!(!is_opposing(Location::Other(9), Location::Other(10), false, false));
    }

    #[test]
    fn test_opposing_is_symmetric() {
        for a in TABLE {
            for b in TABLE {
                for (ra, rb) in [(false, false), (false, true), (true, false), (true, true)] {
                    assert_eq!(
                        is_opposing(a, b, ra, rb),
                        is_opposing(b, a, rb, ra),
                        "{a:?}/{b:?} rear {ra}/{rb}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(Location::ForwardLeft.abbreviation(), "FLS");
        assert_eq!(Location::RightBroadside.abbreviation(), "RBS");
        assert_eq!(Location::Other(11).abbreviation(), "LOC11");
    }
}
