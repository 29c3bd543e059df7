//! Comfort categories
//!
//! Qualitative labels derived from a numeric metric via the fixed thresholds
//! in [`crate::constants::bands`]. Bands are half-open on their upper bound and
//! evaluated in ascending order, first match wins, so every real number maps to
//! exactly one category. NaN compares false against every bound and lands in
//! the trailing catch-all; callers get NaN only by bypassing the formulas.
//!
//! Label text is part of the published output and must not change.

use core::fmt;

use crate::constants::bands::{PERCEPTION_BANDS_C, SIMMER_ZONE_BANDS_C};

/// Index of the first band whose upper bound `value` is strictly below,
/// or `bounds.len()` for the catch-all
fn band_index(value: f64, bounds: &[f64]) -> usize {
    bounds
        .iter()
        .position(|bound| value < *bound)
        .unwrap_or(bounds.len())
}

/// Thermal perception of a dew point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Perception {
    /// Dew point below 10°C
    ABitDry,
    /// 10 to 13°C
    VeryComfortable,
    /// 13 to 16°C
    Comfortable,
    /// 16 to 18°C
    OkForMost,
    /// 18 to 21°C
    SomewhatUncomfortable,
    /// 21 to 24°C
    VeryHumid,
    /// 24 to 26°C
    ExtremelyUncomfortable,
    /// 26°C and above
    SeverelyHigh,
}

impl Perception {
    /// All categories in ascending order
    pub const ALL: [Perception; 8] = [
        Self::ABitDry,
        Self::VeryComfortable,
        Self::Comfortable,
        Self::OkForMost,
        Self::SomewhatUncomfortable,
        Self::VeryHumid,
        Self::ExtremelyUncomfortable,
        Self::SeverelyHigh,
    ];

    /// Classify a dew point in °C
    pub fn from_dew_point(dew_point_c: f64) -> Self {
        Self::ALL[band_index(dew_point_c, &PERCEPTION_BANDS_C)]
    }

    /// Published label
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ABitDry => "A bit dry for some",
            Self::VeryComfortable => "Very comfortable",
            Self::Comfortable => "Comfortable",
            Self::OkForMost => "OK for most",
            Self::SomewhatUncomfortable => "Somewhat uncomfortable",
            Self::VeryHumid => "Very humid, quite uncomfortable",
            Self::ExtremelyUncomfortable => "Extremely uncomfortable",
            Self::SeverelyHigh => "Severely high",
        }
    }
}

impl fmt::Display for Perception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summer simmer zone of a simmer index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimmerZone {
    /// Below 21.1°C: no zone, published as an empty label
    NoZone,
    /// 21.1 to 25°C
    SlightlyCool,
    /// 25 to 28.3°C
    Comfortable,
    /// 28.3 to 32.8°C
    SlightlyWarm,
    /// 32.8 to 37.8°C
    IncreasingDiscomfort,
    /// 37.8 to 44.4°C
    ExtremelyWarm,
    /// 44.4 to 51.7°C
    DangerOfHeatstroke,
    /// 51.7 to 65.6°C
    ExtremeDangerOfHeatstroke,
    /// 65.6°C and above
    CirculatoryCollapseImminent,
}

impl SimmerZone {
    /// All zones in ascending order
    pub const ALL: [SimmerZone; 9] = [
        Self::NoZone,
        Self::SlightlyCool,
        Self::Comfortable,
        Self::SlightlyWarm,
        Self::IncreasingDiscomfort,
        Self::ExtremelyWarm,
        Self::DangerOfHeatstroke,
        Self::ExtremeDangerOfHeatstroke,
        Self::CirculatoryCollapseImminent,
    ];

    /// Classify a simmer index in °C
    pub fn from_simmer_index(simmer_index_c: f64) -> Self {
        Self::ALL[band_index(simmer_index_c, &SIMMER_ZONE_BANDS_C)]
    }

    /// Published label
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoZone => "",
            Self::SlightlyCool => "Slightly cool",
            Self::Comfortable => "Comfortable",
            Self::SlightlyWarm => "Slightly warm",
            Self::IncreasingDiscomfort => "Increasing discomfort",
            Self::ExtremelyWarm => "Extremely warm",
            Self::DangerOfHeatstroke => "Danger of heatstroke",
            Self::ExtremeDangerOfHeatstroke => "Extreme danger of heatstroke",
            Self::CirculatoryCollapseImminent => "Circulatory collapse imminent",
        }
    }
}

impl fmt::Display for SimmerZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Perception, SimmerZone};
    use serde::{Serialize, Serializer};

    impl Serialize for Perception {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl Serialize for SimmerZone {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perception_bands() {
        assert_eq!(Perception::from_dew_point(-5.0), Perception::ABitDry);
        assert_eq!(Perception::from_dew_point(9.99), Perception::ABitDry);
        assert_eq!(Perception::from_dew_point(10.0), Perception::VeryComfortable);
        assert_eq!(Perception::from_dew_point(14.0), Perception::Comfortable);
        assert_eq!(Perception::from_dew_point(17.0), Perception::OkForMost);
        assert_eq!(Perception::from_dew_point(18.0), Perception::SomewhatUncomfortable);
        assert_eq!(Perception::from_dew_point(23.99), Perception::VeryHumid);
        assert_eq!(Perception::from_dew_point(24.0), Perception::ExtremelyUncomfortable);
        assert_eq!(Perception::from_dew_point(26.0), Perception::SeverelyHigh);
        assert_eq!(Perception::from_dew_point(40.0), Perception::SeverelyHigh);
    }

    #[test]
    fn perception_labels_verbatim() {
        assert_eq!(Perception::from_dew_point(14.0).as_str(), "Comfortable");
        assert_eq!(Perception::VeryHumid.as_str(), "Very humid, quite uncomfortable");
        assert_eq!(Perception::OkForMost.as_str(), "OK for most");
    }

    #[test]
    fn simmer_zone_bands() {
        assert_eq!(SimmerZone::from_simmer_index(20.0), SimmerZone::NoZone);
        assert_eq!(SimmerZone::from_simmer_index(20.0).as_str(), "");
        assert_eq!(SimmerZone::from_simmer_index(21.1), SimmerZone::SlightlyCool);
        assert_eq!(SimmerZone::from_simmer_index(27.0), SimmerZone::Comfortable);
        assert_eq!(SimmerZone::from_simmer_index(30.75), SimmerZone::SlightlyWarm);
        assert_eq!(SimmerZone::from_simmer_index(37.8), SimmerZone::ExtremelyWarm);
        assert_eq!(SimmerZone::from_simmer_index(51.69), SimmerZone::DangerOfHeatstroke);
        assert_eq!(SimmerZone::from_simmer_index(65.6), SimmerZone::CirculatoryCollapseImminent);
        assert_eq!(
            SimmerZone::from_simmer_index(100.0).as_str(),
            "Circulatory collapse imminent"
        );
    }

    #[test]
    fn band_order_matches_category_order() {
        // Each bound opens the next category
        for (i, bound) in PERCEPTION_BANDS_C.iter().enumerate() {
            assert_eq!(Perception::from_dew_point(*bound), Perception::ALL[i + 1]);
        }
        for (i, bound) in SIMMER_ZONE_BANDS_C.iter().enumerate() {
            assert_eq!(SimmerZone::from_simmer_index(*bound), SimmerZone::ALL[i + 1]);
        }
    }
}
