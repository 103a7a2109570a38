use std::{fmt, str::FromStr};

use super::EnvironmentError;

/// Severity band of the ambient temperature envelope.
///
/// Parsed from and displayed as `Extra-Hot`, `Hot`, `Normal`, `Cold`, and
/// `Extra-Cold`. `Normal` is the ISA day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    ExtraHot,
    Hot,
    Normal,
    Cold,
    ExtraCold,
}

impl DayType {
    /// Every day type, hottest first.
    pub const ALL: [DayType; 5] = [
        DayType::ExtraHot,
        DayType::Hot,
        DayType::Normal,
        DayType::Cold,
        DayType::ExtraCold,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DayType::ExtraHot => "Extra-Hot",
            DayType::Hot => "Hot",
            DayType::Normal => "Normal",
            DayType::Cold => "Cold",
            DayType::ExtraCold => "Extra-Cold",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayType {
    type Err = EnvironmentError;

    /// Parses a canonical day type name. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayType::ALL
            .into_iter()
            .find(|day_type| day_type.name() == s)
            .ok_or_else(|| EnvironmentError::InvalidDayType { name: s.to_owned() })
    }
}

/// Time of day, used by the ground temperature regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Day => f.write_str("day"),
            TimeOfDay::Night => f.write_str("night"),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = EnvironmentError;

    /// Parses `day` or `night`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("day") {
            Ok(TimeOfDay::Day)
        } else if s.eq_ignore_ascii_case("night") {
            Ok(TimeOfDay::Night)
        } else {
            Err(EnvironmentError::InvalidTimeOfDay { name: s.to_owned() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_type_names_round_trip() {
        for day_type in DayType::ALL {
            assert_eq!(day_type.to_string().parse::<DayType>(), Ok(day_type));
        }
    }

    #[test]
    fn unknown_day_types_are_rejected() {
        for name in ["Mild", "extra-hot", "ExtraHot", "", " Hot"] {
            assert_eq!(
                name.parse::<DayType>(),
                Err(EnvironmentError::InvalidDayType {
                    name: name.to_owned()
                })
            );
        }
    }

    #[test]
    fn time_of_day_parsing() {
        assert_eq!("day".parse::<TimeOfDay>(), Ok(TimeOfDay::Day));
        assert_eq!("Night".parse::<TimeOfDay>(), Ok(TimeOfDay::Night));
        assert!(matches!(
            "dusk".parse::<TimeOfDay>(),
            Err(EnvironmentError::InvalidTimeOfDay { .. })
        ));
    }
}
