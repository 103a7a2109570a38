//! Temperature envelope: static temperature by regime, day type, and altitude band.
//!
//! Each (regime, day type) pair maps to an [`Envelope`], an ordered list of
//! altitude bands followed by the adjustment used above the last band. A band
//! is selected by its upper bound, and every bound carries its own comparison
//! operator because the tables are not uniform: the ground Extra-Hot, Hot,
//! and Cold rows switch at `< 15000 ft` while every other row uses `≤`.
//!
//! Flight envelope (Mach > 0):
//!
//! | day type   | ≤ 15000 ft | ≤ 35000 ft              | above        |
//! |------------|------------|-------------------------|--------------|
//! | Extra-Hot  | ISA + 40   | ISA + 35                | ISA + 30     |
//! | Hot        | ISA + 20   | ISA + 15                | ISA + 10     |
//! | Normal     | ISA        | ISA                     | ISA          |
//! | Cold       | ISA − 30   | ISA − 10                | ISA − 15     |
//! | Extra-Cold | −55 °C     | ISA − 30 (≤ 30000 ft)   | ISA − 20     |
//!
//! Ground envelope (Mach = 0):
//!
//! | day type   | low band              | above                    |
//! |------------|-----------------------|--------------------------|
//! | Extra-Hot  | ISA + 40 (< 15000 ft) | ISA + 45                 |
//! | Hot        | ISA + 30 (< 15000 ft) | ISA + 25                 |
//! | Normal     | ISA                   | ISA                      |
//! | Cold       | ISA − 30 (< 15000 ft) | ISA − 5                  |
//! | Extra-Cold | −55 °C (≤ 10000 ft)   | 0.005·altitude − 105 °C  |
//!
//! The ground Extra-Cold high band is a function of raw altitude in feet, not
//! an ISA offset.

use std::fmt;

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use super::DayType;

use Adjustment::{Absolute, AltitudeLinear, IsaOffset};
use UpperBound::{AtMost, Below};

/// Which envelope table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Aircraft moving, Mach > 0.
    Flight,
    /// Aircraft stationary, Mach = 0.
    Ground,
}

impl Regime {
    /// Selects the regime from a Mach number.
    ///
    /// Any nonzero speed is flight. There is no blending between the two tables.
    #[must_use]
    pub fn from_mach(mach: f64) -> Self {
        if mach == 0.0 {
            Regime::Ground
        } else {
            Regime::Flight
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Flight => f.write_str("flight"),
            Regime::Ground => f.write_str("ground"),
        }
    }
}

/// How a band turns the ISA temperature into a static temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// ISA temperature plus an offset in kelvin.
    IsaOffset(f64),
    /// A fixed temperature in °C, independent of ISA.
    Absolute(f64),
    /// `slope·altitude_ft + intercept`, in °C.
    AltitudeLinear { slope: f64, intercept: f64 },
}

impl Adjustment {
    /// Applies this adjustment at `altitude_ft` given the ISA temperature there.
    #[must_use]
    pub fn apply(
        self,
        altitude_ft: f64,
        isa: ThermodynamicTemperature,
    ) -> ThermodynamicTemperature {
        match self {
            Adjustment::IsaOffset(offset) => {
                isa + TemperatureInterval::new::<delta_celsius>(offset)
            }
            Adjustment::Absolute(celsius) => {
                ThermodynamicTemperature::new::<degree_celsius>(celsius)
            }
            Adjustment::AltitudeLinear { slope, intercept } => {
                ThermodynamicTemperature::new::<degree_celsius>(slope * altitude_ft + intercept)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum UpperBound {
    /// Band includes altitudes `≤` the bound.
    AtMost(f64),
    /// Band includes altitudes `<` the bound.
    Below(f64),
}

impl UpperBound {
    fn contains(self, altitude_ft: f64) -> bool {
        match self {
            UpperBound::AtMost(bound) => altitude_ft <= bound,
            UpperBound::Below(bound) => altitude_ft < bound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Band {
    pub(crate) upper: UpperBound,
    pub(crate) adjustment: Adjustment,
}

/// Ordered bands for one (regime, day type) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Envelope {
    pub(crate) bands: &'static [Band],
    pub(crate) above: Adjustment,
}

impl Envelope {
    /// Returns the adjustment of the first band containing `altitude_ft`.
    pub(crate) fn adjustment(&self, altitude_ft: f64) -> Adjustment {
        self.bands
            .iter()
            .find(|band| band.upper.contains(altitude_ft))
            .map_or(self.above, |band| band.adjustment)
    }
}

const fn band(upper: UpperBound, adjustment: Adjustment) -> Band {
    Band { upper, adjustment }
}

static FLIGHT_EXTRA_HOT: Envelope = Envelope {
    bands: &[
        band(AtMost(15_000.0), IsaOffset(40.0)),
        band(AtMost(35_000.0), IsaOffset(35.0)),
    ],
    above: IsaOffset(30.0),
};

static FLIGHT_HOT: Envelope = Envelope {
    bands: &[
        band(AtMost(15_000.0), IsaOffset(20.0)),
        band(AtMost(35_000.0), IsaOffset(15.0)),
    ],
    above: IsaOffset(10.0),
};

static FLIGHT_NORMAL: Envelope = Envelope {
    bands: &[],
    above: IsaOffset(0.0),
};

static FLIGHT_COLD: Envelope = Envelope {
    bands: &[
        band(AtMost(15_000.0), IsaOffset(-30.0)),
        band(AtMost(35_000.0), IsaOffset(-10.0)),
    ],
    above: IsaOffset(-15.0),
};

static FLIGHT_EXTRA_COLD: Envelope = Envelope {
    bands: &[
        band(AtMost(15_000.0), Absolute(-55.0)),
        band(AtMost(30_000.0), IsaOffset(-30.0)),
    ],
    above: IsaOffset(-20.0),
};

static GROUND_EXTRA_HOT: Envelope = Envelope {
    bands: &[band(Below(15_000.0), IsaOffset(40.0))],
    above: IsaOffset(45.0),
};

static GROUND_HOT: Envelope = Envelope {
    bands: &[band(Below(15_000.0), IsaOffset(30.0))],
    above: IsaOffset(25.0),
};

static GROUND_NORMAL: Envelope = Envelope {
    bands: &[],
    above: IsaOffset(0.0),
};

static GROUND_COLD: Envelope = Envelope {
    bands: &[band(Below(15_000.0), IsaOffset(-30.0))],
    above: IsaOffset(-5.0),
};

static GROUND_EXTRA_COLD: Envelope = Envelope {
    bands: &[band(AtMost(10_000.0), Absolute(-55.0))],
    above: AltitudeLinear {
        slope: 0.005,
        intercept: -105.0,
    },
};

/// Returns the envelope for a regime and day type.
pub(crate) fn envelope(regime: Regime, day_type: DayType) -> &'static Envelope {
    match (regime, day_type) {
        (Regime::Flight, DayType::ExtraHot) => &FLIGHT_EXTRA_HOT,
        (Regime::Flight, DayType::Hot) => &FLIGHT_HOT,
        (Regime::Flight, DayType::Normal) => &FLIGHT_NORMAL,
        (Regime::Flight, DayType::Cold) => &FLIGHT_COLD,
        (Regime::Flight, DayType::ExtraCold) => &FLIGHT_EXTRA_COLD,
        (Regime::Ground, DayType::ExtraHot) => &GROUND_EXTRA_HOT,
        (Regime::Ground, DayType::Hot) => &GROUND_HOT,
        (Regime::Ground, DayType::Normal) => &GROUND_NORMAL,
        (Regime::Ground, DayType::Cold) => &GROUND_COLD,
        (Regime::Ground, DayType::ExtraCold) => &GROUND_EXTRA_COLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::Adjustment::{Absolute, AltitudeLinear, IsaOffset};
    use crate::support::atmosphere::isa_temperature;

    fn adjustment(regime: Regime, day_type: DayType, altitude_ft: f64) -> Adjustment {
        envelope(regime, day_type).adjustment(altitude_ft)
    }

    #[test]
    fn regime_from_mach() {
        assert_eq!(Regime::from_mach(0.0), Regime::Ground);
        assert_eq!(Regime::from_mach(-0.0), Regime::Ground);
        assert_eq!(Regime::from_mach(1e-6), Regime::Flight);
        assert_eq!(Regime::from_mach(0.85), Regime::Flight);
    }

    #[test]
    fn flight_extra_hot() {
        let f = |h| adjustment(Regime::Flight, DayType::ExtraHot, h);
        assert_eq!(f(0.0), IsaOffset(40.0));
        assert_eq!(f(15_000.0), IsaOffset(40.0));
        assert_eq!(f(15_000.0001), IsaOffset(35.0));
        assert_eq!(f(35_000.0), IsaOffset(35.0));
        assert_eq!(f(35_000.0001), IsaOffset(30.0));
    }

    #[test]
    fn flight_hot() {
        let f = |h| adjustment(Regime::Flight, DayType::Hot, h);
        assert_eq!(f(15_000.0), IsaOffset(20.0));
        assert_eq!(f(20_000.0), IsaOffset(15.0));
        assert_eq!(f(35_000.0), IsaOffset(15.0));
        assert_eq!(f(40_000.0), IsaOffset(10.0));
    }

    #[test]
    fn flight_cold() {
        let f = |h| adjustment(Regime::Flight, DayType::Cold, h);
        assert_eq!(f(15_000.0), IsaOffset(-30.0));
        assert_eq!(f(15_001.0), IsaOffset(-10.0));
        assert_eq!(f(35_000.0), IsaOffset(-10.0));
        assert_eq!(f(35_001.0), IsaOffset(-15.0));
    }

    #[test]
    fn flight_extra_cold_switches_at_30000() {
        let f = |h| adjustment(Regime::Flight, DayType::ExtraCold, h);
        assert_eq!(f(0.0), Absolute(-55.0));
        assert_eq!(f(15_000.0), Absolute(-55.0));
        assert_eq!(f(15_000.0001), IsaOffset(-30.0));
        assert_eq!(f(30_000.0), IsaOffset(-30.0));
        assert_eq!(f(30_000.0001), IsaOffset(-20.0));
        assert_eq!(f(35_000.0001), IsaOffset(-20.0));
    }

    #[test]
    fn ground_low_band_excludes_15000() {
        let cases = [
            (DayType::ExtraHot, 40.0, 45.0),
            (DayType::Hot, 30.0, 25.0),
            (DayType::Cold, -30.0, -5.0),
        ];
        for (day_type, low, high) in cases {
            let f = |h| adjustment(Regime::Ground, day_type, h);
            assert_eq!(f(0.0), IsaOffset(low), "{day_type} at 0 ft");
            assert_eq!(f(14_999.9999), IsaOffset(low), "{day_type} below 15000 ft");
            assert_eq!(f(15_000.0), IsaOffset(high), "{day_type} at 15000 ft");
        }
    }

    #[test]
    fn ground_extra_cold_switches_at_10000() {
        let f = |h| adjustment(Regime::Ground, DayType::ExtraCold, h);
        assert_eq!(f(10_000.0), Absolute(-55.0));
        assert_eq!(
            f(10_000.0001),
            AltitudeLinear {
                slope: 0.005,
                intercept: -105.0
            }
        );
    }

    #[test]
    fn normal_tracks_isa_everywhere() {
        for regime in [Regime::Flight, Regime::Ground] {
            for h in [0.0, 10_000.0, 15_000.0, 30_000.0, 35_000.0, 50_000.0] {
                assert_eq!(adjustment(regime, DayType::Normal, h), IsaOffset(0.0));
            }
        }
    }

    #[test]
    fn apply_adjustments() {
        let isa = isa_temperature(40_000.0);

        assert_relative_eq!(
            IsaOffset(10.0)
                .apply(40_000.0, isa)
                .get::<degree_celsius>(),
            -46.5,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            Absolute(-55.0).apply(40_000.0, isa).get::<degree_celsius>(),
            -55.0,
            epsilon = 1e-9
        );
        let linear = AltitudeLinear {
            slope: 0.005,
            intercept: -105.0,
        };
        assert_relative_eq!(
            linear.apply(12_000.0, isa).get::<degree_celsius>(),
            -45.0,
            epsilon = 1e-9
        );
    }
}
