//! Operating condition resolution.
//!
//! An [`OperatingCondition`] is a named scenario: day type, altitude, Mach
//! number, and optionally a time of day. Every query is a pure function of
//! those values and the [`AmbientAssumptions`].
//!
//! Data flows one way: ISA temperature → envelope band → static temperature →
//! total temperature → (solar load, sky radiation, ground temperature).

mod assumptions;
mod day_type;
mod envelope;
mod error;
mod ground;
mod radiation;
mod results;

pub use assumptions::AmbientAssumptions;
pub use day_type::{DayType, TimeOfDay};
pub use envelope::{Adjustment, Regime};
pub use error::EnvironmentError;
pub use radiation::STEFAN_BOLTZMANN;
pub use results::Environment;

use log::{debug, trace};
use uom::si::{
    f64::{HeatFluxDensity, Length, Pressure, TemperatureInterval, ThermodynamicTemperature},
    length::foot,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    air::AirProperties,
    atmosphere::{self, constants::GAMMA},
    constraint::{Constrained, FiniteNonNegative},
    units::TemperatureDifference,
};

use ground::GroundInputs;

/// A named aircraft operating condition.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingCondition {
    name: String,
    day_type: DayType,
    altitude_ft: f64,
    mach: f64,
    time: Option<TimeOfDay>,
    assumptions: AmbientAssumptions,
}

impl OperatingCondition {
    /// Creates an operating condition with the default [`AmbientAssumptions`].
    ///
    /// `altitude_ft` is in feet and `mach` is a Mach number; a Mach number of
    /// zero selects the ground envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Constraint`] if the altitude or Mach number
    /// is negative, infinite, or not a number.
    pub fn new(
        name: impl Into<String>,
        day_type: DayType,
        altitude_ft: f64,
        mach: f64,
        time: Option<TimeOfDay>,
    ) -> Result<Self, EnvironmentError> {
        Ok(Self::from_constrained(
            name,
            day_type,
            FiniteNonNegative::new(altitude_ft)?,
            FiniteNonNegative::new(mach)?,
            time,
        ))
    }

    /// Creates an operating condition from pre-validated altitude and Mach number.
    #[must_use]
    pub fn from_constrained(
        name: impl Into<String>,
        day_type: DayType,
        altitude_ft: Constrained<f64, FiniteNonNegative>,
        mach: Constrained<f64, FiniteNonNegative>,
        time: Option<TimeOfDay>,
    ) -> Self {
        Self {
            name: name.into(),
            day_type,
            altitude_ft: altitude_ft.into_inner(),
            mach: mach.into_inner(),
            time,
            assumptions: AmbientAssumptions::default(),
        }
    }

    /// Creates an operating condition from textual day type and time of day.
    ///
    /// ```
    /// use aircraft_env::models::environment::{EnvironmentError, OperatingCondition};
    ///
    /// let cruise = OperatingCondition::parse("Flight_1", "Hot", 40_000.0, 0.7, None);
    /// assert!(cruise.is_ok());
    ///
    /// let mild = OperatingCondition::parse("Flight_2", "Mild", 40_000.0, 0.7, None);
    /// assert!(matches!(mild, Err(EnvironmentError::InvalidDayType { .. })));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::InvalidDayType`] or
    /// [`EnvironmentError::InvalidTimeOfDay`] for unrecognized names, and
    /// [`EnvironmentError::Constraint`] for invalid altitude or Mach number.
    pub fn parse(
        name: impl Into<String>,
        day_type: &str,
        altitude_ft: f64,
        mach: f64,
        time: Option<&str>,
    ) -> Result<Self, EnvironmentError> {
        let day_type = day_type.parse()?;
        let time = time.map(str::parse).transpose()?;
        Self::new(name, day_type, altitude_ft, mach, time)
    }

    /// Replaces the ambient assumptions.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Constraint`] if the relative humidity is
    /// outside `[0, 1]` or if the wind speed or solar constant is negative.
    pub fn with_assumptions(
        mut self,
        assumptions: AmbientAssumptions,
    ) -> Result<Self, EnvironmentError> {
        self.assumptions = assumptions.validate()?;
        Ok(self)
    }

    /// Returns the name of this condition.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the day type.
    #[must_use]
    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Returns the altitude in feet.
    #[must_use]
    pub fn altitude_ft(&self) -> f64 {
        self.altitude_ft
    }

    /// Returns the altitude as a length.
    #[must_use]
    pub fn altitude(&self) -> Length {
        Length::new::<foot>(self.altitude_ft)
    }

    /// Returns the Mach number.
    #[must_use]
    pub fn mach(&self) -> f64 {
        self.mach
    }

    /// Returns the time of day, if one was given.
    #[must_use]
    pub fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    /// Returns the ambient assumptions the radiation and ground models use.
    #[must_use]
    pub fn assumptions(&self) -> &AmbientAssumptions {
        &self.assumptions
    }

    /// Returns the envelope regime selected by the Mach number.
    #[must_use]
    pub fn regime(&self) -> Regime {
        Regime::from_mach(self.mach)
    }

    /// ISA temperature at this altitude.
    #[must_use]
    pub fn isa_temperature(&self) -> ThermodynamicTemperature {
        atmosphere::isa_temperature(self.altitude_ft)
    }

    /// ISA static pressure at this altitude.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Atmosphere`] if the altitude is beyond the
    /// domain of the barometric formula.
    pub fn pressure(&self) -> Result<Pressure, EnvironmentError> {
        Ok(atmosphere::pressure(self.altitude_ft)?)
    }

    /// Returns the envelope adjustment that applies to this condition.
    #[must_use]
    pub fn adjustment(&self) -> Adjustment {
        let regime = self.regime();
        let adjustment = envelope::envelope(regime, self.day_type).adjustment(self.altitude_ft);
        debug!(
            "{}: {regime} {} at {} ft resolved to {adjustment:?}",
            self.name, self.day_type, self.altitude_ft
        );
        adjustment
    }

    /// Ambient static temperature from the temperature envelope.
    #[must_use]
    pub fn static_temperature(&self) -> ThermodynamicTemperature {
        self.adjustment()
            .apply(self.altitude_ft, self.isa_temperature())
    }

    /// Static temperature minus ISA temperature.
    #[must_use]
    pub fn isa_deviation(&self) -> TemperatureInterval {
        self.static_temperature().minus(self.isa_temperature())
    }

    /// Total (stagnation) temperature, `T_tot = (1 + (γ−1)/2·M²)·T_static`.
    ///
    /// Equals the static temperature on the ground.
    #[must_use]
    pub fn total_temperature(&self) -> ThermodynamicTemperature {
        let factor = 1.0 + (GAMMA - 1.0) / 2.0 * self.mach.powi(2);
        let t_static = self.static_temperature().get::<kelvin>();
        let total = ThermodynamicTemperature::new::<kelvin>(factor * t_static);
        trace!("{}: total temperature {total:?}", self.name);
        total
    }

    /// Incident solar heat flux at this altitude.
    #[must_use]
    pub fn solar_load(&self) -> HeatFluxDensity {
        radiation::solar_load(self.altitude_ft, self.assumptions.solar_constant)
    }

    /// Long-wave sky radiation at the total temperature.
    #[must_use]
    pub fn sky_radiation(&self) -> HeatFluxDensity {
        radiation::sky_radiation(
            self.total_temperature(),
            self.assumptions.relative_humidity,
        )
    }

    /// Ground surface temperature for this condition's time of day.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::MissingTimeOfDay`] if the condition has no
    /// time of day.
    pub fn ground_temperature(&self) -> Result<ThermodynamicTemperature, EnvironmentError> {
        let time = self.time.ok_or_else(|| EnvironmentError::MissingTimeOfDay {
            condition: self.name.clone(),
        })?;

        Ok(ground::ground_temperature(
            time,
            GroundInputs {
                air: self.total_temperature(),
                solar_load: self.solar_load(),
                wind_speed: self.assumptions.wind_speed,
                relative_humidity: self.assumptions.relative_humidity,
            },
        ))
    }

    /// Air properties at this condition's ambient pressure and the given zone temperature.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Atmosphere`] if the pressure cannot be
    /// evaluated, or [`EnvironmentError::Constraint`] if the zone temperature
    /// is not positive in kelvin.
    pub fn air_properties(
        &self,
        zone_temperature: ThermodynamicTemperature,
    ) -> Result<AirProperties, EnvironmentError> {
        Ok(AirProperties::new(self.pressure()?, zone_temperature)?)
    }

    /// Evaluates every derived quantity.
    ///
    /// The ground temperature is `None` when the condition has no time of day.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Atmosphere`] if the pressure cannot be evaluated.
    pub fn evaluate(&self) -> Result<Environment, EnvironmentError> {
        let ground_temperature = match self.time {
            Some(_) => Some(self.ground_temperature()?),
            None => None,
        };

        Ok(Environment {
            regime: self.regime(),
            isa_temperature: self.isa_temperature(),
            pressure: self.pressure()?,
            static_temperature: self.static_temperature(),
            isa_deviation: self.isa_deviation(),
            total_temperature: self.total_temperature(),
            solar_load: self.solar_load(),
            sky_radiation: self.sky_radiation(),
            ground_temperature,
        })
    }
}
