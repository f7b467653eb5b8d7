//! Display-unit <-> engine-unit conversion.
//!
//! Users work in °C, bar, kJ/kg and kJ/(kg·K). The engine only speaks SI
//! (K, Pa, J/kg, J/(kg·K)). Every property maps to one linear rule, picked by
//! an exhaustive match so a new identifier cannot be added without one.

use crate::property::PropertyId;
use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomTemperature};

pub type Pressure = UomPressure;
pub type Temperature = UomTemperature;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_OFFSET_K: f64 = 273.15;
/// Pascals per bar.
pub const PA_PER_BAR: f64 = 1e5;
/// Joules per kilojoule.
pub const J_PER_KJ: f64 = 1e3;

/// Linear, invertible map from display units to engine units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionRule {
    /// `engine = display + offset`
    Offset(f64),
    /// `engine = display * factor`
    Scale(f64),
    /// Same unit on both sides.
    Identity,
}

impl ConversionRule {
    #[inline]
    pub fn to_engine(self, display: f64) -> f64 {
        match self {
            Self::Offset(offset) => display + offset,
            Self::Scale(factor) => display * factor,
            Self::Identity => display,
        }
    }

    #[inline]
    pub fn from_engine(self, engine: f64) -> f64 {
        match self {
            Self::Offset(offset) => engine - offset,
            Self::Scale(factor) => engine / factor,
            Self::Identity => engine,
        }
    }
}

impl PropertyId {
    pub fn conversion(self) -> ConversionRule {
        match self {
            PropertyId::T | PropertyId::Tcrit => ConversionRule::Offset(CELSIUS_OFFSET_K),
            PropertyId::P | PropertyId::Pcrit => ConversionRule::Scale(PA_PER_BAR),
            PropertyId::H | PropertyId::S => ConversionRule::Scale(J_PER_KJ),
            PropertyId::Q
            | PropertyId::D
            | PropertyId::V
            | PropertyId::L
            | PropertyId::C
            | PropertyId::Cvmass => ConversionRule::Identity,
        }
    }
}

/// Convert a display-unit value to the engine's SI unit.
#[inline]
pub fn to_engine_units(id: PropertyId, display: f64) -> f64 {
    id.conversion().to_engine(display)
}

/// Convert an engine SI value back to display units.
#[inline]
pub fn from_engine_units(id: PropertyId, engine: f64) -> f64 {
    id.conversion().from_engine(engine)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}
