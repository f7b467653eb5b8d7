//! Query records and their results, all in display units.

use fp_core::PropertyId;
use fp_core::units::{Pressure, Temperature, bar, celsius};

/// A property identifier paired with a display-unit value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropertyInput {
    pub id: PropertyId,
    pub value: f64,
}

impl From<(PropertyId, f64)> for PropertyInput {
    fn from((id, value): (PropertyId, f64)) -> Self {
        Self { id, value }
    }
}

/// One submission: a fluid, two state inputs and the property wanted back.
///
/// The fluid name is forwarded to the engine as typed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Query {
    pub fluid: String,
    pub first: PropertyInput,
    pub second: PropertyInput,
    pub output: PropertyId,
}

impl Query {
    pub fn new(
        fluid: impl Into<String>,
        output: PropertyId,
        first: impl Into<PropertyInput>,
        second: impl Into<PropertyInput>,
    ) -> Self {
        Self {
            fluid: fluid.into(),
            first: first.into(),
            second: second.into(),
            output,
        }
    }
}

/// Saturated-liquid result: the known property and its complement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Saturation {
    pub known: PropertyInput,
    /// P when T is known, T when P is known.
    pub property: PropertyId,
    pub value: f64,
}

/// Critical point in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CriticalPoint {
    pub temperature_c: f64,
    pub pressure_bar: f64,
}

impl CriticalPoint {
    pub fn temperature(&self) -> Temperature {
        celsius(self.temperature_c)
    }

    pub fn pressure(&self) -> Pressure {
        bar(self.pressure_bar)
    }
}
