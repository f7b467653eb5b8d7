//! Property identifiers understood by the fluid-property engine.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Thermodynamic quantity that can be given as an input or requested as an output.
///
/// The set is closed: anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyId {
    /// Temperature (display: °C, engine: K)
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    T,
    /// Pressure (display: bar, engine: Pa)
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    P,
    /// Specific enthalpy (display: kJ/kg, engine: J/kg)
    #[cfg_attr(feature = "serde", serde(rename = "H"))]
    H,
    /// Specific entropy (display: kJ/(kg·K), engine: J/(kg·K))
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    S,
    /// Vapour mass fraction
    #[cfg_attr(feature = "serde", serde(rename = "Q"))]
    Q,
    /// Mass density [kg/m³]
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    D,
    /// Dynamic viscosity [Pa·s]
    #[cfg_attr(feature = "serde", serde(rename = "V"))]
    V,
    /// Thermal conductivity [W/(m·K)]
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    L,
    /// Isobaric specific heat [J/(kg·K)]
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    C,
    /// Isochoric specific heat [J/(kg·K)]
    #[cfg_attr(feature = "serde", serde(rename = "CVMASS"))]
    Cvmass,
    /// Critical temperature (scalar fluid constant)
    #[cfg_attr(feature = "serde", serde(rename = "Tcrit"))]
    Tcrit,
    /// Critical pressure (scalar fluid constant)
    #[cfg_attr(feature = "serde", serde(rename = "Pcrit"))]
    Pcrit,
}

impl PropertyId {
    /// Every identifier, in display order.
    pub const ALL: [PropertyId; 12] = [
        PropertyId::T,
        PropertyId::P,
        PropertyId::H,
        PropertyId::S,
        PropertyId::Q,
        PropertyId::D,
        PropertyId::V,
        PropertyId::L,
        PropertyId::C,
        PropertyId::Cvmass,
        PropertyId::Tcrit,
        PropertyId::Pcrit,
    ];

    /// Code passed to the engine (CoolProp parameter string).
    pub fn code(self) -> &'static str {
        match self {
            Self::T => "T",
            Self::P => "P",
            Self::H => "H",
            Self::S => "S",
            Self::Q => "Q",
            Self::D => "D",
            Self::V => "V",
            Self::L => "L",
            Self::C => "C",
            Self::Cvmass => "CVMASS",
            Self::Tcrit => "Tcrit",
            Self::Pcrit => "Pcrit",
        }
    }

    /// Label shown next to a value, including its display unit.
    pub fn label(self) -> &'static str {
        match self {
            Self::T => "temperature [°C]",
            Self::P => "pressure [bar]",
            Self::H => "enthalpy [kJ/kg]",
            Self::S => "entropy [kJ/(kg K)]",
            Self::Q => "vapour mass frac. [-]",
            Self::D => "density [kg/m3]",
            Self::V => "viscosity [Pa s]",
            Self::L => "thermal cond. [W/(m K)]",
            Self::C => "spec. heat at const. p [J/(kg K)]",
            Self::Cvmass => "spec. heat at const. V [J/(kg K)]",
            Self::Tcrit => "critical temperature [°C]",
            Self::Pcrit => "critical pressure [bar]",
        }
    }

    /// Display unit symbol.
    pub fn display_unit(self) -> &'static str {
        match self {
            Self::T | Self::Tcrit => "°C",
            Self::P | Self::Pcrit => "bar",
            Self::H => "kJ/kg",
            Self::S => "kJ/(kg K)",
            Self::Q => "-",
            Self::D => "kg/m3",
            Self::V => "Pa s",
            Self::L => "W/(m K)",
            Self::C | Self::Cvmass => "J/(kg K)",
        }
    }

    /// True for the fluid constants that take no state inputs.
    pub fn is_fluid_constant(self) -> bool {
        matches!(self, Self::Tcrit | Self::Pcrit)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PropertyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PropertyId::ALL
            .into_iter()
            .find(|id| id.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownProperty {
                code: trimmed.to_string(),
            })
    }
}
