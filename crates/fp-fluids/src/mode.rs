//! Calculation modes and the identifiers each one accepts.

use crate::error::{FluidError, FluidResult};
use crate::query::Query;
use fp_core::PropertyId;
use std::fmt;

/// One of the four query forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CalcMode {
    /// Subcooled liquid / superheated vapour: any two of T, P, H, S.
    SinglePhase,
    /// Multiphase / mixture region: quality may be an input or output.
    Multiphase,
    /// Saturated liquid (Q = 0) from a known T or P.
    Saturation,
    /// Critical temperature and pressure; fluid name only.
    CriticalPoint,
}

/// Whether an identifier is being given or requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Input,
    Output,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

const SINGLE_PHASE_INPUTS: &[PropertyId] =
    &[PropertyId::T, PropertyId::P, PropertyId::H, PropertyId::S];

const SINGLE_PHASE_OUTPUTS: &[PropertyId] = &[
    PropertyId::H,
    PropertyId::S,
    PropertyId::T,
    PropertyId::P,
    PropertyId::D,
    PropertyId::V,
    PropertyId::L,
    PropertyId::C,
    PropertyId::Cvmass,
];

const MULTIPHASE_INPUTS: &[PropertyId] = &[
    PropertyId::T,
    PropertyId::P,
    PropertyId::H,
    PropertyId::S,
    PropertyId::Q,
];

const MULTIPHASE_OUTPUTS: &[PropertyId] = &[
    PropertyId::H,
    PropertyId::S,
    PropertyId::T,
    PropertyId::P,
    PropertyId::Q,
    PropertyId::D,
    PropertyId::V,
    PropertyId::L,
    PropertyId::C,
    PropertyId::Cvmass,
];

const SATURATION_KNOWNS: &[PropertyId] = &[PropertyId::P, PropertyId::T];

const CRITICAL_OUTPUTS: &[PropertyId] = &[PropertyId::Tcrit, PropertyId::Pcrit];

impl CalcMode {
    pub const ALL: [CalcMode; 4] = [
        CalcMode::SinglePhase,
        CalcMode::Multiphase,
        CalcMode::Saturation,
        CalcMode::CriticalPoint,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SinglePhase => "Subcooled Liquid / Superheated Vapour",
            Self::Multiphase => "Multiphase / Mixture Region",
            Self::Saturation => "Saturation Conditions (Q = 0)",
            Self::CriticalPoint => "Critical Temperature and Pressure",
        }
    }

    /// Number of state inputs the mode takes.
    pub fn input_count(self) -> usize {
        match self {
            Self::SinglePhase | Self::Multiphase => 2,
            Self::Saturation => 1,
            Self::CriticalPoint => 0,
        }
    }

    pub fn allowed_inputs(self) -> &'static [PropertyId] {
        match self {
            Self::SinglePhase => SINGLE_PHASE_INPUTS,
            Self::Multiphase => MULTIPHASE_INPUTS,
            Self::Saturation => SATURATION_KNOWNS,
            Self::CriticalPoint => &[],
        }
    }

    pub fn allowed_outputs(self) -> &'static [PropertyId] {
        match self {
            Self::SinglePhase => SINGLE_PHASE_OUTPUTS,
            Self::Multiphase => MULTIPHASE_OUTPUTS,
            Self::Saturation => SATURATION_KNOWNS,
            Self::CriticalPoint => CRITICAL_OUTPUTS,
        }
    }

    pub fn allows_input(self, id: PropertyId) -> bool {
        self.allowed_inputs().contains(&id)
    }

    pub fn allows_output(self, id: PropertyId) -> bool {
        self.allowed_outputs().contains(&id)
    }

    pub(crate) fn check_input(self, id: PropertyId) -> FluidResult<()> {
        if self.allows_input(id) {
            Ok(())
        } else {
            Err(FluidError::NotAllowed {
                mode: self,
                role: Role::Input,
                property: id,
            })
        }
    }

    pub(crate) fn check_output(self, id: PropertyId) -> FluidResult<()> {
        if self.allows_output(id) {
            Ok(())
        } else {
            Err(FluidError::NotAllowed {
                mode: self,
                role: Role::Output,
                property: id,
            })
        }
    }

    /// Check a two-input query against this mode's tables.
    ///
    /// Inputs are checked before the output, first input first.
    pub fn validate(self, query: &Query) -> FluidResult<()> {
        if self.input_count() != 2 {
            return Err(FluidError::NotAllowed {
                mode: self,
                role: Role::Input,
                property: query.first.id,
            });
        }
        self.check_input(query.first.id)?;
        self.check_input(query.second.id)?;
        self.check_output(query.output)
    }
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
