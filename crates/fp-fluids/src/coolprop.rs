//! CoolProp-based property engine.

use crate::engine::PropertyEngine;
use crate::error::{FluidError, FluidResult};
use fp_core::PropertyId;
use rfluids::native::CoolProp;

/// CoolProp backend (via `rfluids`) using the high-level `PropsSI` / `Props1SI`
/// entry points.
///
/// Stateless: every call resolves the fluid by name, so any pure or
/// pseudo-pure fluid CoolProp knows can be queried without a lookup table.
/// Non-finite results already come back from `rfluids` as errors.
pub struct CoolPropEngine {}

impl CoolPropEngine {
    /// Create a new CoolProp engine.
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CoolPropEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `rfluids` hands names to C as NUL-terminated strings and panics on an
/// interior NUL, so such names are refused here.
fn c_compatible(fluid: &str) -> FluidResult<&str> {
    if fluid.contains('\0') {
        Err(FluidError::engine(format!(
            "Fluid name {fluid:?} contains a NUL character"
        )))
    } else {
        Ok(fluid)
    }
}

impl PropertyEngine for CoolPropEngine {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn evaluate(
        &self,
        output: PropertyId,
        input1: PropertyId,
        value1: f64,
        input2: PropertyId,
        value2: f64,
        fluid: &str,
    ) -> FluidResult<f64> {
        let fluid = c_compatible(fluid)?;
        CoolProp::props_si(
            output.code(),
            input1.code(),
            value1,
            input2.code(),
            value2,
            fluid,
        )
        .map_err(|e| FluidError::engine(e.to_string()))
    }

    fn lookup_constant(&self, constant: PropertyId, fluid: &str) -> FluidResult<f64> {
        if !constant.is_fluid_constant() {
            return Err(FluidError::engine(format!("{constant} is not a fluid constant")));
        }
        let fluid = c_compatible(fluid)?;
        CoolProp::props1_si(constant.code(), fluid).map_err(|e| FluidError::engine(e.to_string()))
    }
}
