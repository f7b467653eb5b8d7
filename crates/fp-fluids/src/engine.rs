//! Boundary to the external fluid-property engine.

use crate::error::FluidResult;
use fp_core::PropertyId;

/// Trait for fluid-property engines.
///
/// All values crossing this boundary are SI: K, Pa, J/kg, J/(kg·K), kg/m³,
/// Pa·s, W/(m·K) and dimensionless quality. Failures must be reported as
/// [`FluidError::EngineQuery`](crate::FluidError::EngineQuery) carrying the
/// engine's own diagnostic text.
pub trait PropertyEngine {
    /// Engine name (for logging).
    fn name(&self) -> &str;

    /// Evaluate `output` at the state fixed by two input properties.
    fn evaluate(
        &self,
        output: PropertyId,
        input1: PropertyId,
        value1: f64,
        input2: PropertyId,
        value2: f64,
        fluid: &str,
    ) -> FluidResult<f64>;

    /// Look up a scalar fluid constant such as `Tcrit`.
    fn lookup_constant(&self, constant: PropertyId, fluid: &str) -> FluidResult<f64>;
}
