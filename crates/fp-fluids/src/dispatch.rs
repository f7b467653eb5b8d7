//! Query dispatch: display units in, engine call, display units out.
//!
//! Engine failures are returned untouched as [`FluidError::EngineQuery`]. Mode
//! checks run before the engine is reached, so a rejected query never costs an
//! engine call.

use crate::engine::PropertyEngine;
use crate::error::{FluidError, FluidResult};
use crate::mode::{CalcMode, Role};
use crate::query::{CriticalPoint, PropertyInput, Query, Saturation};
use fp_core::{PropertyId, from_engine_units, to_engine_units};
use tracing::{debug, warn};

/// Evaluate `output` at the state fixed by two display-unit inputs.
///
/// No mode validation happens here; use [`query_in_mode`] (or one of the mode
/// entry points) when the identifiers come from a form.
pub fn query_property(
    engine: &dyn PropertyEngine,
    output: PropertyId,
    input1: PropertyId,
    value1: f64,
    input2: PropertyId,
    value2: f64,
    fluid: &str,
) -> FluidResult<f64> {
    let v1 = to_engine_units(input1, value1);
    let v2 = to_engine_units(input2, value2);

    debug!(
        engine = engine.name(),
        fluid,
        output = output.code(),
        input1 = input1.code(),
        v1,
        input2 = input2.code(),
        v2,
        "dispatching property query"
    );

    let raw = engine
        .evaluate(output, input1, v1, input2, v2, fluid)
        .inspect_err(|e| warn!(fluid, output = output.code(), error = %e, "engine query failed"))?;

    let value = from_engine_units(output, raw);
    debug!(output = output.code(), raw, value, "property query resolved");
    Ok(value)
}

/// Validate `query` against `mode`, then dispatch it.
pub fn query_in_mode(
    engine: &dyn PropertyEngine,
    mode: CalcMode,
    query: &Query,
) -> FluidResult<f64> {
    mode.validate(query)
        .inspect_err(|e| debug!(mode = mode.label(), error = %e, "query rejected"))?;

    query_property(
        engine,
        query.output,
        query.first.id,
        query.first.value,
        query.second.id,
        query.second.value,
        &query.fluid,
    )
}

/// Subcooled liquid / superheated vapour: two of T, P, H, S; no quality.
pub fn query_single_phase(engine: &dyn PropertyEngine, query: &Query) -> FluidResult<f64> {
    query_in_mode(engine, CalcMode::SinglePhase, query)
}

/// Multiphase / mixture region: quality allowed on either side.
pub fn query_multiphase(engine: &dyn PropertyEngine, query: &Query) -> FluidResult<f64> {
    query_in_mode(engine, CalcMode::Multiphase, query)
}

/// Saturated-liquid (Q = 0) pressure from a known temperature, or temperature
/// from a known pressure.
pub fn query_saturation(
    engine: &dyn PropertyEngine,
    known: PropertyId,
    value: f64,
    fluid: &str,
) -> FluidResult<Saturation> {
    let property = match known {
        PropertyId::T => PropertyId::P,
        PropertyId::P => PropertyId::T,
        other => {
            return Err(FluidError::NotAllowed {
                mode: CalcMode::Saturation,
                role: Role::Input,
                property: other,
            });
        }
    };

    let result = query_property(engine, property, known, value, PropertyId::Q, 0.0, fluid)?;

    Ok(Saturation {
        known: PropertyInput { id: known, value },
        property,
        value: result,
    })
}

/// Critical temperature and pressure. Both lookups must succeed.
pub fn query_critical_point(
    engine: &dyn PropertyEngine,
    fluid: &str,
) -> FluidResult<CriticalPoint> {
    let temperature_c = lookup_constant(engine, PropertyId::Tcrit, fluid)?;
    let pressure_bar = lookup_constant(engine, PropertyId::Pcrit, fluid)?;

    Ok(CriticalPoint {
        temperature_c,
        pressure_bar,
    })
}

fn lookup_constant(
    engine: &dyn PropertyEngine,
    constant: PropertyId,
    fluid: &str,
) -> FluidResult<f64> {
    debug!(engine = engine.name(), fluid, constant = constant.code(), "looking up fluid constant");

    let raw = engine.lookup_constant(constant, fluid).inspect_err(|e| {
        warn!(fluid, constant = constant.code(), error = %e, "constant lookup failed")
    })?;

    Ok(from_engine_units(constant, raw))
}
