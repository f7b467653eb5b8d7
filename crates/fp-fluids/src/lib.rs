//! fp-fluids: pure fluid property queries for fluidprops.
//!
//! Provides:
//! - `PropertyEngine` trait isolating the property engine
//! - CoolProp backend (via `rfluids`)
//! - Calculation modes and their allowed identifiers
//! - Dispatch of single-phase, multiphase, saturation and critical-point queries
//! - Result formatting and a catalog of CoolProp fluid names
//!
//! Inputs and results are in display units (°C, bar, kJ/kg, kJ/(kg·K));
//! conversion to and from SI happens inside the dispatcher.
//!
//! # Example
//!
//! ```no_run
//! use fp_fluids::{CoolPropEngine, PropertyId, Query, query_critical_point, query_single_phase};
//!
//! let engine = CoolPropEngine::new();
//! let query = Query::new("Water", PropertyId::H, (PropertyId::T, 100.0), (PropertyId::P, 1.0));
//! let h = query_single_phase(&engine, &query).unwrap();
//! println!("h = {h:.5} kJ/kg");
//!
//! let cp = query_critical_point(&engine, "Water").unwrap();
//! println!("Tcrit = {:.2} °C", cp.temperature_c);
//! ```

pub mod catalog;
pub mod coolprop;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod mode;
pub mod query;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for ergonomics
pub use catalog::{FluidCatalogEntry, coolprop_catalog, filter_coolprop_catalog};
pub use coolprop::CoolPropEngine;
pub use dispatch::{
    query_critical_point, query_in_mode, query_multiphase, query_property, query_saturation,
    query_single_phase,
};
pub use engine::PropertyEngine;
pub use error::{FluidError, FluidResult};
pub use fp_core::{PropertyId, from_engine_units, to_engine_units};
pub use mode::{CalcMode, Role};
pub use query::{CriticalPoint, PropertyInput, Query, Saturation};
