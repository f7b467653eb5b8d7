//! fp-core: engine-agnostic foundation for fluidprops.
//!
//! Contains:
//! - property (the closed set of property identifiers and their labels)
//! - units (display <-> engine conversion rules, typed display quantities)
//! - error (shared error types)
//!
//! Nothing in here talks to a property engine, so everything is testable
//! without CoolProp installed.

pub mod error;
pub mod property;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use property::PropertyId;
pub use units::{ConversionRule, from_engine_units, to_engine_units};
