//! Fluid query errors.

use crate::mode::{CalcMode, Role};
use fp_core::PropertyId;
use thiserror::Error;

/// Result type for fluid queries.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while answering a property query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// The engine could not produce a result. The message is its diagnostic, unchanged.
    #[error("{message}")]
    EngineQuery { message: String },

    /// Identifier outside the calculation mode's allowed set. Raised before the engine is called.
    #[error("{property} ({label}) is not a valid {role} for {mode} calculations", label = .property.label())]
    NotAllowed {
        mode: CalcMode,
        role: Role,
        property: PropertyId,
    },
}

impl FluidError {
    pub fn engine(message: impl Into<String>) -> Self {
        Self::EngineQuery {
            message: message.into(),
        }
    }

    pub fn is_engine_error(&self) -> bool {
        matches!(self, Self::EngineQuery { .. })
    }
}
