//! In-memory engine used by unit tests to observe what reaches the engine.

use crate::engine::PropertyEngine;
use crate::error::{FluidError, FluidResult};
use fp_core::PropertyId;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Evaluate {
        output: PropertyId,
        input1: PropertyId,
        value1: f64,
        input2: PropertyId,
        value2: f64,
        fluid: String,
    },
    Constant {
        constant: PropertyId,
        fluid: String,
    },
}

/// Returns canned SI values and records every call.
pub struct RecordingEngine {
    evaluate: Result<f64, String>,
    tcrit: Result<f64, String>,
    pcrit: Result<f64, String>,
    calls: RefCell<Vec<EngineCall>>,
}

impl RecordingEngine {
    pub fn returning(value: f64) -> Self {
        Self {
            evaluate: Ok(value),
            tcrit: Ok(value),
            pcrit: Ok(value),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            evaluate: Err(message.to_string()),
            tcrit: Err(message.to_string()),
            pcrit: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn constants(tcrit_k: f64, pcrit_pa: f64) -> Self {
        Self {
            evaluate: Err("no state evaluation configured".to_string()),
            tcrit: Ok(tcrit_k),
            pcrit: Ok(pcrit_pa),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn fail_constant(mut self, constant: PropertyId, message: &str) -> Self {
        match constant {
            PropertyId::Tcrit => self.tcrit = Err(message.to_string()),
            PropertyId::Pcrit => self.pcrit = Err(message.to_string()),
            _ => {}
        }
        self
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }
}

impl PropertyEngine for RecordingEngine {
    fn name(&self) -> &str {
        "recording"
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
        self.calls.borrow_mut().push(EngineCall::Evaluate {
            output,
            input1,
            value1,
            input2,
            value2,
            fluid: fluid.to_string(),
        });
        self.evaluate.clone().map_err(FluidError::engine)
    }

    fn lookup_constant(&self, constant: PropertyId, fluid: &str) -> FluidResult<f64> {
        self.calls.borrow_mut().push(EngineCall::Constant {
            constant,
            fluid: fluid.to_string(),
        });
        let canned = match constant {
            PropertyId::Tcrit => &self.tcrit,
            PropertyId::Pcrit => &self.pcrit,
            _ => return Err(FluidError::engine(format!("{constant} is not a fluid constant"))),
        };
        canned.clone().map_err(FluidError::engine)
    }
}
