use serde::{Deserialize, Serialize};

use crate::core::ChartData;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::{ChartEngine, ChartEngineConfig};

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize frame json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::UnsupportedSchema(payload.schema_version));
        }
        Ok(payload.frame)
    }
}

impl ChartData {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart data json: {e}"))
        })
    }
}

impl ChartEngineConfig {
    /// Parses and validates a config; omitted options take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidOptions(format!("failed to parse engine config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidOptions(format!("failed to serialize engine config json: {e}"))
        })
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn frame_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.frame().to_json_contract_v1_pretty()
    }
}
