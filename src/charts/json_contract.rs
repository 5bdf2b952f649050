use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

use super::ChartPayload;

pub const CHART_PAYLOAD_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayloadJsonContractV1 {
    pub schema_version: u32,
    pub chart: ChartPayload,
}

impl ChartPayload {
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize chart payload: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = ChartPayloadJsonContractV1 {
            schema_version: CHART_PAYLOAD_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize chart contract v1: {e}"))
        })
    }

    /// Parses either a bare payload or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(chart) = serde_json::from_str::<ChartPayload>(input) {
            return Ok(chart);
        }
        let payload: ChartPayloadJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse chart json payload: {e}"))
        })?;
        if payload.schema_version != CHART_PAYLOAD_JSON_SCHEMA_V1 {
            return Err(DashboardError::InvalidData(format!(
                "unsupported chart schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}
