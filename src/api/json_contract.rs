use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ForecastResult};

use super::ForecastSubmission;

pub const FORECAST_SUBMISSION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSubmissionJsonContractV1 {
    pub schema_version: u32,
    pub submission: ForecastSubmission,
}

impl ForecastSubmission {
    pub fn to_json_pretty(&self) -> ForecastResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ForecastError::InvalidData(format!("failed to serialize submission json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ForecastResult<String> {
        let payload = ForecastSubmissionJsonContractV1 {
            schema_version: FORECAST_SUBMISSION_JSON_SCHEMA_V1,
            submission: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ForecastError::InvalidData(format!("failed to serialize submission contract v1: {e}"))
        })
    }

    /// Accepts either a bare submission or the versioned contract wrapper.
    pub fn from_json_compat_str(input: &str) -> ForecastResult<Self> {
        let submission = match serde_json::from_str::<ForecastSubmission>(input) {
            Ok(submission) => submission,
            Err(_) => {
                let payload: ForecastSubmissionJsonContractV1 = serde_json::from_str(input)
                    .map_err(|e| {
                        ForecastError::InvalidData(format!(
                            "failed to parse submission json payload: {e}"
                        ))
                    })?;
                if payload.schema_version != FORECAST_SUBMISSION_JSON_SCHEMA_V1 {
                    return Err(ForecastError::InvalidData(format!(
                        "unsupported submission schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.submission
            }
        };
        if submission.points().is_empty() {
            return Err(ForecastError::InvalidData(
                "submission must contain at least one point".to_owned(),
            ));
        }
        for point in submission.points() {
            point.validate()?;
        }
        Ok(submission)
    }
}
