use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::ErrorPayload;
use crate::features::reports::models::Report;

/// Request DTO for submitting a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetReportRequestDto {
    /// Report text (required, non-empty). A missing key reads as empty.
    #[serde(default)]
    #[validate(length(min = 1, message = "Report_info is empty"))]
    pub report_info: String,

    /// Owning model. A placeholder id is assigned when omitted.
    #[serde(default)]
    pub model_id: Option<i64>,
}

/// Response DTO for report submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SetReportResponseDto {
    pub error_msg: String,
}

impl ErrorPayload for SetReportResponseDto {
    fn from_error_msg(error_msg: String) -> Self {
        Self { error_msg }
    }
}

/// Response DTO for a single report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetReportResponseDto {
    pub error_msg: String,
    pub report_info: String,
}

impl From<Report> for GetReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            error_msg: String::new(),
            report_info: r.report_info,
        }
    }
}

impl ErrorPayload for GetReportResponseDto {
    fn from_error_msg(error_msg: String) -> Self {
        Self {
            error_msg,
            report_info: String::new(),
        }
    }
}

/// Response DTO for the observation period of a model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ObservationTimeResponseDto {
    pub error_msg: String,
    /// Longest gap between consecutive reports, in days, as a decimal string
    #[serde(rename = "Max_observation_period")]
    pub max_observation_period: String,
}

impl ObservationTimeResponseDto {
    pub fn from_days(days: i64) -> Self {
        Self {
            error_msg: String::new(),
            max_observation_period: days.to_string(),
        }
    }
}

impl ErrorPayload for ObservationTimeResponseDto {
    fn from_error_msg(error_msg: String) -> Self {
        Self {
            error_msg,
            max_observation_period: String::new(),
        }
    }
}
