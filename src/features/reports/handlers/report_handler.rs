use std::sync::Arc;

use axum::{extract::State, Json};
use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, EndpointResult};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::reports::dtos::{
    GetReportResponseDto, ObservationTimeResponseDto, SetReportRequestDto, SetReportResponseDto,
};
use crate::features::reports::services::ReportService;

/// First human-readable message out of a validation failure
fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Get a report by ID
#[utoipa::path(
    get,
    path = "/api/v1/get_report/{report_id}",
    params(
        ("report_id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = GetReportResponseDto),
        (status = 400, description = "Malformed report id", body = GetReportResponseDto),
        (status = 404, description = "Report not found", body = GetReportResponseDto),
        (status = 500, description = "Storage failure", body = GetReportResponseDto),
        (status = 503, description = "Storage deadline exceeded", body = GetReportResponseDto)
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    report_id: Result<AppPath<i64>, AppError>,
) -> EndpointResult<GetReportResponseDto> {
    let AppPath(report_id) = report_id?;
    let report = service.get_report(report_id).await?;
    Ok(Json(report.into()))
}

/// Submit a report
///
/// `model_id` is optional; a placeholder model is assigned when it is omitted.
/// The body is read as JSON with or without a `Content-Type` header.
#[utoipa::path(
    post,
    path = "/api/v1/set_report",
    request_body(content = SetReportRequestDto, content_type = "application/json"),
    responses(
        (status = 200, description = "Report stored", body = SetReportResponseDto),
        (status = 400, description = "Malformed body or empty report_info", body = SetReportResponseDto),
        (status = 500, description = "Storage failure", body = SetReportResponseDto),
        (status = 503, description = "Storage deadline exceeded", body = SetReportResponseDto)
    ),
    tag = "reports"
)]
pub async fn set_report(
    State(service): State<Arc<ReportService>>,
    dto: Result<AppJson<SetReportRequestDto>, AppError>,
) -> EndpointResult<SetReportResponseDto> {
    let AppJson(dto) = dto?;
    dto.validate()
        .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

    let model_id = dto
        .model_id
        .unwrap_or_else(ReportService::placeholder_model_id);
    service.submit_report(dto.report_info, model_id).await?;

    Ok(Json(SetReportResponseDto::default()))
}

/// Get the maximum observation period of a model
///
/// The longest gap in days between consecutive reports, or the days since
/// the only report when the model has exactly one.
#[utoipa::path(
    get,
    path = "/api/v1/get_observation_time/{model_id}",
    params(
        ("model_id" = i64, Path, description = "Model ID")
    ),
    responses(
        (status = 200, description = "Observation period in days", body = ObservationTimeResponseDto),
        (status = 400, description = "Malformed model id", body = ObservationTimeResponseDto),
        (status = 404, description = "Model has no reports", body = ObservationTimeResponseDto),
        (status = 500, description = "Storage failure", body = ObservationTimeResponseDto),
        (status = 503, description = "Storage deadline exceeded", body = ObservationTimeResponseDto)
    ),
    tag = "reports"
)]
pub async fn get_observation_time(
    State(service): State<Arc<ReportService>>,
    model_id: Result<AppPath<i64>, AppError>,
) -> EndpointResult<ObservationTimeResponseDto> {
    let AppPath(model_id) = model_id?;
    let days = service.observation_time(model_id).await?;
    Ok(Json(ObservationTimeResponseDto::from_days(days)))
}
