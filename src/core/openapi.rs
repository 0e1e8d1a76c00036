use utoipa::{Modify, OpenApi};

use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::set_report,
        reports_handlers::report_handler::get_observation_time,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Reports
            reports_dtos::SetReportRequestDto,
            reports_dtos::SetReportResponseDto,
            reports_dtos::GetReportResponseDto,
            reports_dtos::ObservationTimeResponseDto,
        )
    ),
    tags(
        (name = "reports", description = "Model reports and observation periods"),
    ),
    info(
        title = "Observation API",
        version = "0.1.0",
        description = "Model reports and observation periods",
    )
)]
pub struct ApiDoc;

/// Overrides the compiled-in OpenAPI info with runtime configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
