#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use chrono::NaiveDate;
#[cfg(test)]
use fake::{faker::lorem::en::Sentence, Fake};

#[cfg(test)]
use crate::core::config::{AppConfig, SwaggerConfig};
#[cfg(test)]
use crate::core::router::build_router;
#[cfg(test)]
use crate::features::reports::repositories::{InMemoryReportRepository, ReportRepository};
#[cfg(test)]
use crate::features::reports::ReportService;

#[cfg(test)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Clock pinned to a known day so date arithmetic in tests is stable
#[cfg(test)]
pub fn fixed_today() -> NaiveDate {
    date(2024, 6, 15)
}

#[cfg(test)]
pub fn fake_report_info() -> String {
    Sentence(3..8).fake()
}

#[cfg(test)]
pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 64 * 1024,
        shutdown_grace: Duration::from_secs(1),
    }
}

#[cfg(test)]
pub fn test_swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        title: "Observation API".to_string(),
        version: "test".to_string(),
        description: "test".to_string(),
    }
}

/// Full application router over any repository
#[cfg(test)]
pub fn server_with_repository(repository: Arc<dyn ReportRepository>) -> TestServer {
    let service = Arc::new(ReportService::with_clock(repository, fixed_today));
    let app = build_router(service, &test_app_config(), &test_swagger_config());
    TestServer::new(app).expect("failed to start test server")
}

/// Full application router over an in-memory repository
#[cfg(test)]
pub fn report_server() -> (Arc<InMemoryReportRepository>, TestServer) {
    let repository = Arc::new(InMemoryReportRepository::new());
    let server = server_with_repository(repository.clone());
    (repository, server)
}
