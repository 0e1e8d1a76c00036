//! Reports submitted for models and the observation-period query.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/get_report/{report_id}` | Fetch report text |
//! | POST | `/api/v1/set_report` | Submit a report |
//! | GET | `/api/v1/get_observation_time/{model_id}` | Longest gap between reports, in days |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgReportRepository, TimedReportRepository};
pub use services::ReportService;
