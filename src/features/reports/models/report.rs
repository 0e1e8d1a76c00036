use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for report
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Report {
    pub report_id: i64,
    pub creation_time: NaiveDate,
    pub report_info: String,
    pub model_id: i64,
}

/// Data for creating a new report
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub creation_time: NaiveDate,
    pub report_info: String,
    pub model_id: i64,
}
