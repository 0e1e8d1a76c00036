use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report};
use crate::features::reports::repositories::ReportRepository;

enum Failure {
    Database,
    Stall(Duration),
}

/// Repository whose every call fails, for error-path tests
pub struct FailingReportRepository {
    failure: Failure,
}

impl FailingReportRepository {
    /// Every call returns a database error, as if the pool had been closed
    pub fn database() -> Self {
        Self {
            failure: Failure::Database,
        }
    }

    /// Every call hangs for `duration` before failing
    pub fn stalled(duration: Duration) -> Self {
        Self {
            failure: Failure::Stall(duration),
        }
    }

    async fn fail<T>(&self) -> Result<T> {
        match self.failure {
            Failure::Database => Err(AppError::Database(sqlx::Error::PoolClosed)),
            Failure::Stall(duration) => {
                tokio::time::sleep(duration).await;
                Err(AppError::Database(sqlx::Error::PoolTimedOut))
            }
        }
    }
}

#[async_trait]
impl ReportRepository for FailingReportRepository {
    async fn find_by_id(&self, _report_id: i64) -> Result<Option<Report>> {
        self.fail().await
    }

    async fn create(&self, _report: CreateReport) -> Result<Report> {
        self.fail().await
    }

    async fn creation_dates(&self, _model_id: i64) -> Result<Vec<NaiveDate>> {
        self.fail().await
    }
}
