use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report};
use crate::features::reports::repositories::ReportRepository;

/// Bounds every call on the wrapped repository by a deadline.
///
/// A call that runs past it is abandoned with `AppError::Timeout`.
#[derive(Debug, Clone)]
pub struct TimedReportRepository<R> {
    inner: R,
    deadline: Duration,
}

impl<R: ReportRepository> TimedReportRepository<R> {
    pub fn new(inner: R, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    async fn within<T, F>(&self, operation: &str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.deadline, call)
            .await
            .unwrap_or_else(|_| {
                Err(AppError::Timeout(format!(
                    "{} exceeded {}ms",
                    operation,
                    self.deadline.as_millis()
                )))
            })
    }
}

#[async_trait]
impl<R: ReportRepository> ReportRepository for TimedReportRepository<R> {
    async fn find_by_id(&self, report_id: i64) -> Result<Option<Report>> {
        self.within("get report", self.inner.find_by_id(report_id))
            .await
    }

    async fn create(&self, report: CreateReport) -> Result<Report> {
        self.within("create report", self.inner.create(report)).await
    }

    async fn creation_dates(&self, model_id: i64) -> Result<Vec<NaiveDate>> {
        self.within("list report dates", self.inner.creation_dates(model_id))
            .await
    }
}
