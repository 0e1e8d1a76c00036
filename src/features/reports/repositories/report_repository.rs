use std::future::Future;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report};

/// Persistence seam for reports
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn find_by_id(&self, report_id: i64) -> Result<Option<Report>>;

    async fn create(&self, report: CreateReport) -> Result<Report>;

    /// Creation dates of every report for `model_id`, oldest first.
    /// Same-day reports keep insertion order.
    async fn creation_dates(&self, model_id: i64) -> Result<Vec<NaiveDate>>;
}

/// PostgreSQL implementation of the report repository.
///
/// Queries are not deadline-bound here; wrap it in a
/// [`TimedReportRepository`](super::TimedReportRepository) for that.
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PgReportRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgReportRepository")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn logged<T, F>(operation: &str, query: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, sqlx::Error>>,
    {
        query.await.map_err(|e| {
            tracing::error!("Failed to {}: {:?}", operation, e);
            AppError::Database(e)
        })
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, report_id: i64) -> Result<Option<Report>> {
        Self::logged(
            "get report",
            sqlx::query_as::<_, Report>(
                r#"
                SELECT report_id, creation_time, report_info, model_id
                FROM reports
                WHERE report_id = $1
                "#,
            )
            .bind(report_id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    #[instrument(skip(self, report), fields(model_id = report.model_id))]
    async fn create(&self, report: CreateReport) -> Result<Report> {
        Self::logged(
            "create report",
            sqlx::query_as::<_, Report>(
                r#"
                INSERT INTO reports (creation_time, report_info, model_id)
                VALUES ($1, $2, $3)
                RETURNING report_id, creation_time, report_info, model_id
                "#,
            )
            .bind(report.creation_time)
            .bind(&report.report_info)
            .bind(report.model_id)
            .fetch_one(&self.pool),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn creation_dates(&self, model_id: i64) -> Result<Vec<NaiveDate>> {
        Self::logged(
            "list report dates",
            sqlx::query_scalar::<_, NaiveDate>(
                r#"
                SELECT creation_time
                FROM reports
                WHERE model_id = $1
                ORDER BY creation_time ASC, report_id ASC
                "#,
            )
            .bind(model_id)
            .fetch_all(&self.pool),
        )
        .await
    }
}
