use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rand::Rng;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report};
use crate::features::reports::repositories::ReportRepository;
use crate::shared::constants::{PLACEHOLDER_MODEL_ID_RANGE, REPORT_INFO_EMPTY};

use super::observation::max_observation_period;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Service for report storage and the observation-period query
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    today: fn() -> NaiveDate,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self::with_clock(repository, utc_today)
    }

    /// Build a service whose notion of "today" comes from `today`
    pub fn with_clock(repository: Arc<dyn ReportRepository>, today: fn() -> NaiveDate) -> Self {
        Self { repository, today }
    }

    /// Get a report by its id
    pub async fn get_report(&self, report_id: i64) -> Result<Report> {
        self.repository
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))
    }

    /// Store a new report dated today.
    ///
    /// Empty text is rejected before the repository is touched.
    pub async fn submit_report(&self, report_info: String, model_id: i64) -> Result<Report> {
        if report_info.is_empty() {
            return Err(AppError::Validation(REPORT_INFO_EMPTY.to_string()));
        }

        let report = self
            .repository
            .create(CreateReport {
                creation_time: (self.today)(),
                report_info,
                model_id,
            })
            .await?;

        tracing::info!(
            "Report created: report_id={}, model_id={}, creation_time={}",
            report.report_id,
            report.model_id,
            report.creation_time
        );

        Ok(report)
    }

    /// Longest gap in days between consecutive reports of `model_id`
    pub async fn observation_time(&self, model_id: i64) -> Result<i64> {
        let dates = self.repository.creation_dates(model_id).await?;

        max_observation_period(&dates, (self.today)())
            .ok_or_else(|| AppError::NotFound(format!("No reports found for model {}", model_id)))
    }

    /// Model id for a submission that did not name one
    pub fn placeholder_model_id() -> i64 {
        rand::thread_rng().gen_range(0..PLACEHOLDER_MODEL_ID_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::repositories::InMemoryReportRepository;
    use crate::shared::test_helpers::{date, fake_report_info, fixed_today};
    use tokio_test::{assert_err, assert_ok};

    fn service() -> (Arc<InMemoryReportRepository>, ReportService) {
        let repository = Arc::new(InMemoryReportRepository::new());
        let service = ReportService::with_clock(repository.clone(), fixed_today);
        (repository, service)
    }

    async fn seed(repository: &InMemoryReportRepository, model_id: i64, day: NaiveDate) {
        repository
            .create(CreateReport {
                creation_time: day,
                report_info: fake_report_info(),
                model_id,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_submit_then_get_round_trips() {
        let (_, service) = service();
        let info = fake_report_info();

        let created = assert_ok!(service.submit_report(info.clone(), 12).await);
        assert_eq!(created.creation_time, fixed_today());
        assert_eq!(created.model_id, 12);

        let fetched = assert_ok!(service.get_report(created.report_id).await);
        assert_eq!(fetched.report_info, info);
        assert_eq!(fetched.creation_time, fixed_today());
    }

    #[tokio::test]
    async fn test_empty_report_never_reaches_repository() {
        let (repository, service) = service();

        let err = assert_err!(service.submit_report(String::new(), 1).await);
        assert!(matches!(err, AppError::Validation(ref msg) if msg == REPORT_INFO_EMPTY));
        assert_eq!(repository.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_get_unknown_report_is_not_found() {
        let (_, service) = service();
        let err = assert_err!(service.get_report(99).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_observation_time_without_reports_is_not_found() {
        let (repository, service) = service();
        seed(&repository, 2, date(2024, 1, 1)).await;

        let err = assert_err!(service.observation_time(1).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_observation_time_single_report_counts_since_today() {
        let (repository, service) = service();
        let day = fixed_today() - chrono::Duration::days(9);
        seed(&repository, 5, day).await;

        assert_eq!(assert_ok!(service.observation_time(5).await), 9);
    }

    #[tokio::test]
    async fn test_observation_time_uses_largest_gap() {
        let (repository, service) = service();
        // inserted out of order on purpose
        seed(&repository, 3, date(2024, 1, 20)).await;
        seed(&repository, 3, date(2024, 1, 1)).await;
        seed(&repository, 3, date(2024, 1, 5)).await;
        seed(&repository, 4, date(2023, 1, 1)).await;

        assert_eq!(assert_ok!(service.observation_time(3).await), 15);
    }

    #[tokio::test]
    async fn test_concurrent_submissions_are_all_counted() {
        let repository = Arc::new(InMemoryReportRepository::new());
        let first = date(2024, 1, 1);
        let gaps = [3i64, 1, 7, 2, 4, 6, 5];

        let mut day = first;
        let mut days = vec![day];
        for gap in gaps {
            day += chrono::Duration::days(gap);
            days.push(day);
        }

        let handles: Vec<_> = days
            .iter()
            .map(|&creation_time| {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository
                        .create(CreateReport {
                            creation_time,
                            report_info: fake_report_info(),
                            model_id: 8,
                        })
                        .await
                })
            })
            .collect();
        for result in futures::future::join_all(handles).await {
            assert_ok!(result.unwrap());
        }

        assert_eq!(repository.report_count().await, days.len());
        let service = ReportService::with_clock(repository, fixed_today);
        assert_eq!(assert_ok!(service.observation_time(8).await), 7);
    }

    #[test]
    fn test_placeholder_model_id_in_range() {
        for _ in 0..200 {
            let id = ReportService::placeholder_model_id();
            assert!((0..PLACEHOLDER_MODEL_ID_RANGE).contains(&id));
        }
    }
}
