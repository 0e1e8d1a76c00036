use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::reports::models::{CreateReport, Report};
use crate::features::reports::repositories::ReportRepository;

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    reports: BTreeMap<i64, Report>,
}

/// Repository backed by a map, for handler and service tests
#[derive(Default)]
pub struct InMemoryReportRepository {
    state: RwLock<MemoryState>,
    creates: AtomicUsize,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `create` reached the repository
    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub async fn report_count(&self) -> usize {
        self.state.read().await.reports.len()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn find_by_id(&self, report_id: i64) -> Result<Option<Report>> {
        Ok(self.state.read().await.reports.get(&report_id).cloned())
    }

    async fn create(&self, report: CreateReport) -> Result<Report> {
        self.creates.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.write().await;
        state.next_id += 1;
        let stored = Report {
            report_id: state.next_id,
            creation_time: report.creation_time,
            report_info: report.report_info,
            model_id: report.model_id,
        };
        state.reports.insert(stored.report_id, stored.clone());
        Ok(stored)
    }

    async fn creation_dates(&self, model_id: i64) -> Result<Vec<NaiveDate>> {
        let state = self.state.read().await;
        // ids ascend with insertion, so a stable sort keeps same-day order
        let mut dates: Vec<NaiveDate> = state
            .reports
            .values()
            .filter(|r| r.model_id == model_id)
            .map(|r| r.creation_time)
            .collect();
        dates.sort();
        Ok(dates)
    }
}
