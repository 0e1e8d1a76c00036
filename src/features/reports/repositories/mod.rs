mod report_repository;
mod timed;

#[cfg(test)]
mod failing;
#[cfg(test)]
mod memory;

pub use report_repository::{PgReportRepository, ReportRepository};
pub use timed::TimedReportRepository;

#[cfg(test)]
pub use failing::FailingReportRepository;
#[cfg(test)]
pub use memory::InMemoryReportRepository;
