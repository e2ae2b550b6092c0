//! Compliance aggregation, alert classification, reporting and export for
//! audited prize competitions.
//!
//! Everything here is a pure function over snapshots fetched from the audit
//! API; the loader is the only part that touches I/O.

pub mod alerts;
pub mod domain;
pub mod export;
pub mod formatting;
pub mod loader;
pub mod metrics;
pub mod report;

#[cfg(test)]
mod tests;

pub use alerts::{identify_critical_issues, AlertKind, ComplianceAlert};
pub use domain::{
    ChainIntegrity, ComplianceSummary, OperatorIdentity, RaffleDetail, RaffleId, RaffleStatus,
};
pub use export::{export_json, raffles_to_csv, write_raffles_csv, ExportDocument, ExportError};
pub use formatting::{format_date, format_response_time, status_badge, StatusBadge};
pub use loader::{LoadError, SnapshotLoader};
pub use metrics::{
    calculate_draw_integrity, calculate_overall_score, calculate_postal_fairness_ratio,
    calculate_ranking, format_compliance_status, ComplianceStatus, DrawIntegrity, StatusVariant,
};
pub use report::{ComplianceReport, ReportInputs};
