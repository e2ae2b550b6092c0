use super::super::domain::{ChainIntegrity, OperatorIdentity};
use super::super::metrics::{ComplianceStatus, DrawIntegrity};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub report_type: &'static str,
    pub operator: OperatorIdentity,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceOverview {
    pub overall_score: u32,
    pub status: ComplianceStatus,
    pub chain_integrity: ChainIntegrity,
    pub draw_integrity: DrawIntegrity,
    pub postal_fairness_ratio: f64,
}
