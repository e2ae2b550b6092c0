use super::super::alerts::ComplianceAlert;
use super::super::domain::{ChainIntegrity, ComplianceSummary, OperatorIdentity, RaffleDetail};
use super::super::metrics::{
    calculate_draw_integrity, calculate_overall_score, calculate_postal_fairness_ratio,
    format_compliance_status,
};
use super::views::{ComplianceOverview, ReportMetadata};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const REPORT_TYPE: &str = "compliance_snapshot";

/// Everything a compliance snapshot is assembled from. The critical issues
/// are passed in pre-computed so callers can filter or reuse them.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub operator: &'a OperatorIdentity,
    pub summary: &'a ComplianceSummary,
    pub raffles: &'a [RaffleDetail],
    pub chain_integrity: ChainIntegrity,
    pub critical_issues: &'a [ComplianceAlert],
}

/// Exportable compliance snapshot for one operator.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
    pub report_metadata: ReportMetadata,
    pub compliance_overview: ComplianceOverview,
    pub summary_statistics: ComplianceSummary,
    pub critical_issues: Vec<ComplianceAlert>,
    pub competition_details: Vec<RaffleDetail>,
}

impl ComplianceReport {
    /// Builds the report stamped with the current wall-clock time.
    pub fn generate(inputs: ReportInputs<'_>) -> Self {
        Self::build(inputs, Utc::now())
    }

    /// Deterministic form of [`ComplianceReport::generate`].
    pub fn build(inputs: ReportInputs<'_>, generated_at: DateTime<Utc>) -> Self {
        let ReportInputs {
            operator,
            summary,
            raffles,
            chain_integrity,
            critical_issues,
        } = inputs;

        let overall_score = calculate_overall_score(raffles);
        let compliance_overview = ComplianceOverview {
            overall_score,
            status: format_compliance_status(overall_score as f64),
            chain_integrity,
            draw_integrity: calculate_draw_integrity(raffles),
            postal_fairness_ratio: calculate_postal_fairness_ratio(raffles),
        };

        tracing::debug!(
            operator = %operator.name,
            raffles = raffles.len(),
            issues = critical_issues.len(),
            overall_score,
            "compliance report assembled"
        );

        Self {
            report_metadata: ReportMetadata {
                generated_at,
                report_type: REPORT_TYPE,
                operator: operator.clone(),
            },
            compliance_overview,
            summary_statistics: summary.clone(),
            critical_issues: critical_issues.to_vec(),
            competition_details: raffles.to_vec(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
