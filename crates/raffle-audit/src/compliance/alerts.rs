use super::domain::{RaffleDetail, RaffleId};
use serde::{Deserialize, Serialize};

pub const COMPLAINTS_REVIEW_LINK: &str = "/operator/complaints";
pub const LOW_SCORE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Complaint,
    Audit,
    Draw,
}

impl AlertKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complaint => "Complaint",
            Self::Audit => "Audit",
            Self::Draw => "Draw",
        }
    }
}

/// A diagnostic raised against the loaded competitions. Alerts are produced
/// per call and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceAlert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub link: String,
    #[serde(
        rename = "competitionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub competition_id: Option<RaffleId>,
}

pub fn competition_link(id: &RaffleId) -> String {
    format!("/operator/raffles/{id}")
}

/// Classifies the loaded competitions into alerts.
///
/// Output order is fixed: one aggregate complaint alert (when any complaints
/// are open), then missing-audit alerts, then low-score alerts, each pass in
/// input order. A competition can appear in both of the last two passes.
pub fn identify_critical_issues(raffles: &[RaffleDetail]) -> Vec<ComplianceAlert> {
    let mut alerts = Vec::new();

    let open_complaints: u64 = raffles
        .iter()
        .map(RaffleDetail::active_complaint_count)
        .fold(0, u64::saturating_add);
    if open_complaints > 0 {
        let message = if open_complaints == 1 {
            "1 active complaint requires a response".to_string()
        } else {
            format!("{open_complaints} active complaints require a response")
        };
        alerts.push(ComplianceAlert {
            kind: AlertKind::Complaint,
            message,
            link: COMPLAINTS_REVIEW_LINK.to_string(),
            competition_id: None,
        });
    }

    alerts.extend(
        raffles
            .iter()
            .filter(|raffle| raffle.status.is_concluded() && !raffle.is_audited())
            .map(|raffle| ComplianceAlert {
                kind: AlertKind::Audit,
                message: format!("\"{}\" has concluded without a draw audit", raffle.name),
                link: competition_link(&raffle.id),
                competition_id: Some(raffle.id.clone()),
            }),
    );

    alerts.extend(
        raffles
            .iter()
            .filter(|raffle| raffle.compliance_score < LOW_SCORE_THRESHOLD)
            .map(|raffle| ComplianceAlert {
                kind: AlertKind::Draw,
                message: format!(
                    "\"{}\" has a low compliance score ({}%)",
                    raffle.name, raffle.compliance_score
                ),
                link: competition_link(&raffle.id),
                competition_id: Some(raffle.id.clone()),
            }),
    );

    alerts
}
