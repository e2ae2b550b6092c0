use crate::compliance::domain::{
    ChainIntegrity, ComplianceSummary, OperatorIdentity, RaffleDetail, RaffleStatus,
};
use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn raffle(id: &str, name: &str, status: RaffleStatus, score: f64) -> RaffleDetail {
    let mut raffle = RaffleDetail::new(id, name, status);
    raffle.compliance_score = score;
    raffle
}

pub(crate) fn scored(scores: &[f64]) -> Vec<RaffleDetail> {
    scores
        .iter()
        .enumerate()
        .map(|(index, score)| {
            raffle(
                &format!("r-{index}"),
                &format!("Competition {index}"),
                RaffleStatus::Active,
                *score,
            )
        })
        .collect()
}

/// One competition per alert pass: open complaints, a missing audit and a
/// low score.
pub(crate) fn alerting_raffles() -> Vec<RaffleDetail> {
    let mut complaints = raffle("r-100", "Dream Home Draw", RaffleStatus::Active, 92.0);
    complaints.active_complaints_count = Some(3);
    complaints.has_audit = Some(true);

    let mut unaudited = raffle("r-200", "Supercar Weekend", RaffleStatus::Completed, 85.0);
    unaudited.has_audit = Some(false);

    let mut low_score = raffle("r-300", "Cash Bonanza", RaffleStatus::Active, 40.0);
    low_score.has_audit = Some(true);

    vec![complaints, unaudited, low_score]
}

pub(crate) fn healthy_raffle() -> RaffleDetail {
    let mut raffle = raffle("r-900", "Luxury Watch", RaffleStatus::Drawn, 98.0);
    raffle.external_id = Some("LW-2025-01".to_string());
    raffle.total_entries = 1_000;
    raffle.postal_entries = 25;
    raffle.free_entries_count = 25;
    raffle.free_entry_percentage = 2.5;
    raffle.has_audit = Some(true);
    raffle.audit_count = 2;
    raffle.active_complaints = Some(0);
    raffle.created_at = Some("2025-01-10T09:00:00Z".to_string());
    raffle.draw_at = Some("2025-02-01T20:00:00Z".to_string());
    raffle
}

pub(crate) fn operator() -> OperatorIdentity {
    OperatorIdentity {
        id: Some("op-17".to_string()),
        name: "Northern Prize Co".to_string(),
        email: Some("compliance@northernprize.example".to_string()),
    }
}

pub(crate) fn summary() -> ComplianceSummary {
    ComplianceSummary {
        raffles_hosted: Some(4),
        active_raffles: Some(2),
        total_entries: Some(1_000),
        with_audit_logs_percentage: Some(75.0),
        active_complaints: Some(3),
        resolved_complaints: Some(9),
        avg_response_time_minutes: Some(95.0),
        postal_entries_received: Some(25),
        avg_postal_per_raffle: Some(6.25),
        industry_average_score: Some(81.0),
        ..ComplianceSummary::default()
    }
}

pub(crate) fn chain() -> ChainIntegrity {
    ChainIntegrity {
        verified: true,
        percentage: 100.0,
    }
}

pub(crate) fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}
