use super::domain::RaffleDetail;
use serde::{Deserialize, Serialize};

const EXCELLENT_THRESHOLD: f64 = 95.0;
const GOOD_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusVariant {
    Good,
    Warning,
    Critical,
    Info,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceStatus {
    pub label: &'static str,
    pub variant: StatusVariant,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawIntegrity {
    pub audited: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Rounds to the nearest integer with ties going up (`2.5 -> 3`, `-2.5 -> -2`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Mean compliance score across the loaded competitions. An operator with
/// nothing hosted yet scores 100.
pub fn calculate_overall_score(raffles: &[RaffleDetail]) -> u32 {
    if raffles.is_empty() {
        return 100;
    }

    let total: f64 = raffles.iter().map(|raffle| raffle.compliance_score).sum();
    round_half_up(total / raffles.len() as f64) as u32
}

/// Tiering is inclusive on each lower bound: exactly 95 is Excellent and
/// exactly 80 is Good. The score is not clamped.
pub fn format_compliance_status(score: f64) -> ComplianceStatus {
    if score >= EXCELLENT_THRESHOLD {
        ComplianceStatus {
            label: "Excellent",
            variant: StatusVariant::Good,
            color: "green",
        }
    } else if score >= GOOD_THRESHOLD {
        ComplianceStatus {
            label: "Good",
            variant: StatusVariant::Warning,
            color: "yellow",
        }
    } else {
        ComplianceStatus {
            label: "Needs Improvement",
            variant: StatusVariant::Critical,
            color: "red",
        }
    }
}

pub fn calculate_draw_integrity(raffles: &[RaffleDetail]) -> DrawIntegrity {
    let total = raffles.len();
    let audited = raffles.iter().filter(|raffle| raffle.is_audited()).count();
    let percentage = if total == 0 {
        0
    } else {
        round_half_up(audited as f64 * 100.0 / total as f64) as u32
    };

    DrawIntegrity {
        audited,
        total,
        percentage,
    }
}

/// Postal entries as a percentage of all entries, to two decimal places.
pub fn calculate_postal_fairness_ratio(raffles: &[RaffleDetail]) -> f64 {
    let (postal, total) = raffles.iter().fold((0u64, 0u64), |(postal, total), raffle| {
        (
            postal.saturating_add(raffle.postal_entries),
            total.saturating_add(raffle.total_entries),
        )
    });

    if total == 0 {
        return 0.0;
    }

    round_half_up(postal as f64 * 10_000.0 / total as f64) / 100.0
}

/// Places an operator against the industry benchmark. A missing or zero
/// benchmark yields the placeholder `"Calculating..."`.
pub fn calculate_ranking(operator_score: f64, industry_avg: Option<f64>) -> &'static str {
    let industry_avg = match industry_avg {
        Some(avg) if avg != 0.0 && !avg.is_nan() => avg,
        _ => return "Calculating...",
    };

    let difference = operator_score - industry_avg;
    if difference >= 20.0 {
        "Top 5%"
    } else if difference >= 10.0 {
        "Top 10%"
    } else if difference >= 0.0 {
        "Top 25%"
    } else if difference >= -10.0 {
        "Top 50%"
    } else {
        "Below Average"
    }
}
