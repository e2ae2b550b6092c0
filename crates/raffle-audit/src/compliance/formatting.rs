use super::domain::RaffleStatus;
use super::metrics::{round_half_up, StatusVariant};
use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// Renders a complaint response time: `0 -> "N/A"`, `45 -> "45 min"`,
/// `90 -> "1h 30m"`, `120 -> "2h"`.
pub fn format_response_time(minutes: f64) -> String {
    if minutes == 0.0 || minutes.is_nan() {
        return "N/A".to_string();
    }

    if minutes < 60.0 {
        return format!("{} min", round_half_up(minutes));
    }

    let total = round_half_up(minutes) as u64;
    let hours = total / 60;
    let remainder = total % 60;
    if remainder == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remainder}m")
    }
}

/// Formats an upstream timestamp for display. Blank or missing values render
/// as `"N/A"`; values that are not RFC 3339 or `YYYY-MM-DD` are echoed back.
pub fn format_date(value: Option<&str>) -> String {
    let trimmed = match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return "N/A".to_string(),
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.format("%d %b %Y").to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }

    trimmed.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub variant: StatusVariant,
}

pub fn status_badge(status: &RaffleStatus) -> StatusBadge {
    let (label, variant) = match status {
        RaffleStatus::Active => ("Active".to_string(), StatusVariant::Info),
        RaffleStatus::AwaitingDraw => ("Awaiting Draw".to_string(), StatusVariant::Warning),
        RaffleStatus::Drawn => ("Drawn".to_string(), StatusVariant::Good),
        RaffleStatus::Completed => ("Completed".to_string(), StatusVariant::Good),
        RaffleStatus::Ended => ("Ended".to_string(), StatusVariant::Neutral),
        RaffleStatus::Other(raw) => (title_case(raw), StatusVariant::Neutral),
    };

    StatusBadge { label, variant }
}

fn title_case(raw: &str) -> String {
    raw.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_time_covers_minutes_and_hours() {
        assert_eq!(format_response_time(0.0), "N/A");
        assert_eq!(format_response_time(45.0), "45 min");
        assert_eq!(format_response_time(44.6), "45 min");
        assert_eq!(format_response_time(90.0), "1h 30m");
        assert_eq!(format_response_time(120.0), "2h");
        assert_eq!(format_response_time(150.0), "2h 30m");
    }

    #[test]
    fn format_date_handles_timestamps_dates_and_gaps() {
        assert_eq!(format_date(Some("2025-03-05T18:30:00Z")), "05 Mar 2025");
        assert_eq!(format_date(Some("2025-03-05")), "05 Mar 2025");
        assert_eq!(format_date(Some("  ")), "N/A");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("next week")), "next week");
    }

    #[test]
    fn status_badges_map_known_and_unknown_states() {
        let badge = status_badge(&RaffleStatus::AwaitingDraw);
        assert_eq!(badge.label, "Awaiting Draw");
        assert_eq!(badge.variant, StatusVariant::Warning);

        let badge = status_badge(&RaffleStatus::parse("ON_HOLD"));
        assert_eq!(badge.label, "On Hold");
        assert_eq!(badge.variant, StatusVariant::Neutral);
    }
}
