use super::domain::{ComplianceSummary, OperatorIdentity, RaffleDetail};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

pub const CSV_HEADERS: [&str; 11] = [
    "Raffle ID",
    "External ID",
    "Title",
    "Status",
    "Total Entries",
    "Postal Entries",
    "Free Entry %",
    "Has Audit",
    "Audit Count",
    "Active Complaints",
    "Compliance Score",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no competitions to export")]
    NoData,
    #[error("unable to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejects empty exports before any file is produced.
pub fn ensure_exportable(raffles: &[RaffleDetail]) -> Result<(), ExportError> {
    if raffles.is_empty() {
        Err(ExportError::NoData)
    } else {
        Ok(())
    }
}

fn csv_row(raffle: &RaffleDetail) -> [String; 11] {
    [
        raffle.id.to_string(),
        raffle.external_id.clone().unwrap_or_default(),
        raffle.name.clone(),
        raffle.status.to_string(),
        raffle.total_entries.to_string(),
        raffle.postal_entries.to_string(),
        raffle.free_entry_percentage.to_string(),
        if raffle.is_audited() { "Yes" } else { "No" }.to_string(),
        raffle.audit_count.to_string(),
        raffle.active_complaint_count().to_string(),
        raffle.compliance_score.to_string(),
    ]
}

/// Streams the CSV export to `writer`. Every field is quoted, embedded quotes
/// are doubled and each record ends with `\n`.
pub fn write_raffles_csv<W: Write>(
    writer: W,
    raffles: &[RaffleDetail],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for raffle in raffles {
        csv_writer.write_record(csv_row(raffle))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// CSV export as a string: rows joined by `\n` with no trailing newline.
pub fn raffles_to_csv(raffles: &[RaffleDetail]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_raffles_csv(&mut buffer, raffles)?;

    let mut output = String::from_utf8(buffer)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    if output.ends_with('\n') {
        output.pop();
    }
    Ok(output)
}

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub exported_at: DateTime<Utc>,
    pub operator: &'a OperatorIdentity,
    pub summary: &'a ComplianceSummary,
    pub raffles: &'a [RaffleDetail],
}

/// Pretty-printed (two-space indented) JSON export document.
pub fn export_json(
    operator: &OperatorIdentity,
    summary: &ComplianceSummary,
    raffles: &[RaffleDetail],
    exported_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    let document = ExportDocument {
        exported_at,
        operator,
        summary,
        raffles,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// File name used when an export is written without an explicit path.
pub fn default_export_file_name(
    operator: &OperatorIdentity,
    extension: &str,
    at: DateTime<Utc>,
) -> String {
    let slug: String = operator
        .name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let slug = if slug.is_empty() { "operator".to_string() } else { slug };

    format!("compliance-{slug}-{}.{extension}", at.format("%Y%m%d"))
}
