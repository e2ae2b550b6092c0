use super::domain::{ComplianceSummary, RaffleDetail};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read compliance payload: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid compliance payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("compliance payload must be a list or an object with `raffles` or `data`, got {found}")]
    UnexpectedShape { found: &'static str },
    #[error("competition #{index} ({id}) is invalid: {source}")]
    Raffle {
        index: usize,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Raffle listings arrive either bare or wrapped by the API envelope.
fn raffle_entries(payload: Value) -> Result<Vec<Value>, LoadError> {
    match payload {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut envelope) => {
            match envelope.remove("raffles").or_else(|| envelope.remove("data")) {
                Some(Value::Array(entries)) => Ok(entries),
                Some(other) => Err(LoadError::UnexpectedShape {
                    found: kind_of(&other),
                }),
                None => Err(LoadError::UnexpectedShape {
                    found: "an object without `raffles` or `data`",
                }),
            }
        }
        other => Err(LoadError::UnexpectedShape {
            found: kind_of(&other),
        }),
    }
}

fn raffle_from_entry(index: usize, entry: Value) -> Result<RaffleDetail, LoadError> {
    let id = match entry.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => "no id".to_string(),
    };

    serde_json::from_value(entry).map_err(|source| LoadError::Raffle { index, id, source })
}

/// Reads compliance payloads captured from the audit API.
pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn raffles_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RaffleDetail>, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::raffles_from_reader(file)
    }

    pub fn raffles_from_reader<R: Read>(reader: R) -> Result<Vec<RaffleDetail>, LoadError> {
        let payload: Value = serde_json::from_reader(reader)?;
        raffle_entries(payload)?
            .into_iter()
            .enumerate()
            .map(|(index, entry)| raffle_from_entry(index, entry))
            .collect()
    }

    pub fn summary_from_path<P: AsRef<Path>>(path: P) -> Result<ComplianceSummary, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::summary_from_reader(file)
    }

    pub fn summary_from_reader<R: Read>(reader: R) -> Result<ComplianceSummary, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
