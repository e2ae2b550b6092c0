use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque competition identifier. The upstream API sends either a string or
/// an integer; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RaffleId(pub String);

impl RaffleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RaffleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RaffleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RaffleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RaffleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Self(value),
            RawId::Integer(value) => Self(value.to_string()),
        })
    }
}

/// Lifecycle of a competition as reported upstream. Parsing is
/// case-insensitive and never fails: unrecognised values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RaffleStatus {
    Active,
    AwaitingDraw,
    Drawn,
    Completed,
    Ended,
    Other(String),
}

impl RaffleStatus {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "active" => Self::Active,
            "awaiting_draw" => Self::AwaitingDraw,
            "drawn" => Self::Drawn,
            "completed" => Self::Completed,
            "ended" => Self::Ended,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::AwaitingDraw => "awaiting_draw",
            Self::Drawn => "drawn",
            Self::Completed => "completed",
            Self::Ended => "ended",
            Self::Other(raw) => raw,
        }
    }

    /// Drawn, completed and ended competitions are expected to carry a draw audit.
    pub fn is_concluded(&self) -> bool {
        matches!(self, Self::Drawn | Self::Completed | Self::Ended)
    }
}

impl fmt::Display for RaffleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RaffleStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RaffleStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Upstream sends `null` for counters it has not computed yet; treat it as zero.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Compliance snapshot for one competition, as returned by the audit API.
///
/// Values are read-only inputs: nothing in this crate mutates a received
/// `RaffleDetail`. Complaint and audit fields arrive under overlapping names;
/// use [`RaffleDetail::active_complaint_count`] and
/// [`RaffleDetail::is_audited`] instead of reading them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaffleDetail {
    pub id: RaffleId,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default, alias = "title", deserialize_with = "null_as_default")]
    pub name: String,
    pub status: RaffleStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_entries: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_entries: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub free_entries_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub free_entry_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_audit: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub audit_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_complaints: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_complaints_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compliance_score: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub draw_at: Option<String>,
}

impl RaffleDetail {
    /// A competition with zeroed counters, mainly useful for fixtures.
    pub fn new(id: impl Into<RaffleId>, name: impl Into<String>, status: RaffleStatus) -> Self {
        Self {
            id: id.into(),
            external_id: None,
            name: name.into(),
            status,
            total_entries: 0,
            postal_entries: 0,
            free_entries_count: 0,
            free_entry_percentage: 0.0,
            has_audit: None,
            audit_count: 0,
            active_complaints: None,
            active_complaints_count: None,
            compliance_score: 0.0,
            created_at: None,
            updated_at: None,
            draw_at: None,
        }
    }

    /// `active_complaints_count` wins over `active_complaints`; missing means zero.
    pub fn active_complaint_count(&self) -> u64 {
        self.active_complaints_count
            .or(self.active_complaints)
            .unwrap_or(0)
    }

    /// The explicit `has_audit` flag wins; without it, any recorded audit counts.
    pub fn is_audited(&self) -> bool {
        self.has_audit.unwrap_or(self.audit_count > 0)
    }
}

/// Operator-wide rollup pre-aggregated by the audit API.
///
/// Every rollup field is optional: values the API omits or sends as `null`
/// stay absent and are not written back. Fields this crate does not know
/// about are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raffles_hosted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_raffles: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_entries: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_audit_logs_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_complaints: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_complaints: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_response_time_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_entries_received: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_postal_per_raffle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_average_score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComplianceSummary {
    pub fn raffles_hosted(&self) -> u64 {
        self.raffles_hosted.unwrap_or(0)
    }

    pub fn active_complaints(&self) -> u64 {
        self.active_complaints.unwrap_or(0)
    }

    /// Zero, which renders as `"N/A"`, when no response time was reported.
    pub fn avg_response_time_minutes(&self) -> f64 {
        self.avg_response_time_minutes.unwrap_or(0.0)
    }
}

/// Who a report or export is generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl OperatorIdentity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
        }
    }
}

/// Hash-chain status reported by the audit API; consumed as an opaque signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainIntegrity {
    pub verified: bool,
    #[serde(default)]
    pub percentage: f64,
}
