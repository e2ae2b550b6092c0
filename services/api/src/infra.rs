use metrics_exporter_prometheus::PrometheusHandle;
use raffle_audit::compliance::{ChainIntegrity, ComplianceSummary, OperatorIdentity, RaffleDetail};
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Payload the dashboard posts after fetching an operator's snapshot from the
/// audit API.
#[derive(Debug, Deserialize)]
pub(crate) struct ComplianceSnapshotRequest {
    pub(crate) operator: OperatorIdentity,
    #[serde(default)]
    pub(crate) summary: ComplianceSummary,
    #[serde(default)]
    pub(crate) raffles: Vec<RaffleDetail>,
    #[serde(default)]
    pub(crate) chain_integrity: ChainIntegrity,
}
