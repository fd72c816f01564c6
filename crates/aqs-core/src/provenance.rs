//! Provenance descriptors attached to serialized AQS artifacts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provenance information recorded with every persisted run artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Canonical hash of the survey plan driving the run.
    pub plan_hash: String,
    /// Canonical hash of the base sample state.
    pub base_hash: String,
    /// ISO-8601 timestamp recording when the artifact was generated.
    pub created_at: String,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
