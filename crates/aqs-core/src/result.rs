//! Raw result payloads returned by the remote chemistry service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Property values reported for a single phase.
pub type PhaseProperties = BTreeMap<String, f64>;

/// Nested result structure returned for one survey point.
///
/// RawResults are read-only inputs to extraction: AQS never mutates them and
/// never interprets values beyond positional lookup. Both maps default to
/// empty so partial service payloads still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawResult {
    /// Phase name to property map.
    #[serde(default)]
    pub phases: BTreeMap<String, PhaseProperties>,
    /// Scalant name to scaling tendency.
    #[serde(default)]
    pub scaling_tendencies: BTreeMap<String, f64>,
}

impl RawResult {
    /// Looks up one property within one phase.
    pub fn property(&self, phase: &str, property: &str) -> Option<f64> {
        self.phases
            .get(phase)
            .and_then(|properties| properties.get(property))
            .copied()
    }

    /// Looks up the scaling tendency reported for one scalant.
    pub fn scaling_tendency(&self, scalant: &str) -> Option<f64> {
        self.scaling_tendencies.get(scalant).copied()
    }
}
