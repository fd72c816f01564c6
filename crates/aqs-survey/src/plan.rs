use std::fs;
use std::path::Path;

use aqs_core::errors::{AqsError, ErrorInfo};
use aqs_core::{from_yaml_slice, stable_hash_string, to_yaml_string};
use serde::{Deserialize, Serialize};

use crate::axis::SurveyAxis;

/// Plan describing a composition survey: the axes applied to a base state.
///
/// Axis declaration order is significant: the first axis is the
/// outermost/slowest-varying dimension of the resulting survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyPlan {
    /// Human readable plan name recorded in reports and registries.
    pub name: String,
    /// Axes to sweep, in declaration order.
    #[serde(default)]
    pub axes: Vec<SurveyAxis>,
}

impl SurveyPlan {
    /// Returns the deterministic hash associated with the plan contents.
    pub fn plan_hash(&self) -> Result<String, AqsError> {
        stable_hash_string(self)
    }

    /// Produces a canonical YAML representation of the plan.
    pub fn to_yaml_string(&self) -> Result<String, AqsError> {
        to_yaml_string(self)
    }
}

/// Loads a survey plan from a YAML file on disk.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<SurveyPlan, AqsError> {
    let plan_path = path.as_ref();
    let bytes = fs::read(plan_path).map_err(|err| {
        AqsError::Survey(
            ErrorInfo::new("plan-read", "failed to read survey plan")
                .with_context("path", plan_path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    from_yaml_slice(&bytes)
}
