use aqs_core::errors::{AqsError, ErrorInfo};
use aqs_core::{stable_hash_string, SampleState};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::axis::SurveyAxis;
use crate::plan::SurveyPlan;

/// One concrete survey point: a fully-specified state and its position in
/// the Cartesian product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    /// Position in generation order, stable across runs.
    pub index: usize,
    /// Base state with the axis components' values overridden.
    pub state: SampleState,
}

/// Aggregate survey output persisted for reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    /// Canonical hash of the plan that produced the points.
    pub plan_hash: String,
    /// Canonical hash of the base state the plan varied.
    pub base_hash: String,
    /// Generated points in index order.
    pub points: Vec<SurveyPoint>,
    #[serde(default)]
    /// Point and axis counts for quick inspection.
    pub metrics: Value,
}

fn unknown_component(component: &str) -> AqsError {
    AqsError::Survey(
        ErrorInfo::new(
            "unknown-component",
            "axis references a component absent from the base state",
        )
        .with_context("component", component),
    )
}

fn empty_axis(component: &str) -> AqsError {
    AqsError::Survey(
        ErrorInfo::new("empty-axis", "axis resolves to no values")
            .with_context("component", component),
    )
}

/// Expands a base state across the provided axes into the full Cartesian
/// product of survey points.
///
/// The first axis is the outermost/slowest-varying dimension: its value
/// changes only once every `product(remaining axis lengths)` points. Indices
/// are assigned 0..N-1 in generation order. The build is atomic: every axis
/// is validated before any point is produced, so either the complete point
/// list is returned or nothing is.
pub fn build_survey(
    base: &SampleState,
    axes: &[SurveyAxis],
) -> Result<Vec<SurveyPoint>, AqsError> {
    let mut resolved = Vec::with_capacity(axes.len());
    for axis in axes {
        if base.component(&axis.component).is_none() {
            return Err(unknown_component(&axis.component));
        }
        if axis.spec.is_empty() {
            return Err(empty_axis(&axis.component));
        }
        resolved.push((axis.component.as_str(), axis.spec.resolve()));
    }

    let mut states = Vec::new();
    expand_axes(base, &resolved, 0, &mut states);
    Ok(states
        .into_iter()
        .enumerate()
        .map(|(index, state)| SurveyPoint { index, state })
        .collect())
}

fn expand_axes(
    current: &SampleState,
    axes: &[(&str, Vec<f64>)],
    idx: usize,
    outputs: &mut Vec<SampleState>,
) {
    if idx == axes.len() {
        outputs.push(current.clone());
        return;
    }
    let (component, values) = &axes[idx];
    for value in values {
        let mut next = current.clone();
        next.set_component_value(component, *value);
        expand_axes(&next, axes, idx + 1, outputs);
    }
}

/// Executes a survey plan against a base state, wrapping the generated
/// points with the hashes needed for reproducible persistence.
pub fn survey(plan: &SurveyPlan, base: &SampleState) -> Result<SurveyReport, AqsError> {
    let plan_hash = plan.plan_hash()?;
    let base_hash = stable_hash_string(base)?;
    let points = build_survey(base, &plan.axes)?;
    let metrics = json!({
        "points": points.len(),
        "axes": plan.axes.len(),
    });
    Ok(SurveyReport {
        plan_hash,
        base_hash,
        points,
        metrics,
    })
}
