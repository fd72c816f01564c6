use serde::{Deserialize, Serialize};

/// Value specification for one survey axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AxisSpec {
    /// Explicit ordered values.
    Fixed { values: Vec<f64> },
    /// Evenly spaced values over an inclusive range.
    Linear { start: f64, stop: f64, steps: usize },
}

impl AxisSpec {
    /// Resolves the specification into its concrete ordered value sequence.
    pub fn resolve(&self) -> Vec<f64> {
        match self {
            AxisSpec::Fixed { values } => values.clone(),
            AxisSpec::Linear { start, stop, steps } => match *steps {
                0 => Vec::new(),
                1 => vec![*start],
                steps => (0..steps)
                    .map(|idx| start + (stop - start) * idx as f64 / (steps - 1) as f64)
                    .collect(),
            },
        }
    }

    /// Number of values the specification resolves to.
    pub fn len(&self) -> usize {
        match self {
            AxisSpec::Fixed { values } => values.len(),
            AxisSpec::Linear { steps, .. } => *steps,
        }
    }

    /// Whether the specification resolves to no values at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One component sweep: the component to vary and the values to substitute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyAxis {
    /// Name of the component varied by this axis. Must exist in the base
    /// state the axis is applied to.
    pub component: String,
    /// Values substituted for the component, in sweep order.
    pub spec: AxisSpec,
}

impl SurveyAxis {
    /// Creates an axis over an explicit value list.
    pub fn fixed(component: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            component: component.into(),
            spec: AxisSpec::Fixed { values },
        }
    }

    /// Creates an axis over an evenly spaced inclusive range.
    pub fn linear(component: impl Into<String>, start: f64, stop: f64, steps: usize) -> Self {
        Self {
            component: component.into(),
            spec: AxisSpec::Linear { start, stop, steps },
        }
    }
}
