//! Composition survey construction for deterministic AQS workflows.

mod axis;
mod plan;
mod survey;

pub use axis::{AxisSpec, SurveyAxis};
pub use plan::{load_plan, SurveyPlan};
pub use survey::{build_survey, survey, SurveyPoint, SurveyReport};
