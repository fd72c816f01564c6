use std::fs;

use aqs_core::from_yaml_slice;
use aqs_survey::{load_plan, AxisSpec, SurveyAxis, SurveyPlan};

const PLAN_YAML: &str = r#"
name: sulfate-screen
axes:
  - component: SO4_2-
    spec:
      type: fixed
      values: [0.0, 500.0, 1000.0]
  - component: Na_+
    spec:
      type: linear
      start: 100.0
      stop: 300.0
      steps: 3
"#;

#[test]
fn plan_loads_from_yaml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plan.yaml");
    fs::write(&path, PLAN_YAML).expect("write plan");
    let plan = load_plan(&path).expect("load plan");
    assert_eq!(plan.name, "sulfate-screen");
    assert_eq!(plan.axes.len(), 2);
    assert_eq!(plan.axes[0].component, "SO4_2-");
    assert_eq!(
        plan.axes[0].spec,
        AxisSpec::Fixed {
            values: vec![0.0, 500.0, 1000.0]
        }
    );
    assert_eq!(plan.axes[1].spec.resolve(), vec![100.0, 200.0, 300.0]);
}

#[test]
fn plan_roundtrips_through_yaml() {
    let plan = SurveyPlan {
        name: "roundtrip".to_string(),
        axes: vec![
            SurveyAxis::fixed("Cl_-", vec![870.0]),
            SurveyAxis::linear("SO4_2-", 0.0, 1000.0, 5),
        ],
    };
    let yaml = plan.to_yaml_string().expect("to yaml");
    let restored: SurveyPlan = from_yaml_slice(yaml.as_bytes()).expect("from yaml");
    assert_eq!(plan, restored);
    assert_eq!(
        plan.plan_hash().expect("hash"),
        restored.plan_hash().expect("hash"),
    );
}

#[test]
fn missing_plan_file_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.yaml");
    let err = load_plan(&path).expect_err("missing plan");
    assert_eq!(err.info().code, "plan-read");
    assert!(err.info().context.contains_key("path"));
}
