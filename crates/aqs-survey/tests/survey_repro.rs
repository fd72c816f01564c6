use aqs_core::{to_canonical_json_bytes, Quantity, SampleState};
use aqs_survey::{survey, SurveyAxis, SurveyPlan};

fn base() -> SampleState {
    SampleState::new(Quantity::kelvin(298.15), Quantity::pascal(101_325.0))
        .with_component("Na_+", Quantity::milligrams_per_liter(739.0))
        .with_component("SO4_2-", Quantity::milligrams_per_liter(1011.0))
}

#[test]
fn survey_reports_repeat() {
    let plan = SurveyPlan {
        name: "gypsum-screen".to_string(),
        axes: vec![
            SurveyAxis::fixed("SO4_2-", vec![0.0, 500.0]),
            SurveyAxis::linear("Na_+", 100.0, 300.0, 3),
        ],
    };
    let base = base();
    let report_a = survey(&plan, &base).expect("survey");
    let report_b = survey(&plan, &base).expect("survey");
    assert_eq!(report_a, report_b);
    let json_a = to_canonical_json_bytes(&report_a).expect("json");
    let json_b = to_canonical_json_bytes(&report_b).expect("json");
    assert_eq!(json_a, json_b);
    assert_eq!(report_a.points.len(), 6);
    assert!(!report_a.plan_hash.is_empty());
    assert!(!report_a.base_hash.is_empty());
}

#[test]
fn plan_hash_tracks_axis_order() {
    let forward = SurveyPlan {
        name: "order".to_string(),
        axes: vec![
            SurveyAxis::fixed("Na_+", vec![1.0]),
            SurveyAxis::fixed("SO4_2-", vec![2.0]),
        ],
    };
    let swapped = SurveyPlan {
        name: "order".to_string(),
        axes: vec![
            SurveyAxis::fixed("SO4_2-", vec![2.0]),
            SurveyAxis::fixed("Na_+", vec![1.0]),
        ],
    };
    assert_ne!(
        forward.plan_hash().expect("hash"),
        swapped.plan_hash().expect("hash"),
    );
}
