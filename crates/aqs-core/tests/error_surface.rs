use aqs_core::{AqsError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("component", "SO4_2-")
        .with_context("reason", "example")
}

#[test]
fn state_error_surface() {
    let err = AqsError::State(sample_info("missing-entry", "no such component"));
    assert_eq!(err.info().code, "missing-entry");
    assert!(err.info().context.contains_key("component"));
}

#[test]
fn survey_error_surface() {
    let err = AqsError::Survey(sample_info("unknown-component", "axis names absent component"));
    assert_eq!(err.info().code, "unknown-component");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn extract_error_surface() {
    let err = AqsError::Extract(sample_info("bad-selection", "no properties requested"));
    assert_eq!(err.info().code, "bad-selection");
}

#[test]
fn registry_error_surface() {
    let err = AqsError::Registry(sample_info("registry-open", "failed to open registry"));
    assert_eq!(err.info().code, "registry-open");
}

#[test]
fn serde_error_surface() {
    let err = AqsError::Serde(sample_info("json_deserialize", "schema mismatch"));
    assert_eq!(err.info().code, "json_deserialize");
}

#[test]
fn hint_is_rendered() {
    let err = AqsError::Survey(
        ErrorInfo::new("empty-axis", "axis resolves to no values").with_hint("add values"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("empty-axis"));
    assert!(rendered.contains("add values"));
}
