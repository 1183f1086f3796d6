use segment_router_rs::{Router, RouterError, RouterOptions, RouterOptionsError};

#[test]
fn router_options_when_defaulted_then_slash_and_braces_are_used() {
    let options = RouterOptions::default();
    assert_eq!(options.separator, '/');
    assert_eq!(options.variable_pattern, r"^\{([a-zA-Z_0-9]+)\}$");
    options.validate().expect("default options should validate");

    let built = RouterOptions::builder()
        .build()
        .expect("default builder should build");
    assert_eq!(built, options);
}

#[test]
fn router_options_when_all_fields_customized_then_values_are_assigned() {
    let options = RouterOptions::builder()
        .separator(':')
        .variable_pattern(r"^\$(\w+)$")
        .build()
        .expect("custom options should build");

    assert_eq!(options.separator, ':');
    assert_eq!(options.variable_pattern, r"^\$(\w+)$");
}

#[test]
fn router_options_when_loaded_from_json_then_fields_are_read() {
    let options: RouterOptions =
        serde_json::from_str(r#"{"separator":".","variable_pattern":"^<(\\w+)>$"}"#)
            .expect("options should deserialize");

    assert_eq!(options.separator, '.');
    assert_eq!(options.variable_pattern, r"^<(\w+)>$");
    options.validate().expect("loaded options should validate");
}

#[test]
fn router_options_when_pattern_is_blank_then_build_fails() {
    let err = RouterOptions::builder()
        .variable_pattern("   ")
        .build()
        .expect_err("blank pattern should be rejected");
    assert_eq!(err, RouterOptionsError::EmptyVariablePattern);
}

#[test]
fn router_options_when_pattern_does_not_compile_then_build_fails() {
    let err = RouterOptions::builder()
        .variable_pattern("^{(")
        .build()
        .expect_err("broken pattern should be rejected");
    match err {
        RouterOptionsError::InvalidVariablePattern { pattern, reason } => {
            assert_eq!(pattern, "^{(");
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_options_when_pattern_lacks_capture_then_build_fails() {
    let err = RouterOptions::builder()
        .variable_pattern(r"^\{\w+\}$")
        .build()
        .expect_err("pattern without a name capture should be rejected");
    assert_eq!(
        err,
        RouterOptionsError::MissingVariableCapture {
            pattern: r"^\{\w+\}$".to_string(),
        }
    );
}

#[test]
fn router_options_when_pattern_matches_separator_then_build_fails() {
    let err = RouterOptions::builder()
        .variable_pattern("^(.*)$")
        .build()
        .expect_err("pattern swallowing the separator should be rejected");
    match err {
        RouterOptionsError::SeparatorIsVariable { separator, .. } => assert_eq!(separator, '/'),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_constructed_with_invalid_options_then_options_error_is_returned() {
    let options = RouterOptions {
        separator: '/',
        variable_pattern: String::new(),
    };
    let err = Router::<()>::new(Some(options)).expect_err("router should reject options");
    match err {
        RouterError::Options(RouterOptionsError::EmptyVariablePattern) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_constructed_then_options_are_exposed() {
    let router = Router::<()>::new(None).expect("default router should build");
    assert_eq!(router.options(), &RouterOptions::default());
    assert!(router.is_empty());
}
