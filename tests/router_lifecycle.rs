use segment_router_rs::{Callback, Match, Route, Router, RouterError};
use std::collections::HashMap;

fn noop() -> Callback<()> {
    Callback::sync(|_: &mut Match<()>| Ok(()))
}

fn new_router() -> Router<()> {
    Router::new(None).expect("default options should be valid")
}

#[test]
fn router_when_variable_has_no_constraint_then_add_fails() {
    let mut router = new_router();
    let err = router
        .add_route(Route::new("/users/{id}", noop()))
        .expect_err("unconstrained variable should be rejected");

    match err {
        RouterError::MissingConstraint { variable, path } => {
            assert_eq!(variable, "id");
            assert_eq!(path, "/users/{id}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_constraint_does_not_compile_then_add_fails() {
    let mut router = new_router();
    let err = router
        .add_route(Route::new("/files/{name}", noop()).constraint("name", "([a-z"))
        .expect_err("broken constraint should be rejected");

    match err {
        RouterError::InvalidConstraint {
            variable, pattern, ..
        } => {
            assert_eq!(variable, "name");
            assert_eq!(pattern, "([a-z");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_one_route_in_batch_is_invalid_then_nothing_is_registered() {
    let mut router = new_router();
    let result = router.add([
        Route::new("/ok", noop()),
        Route::new("/users/{id}", noop()),
    ]);
    assert!(result.is_err());

    assert_eq!(router.len(), 0);
    assert!(router.match_path("/ok", ()).is_empty());
}

#[test]
fn router_when_constraints_given_as_map_then_every_variable_resolves() {
    let mut constraint = HashMap::new();
    constraint.insert("org".to_string(), r"^[a-z]+$".to_string());
    constraint.insert("repo".to_string(), r"^[a-z-]+$".to_string());

    let mut router = new_router();
    router
        .add_route(
            Route::new("/{org}/{repo}", noop())
                .constraints(constraint)
                .exact(true),
        )
        .expect("route should register");

    let matched = router.match_path("/rust/segment-router", ());
    assert_eq!(matched.len(), 1);
    let variables = matched.variables();
    assert_eq!(variables.get("org").and_then(|v| v.as_str()), Some("rust"));
    assert_eq!(variables.get("repo").and_then(|v| v.as_str()), Some("segment-router"));
}

#[test]
fn router_when_cleared_then_routes_and_count_are_reset() {
    let mut router = new_router();
    router
        .add([Route::new("/a", noop()), Route::new("/b/c", noop())])
        .expect("routes should register");
    assert_eq!(router.len(), 5);

    router.clear();
    assert!(router.is_empty());
    assert!(router.match_path("/a", ()).is_empty());

    router
        .add_route(Route::new("/a", noop()))
        .expect("route should register after clear");
    assert_eq!(router.len(), 2);
    assert_eq!(router.match_path("/a", ()).len(), 1);
}

#[test]
fn router_when_match_outlives_later_mutation_then_pipeline_is_unchanged() {
    let mut router = new_router();
    router
        .add_route(Route::new("/", noop()))
        .expect("route should register");

    let matched = router.match_path("/", ());
    router
        .add_route(Route::new("/", noop()))
        .expect("route should register");

    assert_eq!(matched.len(), 1);
    assert_eq!(router.match_path("/", ()).len(), 2);
}
