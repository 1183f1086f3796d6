use segment_router_rs::application::Location;
use segment_router_rs::search::{SearchItem, SearchMap, SearchValue};
use serde_json::json;

#[test]
fn location_when_href_parsed_then_path_and_search_are_split() {
    let location = Location::parse("/users//42/?tab=info&debug#top").expect("href should parse");

    assert_eq!(location.path(), "/users/42/");
    assert_eq!(
        location.search().get("tab"),
        Some(&SearchValue::Single(SearchItem::Text("info".to_string())))
    );
    assert_eq!(
        location.search().get("debug").and_then(SearchValue::first),
        Some(&SearchItem::Present)
    );
}

#[test]
fn location_when_href_has_no_path_then_root_is_used() {
    let location = Location::parse("?q=rust").expect("href should parse");
    assert_eq!(location.path(), "/");
    assert_eq!(location.search().len(), 1);
}

#[test]
fn location_when_escape_is_malformed_then_parse_fails() {
    assert!(Location::parse("/search?q=%4").is_err());
}

#[test]
fn location_when_relative_target_opened_then_it_resolves_against_current_directory() {
    let mut location = Location::new("/users/42");

    let request = location.open("7", None);
    assert_eq!(location.path(), "/users/7");
    assert_eq!(request.path, "/users/7");
    assert_eq!(request.environment.local.get("state"), Some(&json!(true)));
    assert!(request.granted);

    location.open("../about", None);
    assert_eq!(location.path(), "/about");
}

#[test]
fn location_when_absolute_target_opened_then_search_is_replaced() {
    let mut location = Location::parse("/users/42?tab=info").expect("href should parse");
    let mut search = SearchMap::new();
    search.insert(
        "page".to_string(),
        SearchValue::Single(SearchItem::Text("2".to_string())),
    );

    let request = location.open("/posts", Some(search));
    assert_eq!(request.path, "/posts");
    assert!(request.input.search.contains_key("page"));
    assert!(!location.search().contains_key("tab"));
}

#[test]
fn location_when_reloaded_then_state_is_not_pushed() {
    let location = Location::new("/settings");
    let request = location.reload();
    assert_eq!(request.path, "/settings");
    assert_eq!(request.environment.local.get("state"), Some(&json!(false)));
}
