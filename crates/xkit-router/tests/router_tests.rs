//! Integration tests for xkit-router
//!
//! Cover template parsing, typed resolution, registration order and the
//! parse cache policies.

use pretty_assertions::assert_eq;
use xkit_router::*;

const UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

fn router(patterns: &[&'static str]) -> Router<&'static str> {
    xkit::logging::init_test("debug");

    let mut router = Router::new();
    for pattern in patterns {
        router.register(pattern, *pattern).unwrap();
    }
    router
}

#[test]
fn test_parse_root() {
    let parsed = parse_path("/");
    assert_eq!(parsed.parsed, vec!["/"]);
    assert!(parsed.args.is_empty());
}

#[test]
fn test_parse_typed_template() {
    let parsed = parse_path("/users/<int:id>");
    assert_eq!(parsed.parsed, vec!["users", "int"]);
    assert_eq!(parsed.args, vec!["id"]);
}

#[test]
fn test_parse_unnamed_placeholder() {
    let parsed = parse_path("/items/<uuid>");
    assert_eq!(parsed.parsed, vec!["items", "uuid"]);
    assert_eq!(parsed.args, vec![DEFAULT_ARG]);
}

#[test]
fn test_resolve_int_param() {
    let mut router = router(&["/users/<int:id>"]);
    let found = router.resolve("/users/42").unwrap();
    assert_eq!(found.pattern(), "/users/<int:id>");
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.param("id"), Some("42"));
}

#[test]
fn test_register_duplicate_fails() {
    let mut router = router(&["/users/<int:id>"]);
    let err = router.register("/users/<int:id>", "again").unwrap_err();
    assert!(matches!(err, RouteError::Duplicate { ref path, .. } if path == "/users/<int:id>"));
    assert!(err.to_string().contains("already used"));
    assert_eq!(router.store().len(), 1);
}

#[test]
fn test_builder_stops_on_duplicate() {
    let result = Router::new()
        .with_route("/a", 1)
        .and_then(|r| r.with_route("a", 2));
    assert!(result.is_err());
}

#[test]
fn test_uuid_classification() {
    assert_eq!(classify(UUID, false).kind, SegmentKind::Uuid);
    let missing = UUID.replacen('-', "", 1);
    assert_eq!(classify(&missing, false).kind, SegmentKind::String);
}

#[test]
fn test_earliest_registration_wins() {
    let mut router = router(&["/a/<string:x>", "/<string:y>/b"]);
    let found = router.resolve("/a/b").unwrap();
    assert_eq!(*found.value(), "/a/<string:x>");
    assert_eq!(found.param("x"), Some("b"));

    let mut reversed = router_reversed();
    let found = reversed.resolve("/a/b").unwrap();
    assert_eq!(*found.value(), "/<string:y>/b");
    assert_eq!(found.param("y"), Some("a"));
}

fn router_reversed() -> Router<&'static str> {
    router(&["/<string:y>/b", "/a/<string:x>"])
}

#[test]
fn test_exact_match_binds_no_params() {
    let mut router = router(&["/about", "/<string:page>"]);
    let found = router.resolve("/about").unwrap();
    assert_eq!(*found.value(), "/about");
    assert!(found.params.is_empty());

    let found = router.resolve("/contact").unwrap();
    assert_eq!(found.param("page"), Some("contact"));
}

#[test]
fn test_root_only_matches_exactly() {
    let mut router = router(&["/<string:page>"]);
    assert!(router.resolve("/").is_none());

    router.register("/", "root").unwrap();
    let found = router.resolve("/").unwrap();
    assert_eq!(*found.value(), "root");
    assert!(found.params.is_empty());
}

#[test]
fn test_trailing_slash_is_distinct() {
    let mut router = router(&["/docs"]);
    assert!(router.resolve("/docs/").is_none());

    router.register("/docs/", "docs index").unwrap();
    assert_eq!(*router.resolve("/docs/").unwrap().value(), "docs index");
    assert_eq!(*router.resolve("/docs").unwrap().value(), "/docs");
}

#[test]
fn test_typed_segments() {
    let mut router = router(&[
        "/files/<file:name>",
        "/orgs/<uuid:org>/users/<int:user>",
        "/price/<float:amount>",
    ]);

    let found = router.resolve("/files/archive.tar.gz").unwrap();
    assert_eq!(found.param("name"), Some("archive.tar.gz"));

    let path = format!("/orgs/{}/users/7", UUID);
    let found = router.resolve(&path).unwrap();
    assert_eq!(found.param("org"), Some(UUID));
    assert_eq!(found.param("user"), Some("7"));

    let found = router.resolve("/price/9.99").unwrap();
    assert_eq!(found.param("amount"), Some("9.99"));
}

#[test]
fn test_declared_type_must_equal_inferred() {
    let mut router = router(&["/users/<int:id>", "/price/<float:amount>"]);
    assert!(router.resolve("/users/abc").is_none());
    assert!(router.resolve("/users/1.5").is_none());
    // 10 infers to int, not float
    assert!(router.resolve("/price/10").is_none());
}

#[test]
fn test_string_route_catches_other_kinds_when_registered() {
    let mut router = router(&["/users/<int:id>", "/users/<string:name>"]);
    assert_eq!(*router.resolve("/users/1").unwrap().value(), "/users/<int:id>");
    assert_eq!(
        *router.resolve("/users/ada").unwrap().value(),
        "/users/<string:name>"
    );
}

#[test]
fn test_unknown_declared_type_never_wildcards() {
    let mut router = router(&["/posts/<slug:title>"]);
    assert!(router.resolve("/posts/hello").is_none());
    // Still reachable by its exact structural form
    assert!(router.resolve("/posts/slug").is_some());
}

#[test]
fn test_segment_count_must_match() {
    let mut router = router(&["/users/<int:id>"]);
    assert!(router.resolve("/users").is_none());
    assert!(router.resolve("/users/1/2").is_none());
}

#[test]
fn test_match_path() {
    let params = match_path("/users/42/posts/hello", "/users/<int:id>/posts/<string:slug>")
        .unwrap();
    assert_eq!(params["id"], "42");
    assert_eq!(params["slug"], "hello");

    assert!(match_path("/users/abc", "/users/<int:id>").is_none());
    assert_eq!(match_path("about", "/about"), Some(Params::new()));
}

#[test]
fn test_store_with_explicit_cache() {
    let mut store = RouteStore::new();
    store.register("/users/<int:id>", 1).unwrap();

    let mut cache = ParseCache::new(CachePolicy::Unbounded);
    assert!(store.resolve(&mut cache, "/users/1").is_some());
    assert!(store.resolve(&mut cache, "/users/2").is_some());
    assert!(store.resolve(&mut cache, "/users/1").is_some());
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_bounded_cache_never_exceeds_capacity() {
    let mut router = Router::with_policy(CachePolicy::Bounded { capacity: 3 });
    router.register("/n/<int:n>", ()).unwrap();

    for n in 0..10 {
        let path = format!("/n/{}", n);
        assert!(router.resolve(&path).is_some());
        assert!(router.cache().len() <= 3);
    }
    assert_eq!(router.cache().len(), 3);
    assert!(router.cache().contains("/n/9"));
    assert!(!router.cache().contains("/n/0"));
}

#[test]
fn test_disabled_cache_stores_nothing() {
    let mut router = Router::with_policy(CachePolicy::Disabled);
    router.register("/n/<int:n>", ()).unwrap();

    assert!(router.resolve("/n/1").is_some());
    assert!(router.cache().is_empty());
}

#[test]
fn test_router_from_config() {
    let config = xkit::Config::from_toml_str(
        r#"
        [routing]
        parse_cache = { policy = "disabled" }
        "#,
    )
    .unwrap();

    let router: Router<()> = Router::from_config(&config.routing);
    assert_eq!(router.cache().policy(), CachePolicy::Disabled);
}

#[test]
fn test_store_set_per_method() {
    let mut set: StoreSet<&str, &str> = StoreSet::new(["GET", "POST"]);
    set.get_mut(&"GET")
        .unwrap()
        .register("/users/<int:id>", "show")
        .unwrap();
    set.get_mut(&"POST")
        .unwrap()
        .register("/users", "create")
        .unwrap();

    let mut cache = ParseCache::default();
    let get = set.get(&"GET").unwrap();
    assert_eq!(*get.resolve(&mut cache, "/users/3").unwrap().value(), "show");
    assert!(set.get(&"POST").unwrap().resolve(&mut cache, "/users/3").is_none());
}

#[test]
fn test_keys_are_structural() {
    let router = router(&["/a/<int:x>", "/b/"]);
    let keys: Vec<String> = router.store().keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec![r#"["a","int"]"#, r#"["b","/"]"#]);
}

#[test]
fn test_double_slash_is_a_root_request() {
    let mut router = router(&["/users/<int:id>"]);
    assert!(router.resolve("//").is_none());

    router.register("//", "double root").unwrap();
    let found = router.resolve("//").unwrap();
    assert_eq!(*found.value(), "double root");
    assert!(found.params.is_empty());
}

#[test]
fn test_trailing_slash_never_fills_a_placeholder() {
    let mut router = router(&["/docs/<string:x>"]);
    assert!(router.resolve("/docs/").is_none());

    let found = router.resolve("/docs/intro").unwrap();
    assert_eq!(found.param("x"), Some("intro"));
}

#[test]
fn test_trailing_slash_matches_literal_template() {
    let mut router = router(&["/docs/<string:x>", "/docs/index"]);
    let found = router.resolve("/docs/").unwrap();
    assert_eq!(*found.value(), "/docs/index");
    assert!(found.params.is_empty());
}

#[test]
fn test_numeric_literal_next_to_placeholder() {
    let mut router = router(&["/api/2/<int:id>"]);

    let found = router.resolve("/api/2/5").unwrap();
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.param("id"), Some("5"));

    assert!(router.resolve("/api/3/5").is_none());
}
