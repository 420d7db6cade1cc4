//! Integration tests for fsroute-router pattern compilation
//!
//! Tests are organized by feature area and cover:
//! - Named parameters
//! - Wildcards and catch-alls
//! - Typed parameters (built-in and inline regex)
//! - Optional parameters
//! - Path normalization
//! - Strict mode
//! - Malformed input

use fsroute_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn lenient(pattern: &str) -> String {
    compile(pattern, &CompileOptions::default()).unwrap()
}

fn strict(pattern: &str) -> Result<String, ValidationError> {
    compile(pattern, &CompileOptions::strict())
}

const UUID: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

// ============================================================================
// Named parameters
// ============================================================================

#[rstest]
#[case("/users/[id]", "/users/:id")]
#[case("/users/[id]/posts/[postId]", "/users/:id/posts/:postId")]
#[case(
    "/api/[version]/users/[userId]/posts/[postId]",
    "/api/:version/users/:userId/posts/:postId"
)]
#[case("/api/v1/users/[id]/profile", "/api/v1/users/:id/profile")]
fn test_named_parameters(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
}

// ============================================================================
// Wildcards and catch-alls
// ============================================================================

#[rstest]
#[case("/files/[all]", "/files/*")]
#[case("/files/[...]", "/files/*")]
#[case("/files/[...all]", "/files/**")]
#[case("/api/[...slug]", "/api/**:slug")]
#[case("/docs/[...segments]", "/docs/**:segments")]
#[case("/files/[...path:slug]", "/files/**:path([a-z0-9-]+)")]
#[case("/api/[...ids:number]", r"/api/**:ids(\d+)")]
#[case("/categories/[[...slug]]", "/categories/**:slug?")]
#[case("/docs/[[...path:slug]]", "/docs/**:path([a-z0-9-]+)?")]
fn test_wildcards_and_catch_alls(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
}

#[test]
fn test_catch_all_in_nested_paths() {
    assert_eq!(
        lenient("/api/[version]/files/[...path]"),
        "/api/:version/files/**:path"
    );
    assert_eq!(
        lenient("/uploads/[userId]/[...filepath]"),
        "/uploads/:userId/**:filepath"
    );
    assert_eq!(
        lenient("/blog/[year]/[month]/[...slug]"),
        "/blog/:year/:month/**:slug"
    );
}

// ============================================================================
// Typed parameters
// ============================================================================

#[rstest]
#[case("/users/[id:number]", r"/users/:id(\d+)")]
#[case("/posts/[id:int]", r"/posts/:id(\d+)")]
#[case("/prices/[amount:float]", r"/prices/:amount(\d+\.\d+)")]
#[case("/posts/[slug:slug]", "/posts/:slug([a-z0-9-]+)")]
#[case("/categories/[name:alpha]", "/categories/:name([a-zA-Z]+)")]
#[case("/tags/[tag:alphanumeric]", "/tags/:tag([a-zA-Z0-9]+)")]
#[case(
    "/users/[email:email]",
    r"/users/:email([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})"
)]
#[case("/events/[date:date]", r"/events/:date(\d{4}-\d{2}-\d{2})")]
#[case("/archive/[year:year]", r"/archive/:year(\d{4})")]
#[case("/archive/[m:month]/[d:day]", r"/archive/:m(\d{1,2})/:d(\d{1,2})")]
fn test_typed_parameters(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
}

#[test]
fn test_uuid_parameter() {
    assert_eq!(lenient("/users/[id:uuid]"), format!("/users/:id({})", UUID));
}

#[test]
fn test_inline_regex_types() {
    assert_eq!(
        lenient(r"/files/[name:[a-z]+\.[a-z]{2,4}]"),
        r"/files/:name([a-z]+\.[a-z]{2,4})"
    );
    assert_eq!(
        lenient(r"/files/[name:[a-zA-Z0-9_-]+\.[a-z]{2,4}]"),
        r"/files/:name([a-zA-Z0-9_-]+\.[a-z]{2,4})"
    );
}

#[rstest]
#[case(r"/codes/[id:\d{3}]", r"/codes/:id(\d{3})")]
#[case(r"/posts/[[id:\d+]]", r"/posts/:id(\d+)?")]
#[case(r"/files/[...rest:\w+]", r"/files/**:rest(\w+)")]
#[case(r"\codes\[id:\d{3}]\", r"/codes/:id(\d{3})")]
fn test_escaped_inline_regex_types(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
    assert_eq!(strict(input), Ok(expected.to_string()));
}

#[test]
fn test_inline_regex_with_slash_passes_through() {
    // The `/` inside the type splits the segment, so nothing is bracketed
    assert_eq!(
        lenient("/docs/[...path:[a-zA-Z0-9/-]+]"),
        "/docs/[...path:[a-zA-Z0-9/-]+]"
    );
}

#[test]
fn test_mixed_typed_and_untyped() {
    assert_eq!(
        lenient("/api/users/[id:number]/posts/[slug]/comments/[commentId:uuid]"),
        format!(r"/api/users/:id(\d+)/posts/:slug/comments/:commentId({})", UUID)
    );
    assert_eq!(
        lenient("/products/[category:slug]/[id:number]"),
        r"/products/:category([a-z0-9-]+)/:id(\d+)"
    );
}

// ============================================================================
// Optional parameters
// ============================================================================

#[rstest]
#[case("/posts/[[slug]]", "/posts/:slug?")]
#[case("/posts/[[id:number]]", r"/posts/:id(\d+)?")]
#[case("/categories/[[slug:slug]]", "/categories/:slug([a-z0-9-]+)?")]
#[case("/archive/[[year:year]]/[[month:month]]", r"/archive/:year(\d{4})?/:month(\d{1,2})?")]
#[case("/blog/[year:year]/[[month:month]]/[slug]", r"/blog/:year(\d{4})/:month(\d{1,2})?/:slug")]
fn test_optional_parameters(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
}

#[test]
fn test_optional_with_typed_required() {
    assert_eq!(
        lenient("/orders/[orderId:uuid]/items/[[itemId:number]]"),
        format!(r"/orders/:orderId({})/items/:itemId(\d+)?", UUID)
    );
    assert_eq!(
        lenient("/users/[username:alphanumeric]/posts/[[category:slug]]"),
        "/users/:username([a-zA-Z0-9]+)/posts/:category([a-z0-9-]+)?"
    );
}

// ============================================================================
// Normalization
// ============================================================================

#[rstest]
#[case("", "")]
#[case("   ", "")]
#[case("/", "/")]
#[case("/api/users/profile", "/api/users/profile")]
#[case("/api//users//[id]", "/api/users/:id")]
#[case("/api/users/[id]/", "/api/users/:id")]
#[case("  /api/users/[id]  ", "/api/users/:id")]
#[case("/api/./users/../users/[id]", "/api/users/:id")]
#[case("\\api\\users\\[id]", "/api/users/:id")]
#[case("/api/v1.0/users-list/[id]", "/api/v1.0/users-list/:id")]
fn test_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
}

#[rstest]
#[case("[id]", ":id")]
#[case("[all]", "*")]
#[case("[...slug]", "**:slug")]
fn test_single_segment_patterns(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
}

// ============================================================================
// Strict mode
// ============================================================================

#[test]
fn test_strict_wildcard_in_static_segment() {
    let err = strict("/api/*/users/[id]").unwrap_err();
    assert_eq!(
        err,
        ValidationError::WildcardInStaticSegment {
            segment: "*".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid path segment: *. Wildcard characters not allowed in static segments when strict mode is enabled."
    );
}

#[test]
fn test_strict_multiple_catch_all() {
    let err = strict("/api/[...path1]/[...path2]").unwrap_err();
    assert_eq!(err, ValidationError::MultipleCatchAll);
    assert_eq!(
        err.to_string(),
        "Invalid path: multiple catch-all parameters are not allowed"
    );
}

#[test]
fn test_strict_catch_all_not_last() {
    let err = strict("/api/[...path]/users").unwrap_err();
    assert_eq!(err, ValidationError::CatchAllNotLast);
    assert_eq!(
        err.to_string(),
        "Invalid path: catch-all parameter must be the last segment"
    );
}

#[test]
fn test_strict_wildcard_after_catch_all() {
    let err = strict("/api/[...path]/[all]").unwrap_err();
    assert_eq!(err, ValidationError::WildcardAfterCatchAll);
    assert_eq!(
        err.to_string(),
        "Invalid path: wildcard (*) cannot appear after catch-all (**:param)"
    );
}

#[rstest]
#[case("/api/users/[id:number]/posts/[...slug]")]
#[case("/files/[all]/[...path]")]
#[case("/docs/[[...path]]")]
#[case("/")]
#[case("")]
fn test_strict_accepts_valid(#[case] input: &str) {
    assert_eq!(strict(input), Ok(lenient(input)));
}

#[test]
fn test_lenient_never_fails_on_strict_violations() {
    assert_eq!(lenient("/api/*/users/[id]"), "/api/*/users/:id");
    assert_eq!(lenient("/api/[...a]/[...b]"), "/api/**:a/**:b");
    assert_eq!(lenient("/api/[...path]/users"), "/api/**:path/users");
    assert_eq!(lenient("/api/[...path]/[all]"), "/api/**:path/*");
}

// ============================================================================
// Malformed input
// ============================================================================

#[rstest]
#[case("/users/[id/posts", "/users/[id/posts")]
#[case("/users/id]/posts", "/users/id]/posts")]
#[case("/users/[]/posts", "/users/:/posts")]
#[case("/users/[[id]]/posts", "/users/:id?/posts")]
#[case("/users/[[[id]]]/posts", "/users/:[id]?/posts")]
#[case("/users/[[]]/posts", "/users/:?/posts")]
#[case("/users/[/posts", "/users/[/posts")]
fn test_malformed_brackets(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(lenient(input), expected);
}

// ============================================================================
// Custom registries
// ============================================================================

#[test]
fn test_compiler_with_custom_type() {
    let compiler = Compiler::new(TypeRegistry::builtin().with_type("hex", "[0-9a-f]+"));
    assert_eq!(
        compiler.compile("/blobs/[sha:hex]/[[size:number]]").unwrap(),
        r"/blobs/:sha([0-9a-f]+)/:size(\d+)?"
    );
}

#[test]
fn test_compiler_strict_option() {
    let compiler = Compiler::default().strict(true);
    assert!(compiler.options().strict);
    assert!(compiler.compile("/a/[...b]/c").is_err());
    assert!(Compiler::default().compile("/a/[...b]/c").is_ok());
}

#[test]
fn test_compile_is_deterministic() {
    let pattern = "/api/[version]/users/[id:uuid]/files/[[...rest]]";
    assert_eq!(lenient(pattern), lenient(pattern));
}
