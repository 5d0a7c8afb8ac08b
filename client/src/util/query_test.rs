use super::*;

#[test]
fn encode_component_keeps_unreserved_characters() {
    assert_eq!(encode_component("alice_01-x.y*"), "alice_01-x.y*");
}

#[test]
fn encode_component_uses_plus_for_space() {
    assert_eq!(encode_component("john doe"), "john+doe");
}

#[test]
fn encode_component_percent_encodes_reserved_and_utf8() {
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_component("joão"), "jo%C3%A3o");
    assert_eq!(encode_component("a+b@c.com"), "a%2Bb%40c.com");
}

#[test]
fn encode_segment_escapes_slashes_and_spaces() {
    assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    assert_eq!(encode_segment("o'neil"), "o'neil");
}

#[test]
fn build_query_keeps_repeated_keys_in_order() {
    let pairs = vec![pair("roles", "admin"), pair("roles", "editor"), pair("search", "al ice")];
    assert_eq!(build_query(&pairs), "roles=admin&roles=editor&search=al+ice");
}

#[test]
fn with_query_omits_question_mark_when_empty() {
    assert_eq!(with_query("/api/users", &[]), "/api/users");
    assert_eq!(with_query("/api/users", &[pair("status", "active")]), "/api/users?status=active");
}
