//! Reference resolution and filename sanitizing properties

use kodegen_tools_sitemirror::{resolve_reference, route_from_link, sanitize_filename};
use proptest::prelude::*;

const ORIGIN: &str = "https://www.site.com";

proptest! {
    #[test]
    fn absolute_references_are_unchanged(
        reference in "https?://[a-z]{1,10}\\.com(/[a-z0-9]{1,8}){0,3}(\\?[a-z]=[0-9]{1,3})?"
    ) {
        prop_assert_eq!(resolve_reference(&reference, ORIGIN), reference);
    }

    #[test]
    fn protocol_relative_references_get_https(
        reference in "//[a-z]{1,10}\\.com(/[a-z0-9]{1,8}){0,3}"
    ) {
        prop_assert_eq!(
            resolve_reference(&reference, ORIGIN),
            format!("https:{reference}")
        );
    }

    #[test]
    fn root_relative_references_join_the_origin(path in "(/[a-z0-9._-]{1,8}){1,4}") {
        prop_assert_eq!(resolve_reference(&path, ORIGIN), format!("{ORIGIN}{path}"));
        // A trailing slash on the origin must not produce `//`
        prop_assert_eq!(
            resolve_reference(&path, &format!("{ORIGIN}/")),
            format!("{ORIGIN}{path}")
        );
    }

    #[test]
    fn bare_references_resolve_against_the_site_root(path in "[a-z][a-z0-9_-]{0,8}(/[a-z0-9._-]{1,8}){0,3}") {
        prop_assert_eq!(resolve_reference(&path, ORIGIN), format!("{ORIGIN}/{path}"));
    }

    #[test]
    fn sanitizing_is_idempotent(url in "\\PC{0,40}") {
        let once = sanitize_filename(&url);
        prop_assert_eq!(sanitize_filename(&once), once.clone());
        prop_assert!(!once.contains('/'));
        prop_assert!(!once.contains('?'));
        prop_assert!(!once.contains('#'));
    }

    #[test]
    fn sanitizing_keeps_only_the_last_segment(
        dirs in "(/[a-z0-9]{1,6}){0,3}",
        name in "[a-z0-9_-]{1,12}(\\.[a-z]{2,5})?",
        query in "(\\?[a-z]{1,4}=[a-z0-9/]{0,6})?",
        fragment in "(#[a-z/]{0,6})?",
    ) {
        let url = format!("https://cdn.site.com{dirs}/{name}{query}{fragment}");
        prop_assert_eq!(sanitize_filename(&url), name);
    }

    #[test]
    fn routes_never_start_with_slash_or_keep_extensions(
        segments in prop::collection::vec("[a-z0-9-]{1,8}", 1..4),
        ext in "(\\.[a-z]{2,4})?",
    ) {
        let link = format!("/{}{ext}", segments.join("/"));
        let route = route_from_link(&link);
        prop_assert_eq!(route, Some(segments.join("/")));
    }

    #[test]
    fn directory_routes_are_the_path_verbatim(
        segments in prop::collection::vec("[a-z0-9-]{1,6}(\\.[0-9]{1,2})?", 1..4),
    ) {
        let link = format!("/{}/", segments.join("/"));
        prop_assert_eq!(route_from_link(&link), Some(segments.join("/")));
    }
}

#[test]
fn resolution_rules_by_example() {
    let cases = [
        ("https://cdn.other.com/x.png", "https://cdn.other.com/x.png"),
        ("HTTP://Example.com/A.png", "HTTP://Example.com/A.png"),
        ("//cdn.site.com/img/a.png", "https://cdn.site.com/img/a.png"),
        ("/img/a.png", "https://www.site.com/img/a.png"),
        ("img/a.png", "https://www.site.com/img/a.png"),
        ("../fonts/a.woff2", "https://www.site.com/../fonts/a.woff2"),
        ("data:image/png;base64,AAAA", "data:image/png;base64,AAAA"),
    ];

    for (reference, expected) in cases {
        assert_eq!(resolve_reference(reference, ORIGIN), expected, "{reference}");
    }
}

#[test]
fn sanitizer_edge_cases() {
    assert_eq!(sanitize_filename("https://a.com/x/logo.png?v=3#top"), "logo.png");
    assert_eq!(sanitize_filename("https://a.com/assets/"), "assets");
    assert_eq!(sanitize_filename("https://a.com/a.png?path=/b/c.png"), "a.png");
    assert_eq!(sanitize_filename("plain.css"), "plain.css");
    assert_eq!(sanitize_filename("/"), "");
    assert_eq!(sanitize_filename(""), "");
    assert_eq!(sanitize_filename("https://a.com/.."), "");
}

#[test]
fn route_examples() {
    assert_eq!(route_from_link("/about"), Some("about".to_string()));
    assert_eq!(route_from_link("/about.html"), Some("about".to_string()));
    assert_eq!(route_from_link("/docs/intro/"), Some("docs/intro".to_string()));
    assert_eq!(route_from_link("/docs/v1.2/"), Some("docs/v1.2".to_string()));
    assert_eq!(route_from_link("/blog/post.html#c"), Some("blog/post".to_string()));
    assert_eq!(route_from_link("/search?q=1"), Some("search".to_string()));
    assert_eq!(route_from_link("/"), None);
    assert_eq!(route_from_link("/#top"), None);
    assert_eq!(route_from_link("//cdn.site.com/a"), None);
    assert_eq!(route_from_link("https://www.site.com/about"), None);
    assert_eq!(route_from_link("about"), None);
    assert_eq!(route_from_link("/../etc"), None);
}
