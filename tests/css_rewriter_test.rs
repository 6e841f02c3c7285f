//! Stylesheet rewriting against a stub transport

use kodegen_tools_sitemirror::{AssetFetcher, rewrite_css};

mod common;
use common::{StubFetch, create_test_context, create_test_dir};

const ORIGIN: &str = "https://www.site.com";

#[tokio::test]
async fn rewrites_quoted_reference_to_public_path() {
    let dir = create_test_dir().unwrap();
    let ctx = create_test_context(dir.path(), ORIGIN);
    let http = StubFetch::succeeding();
    let fetcher = AssetFetcher::new(&ctx, &http);

    let css = rewrite_css("background: url('/img/a.png')", &fetcher).await;

    assert_eq!(css, "background: url('/a.png')");
    assert_eq!(http.requested(), vec!["https://www.site.com/img/a.png"]);
    assert!(dir.path().join("public/a.png").exists());
}

#[tokio::test]
async fn repeated_references_are_all_replaced_and_fetched_once() {
    let dir = create_test_dir().unwrap();
    let ctx = create_test_context(dir.path(), ORIGIN);
    let http = StubFetch::succeeding();
    let fetcher = AssetFetcher::new(&ctx, &http);

    let input = r#".a { background: url("/img/a.png"); }
.b { background: url(/img/a.png) repeat-x; }
.c { background-image: url('/img/a.png'); }"#;
    let css = rewrite_css(input, &fetcher).await;

    assert_eq!(
        css,
        r#".a { background: url("/a.png"); }
.b { background: url(/a.png) repeat-x; }
.c { background-image: url('/a.png'); }"#
    );
    assert_eq!(http.calls(), 1);
}

#[tokio::test]
async fn fonts_and_images_resolve_by_form() {
    let dir = create_test_dir().unwrap();
    let ctx = create_test_context(dir.path(), ORIGIN);
    let http = StubFetch::succeeding();
    let fetcher = AssetFetcher::new(&ctx, &http);

    let input = "@font-face{src:url(//fonts.cdn.com/inter.woff2?v=4) format('woff2'),url(fonts/inter.woff)}\
                 .hero{background:url(https://img.cdn.com/hero.jpg)}";
    let css = rewrite_css(input, &fetcher).await;

    assert_eq!(
        css,
        "@font-face{src:url(/inter.woff2) format('woff2'),url(/inter.woff)}\
         .hero{background:url(/hero.jpg)}"
    );
    assert_eq!(
        http.requested(),
        vec![
            "https://fonts.cdn.com/inter.woff2?v=4",
            "https://www.site.com/fonts/inter.woff",
            "https://img.cdn.com/hero.jpg",
        ]
    );
}

#[tokio::test]
async fn failed_reference_keeps_remote_url() {
    let dir = create_test_dir().unwrap();
    let ctx = create_test_context(dir.path(), ORIGIN);
    let http = StubFetch::succeeding().with_failure("https://www.site.com/img/gone.png");
    let fetcher = AssetFetcher::new(&ctx, &http);

    let css = rewrite_css(
        ".x{background:url('/img/gone.png')} .y{background:url('/img/ok.png')}",
        &fetcher,
    )
    .await;

    assert_eq!(css, ".x{background:url('/img/gone.png')} .y{background:url('/ok.png')}");
    assert_eq!(fetcher.failed_count(), 1);
    assert_eq!(fetcher.localized_count(), 1);
}

#[tokio::test]
async fn data_urls_are_left_verbatim_without_requests() {
    let dir = create_test_dir().unwrap();
    let ctx = create_test_context(dir.path(), ORIGIN);
    let http = StubFetch::succeeding();
    let fetcher = AssetFetcher::new(&ctx, &http);

    let input = ".dot{background:url(data:image/gif;base64,R0lGODlhAQABAAAAACw=)}";
    let css = rewrite_css(input, &fetcher).await;

    assert_eq!(css, input);
    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn quoted_references_with_spaces_and_parentheses_are_localized() {
    let dir = create_test_dir().unwrap();
    let ctx = create_test_context(dir.path(), ORIGIN);
    let http = StubFetch::succeeding();
    let fetcher = AssetFetcher::new(&ctx, &http);

    let css = rewrite_css(
        r#"@font-face{src:url("/fonts/My Font.woff2")} .a{background:url('/img/a(1).png')}"#,
        &fetcher,
    )
    .await;

    assert_eq!(
        css,
        r#"@font-face{src:url("/My Font.woff2")} .a{background:url('/a(1).png')}"#
    );
    assert_eq!(http.calls(), 2);
    assert!(dir.path().join("public").join("My Font.woff2").exists());
    assert!(dir.path().join("public").join("a(1).png").exists());
}
