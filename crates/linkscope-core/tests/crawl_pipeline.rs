//! Integration test: the per-page flow of a crawler built on these primitives.
//!
//! Raw links from a page are resolved against it, their hosts cleaned and
//! checked against scope, and the in-scope results deduplicated.

use linkscope_core::{
    clean_subdomain, decode_chars, domain_of, effective_domain, ext_type, filter_newlines,
    join_cookies, parse_cookies, resolve_link, unique, Cookie, PageBase, ScopeMatcher,
};
use url::Url;

#[test]
fn page_links_are_resolved_scoped_and_deduplicated() {
    let page = Url::parse("https://www.example.com/blog/post.html").unwrap();
    let raw_links = [
        "/about",
        "//cdn.example.com/app.js",
        "https://twitter.com/example",
        "contact.php",
        "./about",
        "/about",
        r"https://shop.example.com/cart",
    ];

    let scope = ScopeMatcher::anchored([r"(.*\.)?example\.com"]).unwrap();
    let mut in_scope = Vec::new();
    for raw in raw_links {
        let link = decode_chars(&filter_newlines(raw));
        let absolute = resolve_link(&link, &page).unwrap();
        let url = Url::parse(&absolute).unwrap();
        if scope.in_scope(&url) {
            in_scope.push(absolute);
        }
    }

    assert_eq!(
        unique(in_scope),
        vec![
            "https://www.example.com/about",
            "https://cdn.example.com/app.js",
            "https://www.example.com/contact.php",
            "https://shop.example.com/cart",
        ]
    );
}

#[test]
fn scraped_subdomains_reduce_to_registrable_domain() {
    let scraped = ["*.API.example.co.uk", "25mail.example.co.uk", "-.static.example.co.uk"];
    let domains: Vec<String> = scraped
        .iter()
        .map(|s| clean_subdomain(s))
        .map(|host| effective_domain(&host).unwrap())
        .collect();
    assert_eq!(unique(domains), vec!["example.co.uk".to_string()]);

    let page = Url::parse("http://news.example.org:8080/").unwrap();
    assert_eq!(domain_of(&page).unwrap(), "example.org");
}

#[test]
fn cookies_survive_a_round_trip_through_the_header() {
    let jar = parse_cookies("session=abc123; csrftoken=x=y; broken; theme=dark;");
    assert_eq!(
        jar,
        vec![
            Cookie::new("session", "abc123"),
            Cookie::new("csrftoken", "x=y"),
            Cookie::new("theme", "dark"),
        ]
    );
    let header = join_cookies(&jar);
    assert_eq!(header, "session=abc123; csrftoken=x=y; theme=dark");
    assert_eq!(parse_cookies(&header), jar);
}

#[test]
fn static_assets_are_recognized_by_extension() {
    let base = PageBase::new("https", "example.com");
    let link = linkscope_core::resolve("img/logo.PNG?v=2", &base);
    assert_eq!(link, "https://example.com/img/logo.PNG?v=2");
    assert_eq!(ext_type(&link).unwrap(), ".PNG");
}
