//! Tests for scheme and port recovery.

use domain_utils::*;

#[test]
fn test_adapt_url_for_port_and_scheme() {
    let test_cases = vec![
        (
            "domain.com:8080/path/to/test.html?a=1&b=2",
            "//domain.com:8080/path/to/test.html?a=1&b=2",
        ),
        ("domain.com:8080", "//domain.com:8080/"),
        (
            "http://foo.bar.moz.illa/path/to/webapp.htm?aced=1",
            "http://foo.bar.moz.illa/path/to/webapp.htm?aced=1",
        ),
        ("about:blank", "about:blank"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(adapt_url_for_port_and_scheme(input), expected, "Adapt failed for: {}", input);
    }
}

#[test]
fn test_get_port_non_strict() {
    assert_eq!(get_port("domain.net", false), None);
    assert_eq!(get_port("10.0.0.1:80/path/to/index.html", false), None);
    assert_eq!(get_port("example.com:80/path/to/index.html", false), None);
    assert_eq!(get_port("example.com:5000", false), None);
    assert_eq!(get_port("ws://example.com:5000", false), Some(5000));
}

#[test]
fn test_get_port_strict() {
    assert_eq!(get_port("10.0.0.1:80/path/to/index.html", true), Some(80));
    assert_eq!(get_port("example.com:80/path/to/index.html", true), Some(80));
    assert_eq!(get_port("example.com:5000", true), Some(5000));
    assert_eq!(get_port("ws://example.com:5000", true), Some(5000));
    assert_eq!(get_port("domain.net", true), None);
    assert_eq!(get_port("https://domain.net", true), None);
}

#[test]
fn test_get_port_out_of_range() {
    assert_eq!(get_port("http://example.com:70000/", false), None);
    assert_eq!(get_port("example.com:70000", true), None);
}

#[test]
fn test_get_scheme() {
    let test_cases = vec![
        ("domain.net", None),
        ("", None),
        ("file:///home/user/index.html", Some("file")),
        ("https://domain.net", Some("https")),
        ("http://domain.net", Some("http")),
        ("about:config", Some("about")),
        ("webpack://index.js", Some("webpack")),
        ("ws://socket", Some("ws")),
        ("HTTPS://Domain.net", Some("https")),
        ("domain.net:8080/index.html", None),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            get_scheme(input).as_deref(),
            expected,
            "Scheme mismatch for: {}",
            input
        );
    }
}

#[test]
fn test_get_scheme_with_sentinel() {
    assert_eq!(get_scheme_or("domain.net", "blank"), "blank");
    assert_eq!(get_scheme_or("domain.net", NO_SCHEME), NO_SCHEME);
    assert_eq!(get_scheme_or("about:config", NO_SCHEME), "about");
}
