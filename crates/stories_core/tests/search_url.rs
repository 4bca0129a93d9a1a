use stories_core::{build_url, extract_page, extract_term, SearchEndpoint, UrlError};

#[test]
fn builds_default_endpoint_url() {
    assert_eq!(
        build_url("JavaScript", 2),
        "https://hn.algolia.com/api/v1/search?query=JavaScript&page=2"
    );
}

#[test]
fn term_round_trips() {
    assert_eq!(extract_term(&build_url("JavaScript", 2)).unwrap(), "JavaScript");
    assert_eq!(extract_term(&build_url("rust async", 0)).unwrap(), "rust async");
    assert_eq!(extract_term(&build_url("a&b=c", 0)).unwrap(), "a&b=c");
    assert_eq!(extract_term(&build_url("", 0)).unwrap(), "");
}

#[test]
fn page_round_trips() {
    assert_eq!(extract_page(&build_url("React", 0)).unwrap(), 0);
    assert_eq!(extract_page(&build_url("React", 17)).unwrap(), 17);
}

#[test]
fn custom_endpoint_is_used() {
    let endpoint = SearchEndpoint::new("http://127.0.0.1:4000/api/v1/search").unwrap();
    let url = endpoint.build_url("Redux", 1);

    assert_eq!(url, "http://127.0.0.1:4000/api/v1/search?query=Redux&page=1");
    assert_eq!(extract_term(&url).unwrap(), "Redux");
}

#[test]
fn endpoint_rejects_bad_bases() {
    assert!(matches!(
        SearchEndpoint::new("not a url"),
        Err(UrlError::Malformed(_))
    ));
    assert!(matches!(
        SearchEndpoint::new("https://example.com/search?x=1"),
        Err(UrlError::Malformed(_))
    ));
}

#[test]
fn foreign_urls_fail_to_parse() {
    assert!(matches!(extract_term("nonsense"), Err(UrlError::Malformed(_))));
    assert_eq!(
        extract_term("https://example.com/search?q=React"),
        Err(UrlError::MissingParam("query"))
    );
    assert_eq!(
        extract_page("https://example.com/search?query=React&page=next"),
        Err(UrlError::InvalidPage("next".to_string()))
    );
}
