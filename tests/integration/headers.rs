use agentsniff::ua::UserAgent;
use http::{HeaderMap, HeaderValue, header::USER_AGENT};

#[test]
fn test_user_agent_from_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)"),
    );

    let ua = UserAgent::from_headers(&headers).unwrap();
    assert_eq!(ua.browser(), ("Internet Explorer", "10.0"));
    assert_eq!(ua.os(), "Windows 8");
}

#[test]
fn test_user_agent_from_headers_missing() {
    assert!(UserAgent::from_headers(&HeaderMap::new()).is_none());
}
