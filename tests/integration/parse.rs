use agentsniff::ua::{DeviceKind, EngineKind, UserAgent, sections, split_product};

#[test]
fn test_parse_chrome_on_windows() {
    let ua = UserAgent::new(
        "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/29.0.1541.0 Safari/537.36",
    );

    assert_eq!(ua.mozilla(), "5.0");
    assert_eq!(ua.browser(), ("Chrome", "29.0.1541.0"));
    assert_eq!(ua.engine(), ("AppleWebKit", "537.36"));
    assert_eq!(ua.engine_kind(), EngineKind::AppleWebKit);
    assert_eq!(ua.platform(), "Windows");
    assert_eq!(ua.os(), "Windows 7");
    assert_eq!(ua.localization(), "");
    assert_eq!(ua.device(), DeviceKind::Desktop);
    assert!(!ua.mobile());
    assert!(!ua.bot());

    let os = ua.os_info();
    assert_eq!(os.full_name, "Windows 7");
    assert_eq!(os.name, "Windows");
    assert_eq!(os.version, "7");
}

#[test]
fn test_parse_via_from_str() {
    let ua: UserAgent = "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)"
        .parse()
        .unwrap();
    assert!(ua.bot());
    assert_eq!(ua.browser(), ("bingbot", "2.0"));
    assert_eq!(ua.device(), DeviceKind::Bot);
}

#[test]
fn test_parse_reuse() {
    let mut ua = UserAgent::new("Mozilla/5.0 (Mobile; rv:26.0) Gecko/26.0 Firefox/26.0");
    assert!(ua.mobile());
    assert_eq!(ua.os(), "FirefoxOS");

    ua.parse("Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:17.0) Gecko/20100101 Firefox/17.0");
    assert!(!ua.mobile());
    assert_eq!(ua.os(), "Ubuntu");
    assert_eq!(ua.platform(), "X11");
}

#[test]
fn test_googlebot_anywhere_is_bot() {
    for header in [
        "Googlebot",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/37.0 Safari/537.36 Googlebot",
        "Mozilla/5.0 (Windows NT 6.1; Trident/7.0; Googlebot; rv:11.0) like Gecko",
        "Opera/9.80 (Googlebot) Presto/2.7.62",
    ] {
        assert!(UserAgent::new(header).bot(), "test_case: '{header}'");
    }
}

#[test]
fn test_tokenizer_and_product_splitter() {
    let sections: Vec<_> = sections("Mozilla/5.0 (iPhone; CPU iPhone OS 7_0 like Mac OS X) Mobile/7E18WD").collect();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].name(), "Mozilla");
    assert_eq!(sections[0].comments(), ["iPhone", "CPU iPhone OS 7_0 like Mac OS X"]);
    assert_eq!((sections[1].name(), sections[1].version()), ("Mobile", "7E18WD"));
    assert_eq!(sections[1].comment(0), None);

    assert_eq!(split_product("Safari/537.36"), ("Safari", "537.36"));
}

#[test]
fn test_concurrent_parsing() {
    let headers = [
        "Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko",
        "Mozilla/5.0 (Android; Mobile; rv:17.0) Gecko/17.0 Firefox/17.0",
        "Googlebot/2.1 (+http://www.google.com/bot.html)",
        "curl/7.64.1",
    ];
    let expected: Vec<_> = headers.iter().map(|h| UserAgent::new(*h)).collect();

    let handles: Vec<_> = headers
        .into_iter()
        .map(|h| std::thread::spawn(move || UserAgent::new(h)))
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
