use agentsniff::ua::{Browser, DeviceKind, EngineKind, OsInfo, UserAgent};
use serde_json::json;

#[test]
fn test_user_agent_to_json() {
    let ua = UserAgent::new(
        "Mozilla/5.0 (Linux; U; Android 4.0.3; ko-kr; LG-L160L Build/IML74K) AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30",
    );

    assert_eq!(
        serde_json::to_value(&ua).unwrap(),
        json!({
            "ua": "Mozilla/5.0 (Linux; U; Android 4.0.3; ko-kr; LG-L160L Build/IML74K) AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30",
            "mozilla": "5.0",
            "platform": "Linux",
            "os": "Android 4.0.3",
            "localization": "ko-kr",
            "browser": {
                "engine": "AppleWebKit",
                "engine_version": "534.30",
                "name": "Android",
                "version": "4.0",
            },
            "bot": false,
            "mobile": true,
        })
    );
}

#[test]
fn test_browser_and_os_info_round_trip() {
    let ua = UserAgent::new("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8) AppleWebKit/537.13+ (KHTML, like Gecko) Version/5.1.7 Safari/534.57.2");

    let browser: Browser =
        serde_json::from_str(&serde_json::to_string(ua.browser_info()).unwrap()).unwrap();
    assert_eq!(&browser, ua.browser_info());

    let os_info: OsInfo = serde_json::from_str(&serde_json::to_string(&ua.os_info()).unwrap()).unwrap();
    assert_eq!(os_info.name, "Mac OS X");
    assert_eq!(os_info.version, "10.6.8");
}

#[test]
fn test_kinds_as_strings() {
    assert_eq!(
        serde_json::to_value([EngineKind::Gecko, EngineKind::Unknown]).unwrap(),
        json!(["Gecko", "Unknown"])
    );
    assert_eq!(
        serde_json::from_value::<Vec<DeviceKind>>(json!(["desktop", "Mobile", "BOT"])).unwrap(),
        vec![DeviceKind::Desktop, DeviceKind::Mobile, DeviceKind::Bot]
    );
}
