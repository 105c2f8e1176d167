use super::utils::AgentSniff;

#[test]
#[ignore]
fn test_parse_text() {
    let output = AgentSniff::run(&[
        "parse",
        "--os-info",
        "Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko",
    ])
    .unwrap();

    assert!(output.contains("browser: Internet Explorer 11.0\n"));
    assert!(output.contains("engine: Trident\n"));
    assert!(output.contains("os: Windows 7\n"));
    assert!(output.contains("os version: 7\n"));
    assert!(output.contains("device: Desktop\n"));
}

#[test]
#[ignore]
fn test_parse_json_args() {
    let output = AgentSniff::run(&[
        "parse",
        "-f",
        "json",
        "curl/7.64.1",
        "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
    ])
    .unwrap();

    let records: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["browser"]["name"], "curl");
    assert_eq!(records[0]["bot"], false);
    assert_eq!(records[1]["browser"]["name"], "bingbot");
    assert_eq!(records[1]["device"], "Bot");
}

#[test]
#[ignore]
fn test_parse_json_stdin() {
    let output = AgentSniff::run_with_stdin(
        &["parse", "--format", "json", "-"],
        "Mozilla/5.0 (Android; Mobile; rv:17.0) Gecko/17.0 Firefox/17.0\n\nOpera/9.80 (S60; SymbOS; Opera Mobi/SYB-1107071606; U; en) Presto/2.8.149 Version/11.10\n",
    )
    .unwrap();

    let records: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["mobile"], true);
    assert_eq!(records[0]["os"], "Android");
    assert_eq!(records[1]["browser"]["engine"], "Presto");
}
