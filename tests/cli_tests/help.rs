use super::utils::AgentSniff;

#[test]
#[ignore]
fn test_help() {
    let output = AgentSniff::run(&["help"]).unwrap();
    assert!(output.contains("Usage:"));
    assert!(output.contains("Commands:"));
    assert!(output.contains("Options:"));
    assert!(output.contains("parse"));
    assert!(output.contains("tokens"));
}

#[test]
#[ignore]
fn test_parse_help() {
    let output = AgentSniff::run(&["parse", "--help"]).unwrap();
    assert!(output.contains("Usage:"));
    assert!(output.contains("--format"));
    assert!(output.contains("--os-info"));
    assert!(output.contains("--pretty"));
}

#[test]
#[ignore]
fn test_unknown_format_fails() {
    let output = AgentSniff::new()
        .unwrap()
        .output(&["parse", "--format", "yaml", "curl/7.64.1"], "")
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid output format: yaml"));
}
