use super::utils::AgentSniff;

#[test]
#[ignore]
fn test_tokens() {
    let output = AgentSniff::run(&[
        "tokens",
        "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/17.0",
    ])
    .unwrap();

    assert_eq!(
        output,
        "Mozilla\t5.0\t[\"X11\", \"Linux x86_64\"]\nGecko\t20100101\t[]\nFirefox\t17.0\t[]\n"
    );
}
