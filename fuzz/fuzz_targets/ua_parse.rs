#![no_main]

use agentsniff::ua::UserAgent;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    let ua = UserAgent::new(input.as_str());
    assert_eq!(ua.header_str(), input.as_str());
    if input.contains("Googlebot") {
        assert!(ua.bot());
    }
    let _ = ua.os_info();
});
