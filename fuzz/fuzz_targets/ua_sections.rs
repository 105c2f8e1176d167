#![no_main]

use agentsniff::ua::sections;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    for section in sections(&input) {
        assert!(input.contains(section.name()));
        assert!(input.contains(section.version()));
    }
});
