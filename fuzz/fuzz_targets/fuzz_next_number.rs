#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Malformed numbers must coerce, never panic.
        let existing: Vec<&str> = s.lines().collect();
        let next = hisaab::core::next_number(&existing, "INV", 4);
        assert!(next.starts_with("INV"));
    }
});
