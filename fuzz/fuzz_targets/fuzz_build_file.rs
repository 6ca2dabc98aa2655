//! Fuzz target for the build-file analyzer.
//!
//! Goal: analysis should **never panic** on any input, and every finding must point at a line
//! that exists.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_build_file
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let findings = drainguard_domain::analyze_build_file(&text, "Dockerfile");

    let line_count = text.lines().count() as u32;
    for f in &findings {
        let line = f.line.unwrap_or(0);
        assert!(line >= 1 && line <= line_count);
    }
});
