//! Fuzz target for the manifest analyzer.
//!
//! Goal: malformed or oddly shaped YAML should **never panic**. It may yield no findings.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_manifest
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let findings = drainguard_domain::analyze_manifest(text, "fuzz.yaml");
        assert!(findings.iter().all(|f| f.line.is_none()));

        let _ = drainguard_domain::parse_documents(text);
    }
});
