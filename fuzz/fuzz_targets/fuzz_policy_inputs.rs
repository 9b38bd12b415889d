//! Fuzz target for `armguard.toml` and `abbreviations.json` parsing.
//!
//! Goal: parsers may reject input but must never panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_inputs
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = armguard_settings::parse_config_toml(text) {
            let _ = armguard_settings::resolve_config(cfg, Default::default());
        }
        let _ = armguard_settings::parse_abbreviations_json(text);
    }
});
