//! Fuzz target for compiled ARM document parsing and evaluation.
//!
//! Goal: arbitrary compiler output must never panic the parser or the engine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_template_document
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = armguard_template::parse_document(text) else {
        return;
    };
    let Ok(resolved) =
        armguard_settings::resolve_config(Default::default(), Default::default())
    else {
        return;
    };

    let mut abbreviations = armguard_domain::model::AbbreviationMap::new();
    abbreviations.insert("stg".to_string(), "storage".to_string());
    let _ = armguard_domain::evaluate(&doc, &abbreviations, &resolved.effective);
});
