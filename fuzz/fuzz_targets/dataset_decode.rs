//! Fuzz target for dataset decoding and loading
//!
//! Arbitrary bytes are decoded as both JSON and CBOR. Whatever decodes is
//! pushed through validation and trie construction.
//!
//! The fuzzer should NEVER panic. Malformed input must surface as a
//! DatasetError or as skipped records.

#![no_main]

use emoticode_dataset::{Format, LoadOptions, build_trie};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for format in [Format::Json, Format::Cbor] {
        let Ok(records) = format.decode(data) else {
            continue;
        };
        if let Ok((trie, report)) = build_trie(&records, &LoadOptions::default()) {
            assert_eq!(report.names + report.skipped_records, records.len());
            assert!(trie.len() >= report.names.min(1));
        }
    }
});
