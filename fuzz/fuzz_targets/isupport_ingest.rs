//! Fuzz target for ISUPPORT ingestion
//!
//! Feeds arbitrary lines through the line parser and the tracker, then runs
//! every query. None of it may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_isupport::{IsupportTracker, MessageRef};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.is_empty() || input.len() > 512 {
            return;
        }

        let tracker = IsupportTracker::new();
        for line in input.split('\n') {
            if let Ok(msg) = MessageRef::parse(line) {
                tracker.ingest(&msg);
            }
        }

        for key in tracker.snapshot().keys() {
            let _ = tracker.is_enabled(key);
            let _ = tracker.get_list(key);
            let _ = tracker.get_map(key);
        }
        let _ = tracker.prefix_spec();
    }
});
