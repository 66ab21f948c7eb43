//! Property-based tests for ISUPPORT tracking.
//!
//! Uses proptest to generate token streams and verify that:
//! 1. Each key holds the value from the last message that mentioned it
//! 2. Non-005 and short messages never change state
//! 3. Arbitrary lines never panic the parser or the tracker
//!
//! Run with: `cargo test --test proptest_isupport`

use std::collections::HashMap;

use proptest::prelude::*;
use slirc_isupport::{IsupportBuilder, IsupportTracker, Message, MessageRef, PrefixSpec};

// =============================================================================
// STRATEGIES
// =============================================================================

/// ISUPPORT keys are upper-case letters and digits.
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Z0-9]{0,7}").expect("valid regex")
}

/// Values may hold the sub-delimiters `,` `:` and `=`, but no spaces.
fn value_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[a-zA-Z0-9#&@+,:=()~%$]{0,16}").expect("valid regex"))
}

fn message_strategy() -> impl Strategy<Value = Vec<(String, Option<String>)>> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..8)
}

fn build(tokens: &[(String, Option<String>)]) -> Message {
    tokens
        .iter()
        .fold(IsupportBuilder::new(), |b, (key, value)| match value {
            Some(v) => b.token(key, v),
            None => b.flag(key),
        })
        .build("bot")
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn last_write_wins(messages in prop::collection::vec(message_strategy(), 0..6)) {
        let tracker = IsupportTracker::new();
        let mut expected: HashMap<String, String> = HashMap::new();
        expected.insert("PREFIX".to_string(), "(ov)@+".to_string());

        for tokens in &messages {
            tracker.ingest(&build(tokens));
            for (key, value) in tokens {
                expected.insert(key.clone(), value.clone().unwrap_or_default());
            }
        }

        prop_assert_eq!(tracker.snapshot(), expected);
    }

    #[test]
    fn other_commands_never_mutate(
        tokens in message_strategy(),
        command in prop::string::string_regex("[A-Z]{3,8}|00[0-46-9]|[1-9][0-9]{2}").expect("valid regex"),
    ) {
        let tracker = IsupportTracker::new();
        let before = tracker.snapshot();

        let mut msg = build(&tokens);
        msg.command = command;
        prop_assert_eq!(tracker.ingest(&msg), 0);
        prop_assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn short_messages_never_mutate(param in prop::option::of("[A-Z]{1,8}=[a-z]{0,4}")) {
        let tracker = IsupportTracker::new();
        let before = tracker.snapshot();

        let msg = Message::new("005", param);
        prop_assert_eq!(tracker.ingest(&msg), 0);
        prop_assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn enabled_iff_raw_present(tokens in message_strategy(), probe in key_strategy()) {
        let tracker = IsupportTracker::new();
        tracker.ingest(&build(&tokens));
        prop_assert_eq!(tracker.is_enabled(&probe), tracker.get_raw(&probe).is_some());
    }

    #[test]
    fn prefix_pairs_positionally(
        pairs in prop::collection::vec((prop::char::range('a', 'z'), prop::char::range('!', '/')), 0..6)
    ) {
        let modes: String = pairs.iter().map(|p| p.0).collect();
        let symbols: String = pairs.iter().map(|p| p.1).collect();

        let tracker = IsupportTracker::new();
        tracker.ingest(&IsupportBuilder::new().prefix(&modes, &symbols).build("bot"));

        let map = tracker.prefix_map().expect("well-formed PREFIX");
        for (mode, symbol) in &pairs {
            // Later pairings win for repeated symbols.
            let last_mode = pairs.iter().rev().find(|p| p.1 == *symbol).map(|p| p.0);
            prop_assert_eq!(map.get(symbol).copied(), last_mode);
            prop_assert!(modes.contains(*mode));
        }
    }

    #[test]
    fn mismatched_prefix_rejected(modes in "[a-z]{0,5}", symbols in "[!-/]{0,5}") {
        prop_assume!(modes.chars().count() != symbols.chars().count());
        let value = format!("({}){}", modes, symbols);
        prop_assert!(PrefixSpec::parse(&value).is_none());
    }

    #[test]
    fn arbitrary_lines_never_panic(line in "[^\r\n\0]{0,200}") {
        let tracker = IsupportTracker::new();
        if let Ok(msg) = MessageRef::parse(&line) {
            tracker.ingest(&msg);
        }
        let _ = tracker.get_list("PREFIX");
        let _ = tracker.get_map("PREFIX");
        let _ = tracker.prefix_map();
    }
}
