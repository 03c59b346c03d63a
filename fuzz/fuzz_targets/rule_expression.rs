//! Fuzz target for rule expression parsing.
//!
//! Parsing is total: every string yields a name and at most one payload,
//! and formatting the parsed expression gives back the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use verdict_core::parse_rule;

fuzz_target!(|raw: &str| {
    let expr = parse_rule(raw);

    assert!(!expr.name.contains(':'));
    assert!(expr.params.len() <= 1);
    assert_eq!(expr.payload().is_some(), raw.contains(':'));
    assert_eq!(expr.to_string(), raw);
});
