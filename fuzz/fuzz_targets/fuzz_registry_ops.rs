//! Fuzz target: arbitrary signup/unregister sequences.
//!
//! Each input byte pair selects an operation, an activity, and an email.
//! After every step no roster may contain the same email twice.

#![no_main]

use std::collections::HashSet;

use activity_core::ActivityRegistry;
use libfuzzer_sys::fuzz_target;

const NAMES: [&str; 4] = ["Chess Club", "Jazz Band", "chess club", ""];
const EMAILS: [&str; 4] = ["michael@mergington.edu", "noah@mergington.edu", "x@y", ""];

fuzz_target!(|data: &[u8]| {
    let registry = ActivityRegistry::seeded();
    for pair in data.chunks_exact(2) {
        let name = NAMES[usize::from(pair[0] & 0b11)];
        let email = EMAILS[usize::from(pair[1] & 0b11)];
        let _ = if pair[0] & 0x80 == 0 {
            registry.signup(name, email)
        } else {
            registry.unregister(name, email)
        };
    }
    for activity in registry.list().values() {
        let unique: HashSet<&String> = activity.participants.iter().collect();
        assert_eq!(unique.len(), activity.participants.len(), "duplicate email on roster");
    }
});
