use serde::{Deserialize, Serialize};

/// A single extracurricular offering and its roster.
///
/// Only `participants` changes after construction. `max_participants` is
/// advisory and is not checked by any registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Activity {
    /// Free-text description shown to students.
    pub description: String,
    /// Human-readable meeting times, e.g. `"Fridays, 3:30 PM - 5:00 PM"`.
    pub schedule: String,
    /// Advertised capacity.
    pub max_participants: u32,
    /// Enrolled emails in signup order. Never contains duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replace the roster, keeping the first occurrence of any repeated email.
    #[must_use]
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.clear();
        for email in participants {
            let email = email.into();
            if !self.is_enrolled(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    /// Return `true` if `email` is on the roster (exact, case-sensitive).
    #[must_use]
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
