//! In-memory activity registry.
//!
//! Owns the activity-name to [`Activity`] mapping for the life of the
//! process. Records are never added or removed after construction; only
//! rosters change, through [`ActivityRegistry::signup`] and
//! [`ActivityRegistry::unregister`].

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::{activity::Activity, error::RegistryError, seed::seed_activities};

/// Thread-safe registry of activities keyed by exact, case-sensitive name.
///
/// Each roster mutation holds the write lock across its membership check
/// and update, so concurrent signups for the same email cannot both succeed.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Create a registry over the given catalog.
    #[must_use]
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self { activities: RwLock::new(activities) }
    }

    /// Create a registry over the startup catalog from [`seed_activities`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of every activity, in catalog order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list(&self) -> IndexMap<String, Activity> {
        self.read().clone()
    }

    /// Snapshot of a single activity, if it exists.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.read().get(activity_name).cloned()
    }

    /// Number of activities in the catalog.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Return `true` if the catalog has no activities.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Append `email` to the roster of `activity_name`.
    ///
    /// The email is stored verbatim; no format check is made.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no activity has that exact name,
    /// or [`RegistryError::AlreadyRegistered`] if `email` is already enrolled.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.write();
        let activity = lookup(&mut activities, activity_name)?;

        if activity.is_enrolled(email) {
            tracing::debug!(activity = activity_name, email, "signup rejected: already enrolled");
            return Err(RegistryError::AlreadyRegistered {
                email: email.to_owned(),
                activity: activity_name.to_owned(),
            });
        }

        activity.participants.push(email.to_owned());
        tracing::info!(
            activity = activity_name,
            email,
            enrolled = activity.participants.len(),
            "student signed up"
        );
        Ok(())
    }

    /// Remove `email` from the roster of `activity_name`.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no activity has that exact name,
    /// or [`RegistryError::NotRegistered`] if `email` is not enrolled.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.write();
        let activity = lookup(&mut activities, activity_name)?;

        let Some(index) = activity.participants.iter().position(|p| p == email) else {
            tracing::debug!(activity = activity_name, email, "unregister rejected: not enrolled");
            return Err(RegistryError::NotRegistered {
                email: email.to_owned(),
                activity: activity_name.to_owned(),
            });
        };

        activity.participants.remove(index);
        tracing::info!(
            activity = activity_name,
            email,
            enrolled = activity.participants.len(),
            "student unregistered"
        );
        Ok(())
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Activity>> {
        self.activities.read().expect("activity registry read lock poisoned")
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Activity>> {
        self.activities.write().expect("activity registry write lock poisoned")
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

fn lookup<'a>(
    activities: &'a mut IndexMap<String, Activity>,
    activity_name: &str,
) -> Result<&'a mut Activity, RegistryError> {
    activities.get_mut(activity_name).ok_or_else(|| {
        tracing::debug!(activity = activity_name, "unknown activity");
        RegistryError::NotFound { activity: activity_name.to_owned() }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants(registry: &ActivityRegistry, name: &str) -> Vec<String> {
        match registry.get(name) {
            Some(a) => a.participants,
            None => panic!("activity '{name}' missing"),
        }
    }

    #[test]
    fn signup_appends_email_at_end_of_roster() {
        let registry = ActivityRegistry::seeded();
        assert!(registry.signup("Chess Club", "newstudent@mergington.edu").is_ok());
        assert_eq!(
            participants(&registry, "Chess Club"),
            ["michael@mergington.edu", "daniel@mergington.edu", "newstudent@mergington.edu"]
        );
    }

    #[test]
    fn signup_twice_fails_with_already_registered() {
        let registry = ActivityRegistry::seeded();
        assert!(registry.signup("Chess Club", "a@mergington.edu").is_ok());
        let err = registry.signup("Chess Club", "a@mergington.edu");
        assert_eq!(
            err,
            Err(RegistryError::AlreadyRegistered {
                email: "a@mergington.edu".to_owned(),
                activity: "Chess Club".to_owned(),
            })
        );
        assert_eq!(participants(&registry, "Chess Club").len(), 3, "count must grow by one");
    }

    #[test]
    fn unknown_activity_is_not_found_and_leaves_registry_unchanged() {
        let registry = ActivityRegistry::seeded();
        let before = registry.list();

        let signup = registry.signup("Nonexistent Activity", "x@mergington.edu");
        let unregister = registry.unregister("Nonexistent Activity", "x@mergington.edu");

        assert!(matches!(signup, Err(RegistryError::NotFound { .. })));
        assert!(matches!(unregister, Err(RegistryError::NotFound { .. })));
        assert_eq!(registry.list(), before);
    }

    #[test]
    fn activity_names_are_case_sensitive() {
        let registry = ActivityRegistry::seeded();
        assert!(matches!(
            registry.signup("chess club", "x@mergington.edu"),
            Err(RegistryError::NotFound { .. })
        ));
        assert!(registry.get("chess club").is_none());
    }

    #[test]
    fn unregister_removes_only_that_email_preserving_order() {
        let registry = ActivityRegistry::seeded();
        assert!(registry.signup("Chess Club", "newstudent@mergington.edu").is_ok());
        assert!(registry.unregister("Chess Club", "michael@mergington.edu").is_ok());
        assert_eq!(
            participants(&registry, "Chess Club"),
            ["daniel@mergington.edu", "newstudent@mergington.edu"]
        );
    }

    #[test]
    fn unregister_absent_email_fails_and_leaves_roster_unchanged() {
        let registry = ActivityRegistry::seeded();
        let before = participants(&registry, "Tennis Club");
        let err = registry.unregister("Tennis Club", "noone@mergington.edu");
        assert!(matches!(err, Err(RegistryError::NotRegistered { .. })));
        assert_eq!(participants(&registry, "Tennis Club"), before);
    }

    #[test]
    fn unregister_then_signup_restores_enrollment() {
        let registry = ActivityRegistry::seeded();
        assert!(registry.unregister("Gym Class", "john@mergington.edu").is_ok());
        assert!(registry.unregister("Gym Class", "john@mergington.edu").is_err());
        assert!(registry.signup("Gym Class", "john@mergington.edu").is_ok());
        assert_eq!(
            participants(&registry, "Gym Class"),
            ["olivia@mergington.edu", "john@mergington.edu"]
        );
    }

    #[test]
    fn empty_email_is_accepted_verbatim() {
        let registry = ActivityRegistry::seeded();
        assert!(registry.signup("Basketball Team", "").is_ok());
        assert!(participants(&registry, "Basketball Team").contains(&String::new()));
    }

    #[test]
    fn capacity_is_not_enforced() {
        let mut catalog = IndexMap::new();
        catalog.insert("Tiny".to_owned(), Activity::new("d", "s", 1));
        let registry = ActivityRegistry::new(catalog);
        assert!(registry.signup("Tiny", "a@x").is_ok());
        assert!(registry.signup("Tiny", "b@x").is_ok());
        assert_eq!(participants(&registry, "Tiny").len(), 2);
    }

    #[test]
    fn default_registry_holds_the_seed_catalog() {
        let registry = ActivityRegistry::default();
        assert_eq!(registry.len(), 9);
        assert!(!registry.is_empty());
        assert_eq!(registry.list(), seed_activities());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Signup(usize, usize),
        Unregister(usize, usize),
    }

    const NAMES: [&str; 3] = ["Chess Club", "Jazz Band", "Nonexistent Activity"];
    const EMAILS: [&str; 4] =
        ["michael@mergington.edu", "noah@mergington.edu", "new@mergington.edu", ""];

    fn op_strategy() -> impl proptest::strategy::Strategy<Value = Op> {
        use proptest::prelude::*;
        prop_oneof![
            (0..NAMES.len(), 0..EMAILS.len()).prop_map(|(n, e)| Op::Signup(n, e)),
            (0..NAMES.len(), 0..EMAILS.len()).prop_map(|(n, e)| Op::Unregister(n, e)),
        ]
    }

    proptest::proptest! {
        #[test]
        fn proptest_rosters_never_hold_duplicates(
            ops in proptest::collection::vec(op_strategy(), 0..64usize),
        ) {
            let registry = ActivityRegistry::seeded();
            for op in ops {
                let _ = match op {
                    Op::Signup(n, e) => registry.signup(NAMES[n], EMAILS[e]),
                    Op::Unregister(n, e) => registry.unregister(NAMES[n], EMAILS[e]),
                };
            }
            for (name, activity) in registry.list() {
                let mut seen = std::collections::HashSet::new();
                for email in &activity.participants {
                    proptest::prop_assert!(seen.insert(email), "duplicate {email:?} in {name}");
                }
            }
        }

        #[test]
        fn proptest_transitions_follow_enrollment_state(
            ops in proptest::collection::vec(op_strategy(), 0..64usize),
        ) {
            let registry = ActivityRegistry::seeded();
            for op in ops {
                let (n, e, is_signup) = match op {
                    Op::Signup(n, e) => (n, e, true),
                    Op::Unregister(n, e) => (n, e, false),
                };
                let before = registry.get(NAMES[n]);
                let result = if is_signup {
                    registry.signup(NAMES[n], EMAILS[e])
                } else {
                    registry.unregister(NAMES[n], EMAILS[e])
                };
                match before {
                    None => proptest::prop_assert!(
                        matches!(result, Err(RegistryError::NotFound { .. })),
                        "unknown activity must be NotFound"
                    ),
                    Some(activity) => {
                        let enrolled = activity.is_enrolled(EMAILS[e]);
                        proptest::prop_assert_eq!(result.is_ok(), enrolled != is_signup);
                        let after = registry.get(NAMES[n]).map(|a| a.participants.len());
                        let expected = match (result.is_ok(), is_signup) {
                            (false, _) => activity.participants.len(),
                            (true, true) => activity.participants.len() + 1,
                            (true, false) => activity.participants.len() - 1,
                        };
                        proptest::prop_assert_eq!(after, Some(expected));
                    }
                }
            }
        }
    }
}
