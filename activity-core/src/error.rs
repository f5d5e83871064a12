/// Errors produced by the `activity-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No activity is registered under the given name (exact match).
    #[error("activity '{activity}' not found")]
    NotFound { activity: String },

    /// The email is already on the activity's roster.
    #[error("'{email}' is already signed up for '{activity}'")]
    AlreadyRegistered { email: String, activity: String },

    /// The email is not on the activity's roster.
    #[error("'{email}' is not signed up for '{activity}'")]
    NotRegistered { email: String, activity: String },
}
