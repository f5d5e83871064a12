//! Core types for extracurricular activity enrollment.
//!
//! Defines the activity record, the registry that owns every roster, the
//! startup catalog, and the error type shared by all roster operations.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod error;
pub mod registry;
pub mod seed;

pub use activity::Activity;
pub use error::RegistryError;
pub use registry::ActivityRegistry;
