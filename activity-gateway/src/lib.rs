//! HTTP API gateway for extracurricular activity enrollment.
//!
//! Exposes the activity catalog and the signup/unregister roster operations
//! over an [`activity_core::ActivityRegistry`] injected at router construction.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
