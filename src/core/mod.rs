//! Core infrastructure — shared foundation used across the whole crate.
//!
//! - **config** — environment loading and the resolved configuration.
//! - **error** — application-wide error enum.

pub mod config;
pub mod error;
