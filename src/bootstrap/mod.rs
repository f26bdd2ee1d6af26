//! Bootstrap layer — modules that run before anything else starts.
//!
//! - **cli** — verbosity / help flags.
//! - **logger** — tracing-subscriber initialisation.

pub mod cli;
pub mod logger;
