//! Document-analysis pipeline plumbing.
//!
//! - [`config`] resolves the startup configuration from the environment.
//! - [`liveness`] is the load balancer's reachability probe.
//!
//! The binaries live in `src/main.rs` and `src/bin/`.

pub mod bootstrap;
pub mod core;
#[cfg(feature = "liveness")]
pub mod liveness;

pub use bootstrap::logger;
pub use self::core::{config, error};
