//! Startup configuration resolver.
//!
//! Reads the process environment plus an optional `data/.env` file under the
//! working directory, applies defaults, normalizes yes/no flags and renders
//! the prompt templates.
//!
//! # Module layout
//!
//! - **env** — [`EnvInput`] snapshot and env-file loading.
//! - **envfile** — `.env` grammar; values are taken literally, no `$VAR` expansion.
//! - **flag** — [`Flag`] and [`parse_env_boolean`].
//! - **keys** — environment variable names.
//! - **prompts** — prompt templates and substitution.
//! - **types** — resolved structs handed to downstream collaborators.
//! - **load** — [`resolve`] and the redacted startup summary.

mod env;
mod envfile;
mod flag;
pub mod keys;
mod load;
mod prompts;
mod types;

#[cfg(test)]
pub(crate) mod log_capture;

pub use env::{EnvFile, EnvFileStatus, EnvInput, LoadedEnv, env_file_path};
pub use flag::{Flag, parse_env_boolean};
pub use load::{
    DEFAULT_AI_PROVIDER, DEFAULT_AZURE_API_VERSION, DEFAULT_OLLAMA_API_URL, DEFAULT_OLLAMA_MODEL,
    DEFAULT_SCAN_INTERVAL, log_summary, resolve,
};
pub use prompts::CUSTOM_FIELDS_PLACEHOLDER;
pub use types::*;
