//! Environment input — the immutable key/value mapping the resolver reads.
//!
//! Built once at startup from the process environment plus an optional
//! `data/.env` file under the working directory. Process variables win over
//! file entries. Loading never writes back into the process environment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use tracing::{info, warn};

use super::envfile;

/// Directory (relative to the working directory) holding the optional env file.
pub const ENV_FILE_DIR: &str = "data";
/// Name of the optional env file.
pub const ENV_FILE_NAME: &str = ".env";

/// Path of the optional key/value file for a given working directory.
pub fn env_file_path(cwd: &Path) -> PathBuf {
    cwd.join(ENV_FILE_DIR).join(ENV_FILE_NAME)
}

/// Immutable string-to-string environment snapshot.
///
/// Absent keys are `None`; an empty value is kept as `Some("")` so callers
/// can tell the two apart when they need to. `Debug` lists keys only, since
/// values include credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvInput {
    vars: BTreeMap<String, String>,
}

impl EnvInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    /// Variables whose key or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Load `<cwd>/data/.env` and overlay the process environment on top.
    pub fn load(cwd: &Path) -> LoadedEnv {
        Self::load_from(cwd, Self::from_process())
    }

    /// Internal loader — accepts the overlay explicitly.
    /// Tests pass an overlay instead of mutating process env vars.
    pub fn load_from(cwd: &Path, overlay: EnvInput) -> LoadedEnv {
        let path = env_file_path(cwd);
        let mut vars = BTreeMap::new();

        let status = match fs::read(&path) {
            Ok(bytes) => {
                let parsed = envfile::parse(&String::from_utf8_lossy(&bytes));
                let entries = parsed.entries.len();
                vars.extend(parsed.entries);
                EnvFileStatus::Loaded {
                    entries,
                    skipped: parsed.skipped,
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => EnvFileStatus::Missing,
            Err(e) => EnvFileStatus::Unreadable(e.to_string()),
        };

        vars.extend(overlay.vars);

        LoadedEnv {
            input: EnvInput { vars },
            env_file: EnvFile { path, status },
        }
    }

    /// Raw lookup. `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Lookup that treats an empty value as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// First non-empty of `env[key]` and `default`.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.non_empty(key).unwrap_or(default).to_string()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl fmt::Debug for EnvInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvInput")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// What happened to the optional env file during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// File parsed; `skipped` counts malformed lines that were ignored.
    Loaded { entries: usize, skipped: usize },
    Missing,
    /// File exists but could not be opened.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    pub path: PathBuf,
    pub status: EnvFileStatus,
}

/// Environment input together with the env file it was built from.
#[derive(Debug, Clone)]
pub struct LoadedEnv {
    pub input: EnvInput,
    pub env_file: EnvFile,
}

impl LoadedEnv {
    /// Log where the env file was looked up and what came of it.
    /// Call after the logger is initialised.
    pub fn log_status(&self) {
        let path = self.env_file.path.display();
        match &self.env_file.status {
            EnvFileStatus::Loaded { entries, skipped: 0 } => {
                info!(env_file = %path, entries, "loaded env file");
            }
            EnvFileStatus::Loaded { entries, skipped } => {
                warn!(env_file = %path, entries, skipped, "loaded env file; malformed lines skipped");
            }
            EnvFileStatus::Missing => {
                info!(env_file = %path, "no env file, using process environment only");
            }
            EnvFileStatus::Unreadable(reason) => {
                warn!(env_file = %path, %reason, "env file unreadable — ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::log_capture;
    use tempfile::TempDir;

    fn write_env(dir: &TempDir, content: &str) {
        let data = dir.path().join(ENV_FILE_DIR);
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join(ENV_FILE_NAME), content).unwrap();
    }

    #[test]
    fn env_file_path_is_under_data() {
        let p = env_file_path(Path::new("/srv/app"));
        assert_eq!(p, PathBuf::from("/srv/app/data/.env"));
    }

    #[test]
    fn absent_and_empty_are_distinct() {
        let env: EnvInput = [("EMPTY", "")].into_iter().collect();
        assert_eq!(env.get("EMPTY"), Some(""));
        assert_eq!(env.get("MISSING"), None);
        assert_eq!(env.non_empty("EMPTY"), None);
    }

    #[test]
    fn get_or_skips_empty_values() {
        let env: EnvInput = [("EMPTY", ""), ("SET", "value")].into_iter().collect();
        assert_eq!(env.get_or("EMPTY", "fallback"), "fallback");
        assert_eq!(env.get_or("MISSING", "fallback"), "fallback");
        assert_eq!(env.get_or("SET", "fallback"), "value");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let overlay: EnvInput = [("PORT", "6000")].into_iter().collect();
        let loaded = EnvInput::load_from(dir.path(), overlay);
        assert_eq!(loaded.env_file.status, EnvFileStatus::Missing);
        assert_eq!(loaded.input.get("PORT"), Some("6000"));
        assert_eq!(loaded.input.len(), 1);
    }

    #[test]
    fn file_entries_are_loaded() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, "# comment\nPAPERLESS_API_URL=http://paperless:8000\nOLLAMA_MODEL=\"qwen\"\n");
        let loaded = EnvInput::load_from(dir.path(), EnvInput::new());
        assert_eq!(
            loaded.env_file.status,
            EnvFileStatus::Loaded { entries: 2, skipped: 0 }
        );
        assert_eq!(loaded.input.get("PAPERLESS_API_URL"), Some("http://paperless:8000"));
        assert_eq!(loaded.input.get("OLLAMA_MODEL"), Some("qwen"));
    }

    #[test]
    fn process_environment_wins_over_file() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, "AI_PROVIDER=ollama\nSCAN_INTERVAL=\"*/5 * * * *\"\n");
        let overlay: EnvInput = [("AI_PROVIDER", "azure")].into_iter().collect();
        let loaded = EnvInput::load_from(dir.path(), overlay);
        assert_eq!(loaded.input.get("AI_PROVIDER"), Some("azure"));
        assert_eq!(loaded.input.get("SCAN_INTERVAL"), Some("*/5 * * * *"));
    }

    #[test]
    fn debug_lists_keys_not_values() {
        let env: EnvInput = [("OPENAI_API_KEY", "sk-hidden")].into_iter().collect();
        let dbg = format!("{env:?}");
        assert!(dbg.contains("OPENAI_API_KEY"));
        assert!(!dbg.contains("sk-hidden"));
    }

    #[test]
    fn file_values_keep_dollar_signs() {
        let dir = TempDir::new().unwrap();
        write_env(
            &dir,
            "PAPERLESS_API_TOKEN=abc$def123\nOPENAI_API_KEY=\"sk-$HOME-x\"\nCUSTOM_API_KEY=p${PATH}q\n",
        );
        let loaded = EnvInput::load_from(dir.path(), EnvInput::new());
        assert_eq!(loaded.env_file.status, EnvFileStatus::Loaded { entries: 3, skipped: 0 });
        assert_eq!(loaded.input.get("PAPERLESS_API_TOKEN"), Some("abc$def123"));
        assert_eq!(loaded.input.get("OPENAI_API_KEY"), Some("sk-$HOME-x"));
        assert_eq!(loaded.input.get("CUSTOM_API_KEY"), Some("p${PATH}q"));
    }

    #[test]
    fn missing_file_path_is_logged_at_info() {
        let dir = TempDir::new().unwrap();
        let loaded = EnvInput::load_from(dir.path(), EnvInput::new());
        let logs = log_capture::capture(|| loaded.log_status());
        assert!(logs.contains(" INFO "), "{logs}");
        assert!(logs.contains(&loaded.env_file.path.display().to_string()), "{logs}");
    }

    #[test]
    fn status_log_carries_no_values() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, "OPENAI_API_KEY=sk-file-secret\n");
        let loaded = EnvInput::load_from(dir.path(), EnvInput::new());
        let logs = log_capture::capture(|| loaded.log_status());
        assert!(logs.contains("entries=1"), "{logs}");
        assert!(!logs.contains("sk-file-secret"), "{logs}");
    }

    #[test]
    fn loading_does_not_touch_process_env() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, "DOCANALYSIS_ENV_TEST_ONLY_KEY=1\n");
        let _ = EnvInput::load_from(dir.path(), EnvInput::new());
        assert!(std::env::var("DOCANALYSIS_ENV_TEST_ONLY_KEY").is_err());
    }
}
