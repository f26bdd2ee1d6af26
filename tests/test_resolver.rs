//! End-to-end resolver tests: `data/.env` on disk → resolved config → boundary JSON.

use std::fs;

use docanalysis::config::{self, CUSTOM_FIELDS_PLACEHOLDER, EnvFileStatus, EnvInput, Flag};
use tempfile::TempDir;

fn workdir_with_env(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(".env"), content).unwrap();
    dir
}

fn overlay(pairs: &[(&str, &str)]) -> EnvInput {
    pairs.iter().copied().collect()
}

#[test]
fn env_file_feeds_resolver() {
    let dir = workdir_with_env(
        "PAPERLESS_API_URL=http://paperless:8000/api\n\
         PAPERLESS_API_TOKEN=abc123\n\
         AI_PROVIDER=ollama\n\
         OLLAMA_MODEL=mistral\n\
         ACTIVATE_DOCUMENT_TYPE=false\n\
         PROMPT_TAGS=Invoice,Receipt\n",
    );
    let loaded = EnvInput::load_from(dir.path(), EnvInput::new());
    assert!(matches!(loaded.env_file.status, EnvFileStatus::Loaded { entries: 6, .. }));

    let cfg = config::resolve(&loaded.input);
    assert_eq!(cfg.paperless.api_url, "http://paperless:8000/api");
    assert_eq!(cfg.paperless.api_token.expose(), "abc123");
    assert_eq!(cfg.ai_provider, "ollama");
    assert_eq!(cfg.ollama.model, "mistral");
    assert_eq!(cfg.ollama.api_url, config::DEFAULT_OLLAMA_API_URL);
    assert_eq!(cfg.limit_functions.activate_document_type, Flag::No);
    assert_eq!(cfg.limit_functions.activate_title, Flag::Yes);
    assert!(cfg.prompts.predefined_tags.contains("Invoice,Receipt"));
    assert!(cfg.prompts.must_have.contains(CUSTOM_FIELDS_PLACEHOLDER));
}

#[test]
fn process_env_overrides_env_file() {
    let dir = workdir_with_env("ACTIVATE_TAGGING=no\nSCAN_INTERVAL=\"0 * * * *\"\n");
    let loaded = EnvInput::load_from(dir.path(), overlay(&[("ACTIVATE_TAGGING", "1")]));
    let cfg = config::resolve(&loaded.input);
    assert_eq!(cfg.limit_functions.activate_tagging, Flag::Yes);
    assert_eq!(cfg.scan_interval, "0 * * * *");
}

#[test]
fn env_file_credentials_are_taken_literally() {
    let dir = workdir_with_env(
        "PAPERLESS_API_TOKEN=abc$def123\n\
         OPENAI_API_KEY=\"sk-$HOME-x\"\n\
         CUSTOM_API_KEY=p${PATH}q\n",
    );
    let cfg = config::resolve(&EnvInput::load_from(dir.path(), EnvInput::new()).input);
    assert_eq!(cfg.paperless.api_token.expose(), "abc$def123");
    assert_eq!(cfg.openai.api_key.expose(), "sk-$HOME-x");
    assert_eq!(cfg.custom.api_key.expose(), "p${PATH}q");
}

#[test]
fn missing_env_file_resolves_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = EnvInput::load_from(dir.path(), EnvInput::new());
    assert_eq!(loaded.env_file.status, EnvFileStatus::Missing);
    assert_eq!(loaded.env_file.path, dir.path().join("data").join(".env"));

    let cfg = config::resolve(&loaded.input);
    assert_eq!(cfg.scan_interval, config::DEFAULT_SCAN_INTERVAL);
    assert_eq!(cfg.ai_provider, config::DEFAULT_AI_PROVIDER);
    assert_eq!(cfg.azure.api_version, config::DEFAULT_AZURE_API_VERSION);
}

#[test]
fn boundary_json_uses_downstream_shape() {
    let cfg = config::resolve(&overlay(&[
        ("PAPERLESS_API_URL", "http://x"),
        ("ACTIVATE_TITLE", "0"),
        ("AZURE_DEPLOYMENT_NAME", "gpt4o"),
    ]));
    let json = serde_json::to_value(&cfg).unwrap();

    assert_eq!(json["PAPERLESS_AI_VERSION"], "2.7.6");
    assert_eq!(json["CONFIGURED"], false);
    assert_eq!(json["disableAutomaticProcessing"], "no");
    assert_eq!(json["addAIProcessedTag"], "no");
    assert_eq!(json["addAIProcessedTags"], "ai-processed");
    assert_eq!(json["paperless"]["apiUrl"], "http://x");
    assert_eq!(json["azure"]["deploymentName"], "gpt4o");
    assert_eq!(json["aiProvider"], "openai");
    assert_eq!(json["scanInterval"], "*/30 * * * *");
    assert_eq!(json["limitFunctions"]["activateTitle"], "no");
    assert_eq!(json["limitFunctions"]["activateTagging"], "yes");
    assert!(json["mustHavePrompt"].as_str().unwrap().contains("%CUSTOMFIELDS%"));
    assert!(json["specialPromptPreDefinedTags"].is_string());
}

#[test]
fn resolution_is_idempotent() {
    let dir = workdir_with_env("PROMPT_TAGS=A,B,C\nCUSTOM_FIELDS='{\"custom_fields\":[]}'\n");
    let input = EnvInput::load_from(dir.path(), EnvInput::new()).input;
    let first = serde_json::to_vec(&config::resolve(&input)).unwrap();
    let second = serde_json::to_vec(&config::resolve(&input)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn configured_flag_is_owned_outside_the_resolver() {
    let cfg = config::resolve(&EnvInput::new());
    let setup_handle = cfg.configured.clone();
    assert!(!cfg.configured.is_configured());
    setup_handle.mark_configured();
    assert!(cfg.configured.is_configured());
}
