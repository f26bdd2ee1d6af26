//! Resolution of [`EnvInput`] into [`ResolvedConfig`].
//!
//! Every field falls back to a default; nothing here can fail.

use tracing::info;

use super::env::EnvInput;
use super::flag::{Flag, parse_env_boolean};
use super::keys;
use super::prompts;
use super::types::*;

pub const DEFAULT_OLLAMA_API_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";
pub const DEFAULT_AZURE_API_VERSION: &str = "2023-05-15";
pub const DEFAULT_AI_PROVIDER: &str = "openai";
pub const DEFAULT_SCAN_INTERVAL: &str = "*/30 * * * *";
pub const DEFAULT_AI_PROCESSED_TAG_NAME: &str = "ai-processed";

/// Build the resolved configuration from an environment snapshot.
pub fn resolve(env: &EnvInput) -> ResolvedConfig {
    let secret = |key: &str| Secret::new(env.get_or(key, ""));
    let flag = |key: &str| parse_env_boolean(env.get(key), Flag::Yes);

    ResolvedConfig {
        version: VERSION,
        configured: ConfiguredFlag::new(),
        processing: ProcessingConfig {
            disable_automatic_processing: env.get_or(keys::DISABLE_AUTOMATIC_PROCESSING, Flag::No.as_str()),
            predefined_mode: env.get_or(keys::PROCESS_PREDEFINED_DOCUMENTS, ""),
            add_ai_processed_tag: env.get_or(keys::ADD_AI_PROCESSED_TAG, Flag::No.as_str()),
            ai_processed_tag_name: env.get_or(keys::AI_PROCESSED_TAG_NAME, DEFAULT_AI_PROCESSED_TAG_NAME),
        },
        paperless: PaperlessConfig {
            api_url: env.get_or(keys::PAPERLESS_API_URL, ""),
            api_token: secret(keys::PAPERLESS_API_TOKEN),
        },
        openai: OpenAiConfig {
            api_key: secret(keys::OPENAI_API_KEY),
        },
        ollama: OllamaConfig {
            api_url: env.get_or(keys::OLLAMA_API_URL, DEFAULT_OLLAMA_API_URL),
            model: env.get_or(keys::OLLAMA_MODEL, DEFAULT_OLLAMA_MODEL),
        },
        custom: CustomProviderConfig {
            api_url: env.get_or(keys::CUSTOM_BASE_URL, ""),
            api_key: secret(keys::CUSTOM_API_KEY),
            model: env.get_or(keys::CUSTOM_MODEL, ""),
        },
        azure: AzureConfig {
            api_key: secret(keys::AZURE_API_KEY),
            endpoint: env.get_or(keys::AZURE_ENDPOINT, ""),
            deployment_name: env.get_or(keys::AZURE_DEPLOYMENT_NAME, ""),
            api_version: env.get_or(keys::AZURE_API_VERSION, DEFAULT_AZURE_API_VERSION),
        },
        custom_fields: env.get_or(keys::CUSTOM_FIELDS, ""),
        ai_provider: env.get_or(keys::AI_PROVIDER, DEFAULT_AI_PROVIDER),
        scan_interval: env.get_or(keys::SCAN_INTERVAL, DEFAULT_SCAN_INTERVAL),
        limit_functions: LimitFunctions {
            activate_tagging: flag(keys::ACTIVATE_TAGGING),
            activate_correspondents: flag(keys::ACTIVATE_CORRESPONDENTS),
            activate_document_type: flag(keys::ACTIVATE_DOCUMENT_TYPE),
            activate_title: flag(keys::ACTIVATE_TITLE),
            activate_custom_fields: flag(keys::ACTIVATE_CUSTOM_FIELDS),
        },
        prompts: prompts::build(env.get(keys::PROMPT_TAGS).unwrap_or("")),
    }
}

/// Emit the redacted startup summary. Credentials appear masked only.
pub fn log_summary(config: &ResolvedConfig) {
    let limits = &config.limit_functions;
    info!(
        version = config.version,
        paperless_api_url = %config.paperless.api_url,
        paperless_api_token = config.paperless.api_token.masked(),
        openai_api_key = config.openai.api_key.masked(),
        custom_api_key = config.custom.api_key.masked(),
        azure_api_key = config.azure.api_key.masked(),
        ai_provider = %config.ai_provider,
        scan_interval = %config.scan_interval,
        activate_tagging = %limits.activate_tagging,
        activate_correspondents = %limits.activate_correspondents,
        activate_document_type = %limits.activate_document_type,
        activate_title = %limits.activate_title,
        activate_custom_fields = %limits.activate_custom_fields,
        "configuration resolved"
    );
}
