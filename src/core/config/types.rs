//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs handed to downstream
//! collaborators. Field names serialize in camelCase, which is the textual
//! form those collaborators read.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Serialize, Serializer};

use super::flag::Flag;

/// Compiled-in release identity. Not environment-derived.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const MASK: &str = "******";

// ── Secret ────────────────────────────────────────────────────────────────────

/// Credential value that never shows up in `Debug` or `Display` output.
///
/// Serialization writes the real value: the serialized config is what
/// provider clients consume.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Log-safe rendering: the mask when set, empty when unset.
    pub fn masked(&self) -> &'static str {
        if self.0.is_empty() { "" } else { MASK }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({:?})", self.masked())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.masked())
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// ── Readiness ─────────────────────────────────────────────────────────────────

/// The `CONFIGURED` readiness cell.
///
/// Starts unset. Clones share one cell, so whoever owns the setup flow can
/// flip it while everyone else only reads.
#[derive(Clone, Default)]
pub struct ConfiguredFlag {
    inner: Arc<AtomicBool>,
}

impl ConfiguredFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }

    pub fn mark_configured(&self) {
        self.inner.store(true, Ordering::Release);
    }
}

impl fmt::Debug for ConfiguredFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfiguredFlag").field(&self.is_configured()).finish()
    }
}

impl PartialEq for ConfiguredFlag {
    fn eq(&self, other: &Self) -> bool {
        self.is_configured() == other.is_configured()
    }
}

impl Serialize for ConfiguredFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_configured())
    }
}

// ── Processing ────────────────────────────────────────────────────────────────

/// Processing toggles. Values pass through verbatim from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingConfig {
    pub disable_automatic_processing: String,
    /// `PROCESS_PREDEFINED_DOCUMENTS`; empty when unset.
    pub predefined_mode: String,
    #[serde(rename = "addAIProcessedTag")]
    pub add_ai_processed_tag: String,
    #[serde(rename = "addAIProcessedTags")]
    pub ai_processed_tag_name: String,
}

impl ProcessingConfig {
    pub fn automatic_processing_disabled(&self) -> bool {
        self.disable_automatic_processing == Flag::Yes.as_str()
    }

    pub fn should_add_ai_processed_tag(&self) -> bool {
        self.add_ai_processed_tag == Flag::Yes.as_str()
    }
}

// ── Providers ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperlessConfig {
    pub api_url: String,
    pub api_token: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiConfig {
    pub api_key: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OllamaConfig {
    pub api_url: String,
    pub model: String,
}

/// OpenAI-compatible endpoint configured by base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProviderConfig {
    pub api_url: String,
    pub api_key: Secret,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureConfig {
    pub api_key: Secret,
    pub endpoint: String,
    pub deployment_name: String,
    pub api_version: String,
}

// ── Limits / prompts ──────────────────────────────────────────────────────────

/// Which metadata the tagging pass is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitFunctions {
    pub activate_tagging: Flag,
    pub activate_correspondents: Flag,
    pub activate_document_type: Flag,
    pub activate_title: Flag,
    pub activate_custom_fields: Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptTemplates {
    /// Fixed-tag-list prompt with the tag list already substituted.
    #[serde(rename = "specialPromptPreDefinedTags")]
    pub predefined_tags: String,
    /// Must-have-fields prompt; still carries the custom-fields placeholder.
    #[serde(rename = "mustHavePrompt")]
    pub must_have: String,
}

// ── Root ──────────────────────────────────────────────────────────────────────

/// Fully-resolved configuration, built once per process start.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(rename = "PAPERLESS_AI_VERSION")]
    pub version: &'static str,
    #[serde(rename = "CONFIGURED")]
    pub configured: ConfiguredFlag,
    #[serde(flatten)]
    pub processing: ProcessingConfig,
    pub paperless: PaperlessConfig,
    pub openai: OpenAiConfig,
    pub ollama: OllamaConfig,
    pub custom: CustomProviderConfig,
    pub azure: AzureConfig,
    pub custom_fields: String,
    /// Active provider name (`openai`, `ollama`, `custom`, `azure`, …).
    pub ai_provider: String,
    pub scan_interval: String,
    pub limit_functions: LimitFunctions,
    #[serde(flatten)]
    pub prompts: PromptTemplates,
}
