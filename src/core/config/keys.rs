//! Environment variable names read at startup.

pub const PAPERLESS_API_URL: &str = "PAPERLESS_API_URL";
pub const PAPERLESS_API_TOKEN: &str = "PAPERLESS_API_TOKEN";

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

pub const OLLAMA_API_URL: &str = "OLLAMA_API_URL";
pub const OLLAMA_MODEL: &str = "OLLAMA_MODEL";

pub const CUSTOM_BASE_URL: &str = "CUSTOM_BASE_URL";
pub const CUSTOM_API_KEY: &str = "CUSTOM_API_KEY";
pub const CUSTOM_MODEL: &str = "CUSTOM_MODEL";

pub const AZURE_API_KEY: &str = "AZURE_API_KEY";
pub const AZURE_ENDPOINT: &str = "AZURE_ENDPOINT";
pub const AZURE_DEPLOYMENT_NAME: &str = "AZURE_DEPLOYMENT_NAME";
pub const AZURE_API_VERSION: &str = "AZURE_API_VERSION";

pub const CUSTOM_FIELDS: &str = "CUSTOM_FIELDS";
pub const AI_PROVIDER: &str = "AI_PROVIDER";
pub const SCAN_INTERVAL: &str = "SCAN_INTERVAL";

pub const DISABLE_AUTOMATIC_PROCESSING: &str = "DISABLE_AUTOMATIC_PROCESSING";
pub const PROCESS_PREDEFINED_DOCUMENTS: &str = "PROCESS_PREDEFINED_DOCUMENTS";
pub const ADD_AI_PROCESSED_TAG: &str = "ADD_AI_PROCESSED_TAG";
pub const AI_PROCESSED_TAG_NAME: &str = "AI_PROCESSED_TAG_NAME";

pub const ACTIVATE_TAGGING: &str = "ACTIVATE_TAGGING";
pub const ACTIVATE_CORRESPONDENTS: &str = "ACTIVATE_CORRESPONDENTS";
pub const ACTIVATE_DOCUMENT_TYPE: &str = "ACTIVATE_DOCUMENT_TYPE";
pub const ACTIVATE_TITLE: &str = "ACTIVATE_TITLE";
pub const ACTIVATE_CUSTOM_FIELDS: &str = "ACTIVATE_CUSTOM_FIELDS";

pub const PROMPT_TAGS: &str = "PROMPT_TAGS";

pub const PORT: &str = "PORT";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
