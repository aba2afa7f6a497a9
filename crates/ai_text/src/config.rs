//! Configuration for text-generation providers

use serde::{Deserialize, Serialize};

/// Configuration shared by the provider adapters
///
/// Base URLs are overridable so adapters can be exercised against local
/// mock servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextGenConfig {
    /// Base URL of the Anthropic API
    #[serde(default = "default_anthropic_base_url")]
    pub anthropic_base_url: String,

    /// Base URL of the OpenAI API
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Base URL of the Gemini API
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    /// Claude model id
    #[serde(default = "default_claude_model")]
    pub claude_model: String,

    /// OpenAI model id
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Ordered Gemini model ids; tried front to back until one answers
    #[serde(default = "default_gemini_models")]
    pub gemini_models: Vec<String>,

    /// Maximum tokens to generate per call
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_claude_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_gemini_models() -> Vec<String> {
    vec![
        "gemini-1.5-flash".to_string(),
        "gemini-1.5-flash-latest".to_string(),
        "gemini-1.5-pro".to_string(),
        "gemini-pro".to_string(),
    ]
}

const fn default_max_tokens() -> u32 {
    4096
}

const fn default_timeout_ms() -> u64 {
    120_000 // generation calls can run long
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            anthropic_base_url: default_anthropic_base_url(),
            openai_base_url: default_openai_base_url(),
            gemini_base_url: default_gemini_base_url(),
            claude_model: default_claude_model(),
            openai_model: default_openai_model(),
            gemini_models: default_gemini_models(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
