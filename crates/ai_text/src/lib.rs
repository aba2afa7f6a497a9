//! AI Text - LLM text-generation providers and fallback selection
//!
//! Provides a uniform port over the Anthropic, OpenAI, and Gemini text
//! APIs plus a preference-ordered selector that degrades gracefully
//! across vendors.

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod selector;

pub use config::TextGenConfig;
pub use error::GenerationError;
pub use ports::TextGenerationProvider;
pub use providers::{AnthropicProvider, GeminiProvider, OpenAiProvider};
pub use selector::ProviderSelector;
