//! Domain entities

mod generation;
mod history;
mod speech_params;
mod verification;

pub use generation::GenerationResult;
pub use history::SpeechHistoryItem;
pub use speech_params::SpeechParams;
pub use verification::{VerificationAspect, VerificationResult};
