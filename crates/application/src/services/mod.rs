//! Application services

mod speech_service;

pub use speech_service::{SpeechService, progress};
