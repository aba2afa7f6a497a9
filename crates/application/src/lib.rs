//! Application layer - Speech generation pipeline and ports
//!
//! Owns the prompt templates, the judge-verdict interpreter, the
//! pipeline orchestration, and the port definitions infrastructure
//! adapters implement.

pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod verdict;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use verdict::{Verdict, parse_verdict};
