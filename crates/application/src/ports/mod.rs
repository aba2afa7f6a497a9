//! Port definitions the infrastructure layer implements

mod generation_port;
mod history_store;

pub use generation_port::GenerationPort;
pub use history_store::HistoryStorePort;

#[cfg(test)]
pub use generation_port::MockGenerationPort;
#[cfg(test)]
pub use history_store::MockHistoryStorePort;
