//! Adapters implementing application ports

mod selector_generation_adapter;

pub use selector_generation_adapter::SelectorGenerationAdapter;
