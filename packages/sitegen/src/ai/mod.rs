//! Completion model implementations.

pub mod anthropic;

pub use anthropic::AnthropicModel;
