//! Project store implementations.

pub mod memory;

pub use memory::MemoryProjectStore;
