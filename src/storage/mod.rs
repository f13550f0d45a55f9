//! Storage implementations for client records

pub mod in_memory;

pub use in_memory::InMemoryClientService;
