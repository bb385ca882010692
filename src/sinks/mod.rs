//! Sink implementations

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

// Re-export the trait next to its implementations
pub use crate::core::Sink;
