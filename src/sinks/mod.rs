//! Sink implementations

pub mod capture;
pub mod console;

pub use capture::{CaptureSink, CapturedCall};
pub use console::ConsoleSink;

// Re-export the trait alongside its implementations
pub use crate::core::Sink;
