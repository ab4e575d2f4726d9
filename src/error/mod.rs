// Program wide error types and their presentation

mod display;
mod rendering;

// Re-export all public symbols
pub use display::*;
pub use rendering::*;
