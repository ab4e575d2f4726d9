// Types representing the pseudocode notation's syntax tree

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
