//! Rendering syntax trees into typeset pseudocode

mod expression;
mod renderer;
mod symbols;

// Re-export all public symbols
pub use expression::{render_expression, render_target};
pub use renderer::*;
pub use symbols::symbolify;
