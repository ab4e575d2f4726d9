//! Template trait for wrapping rendered pseudocode

use crate::rendering::Document;

/// Trait for templates that turn rendered pseudocode into the text handed to
/// the typesetting engine (or printed)
pub trait Template {
    /// Render a pseudocode document into markup
    fn render(&self, document: &Document) -> Result<String, tinytemplate::error::Error>;
}
