//! Fragment template - the bare pseudocode lines, for inclusion elsewhere

use crate::rendering::Document;

use super::Template;

/// Template emitting just the algorithmic body, without any preamble
pub struct Fragment;

impl Template for Fragment {
    fn render(&self, document: &Document) -> Result<String, tinytemplate::error::Error> {
        Ok(document.to_string())
    }
}
