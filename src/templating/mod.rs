//! Templates for wrapping rendered pseudocode into complete documents

mod fragment;
mod standalone;
mod template;

pub use fragment::Fragment;
pub use standalone::Standalone;
pub use template::Template;

use crate::rendering::Document;

/// Fill the specified template with a rendered document
pub fn fill(template: &impl Template, document: &Document) -> Result<String, tinytemplate::error::Error> {
    template.render(document)
}
