use std::fmt;

/// Problems encountered while rendering a syntax tree. All of them are
/// fatal; the tree has to be corrected before a document can be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderingError {
    UnsupportedConstruct(String),
    MalformedAnnotation(String),
    InvalidComprehensionShape(String),
    MissingPhantom,
}

impl RenderingError {
    pub fn message(&self) -> String {
        match self {
            RenderingError::UnsupportedConstruct(_) => "unsupported construct".to_string(),
            RenderingError::MalformedAnnotation(_) => "malformed annotation".to_string(),
            RenderingError::InvalidComprehensionShape(_) => {
                "invalid comprehension shape".to_string()
            }
            RenderingError::MissingPhantom => "missing phantom text".to_string(),
        }
    }

    pub fn details(&self) -> String {
        match self {
            RenderingError::UnsupportedConstruct(what) => what.clone(),
            RenderingError::MalformedAnnotation(what) => what.clone(),
            RenderingError::InvalidComprehensionShape(what) => what.clone(),
            RenderingError::MissingPhantom => {
                "an overlapping assignment needs the phantom text of its enclosing scope"
                    .to_string()
            }
        }
    }
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message(), self.details())
    }
}

impl std::error::Error for RenderingError {}
