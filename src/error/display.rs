use std::{fmt, path::Path};

use owo_colors::OwoColorize;

use crate::error::RenderingError;
use crate::language::LoadingError;

/// A problem ready to be shown to the user, whichever stage it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> Failure<'i> {
    pub fn rendering(filename: &'i Path, error: &RenderingError) -> Failure<'i> {
        Failure {
            problem: capitalize(&error.message()),
            details: error.details(),
            filename,
        }
    }

    pub fn other(filename: &'i Path, problem: &str, details: String) -> Failure<'i> {
        Failure {
            problem: problem.to_string(),
            details,
            filename,
        }
    }

    // Verbose detailed explanation
    pub fn full_details(&self) -> String {
        let name = if self.filename == Path::new("-") {
            "<stdin>".to_string()
        } else {
            self.filename
                .to_string_lossy()
                .to_string()
        };

        format!(
            r#"
{}: {}
{} {}

{}
            "#,
            "error".bright_red(),
            self.problem
                .bold(),
            "-->".bright_blue(),
            name,
            self.details
        )
        .trim_ascii()
        .to_string()
    }
}

impl<'i> From<LoadingError<'i>> for Failure<'i> {
    fn from(error: LoadingError<'i>) -> Self {
        Failure {
            problem: error.problem,
            details: error.details,
            filename: error.filename,
        }
    }
}

// Concise version for internal use
impl<'i> fmt::Display for Failure<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {} {}",
            self.filename
                .to_string_lossy(),
            self.problem
        )
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars)
            .collect(),
        None => String::new(),
    }
}
