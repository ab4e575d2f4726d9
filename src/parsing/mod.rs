//! Loading syntax trees produced by the upstream parser

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Module};

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that the Module created by parse() below can be rendered
/// and any error can refer to the same filename. A filename of "-" reads
/// from standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Deserialize the JSON form of a syntax tree into a Module. Node kinds
/// outside the supported set are rejected here.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<Module, LoadingError<'i>> {
    match serde_json::from_str::<Module>(content) {
        Ok(module) => {
            debug!(
                "Found {} top-level statement{}",
                module
                    .body
                    .len(),
                if module
                    .body
                    .len()
                    == 1
                {
                    ""
                } else {
                    "s"
                }
            );
            Ok(module)
        }
        Err(error) => {
            debug!(?error);
            Err(LoadingError {
                problem: "Invalid syntax tree".to_string(),
                details: error.to_string(),
                filename,
            })
        }
    }
}
