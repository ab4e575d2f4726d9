//! Standalone template - a complete document ready for the typesetter

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::rendering::Document;

use super::Template;

// Literal braces have to be escaped as \{ for TinyTemplate; {body} is the
// only substitution.
static PREAMBLE: &str = r#"
\documentclass[border=0.5cm, 12pt]\{standalone}

\usepackage[utf8]\{inputenc}
\usepackage\{amsmath,amsfonts}
\usepackage[section]\{algorithm}
\usepackage\{algorithmicx}
\usepackage[noend]\{algpseudocode}
\usepackage\{pseudopython}

\begin\{document}
\begin\{minipage}\{13cm}
    \begin\{algorithmic}[1]
{body}
    \end\{algorithmic}
\end\{minipage}
\end\{document}
"#;

#[derive(Serialize)]
struct Context {
    body: String,
}

/// Template wrapping the pseudocode in a standalone document
pub struct Standalone;

impl Template for Standalone {
    fn render(&self, document: &Document) -> Result<String, tinytemplate::error::Error> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&format_unescaped);
        tt.add_template("standalone", PREAMBLE)?;

        let context = Context {
            body: document.to_string(),
        };

        tt.render("standalone", &context)
    }
}
