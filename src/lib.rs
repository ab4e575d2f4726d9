pub mod error;
pub mod language;
pub mod output;
pub mod parsing;
pub mod rendering;
pub mod templating;
