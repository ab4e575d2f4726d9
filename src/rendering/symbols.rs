//! Mapping identifiers onto mathematical alphabets

use std::borrow::Cow;

static ESCAPE: &str = "Sym_";
static CALLIGRAPHIC: &str = "MC_";
static BLACKBOARD: &str = "BB_";

/// Render an identifier according to its naming convention. `Sym_lambda`
/// becomes the `\lambda` command, `MC_G` a calligraphic G, and `BB_R` a
/// blackboard bold R. Anything else is returned as-is without allocating.
pub fn symbolify(name: &str) -> Cow<'_, str> {
    if let Some(rest) = name.strip_prefix(ESCAPE) {
        Cow::Owned(format!("\\{}", rest))
    } else if let Some(rest) = name.strip_prefix(CALLIGRAPHIC) {
        Cow::Owned(format!("\\mathcal{{{}}}", rest))
    } else if let Some(rest) = name.strip_prefix(BLACKBOARD) {
        Cow::Owned(format!("\\mathbb{{{}}}", rest))
    } else {
        Cow::Borrowed(name)
    }
}
