//! Presentation styles

use std::fmt;

use serde::Deserialize;

/// How prompts and progress are presented.
///
/// Both styles drive the same pipeline; they differ only in wording, choice
/// labels and decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Boxed logo, gutter and numbered steps
    #[default]
    Banner,
    /// Undecorated prompts
    Plain,
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptStyle::Banner => write!(f, "banner"),
            PromptStyle::Plain => write!(f, "plain"),
        }
    }
}
