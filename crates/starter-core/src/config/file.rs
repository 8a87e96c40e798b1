//! The on-disk config file

use serde::Deserialize;

use crate::{PromptStyle, TemplateSelector};

/// `[ui]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiSection {
    /// Presentation style
    pub style: Option<PromptStyle>,
}

/// `[template]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSection {
    /// Template pre-selected in the template prompt
    pub default: Option<TemplateSelector>,
}

/// A parsed `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub ui: UiSection,

    #[serde(default)]
    pub template: TemplateSection,
}
