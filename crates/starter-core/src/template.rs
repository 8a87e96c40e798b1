//! Template selection

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which starter template to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateSelector {
    #[default]
    Vanilla,
    AdvancedGit,
}

impl TemplateSelector {
    /// Prompt order.
    pub const ALL: [TemplateSelector; 2] = [TemplateSelector::Vanilla, TemplateSelector::AdvancedGit];

    /// Remote template identifier. Fixed per selector.
    pub fn identifier(&self) -> &'static str {
        match self {
            TemplateSelector::Vanilla => "atrocityz/vite-template-js-vanilla",
            TemplateSelector::AdvancedGit => "atrocityz/vite-template-js-git",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            TemplateSelector::Vanilla => "Vanilla",
            TemplateSelector::AdvancedGit => "Advanced work with Git",
        }
    }

    /// Command-line flag that forces this selector, without dashes.
    pub fn flag(&self) -> &'static str {
        match self {
            TemplateSelector::Vanilla => "vanilla",
            TemplateSelector::AdvancedGit => "git",
        }
    }

    /// Selector forced by `--git` / `--vanilla`.
    ///
    /// Exactly one flag forces its selector; both or neither leave the choice
    /// to the prompt.
    pub fn from_flags(force_git: bool, force_vanilla: bool) -> Option<Self> {
        match (force_git, force_vanilla) {
            (true, false) => Some(TemplateSelector::AdvancedGit),
            (false, true) => Some(TemplateSelector::Vanilla),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateSelector::Vanilla => "vanilla",
            TemplateSelector::AdvancedGit => "advanced-git",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TemplateSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vanilla" => Ok(TemplateSelector::Vanilla),
            "advanced-git" | "git" => Ok(TemplateSelector::AdvancedGit),
            other => Err(format!(
                "unknown template '{other}' (expected 'vanilla' or 'advanced-git')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, Some(TemplateSelector::AdvancedGit))]
    #[case(false, true, Some(TemplateSelector::Vanilla))]
    #[case(true, true, None)]
    #[case(false, false, None)]
    fn test_from_flags(
        #[case] git: bool,
        #[case] vanilla: bool,
        #[case] expected: Option<TemplateSelector>,
    ) {
        assert_eq!(TemplateSelector::from_flags(git, vanilla), expected);
    }

    #[test]
    fn test_identifiers_are_distinct_and_parseable() {
        let vanilla = TemplateSelector::Vanilla.identifier();
        let git = TemplateSelector::AdvancedGit.identifier();
        assert_ne!(vanilla, git);
        assert!(starter_git::TemplateSource::parse(vanilla).is_ok());
        assert!(starter_git::TemplateSource::parse(git).is_ok());
    }

    #[test]
    fn test_parse_round_trips_display() {
        for selector in TemplateSelector::ALL {
            assert_eq!(selector.to_string().parse::<TemplateSelector>(), Ok(selector));
        }
        assert!("react".parse::<TemplateSelector>().is_err());
    }
}
