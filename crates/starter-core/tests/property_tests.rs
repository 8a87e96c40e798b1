//! Property tests for project name resolution

use std::path::Path;

use proptest::prelude::*;
use starter_core::{ValidationError, resolve};

proptest! {
    #[test]
    fn named_project_resolves_under_cwd(name in "[a-zA-Z0-9_-][a-zA-Z0-9_. -]{0,20}[a-zA-Z0-9_-]") {
        let cwd = Path::new("/work");
        let target = resolve(&name, cwd).unwrap();
        let expected = cwd.join(name.trim());
        prop_assert_eq!(target.path(), expected.as_path());
        prop_assert_eq!(target.cd_hint(), Some(name.trim()));
    }

    #[test]
    fn surrounding_whitespace_is_ignored(name in "[a-z]{1,12}", pad in "[ \t]{0,4}") {
        let cwd = Path::new("/work");
        let padded = format!("{pad}{name}{pad}");
        prop_assert_eq!(resolve(&padded, cwd).unwrap(), resolve(&name, cwd).unwrap());
    }

    #[test]
    fn blank_names_are_rejected(blank in "[ \t\r\n]{0,8}") {
        prop_assert_eq!(resolve(&blank, Path::new("/work")).unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn dot_is_the_working_directory(pad in " {0,3}") {
        let cwd = Path::new("/work/app");
        let target = resolve(&format!("{pad}.{pad}"), cwd).unwrap();
        prop_assert_eq!(target.path(), cwd);
        prop_assert_eq!(target.cd_hint(), None);
    }
}
