//! Template source identifiers
//!
//! Accepts the shorthand understood by degit:
//!
//! - `owner/repo` (GitHub)
//! - `github:owner/repo`, `gitlab:owner/repo`, `bitbucket:owner/repo`,
//!   `git.sr.ht:~owner/repo`
//! - `https://gitlab.com/owner/repo`, `git@github.com:owner/repo`
//!
//! each optionally followed by `/sub/dir` and `#ref`. Absolute paths and
//! `file://` URLs name a repository on the local disk.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https://)?(?P<domain>[^:/\s]+\.[^:/\s]+)/|git@(?P<ssh>[^:/\s]+)[:/]|(?P<site>[^/:\s]+):)?(?P<owner>[^/\s#]+)/(?P<repo>[^/\s#]+)(?P<subdir>(?:/[^/\s#]+)+)?/?(?:#(?P<reference>\S+))?$",
    )
    .unwrap()
});

/// Where a template repository is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    GitHub,
    GitLab,
    Bitbucket,
    SourceHut,
    /// A repository on the local filesystem
    Local,
}

impl Host {
    fn from_site(site: &str) -> Option<Self> {
        let name = site
            .strip_suffix(".com")
            .or_else(|| site.strip_suffix(".org"))
            .unwrap_or(site);
        match name {
            "github" => Some(Host::GitHub),
            "gitlab" => Some(Host::GitLab),
            "bitbucket" => Some(Host::Bitbucket),
            "git.sr.ht" => Some(Host::SourceHut),
            _ => None,
        }
    }

    /// Domain serving the repository, if remote.
    pub fn domain(&self) -> Option<&'static str> {
        match self {
            Host::GitHub => Some("github.com"),
            Host::GitLab => Some("gitlab.com"),
            Host::Bitbucket => Some("bitbucket.org"),
            Host::SourceHut => Some("git.sr.ht"),
            Host::Local => None,
        }
    }
}

/// A parsed template identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    identifier: String,
    host: Host,
    url: String,
    subdir: Option<PathBuf>,
    reference: Option<String>,
    ssh: bool,
}

impl TemplateSource {
    /// Parse a template identifier.
    pub fn parse(identifier: &str) -> Result<Self> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(invalid(identifier, "identifier is empty"));
        }

        if let Some(rest) = trimmed.strip_prefix("file://") {
            return Ok(Self::parse_local(trimmed, rest));
        }
        if Path::new(trimmed).is_absolute() {
            return Ok(Self::parse_local(trimmed, trimmed));
        }

        let caps = SHORTHAND
            .captures(trimmed)
            .ok_or_else(|| invalid(identifier, "expected [host:]owner/repo[/subdir][#ref]"))?;

        let ssh = caps.name("ssh").is_some();
        let site = caps
            .name("domain")
            .or_else(|| caps.name("ssh"))
            .or_else(|| caps.name("site"))
            .map(|m| m.as_str())
            .unwrap_or("github");
        let host = Host::from_site(site)
            .ok_or_else(|| invalid(identifier, &format!("unsupported host '{site}'")))?;

        let owner = &caps["owner"];
        let repo = caps["repo"].trim_end_matches(".git");
        // from_site never yields Local
        let domain = host.domain().unwrap_or_default();
        let url = if ssh {
            format!("git@{domain}:{owner}/{repo}")
        } else if host == Host::SourceHut {
            format!("https://{domain}/{owner}/{repo}")
        } else {
            format!("https://{domain}/{owner}/{repo}.git")
        };

        Ok(Self {
            identifier: trimmed.to_string(),
            host,
            url,
            subdir: caps
                .name("subdir")
                .map(|m| PathBuf::from(m.as_str().trim_start_matches('/'))),
            reference: caps.name("reference").map(|m| m.as_str().to_string()),
            ssh,
        })
    }

    /// A repository on the local disk, checked out at its HEAD.
    pub fn local(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_string_lossy().into_owned();
        Self {
            identifier: path.clone(),
            host: Host::Local,
            url: path,
            subdir: None,
            reference: None,
            ssh: false,
        }
    }

    fn parse_local(identifier: &str, rest: &str) -> Self {
        let (path, reference) = match rest.rsplit_once('#') {
            Some((path, reference)) if !reference.is_empty() && !reference.contains('/') => {
                (path, Some(reference.to_string()))
            }
            _ => (rest, None),
        };
        Self {
            identifier: identifier.to_string(),
            reference,
            ..Self::local(path)
        }
    }

    /// The identifier as given.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn host(&self) -> Host {
        self.host
    }

    /// URL or path handed to git.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Subdirectory of the repository to extract instead of its root.
    pub fn subdir(&self) -> Option<&Path> {
        self.subdir.as_deref()
    }

    /// Branch, tag or commit to extract instead of the default branch.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn is_local(&self) -> bool {
        self.host == Host::Local
    }

    pub fn uses_ssh(&self) -> bool {
        self.ssh
    }
}

impl FromStr for TemplateSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

fn invalid(identifier: &str, reason: &str) -> Error {
    Error::InvalidSource {
        identifier: identifier.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("atrocityz/vite-template-js-git", Host::GitHub, "https://github.com/atrocityz/vite-template-js-git.git")]
    #[case("github:user/repo", Host::GitHub, "https://github.com/user/repo.git")]
    #[case("gitlab:user/repo", Host::GitLab, "https://gitlab.com/user/repo.git")]
    #[case("bitbucket:user/repo", Host::Bitbucket, "https://bitbucket.org/user/repo.git")]
    #[case("git.sr.ht:~user/repo", Host::SourceHut, "https://git.sr.ht/~user/repo")]
    #[case("https://gitlab.com/user/repo", Host::GitLab, "https://gitlab.com/user/repo.git")]
    #[case("github.com/user/repo.git", Host::GitHub, "https://github.com/user/repo.git")]
    #[case("git@github.com:user/repo", Host::GitHub, "git@github.com:user/repo")]
    fn test_parse_hosts(#[case] identifier: &str, #[case] host: Host, #[case] url: &str) {
        let source = TemplateSource::parse(identifier).unwrap();
        assert_eq!(source.host(), host);
        assert_eq!(source.url(), url);
        assert_eq!(source.subdir(), None);
        assert_eq!(source.reference(), None);
    }

    #[test]
    fn test_parse_subdir_and_reference() {
        let source = TemplateSource::parse("user/repo/packages/app#v1.2.0").unwrap();
        assert_eq!(source.url(), "https://github.com/user/repo.git");
        assert_eq!(source.subdir(), Some(Path::new("packages/app")));
        assert_eq!(source.reference(), Some("v1.2.0"));
    }

    #[test]
    fn test_parse_reference_only() {
        let source = TemplateSource::parse("gitlab:user/repo#dev").unwrap();
        assert_eq!(source.reference(), Some("dev"));
        assert_eq!(source.subdir(), None);
    }

    #[test]
    fn test_ssh_flag() {
        assert!(TemplateSource::parse("git@gitlab.com:user/repo").unwrap().uses_ssh());
        assert!(!TemplateSource::parse("user/repo").unwrap().uses_ssh());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("just-a-name")]
    #[case("codeberg:user/repo")]
    fn test_parse_rejects(#[case] identifier: &str) {
        let err = TemplateSource::parse(identifier).unwrap_err();
        assert!(matches!(err, Error::InvalidSource { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_local_paths() {
        let source = TemplateSource::parse("/tmp/template").unwrap();
        assert!(source.is_local());
        assert_eq!(source.url(), "/tmp/template");

        let source = TemplateSource::parse("file:///tmp/template#v1").unwrap();
        assert!(source.is_local());
        assert_eq!(source.url(), "/tmp/template");
        assert_eq!(source.reference(), Some("v1"));
        assert_eq!(source.identifier(), "file:///tmp/template#v1");
    }

    #[test]
    fn test_display_is_identifier() {
        let source: TemplateSource = "user/repo#main".parse().unwrap();
        assert_eq!(source.to_string(), "user/repo#main");
    }
}
