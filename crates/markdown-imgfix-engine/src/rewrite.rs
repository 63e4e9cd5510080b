//! Image URL rewrite rules.
//!
//! Attachments uploaded through an enterprise GitHub web UI get URLs of the
//! form `https://<host>/<owner>/<repo>/assets/<numeric-id>/<uuid>`, which only
//! resolve for a logged-in browser session. Static pages need the raw file
//! form `https://<host>/<owner>/<repo>/raw/<branch>/assets/<uuid>` instead.
//!
//! Two rules run in order over the whole text:
//!
//! 1. The configured repository's attachment URLs: the numeric segment is
//!    dropped and only the hex identifier is kept.
//! 2. Any repository on the host: `assets/<path>` becomes
//!    `raw/<branch>/assets/<path>` with the path kept verbatim.
//!
//! Rule 2 sees the output of rule 1. Rule 1 output never matches rule 2
//! again because the segment after the repository is then `raw`.

use regex::{Captures, Regex};

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Host and repository whose attachment URLs are normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteTarget {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

/// Result of running both rules over a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct ImageRewriter {
    target: RewriteTarget,
    attachment_url: Regex,
    any_repo_asset_url: Regex,
}

impl ImageRewriter {
    pub fn new(target: RewriteTarget) -> Result<Self, RewriteError> {
        let host = regex::escape(&target.host);
        let owner = regex::escape(&target.owner);
        let repo = regex::escape(&target.repo);

        let attachment_url = Regex::new(&format!(
            r"!\[(?P<alt>[^\]]*)\]\((?P<scheme>https?)://{host}/{owner}/{repo}/assets/\d+/(?P<id>[a-f0-9\-]+)\)"
        ))?;
        let any_repo_asset_url = Regex::new(&format!(
            r"!\[(?P<alt>[^\]]*)\]\((?P<scheme>https?)://{host}/(?P<owner>[^/]+)/(?P<repo>[^/]+)/assets/(?P<path>[^)]+)\)"
        ))?;

        Ok(Self {
            target,
            attachment_url,
            any_repo_asset_url,
        })
    }

    /// Apply both rules to `content`, every occurrence, in order.
    pub fn rewrite(&self, content: &str) -> Rewrite {
        let RewriteTarget {
            host,
            owner,
            repo,
            branch,
        } = &self.target;

        let attachments_fixed = self
            .attachment_url
            .replace_all(content, |caps: &Captures| {
                format!(
                    "![{}]({}://{host}/{owner}/{repo}/raw/{branch}/assets/{})",
                    &caps["alt"], &caps["scheme"], &caps["id"]
                )
            });

        let rewritten = self
            .any_repo_asset_url
            .replace_all(&attachments_fixed, |caps: &Captures| {
                format!(
                    "![{}]({}://{host}/{}/{}/raw/{branch}/assets/{})",
                    &caps["alt"], &caps["scheme"], &caps["owner"], &caps["repo"], &caps["path"]
                )
            })
            .into_owned();

        let changed = rewritten != content;
        Rewrite {
            content: rewritten,
            changed,
        }
    }
}
