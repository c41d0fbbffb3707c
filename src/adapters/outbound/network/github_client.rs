use crate::enrichment::domain::RepoMetadata;
use crate::ports::outbound::RepositorySignal;
use crate::shared::dates;
use crate::shared::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

/// Fixed backoff before the single rate-limit retry.
const RETRY_DELAY: Duration = Duration::from_millis(1200);

static REPO_URL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Extract an owner/repo pair from a free-form repository URL.
///
/// Tolerates the historical shapes found in package metadata:
/// `https://github.com/owner/repo`, `git://github.com/owner/repo.git`,
/// `scm:git:git://github.com/owner/repo.git`, and the legacy
/// `github.com/#!/owner/repo` form. The repo segment stops at the first
/// dot, which also strips `.git` suffixes.
pub fn normalize_repo_url(url: &str) -> Option<(String, String)> {
    let pattern = REPO_URL_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)github\.com/(?:#!/)?([^/]+)/([^/#.?]+)").expect("valid repo pattern")
    });
    let captures = pattern.captures(url)?;
    Some((captures[1].to_string(), captures[2].to_string()))
}

/// GitHubClient adapter for best-effort repository metadata
///
/// Implements the RepositorySignal port against the GitHub REST API.
/// Without a configured access token the adapter fails closed and performs
/// no request at all: unauthenticated calls would mostly burn rate limit.
/// On a 403/429 response it retries exactly once after a fixed backoff.
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a new GitHub client. An empty token counts as no token.
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bom-enrich/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    async fn fetch_repo(&self, token: &str, owner: &str, repo: &str) -> Result<RepoMetadata> {
        let url = format!("{}/repos/{}/{}", self.api_base, owner, repo);

        let mut response = self.client.get(&url).bearer_auth(token).send().await?;
        if matches!(response.status().as_u16(), 403 | 429) {
            // Rate limited: back off once, then give the request one more try.
            tokio::time::sleep(RETRY_DELAY).await;
            response = self.client.get(&url).bearer_auth(token).send().await?;
        }

        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned status code {}", response.status());
        }

        let repository: GitHubRepo = response.json().await?;
        Ok(map_repo(repository))
    }
}

#[async_trait]
impl RepositorySignal for GitHubClient {
    async fn fetch_repo_metadata(&self, repo_url: &str) -> Option<RepoMetadata> {
        let (owner, repo) = normalize_repo_url(repo_url)?;
        let token = self.token.as_deref()?;

        match self.fetch_repo(token, &owner, &repo).await {
            Ok(metadata) => Some(metadata),
            Err(error) => {
                tracing::debug!(%owner, %repo, %error, "repository lookup yielded no data");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GitHubRepo {
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    stargazers_count: Option<u64>,
    #[serde(default)]
    forks_count: Option<u64>,
    #[serde(default)]
    license: Option<GitHubLicense>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubLicense {
    #[serde(default)]
    name: Option<String>,
}

fn map_repo(repository: GitHubRepo) -> RepoMetadata {
    RepoMetadata {
        release_date: repository
            .created_at
            .as_deref()
            .and_then(dates::to_dd_mm_yyyy),
        last_updated: repository
            .updated_at
            .as_deref()
            .and_then(dates::to_dd_mm_yyyy),
        stars: repository.stargazers_count.unwrap_or(0),
        forks: repository.forks_count.unwrap_or(0),
        license: repository.license.and_then(|l| l.name),
        description: repository.description,
        homepage: repository.homepage,
    }
}
