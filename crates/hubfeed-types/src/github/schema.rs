use serde::Deserialize;
use serde_json::Value;

// Wire shapes of the GitHub REST "events" endpoints. Everything is optional:
// the API drops fields for deleted users/repositories and for older events.

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GithubEvent {
    /// Usually a string; some mirrors emit a number
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub actor: Option<GithubActor>,
    #[serde(default)]
    pub repo: Option<GithubRepo>,
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubActor {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GithubRepo {
    /// "owner/name"
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubNumbered {
    #[serde(default)]
    pub number: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubComment {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubRelease {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubCreatePayload {
    #[serde(rename = "ref", default)]
    pub ref_name: Option<String>,
    /// "repository" | "branch" | "tag"
    #[serde(default)]
    pub ref_type: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubIssueCommentPayload {
    #[serde(default)]
    pub issue: Option<GithubNumbered>,
    #[serde(default)]
    pub comment: Option<GithubComment>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubIssuesPayload {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubMemberPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub member: Option<GithubActor>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubPullRequestPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubReviewCommentPayload {
    #[serde(default)]
    pub pull_request: Option<GithubNumbered>,
    #[serde(default)]
    pub comment: Option<GithubComment>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubPushPayload {
    #[serde(rename = "ref", default)]
    pub ref_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct GithubReleasePayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub release: Option<GithubRelease>,
}
