use serde::{Deserialize, Serialize};

use super::event::Actor;
use super::kind::EventKind;

/// Event payload variants, one per category.
///
/// Every field inside a payload is optional. The `*_or_default` style
/// accessors resolve a missing value to its display fallback ("" or 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
#[serde(rename_all = "snake_case")]
pub enum EventPayload {
    /// Repository forked
    Fork,

    /// Repository, branch or tag created
    Create(CreatePayload),

    /// Comment on an issue (or on a pull request's conversation)
    IssueComment(IssueCommentPayload),

    /// Issue opened, closed, reopened, ...
    Issues(IssuesPayload),

    /// Collaborator added/removed
    Member(MemberPayload),

    /// Pull request opened, closed, ...
    PullRequest(PullRequestPayload),

    /// Review comment on a pull request diff
    PullRequestReviewComment(PullRequestReviewCommentPayload),

    /// Commits pushed to a ref
    Push(PushPayload),

    /// Release published, ...
    Release(ReleasePayload),

    /// Repository starred
    Star,

    /// Category without a dedicated presentation
    Other {
        /// Raw platform type name, kept for diagnostics
        type_name: String,
    },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Fork => EventKind::Fork,
            Self::Create(_) => EventKind::Create,
            Self::IssueComment(_) => EventKind::IssueComment,
            Self::Issues(_) => EventKind::Issues,
            Self::Member(_) => EventKind::Member,
            Self::PullRequest(_) => EventKind::PullRequest,
            Self::PullRequestReviewComment(_) => EventKind::PullRequestReviewComment,
            Self::Push(_) => EventKind::Push,
            Self::Release(_) => EventKind::Release,
            Self::Star => EventKind::Star,
            Self::Other { .. } => EventKind::Other,
        }
    }
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Kind of ref a create event produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    Repository,
    Branch,
    Tag,
}

impl RefType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "repository" => Some(Self::Repository),
            "branch" => Some(Self::Branch),
            "tag" => Some(Self::Tag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Branch => "branch",
            Self::Tag => "tag",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<RefType>,

    /// Created ref name; absent when a whole repository was created
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
}

impl CreatePayload {
    pub fn ref_type_name(&self) -> &str {
        self.ref_type.as_ref().map(RefType::as_str).unwrap_or("")
    }

    pub fn ref_name_or_default(&self) -> &str {
        or_empty(&self.ref_name)
    }
}

/// Issue reference carried by issue events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
}

/// Pull request reference carried by review comment events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

impl IssueCommentPayload {
    pub fn issue_number(&self) -> u64 {
        self.issue.as_ref().and_then(|issue| issue.number).unwrap_or(0)
    }

    pub fn comment_body(&self) -> &str {
        self.comment
            .as_ref()
            .map(|comment| or_empty(&comment.body))
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuesPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl IssuesPayload {
    pub fn action_or_default(&self) -> &str {
        or_empty(&self.action)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// User whose collaborator status changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Actor>,
}

impl MemberPayload {
    pub fn action_or_default(&self) -> &str {
        or_empty(&self.action)
    }

    pub fn member_login(&self) -> &str {
        self.member
            .as_ref()
            .map(Actor::login_or_default)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
}

impl PullRequestPayload {
    pub fn action_or_default(&self) -> &str {
        or_empty(&self.action)
    }

    pub fn number_or_default(&self) -> u64 {
        self.number.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestReviewCommentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

impl PullRequestReviewCommentPayload {
    pub fn pull_request_number(&self) -> u64 {
        self.pull_request
            .as_ref()
            .and_then(|pr| pr.number)
            .unwrap_or(0)
    }

    pub fn comment_body(&self) -> &str {
        self.comment
            .as_ref()
            .map(|comment| or_empty(&comment.body))
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    /// Full ref name, e.g. "refs/heads/main"
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
}

impl PushPayload {
    pub fn ref_name_or_default(&self) -> &str {
        or_empty(&self.ref_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<ReleaseRef>,
}

impl ReleasePayload {
    pub fn action_or_default(&self) -> &str {
        or_empty(&self.action)
    }

    pub fn release_name(&self) -> &str {
        self.release
            .as_ref()
            .map(|release| or_empty(&release.name))
            .unwrap_or("")
    }
}
