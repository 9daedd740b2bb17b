use serde::{Deserialize, Serialize};
use std::fmt;

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Fork,
    Create,
    IssueComment,
    Issues,
    Member,
    PullRequest,
    PullRequestReviewComment,
    Push,
    Release,
    Star,
    /// Any category without a dedicated presentation
    Other,
}

impl EventKind {
    /// Map a GitHub `type` value (e.g. "PushEvent") to its category.
    ///
    /// The platform reports starring as "WatchEvent".
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "ForkEvent" => Self::Fork,
            "CreateEvent" => Self::Create,
            "IssueCommentEvent" => Self::IssueComment,
            "IssuesEvent" => Self::Issues,
            "MemberEvent" => Self::Member,
            "PullRequestEvent" => Self::PullRequest,
            "PullRequestReviewCommentEvent" => Self::PullRequestReviewComment,
            "PushEvent" => Self::Push,
            "ReleaseEvent" => Self::Release,
            "WatchEvent" => Self::Star,
            _ => Self::Other,
        }
    }

    /// GitHub `type` value for known categories
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Fork => Some("ForkEvent"),
            Self::Create => Some("CreateEvent"),
            Self::IssueComment => Some("IssueCommentEvent"),
            Self::Issues => Some("IssuesEvent"),
            Self::Member => Some("MemberEvent"),
            Self::PullRequest => Some("PullRequestEvent"),
            Self::PullRequestReviewComment => Some("PullRequestReviewCommentEvent"),
            Self::Push => Some("PushEvent"),
            Self::Release => Some("ReleaseEvent"),
            Self::Star => Some("WatchEvent"),
            Self::Other => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fork => "fork",
            Self::Create => "create",
            Self::IssueComment => "issue_comment",
            Self::Issues => "issues",
            Self::Member => "member",
            Self::PullRequest => "pull_request",
            Self::PullRequestReviewComment => "pull_request_review_comment",
            Self::Push => "push",
            Self::Release => "release",
            Self::Star => "star",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
