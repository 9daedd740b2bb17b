//! Fluent builders for domain events.

use chrono::{DateTime, Utc};
use hubfeed_types::{
    Actor, Comment, CreatePayload, Event, EventPayload, IssueCommentPayload, IssueRef,
    IssuesPayload, MemberPayload, PullRequestPayload, PullRequestRef,
    PullRequestReviewCommentPayload, PushPayload, RefType, ReleasePayload, ReleaseRef, Repository,
};

/// Builder for [`Event`] values.
///
/// Starts without actor, repository or timestamp so each test states exactly
/// the fields it depends on.
///
/// # Example
///
/// ```
/// use hubfeed_testing::EventBuilder;
///
/// let event = EventBuilder::star().actor("alice").repo("org/repo").build();
/// assert_eq!(event.actor_login(), "alice");
/// ```
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(payload: EventPayload) -> Self {
        Self {
            event: Event {
                id: "1".to_string(),
                actor: None,
                repository: None,
                created_at: None,
                payload,
            },
        }
    }

    pub fn fork() -> Self {
        Self::new(EventPayload::Fork)
    }

    pub fn star() -> Self {
        Self::new(EventPayload::Star)
    }

    pub fn create(ref_type: Option<RefType>, ref_name: &str) -> Self {
        Self::new(EventPayload::Create(CreatePayload {
            ref_type,
            ref_name: Some(ref_name.to_string()),
        }))
    }

    pub fn issue_comment(number: u64, body: &str) -> Self {
        Self::new(EventPayload::IssueComment(IssueCommentPayload {
            issue: Some(IssueRef {
                number: Some(number),
            }),
            comment: Some(Comment {
                body: Some(body.to_string()),
            }),
        }))
    }

    pub fn issues(action: &str) -> Self {
        Self::new(EventPayload::Issues(IssuesPayload {
            action: Some(action.to_string()),
        }))
    }

    pub fn member(action: &str, login: &str) -> Self {
        Self::new(EventPayload::Member(MemberPayload {
            action: Some(action.to_string()),
            member: Some(Actor::new(login)),
        }))
    }

    pub fn pull_request(action: &str, number: u64) -> Self {
        Self::new(EventPayload::PullRequest(PullRequestPayload {
            action: Some(action.to_string()),
            number: Some(number),
        }))
    }

    pub fn review_comment(number: u64, body: &str) -> Self {
        Self::new(EventPayload::PullRequestReviewComment(
            PullRequestReviewCommentPayload {
                pull_request: Some(PullRequestRef {
                    number: Some(number),
                }),
                comment: Some(Comment {
                    body: Some(body.to_string()),
                }),
            },
        ))
    }

    pub fn push(ref_name: &str) -> Self {
        Self::new(EventPayload::Push(PushPayload {
            ref_name: Some(ref_name.to_string()),
        }))
    }

    pub fn release(action: &str, name: &str) -> Self {
        Self::new(EventPayload::Release(ReleasePayload {
            action: Some(action.to_string()),
            release: Some(ReleaseRef {
                name: Some(name.to_string()),
            }),
        }))
    }

    /// Event of a category without a dedicated presentation
    pub fn other(type_name: &str) -> Self {
        Self::new(EventPayload::Other {
            type_name: type_name.to_string(),
        })
    }

    pub fn id(mut self, id: &str) -> Self {
        self.event.id = id.to_string();
        self
    }

    /// Set the actor login, keeping an avatar set earlier
    pub fn actor(mut self, login: &str) -> Self {
        let actor = self.event.actor.get_or_insert_with(Actor::default);
        actor.login = Some(login.to_string());
        self
    }

    pub fn avatar(mut self, url: &str) -> Self {
        let actor = self.event.actor.get_or_insert_with(Actor::default);
        actor.avatar_url = Some(url.to_string());
        self
    }

    pub fn repo(mut self, full_name: &str) -> Self {
        self.event.repository = Some(Repository::new(full_name));
        self
    }

    pub fn created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.event.created_at = Some(ts);
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}
