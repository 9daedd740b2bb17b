use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::event::{
    Actor, Comment, CreatePayload, Event, EventKind, EventPayload, IssueCommentPayload, IssueRef,
    IssuesPayload, MemberPayload, PullRequestPayload, PullRequestRef,
    PullRequestReviewCommentPayload, PushPayload, RefType, ReleasePayload, ReleaseRef, Repository,
};

use super::schema::{
    GithubActor, GithubComment, GithubCreatePayload, GithubEvent, GithubIssueCommentPayload,
    GithubIssuesPayload, GithubMemberPayload, GithubPullRequestPayload, GithubPushPayload,
    GithubReleasePayload, GithubReviewCommentPayload,
};

/// Convert a wire event into the domain model
pub(crate) fn map_event(raw: GithubEvent) -> Event {
    let type_name = raw.type_name.unwrap_or_default();

    Event {
        id: map_id(raw.id),
        actor: raw.actor.map(map_actor),
        repository: raw.repo.map(|repo| Repository {
            full_name: repo.name,
        }),
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        payload: map_payload(&type_name, raw.payload),
    }
}

fn map_id(id: Option<Value>) -> String {
    match id {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn map_actor(actor: GithubActor) -> Actor {
    Actor {
        login: actor.login,
        avatar_url: actor.avatar_url,
    }
}

fn map_comment(comment: GithubComment) -> Comment {
    Comment { body: comment.body }
}

fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(err) => {
            tracing::warn!(timestamp = ts, error = %err, "unparsable created_at; dropping timestamp");
            None
        }
    }
}

/// Decode a category payload, degrading to its empty form when the payload
/// is missing or does not have the expected shape.
fn decode_payload<T>(type_name: &str, payload: Option<Value>) -> T
where
    T: DeserializeOwned + Default,
{
    match payload {
        None | Some(Value::Null) => T::default(),
        Some(value) => match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(
                    type_name,
                    error = %err,
                    "payload does not match its event type; using empty payload"
                );
                T::default()
            }
        },
    }
}

pub(crate) fn map_payload(type_name: &str, payload: Option<Value>) -> EventPayload {
    match EventKind::from_type_name(type_name) {
        EventKind::Fork => EventPayload::Fork,
        EventKind::Create => {
            let raw: GithubCreatePayload = decode_payload(type_name, payload);
            EventPayload::Create(CreatePayload {
                ref_type: raw.ref_type.as_deref().and_then(RefType::from_name),
                ref_name: raw.ref_name,
            })
        }
        EventKind::IssueComment => {
            let raw: GithubIssueCommentPayload = decode_payload(type_name, payload);
            EventPayload::IssueComment(IssueCommentPayload {
                issue: raw.issue.map(|issue| IssueRef {
                    number: issue.number,
                }),
                comment: raw.comment.map(map_comment),
            })
        }
        EventKind::Issues => {
            let raw: GithubIssuesPayload = decode_payload(type_name, payload);
            EventPayload::Issues(IssuesPayload { action: raw.action })
        }
        EventKind::Member => {
            let raw: GithubMemberPayload = decode_payload(type_name, payload);
            EventPayload::Member(MemberPayload {
                action: raw.action,
                member: raw.member.map(map_actor),
            })
        }
        EventKind::PullRequest => {
            let raw: GithubPullRequestPayload = decode_payload(type_name, payload);
            EventPayload::PullRequest(PullRequestPayload {
                action: raw.action,
                number: raw.number,
            })
        }
        EventKind::PullRequestReviewComment => {
            let raw: GithubReviewCommentPayload = decode_payload(type_name, payload);
            EventPayload::PullRequestReviewComment(PullRequestReviewCommentPayload {
                pull_request: raw.pull_request.map(|pr| PullRequestRef { number: pr.number }),
                comment: raw.comment.map(map_comment),
            })
        }
        EventKind::Push => {
            let raw: GithubPushPayload = decode_payload(type_name, payload);
            EventPayload::Push(PushPayload {
                ref_name: raw.ref_name,
            })
        }
        EventKind::Release => {
            let raw: GithubReleasePayload = decode_payload(type_name, payload);
            EventPayload::Release(ReleasePayload {
                action: raw.action,
                release: raw.release.map(|release| ReleaseRef { name: release.name }),
            })
        }
        EventKind::Star => EventPayload::Star,
        EventKind::Other => {
            tracing::debug!(type_name, "event type has no dedicated presentation");
            EventPayload::Other {
                type_name: type_name.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_with_unknown_ref_type() {
        let payload = map_payload(
            "CreateEvent",
            Some(json!({"ref": "x", "ref_type": "commit"})),
        );
        assert_eq!(
            payload,
            EventPayload::Create(CreatePayload {
                ref_type: None,
                ref_name: Some("x".to_string()),
            })
        );
    }

    #[test]
    fn test_wrong_payload_shape_degrades_to_empty() {
        let payload = map_payload("PushEvent", Some(json!({"ref": 42})));
        assert_eq!(payload, EventPayload::Push(PushPayload::default()));

        let payload = map_payload("IssuesEvent", Some(json!("not an object")));
        assert_eq!(payload, EventPayload::Issues(IssuesPayload::default()));
    }

    #[test]
    fn test_missing_payload_is_empty() {
        assert_eq!(
            map_payload("ReleaseEvent", None),
            EventPayload::Release(ReleasePayload::default())
        );
    }

    #[test]
    fn test_unknown_type_keeps_name() {
        assert_eq!(
            map_payload("GollumEvent", Some(json!({"pages": []}))),
            EventPayload::Other {
                type_name: "GollumEvent".to_string()
            }
        );
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        assert_eq!(map_id(Some(json!(12345))), "12345");
        assert_eq!(map_id(Some(json!("abc"))), "abc");
        assert_eq!(map_id(None), "");
    }

    #[test]
    fn test_invalid_timestamp_is_dropped() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert!(parse_timestamp("2024-05-01T10:00:00Z").is_some());
    }
}
