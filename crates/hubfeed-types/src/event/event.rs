use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::EventKind;
use super::payload::EventPayload;

// NOTE: Model Design Goals
//
// 1. Read-only input: events arrive fully formed from whatever fetched them;
//    nothing here mutates or enriches them.
//
// 2. Totality: every field the platform may omit is an Option. Consumers pick
//    their own fallback instead of failing on partial records.
//
// 3. One source of truth for the category: the payload variant *is* the
//    category, so a "push" event can never carry a release payload.

/// Activity event (one entry of a user or repository activity feed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Platform event ID (opaque string)
    pub id: String,

    /// User who triggered the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    /// Repository the event happened in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,

    /// Event timestamp (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Category and category-specific content
    #[serde(flatten)]
    pub payload: EventPayload,
}

impl Event {
    /// Category tag, derived from the payload variant
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// Actor login, or "" when the actor (or its login) is missing
    pub fn actor_login(&self) -> &str {
        self.actor.as_ref().map(Actor::login_or_default).unwrap_or("")
    }

    /// Repository full name ("owner/name"), or "" when missing
    pub fn repository_name(&self) -> &str {
        self.repository
            .as_ref()
            .and_then(|repo| repo.full_name.as_deref())
            .unwrap_or("")
    }
}

/// Platform user as it appears in events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Avatar image location, unparsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Actor {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            avatar_url: None,
        }
    }

    pub fn login_or_default(&self) -> &str {
        self.login.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Repository {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::payload::PushPayload;

    fn push_event() -> Event {
        Event {
            id: "1".to_string(),
            actor: Some(Actor::new("bob")),
            repository: Some(Repository::new("o/r")),
            created_at: None,
            payload: EventPayload::Push(PushPayload {
                ref_name: Some("refs/heads/main".to_string()),
            }),
        }
    }

    #[test]
    fn test_kind_follows_payload() {
        assert_eq!(push_event().kind(), EventKind::Push);
    }

    #[test]
    fn test_missing_actor_and_repository_resolve_to_empty() {
        let mut event = push_event();
        event.actor = None;
        event.repository = Some(Repository::default());

        assert_eq!(event.actor_login(), "");
        assert_eq!(event.repository_name(), "");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let event = push_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
