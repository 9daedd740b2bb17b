use hubfeed_types::github::{parse_event, parse_events, read_events};
use hubfeed_types::*;

const FEED: &str = r#"[
  {
    "id": "22249084947",
    "type": "PushEvent",
    "actor": {
      "id": 583231,
      "login": "octocat",
      "display_login": "octocat",
      "avatar_url": "https://avatars.githubusercontent.com/u/583231?"
    },
    "repo": { "id": 1296269, "name": "octocat/Hello-World" },
    "payload": { "push_id": 10115855396, "size": 1, "ref": "refs/heads/master" },
    "public": true,
    "created_at": "2022-06-09T12:47:28Z"
  },
  {
    "id": "22237752260",
    "type": "WatchEvent",
    "actor": { "login": "hubot" },
    "repo": { "name": "octocat/Spoon-Knife" },
    "payload": { "action": "started" },
    "created_at": "2022-06-08T23:29:25Z"
  },
  {
    "id": "22237752261",
    "type": "CreateEvent",
    "actor": { "login": "octocat" },
    "repo": { "name": "octocat/linguist" },
    "payload": { "ref": "feature-x", "ref_type": "branch", "master_branch": "main" }
  },
  {
    "id": "3",
    "type": "SponsorshipEvent",
    "actor": { "login": "monalisa" },
    "payload": {}
  }
]"#;

#[test]
fn test_parse_feed() {
    let events = parse_events(FEED).unwrap();
    assert_eq!(events.len(), 4);

    let push = &events[0];
    assert_eq!(push.id, "22249084947");
    assert_eq!(push.kind(), EventKind::Push);
    assert_eq!(push.actor_login(), "octocat");
    assert_eq!(push.repository_name(), "octocat/Hello-World");
    assert_eq!(
        push.created_at.map(|ts| ts.to_rfc3339()),
        Some("2022-06-09T12:47:28+00:00".to_string())
    );
    assert_eq!(
        push.payload,
        EventPayload::Push(PushPayload {
            ref_name: Some("refs/heads/master".to_string())
        })
    );

    assert_eq!(events[1].kind(), EventKind::Star);

    assert_eq!(
        events[2].payload,
        EventPayload::Create(CreatePayload {
            ref_type: Some(RefType::Branch),
            ref_name: Some("feature-x".to_string()),
        })
    );
    assert_eq!(events[2].created_at, None);

    assert_eq!(events[3].kind(), EventKind::Other);
    assert_eq!(events[3].repository, None);
}

#[test]
fn test_malformed_element_is_skipped() {
    let json = r#"[
        {"id": "1", "type": "ForkEvent", "actor": 5},
        {"id": "2", "type": "ForkEvent", "actor": {"login": "alice"}}
    ]"#;
    let events = parse_events(json).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "2");
    assert_eq!(events[0].kind(), EventKind::Fork);
}

#[test]
fn test_top_level_must_be_array() {
    let err = parse_events(r#"{"id": "1"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("JSON error:"));

    assert!(parse_events("not json").is_err());
}

#[test]
fn test_parse_single_event() {
    let event = parse_event(
        r#"{"id": "9", "type": "IssueCommentEvent",
            "payload": {"action": "created", "issue": {"number": 42}, "comment": {"body": "LGTM"}}}"#,
    )
    .unwrap();

    match event.payload {
        EventPayload::IssueComment(ref payload) => {
            assert_eq!(payload.issue_number(), 42);
            assert_eq!(payload.comment_body(), "LGTM");
        }
        ref other => panic!("unexpected payload: {:?}", other),
    }
    assert_eq!(event.actor, None);
}

#[test]
fn test_read_events_from_reader() {
    let events = read_events(FEED.as_bytes()).unwrap();
    assert_eq!(events.len(), 4);
}
