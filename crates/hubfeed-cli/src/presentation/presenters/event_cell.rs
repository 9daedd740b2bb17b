use crate::presentation::formatters::RelativeTime;
use crate::presentation::view_models::{
    BadgeImage, ColorToken, EventCellDisplay, EventCellViewModel, IconKey,
};
use hubfeed_types::{Event, EventPayload};
use url::Url;

/// Action phrase, optional body and badge for one event category
struct Action {
    text: String,
    body: String,
    icon: Option<IconKey>,
}

impl Action {
    fn new(text: String, icon: Option<IconKey>) -> Self {
        Self {
            text,
            body: String::new(),
            icon,
        }
    }

    fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }
}

/// Tokens are joined as-is: an empty token still contributes its separator,
/// so a missing field shows up as a double space.
fn join_tokens(tokens: &[&str]) -> String {
    tokens.join(" ")
}

fn present_action(payload: &EventPayload) -> Action {
    match payload {
        EventPayload::Fork => Action::new("forked".to_string(), Some(IconKey::Fork)),
        EventPayload::Create(p) => Action::new(
            join_tokens(&["created", p.ref_type_name(), p.ref_name_or_default(), "in"]),
            p.ref_type.map(IconKey::for_ref_type),
        ),
        EventPayload::IssueComment(p) => Action::new(
            join_tokens(&[
                "commented on issue",
                &format!("#{}", p.issue_number()),
                "at",
            ]),
            Some(IconKey::Comment),
        )
        .with_body(p.comment_body()),
        EventPayload::Issues(p) => Action::new(
            join_tokens(&[p.action_or_default(), "issue", "in"]),
            Some(IconKey::Issue),
        ),
        EventPayload::Member(p) => Action::new(
            join_tokens(&[
                p.action_or_default(),
                p.member_login(),
                "as a collaborator to",
            ]),
            Some(IconKey::Collaborator),
        ),
        EventPayload::PullRequest(p) => Action::new(
            join_tokens(&[
                p.action_or_default(),
                "pull request",
                &format!("#{}", p.number_or_default()),
                "in",
            ]),
            Some(IconKey::PullRequest),
        ),
        EventPayload::PullRequestReviewComment(p) => Action::new(
            join_tokens(&[
                "commented on pull request",
                &format!("#{}", p.pull_request_number()),
                "in",
            ]),
            Some(IconKey::Comment),
        )
        .with_body(p.comment_body()),
        EventPayload::Push(p) => Action::new(
            join_tokens(&["pushed to", p.ref_name_or_default(), "at"]),
            Some(IconKey::Push),
        ),
        EventPayload::Release(p) => Action::new(
            join_tokens(&[p.action_or_default(), "release", p.release_name(), "in"]),
            Some(IconKey::Tag),
        ),
        EventPayload::Star => Action::new("starred".to_string(), Some(IconKey::Star)),
        EventPayload::Other { .. } => Action::new(String::new(), None),
    }
}

fn avatar_url(event: &Event) -> Option<Url> {
    let raw = event.actor.as_ref()?.avatar_url.as_deref()?;
    Url::parse(raw).ok()
}

/// Display fields for one event. Total: missing data degrades to "", 0,
/// no badge, or no avatar.
pub fn present_display<T>(event: &Event, time: &T) -> EventCellDisplay
where
    T: RelativeTime + ?Sized,
{
    let action = present_action(&event.payload);

    EventCellDisplay {
        title: join_tokens(&[
            event.actor_login(),
            &action.text,
            event.repository_name(),
        ]),
        detail: event
            .created_at
            .as_ref()
            .map(|ts| time.relative(ts))
            .unwrap_or_default(),
        second_detail: action.body,
        image_url: avatar_url(event),
        badge: action.icon.map(BadgeImage::template),
        badge_color: ColorToken::FlatGreenDark,
    }
}

pub fn present_event_cell<T>(event: &Event, time: &T) -> EventCellViewModel
where
    T: RelativeTime + ?Sized,
{
    EventCellViewModel::new(event.clone(), present_display(event, time))
}

pub fn present_event_cells<T>(events: &[Event], time: &T) -> Vec<EventCellViewModel>
where
    T: RelativeTime + ?Sized,
{
    events
        .iter()
        .map(|event| present_event_cell(event, time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::formatters::RelativeTo;
    use hubfeed_testing::{EventBuilder, fixed_now};
    use hubfeed_types::{CreatePayload, IssueCommentPayload, RefType};

    fn clock() -> RelativeTo {
        RelativeTo::new(fixed_now())
    }

    fn display(event: &Event) -> EventCellDisplay {
        present_display(event, &clock())
    }

    #[test]
    fn test_star_title() {
        let event = EventBuilder::star().actor("alice").repo("org/repo").build();
        let display = display(&event);
        assert_eq!(display.title, "alice starred org/repo");
        assert_eq!(display.badge, Some(BadgeImage::template(IconKey::Star)));
    }

    #[test]
    fn test_push_title() {
        let event = EventBuilder::push("refs/heads/main")
            .actor("bob")
            .repo("o/r")
            .build();
        assert_eq!(display(&event).title, "bob pushed to refs/heads/main at o/r");
    }

    #[test]
    fn test_create_branch() {
        let event = EventBuilder::create(Some(RefType::Branch), "feature-x")
            .actor("carol")
            .repo("o/r")
            .build();
        let display = display(&event);
        assert!(display.title.contains("created branch feature-x in"));
        assert_eq!(display.badge.map(|b| b.icon), Some(IconKey::Branch));
    }

    #[test]
    fn test_create_icon_follows_ref_type() {
        let repo = EventBuilder::create(Some(RefType::Repository), "").build();
        let tag = EventBuilder::create(Some(RefType::Tag), "v1").build();
        assert_eq!(display(&repo).badge.map(|b| b.icon), Some(IconKey::Repository));
        assert_eq!(display(&tag).badge.map(|b| b.icon), Some(IconKey::Tag));
    }

    #[test]
    fn test_create_without_ref_type_has_no_badge() {
        let event = EventBuilder::new(EventPayload::Create(CreatePayload::default()))
            .actor("carol")
            .repo("o/r")
            .build();
        let display = display(&event);
        assert_eq!(display.title, "carol created   in o/r");
        assert_eq!(display.badge, None);
    }

    #[test]
    fn test_issue_comment() {
        let event = EventBuilder::issue_comment(42, "LGTM")
            .actor("dave")
            .repo("o/r")
            .build();
        let display = display(&event);
        assert_eq!(display.title, "dave commented on issue #42 at o/r");
        assert_eq!(display.second_detail, "LGTM");
        assert_eq!(display.badge.map(|b| b.icon), Some(IconKey::Comment));
    }

    #[test]
    fn test_issue_comment_missing_fields() {
        let event = EventBuilder::new(EventPayload::IssueComment(IssueCommentPayload::default()))
            .actor("dave")
            .build();
        let display = display(&event);
        assert_eq!(display.title, "dave commented on issue #0 at ");
        assert_eq!(display.second_detail, "");
    }

    #[test]
    fn test_issues_member_pull_request_release() {
        let issues = EventBuilder::issues("opened").actor("a").repo("o/r").build();
        assert_eq!(display(&issues).title, "a opened issue in o/r");
        assert_eq!(display(&issues).badge.map(|b| b.icon), Some(IconKey::Issue));

        let member = EventBuilder::member("added", "hubot").actor("a").repo("o/r").build();
        assert_eq!(
            display(&member).title,
            "a added hubot as a collaborator to o/r"
        );
        assert_eq!(
            display(&member).badge.map(|b| b.icon),
            Some(IconKey::Collaborator)
        );

        let pr = EventBuilder::pull_request("closed", 7).actor("a").repo("o/r").build();
        assert_eq!(display(&pr).title, "a closed pull request #7 in o/r");
        assert_eq!(display(&pr).badge.map(|b| b.icon), Some(IconKey::PullRequest));

        let release = EventBuilder::release("published", "v2.0").actor("a").repo("o/r").build();
        assert_eq!(display(&release).title, "a published release v2.0 in o/r");
        assert_eq!(display(&release).badge.map(|b| b.icon), Some(IconKey::Tag));
    }

    #[test]
    fn test_review_comment() {
        let event = EventBuilder::review_comment(7, "nit")
            .actor("erin")
            .repo("o/r")
            .build();
        let display = display(&event);
        assert_eq!(display.title, "erin commented on pull request #7 in o/r");
        assert_eq!(display.second_detail, "nit");
        assert_eq!(display.badge.map(|b| b.icon), Some(IconKey::Comment));
    }

    #[test]
    fn test_fork() {
        let event = EventBuilder::fork().actor("frank").repo("o/r").build();
        let display = display(&event);
        assert_eq!(display.title, "frank forked o/r");
        assert_eq!(display.badge.map(|b| b.icon), Some(IconKey::Fork));
        assert_eq!(display.second_detail, "");
    }

    #[test]
    fn test_unrecognized_event() {
        let event = EventBuilder::other("GollumEvent")
            .actor("alice")
            .repo("o/r")
            .build();
        let display = display(&event);
        assert_eq!(display.title, "alice  o/r");
        assert_eq!(display.badge, None);
        assert_eq!(display.badge_color, ColorToken::FlatGreenDark);
    }

    #[test]
    fn test_missing_actor() {
        let event = EventBuilder::star().repo("o/r").build();
        let display = display(&event);
        assert_eq!(display.title, " starred o/r");
        assert_eq!(display.image_url, None);
    }

    #[test]
    fn test_missing_payload_fields_leave_double_spaces() {
        let event = EventBuilder::new(EventPayload::Push(Default::default()))
            .actor("bob")
            .repo("o/r")
            .build();
        assert_eq!(display(&event).title, "bob pushed to  at o/r");
    }

    #[test]
    fn test_avatar_url() {
        let event = EventBuilder::star()
            .actor("alice")
            .avatar("https://avatars.githubusercontent.com/u/1?v=4")
            .build();
        assert_eq!(
            display(&event).image_url.map(|u| u.to_string()),
            Some("https://avatars.githubusercontent.com/u/1?v=4".to_string())
        );

        let broken = EventBuilder::star().actor("alice").avatar("not a url").build();
        assert_eq!(display(&broken).image_url, None);
    }

    #[test]
    fn test_detail_uses_relative_time() {
        let event = EventBuilder::star()
            .created_at(fixed_now() - chrono::Duration::minutes(5))
            .build();
        assert_eq!(display(&event).detail, "5 min ago");

        let undated = EventBuilder::star().build();
        assert_eq!(display(&undated).detail, "");
    }

    #[test]
    fn test_presentation_is_deterministic() {
        let event = EventBuilder::issue_comment(1, "body")
            .actor("alice")
            .avatar("https://example.com/a.png")
            .repo("o/r")
            .created_at(fixed_now())
            .build();
        let copy = event.clone();

        assert_eq!(display(&event), display(&copy));
        assert_eq!(present_event_cell(&event, &clock()), present_event_cell(&copy, &clock()));
    }

    #[test]
    fn test_badge_color_is_constant() {
        let events = [
            EventBuilder::fork().build(),
            EventBuilder::push("main").build(),
            EventBuilder::other("PublicEvent").build(),
        ];
        for cell in present_event_cells(&events, &clock()) {
            assert_eq!(cell.display.badge_color, ColorToken::FlatGreenDark);
        }
    }

    #[test]
    fn test_presenter_never_emits_selection() {
        let event = EventBuilder::star().actor("alice").build();
        let cell = present_event_cell(&event, &clock());
        let mut rx = cell.user_selected().subscribe();
        assert!(rx.try_recv().is_err());
    }
}
