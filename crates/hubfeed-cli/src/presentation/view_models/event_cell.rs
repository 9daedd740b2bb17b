use hubfeed_types::{Event, EventKind};
use serde::{Serialize, Serializer};
use url::Url;

use super::badge::{BadgeImage, ColorToken};
use super::selection::ActorSelection;

/// Display-ready fields of one feed cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCellDisplay {
    /// "{actor} {action} {repository}"
    pub title: String,
    /// Relative time of the event ("" when the event has no timestamp)
    pub detail: String,
    /// Comment body for comment events, "" otherwise
    pub second_detail: String,
    /// Actor avatar
    pub image_url: Option<Url>,
    pub badge: Option<BadgeImage>,
    pub badge_color: ColorToken,
}

/// One row of the activity feed: the source event, its display fields, and
/// the actor-selection sink the UI reports interactions to.
#[derive(Debug, Clone)]
pub struct EventCellViewModel {
    pub event: Event,
    pub display: EventCellDisplay,
    user_selected: ActorSelection,
}

impl EventCellViewModel {
    pub fn new(event: Event, display: EventCellDisplay) -> Self {
        Self {
            event,
            display,
            user_selected: ActorSelection::new(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }

    pub fn user_selected(&self) -> &ActorSelection {
        &self.user_selected
    }
}

/// Cells are the same cell when they show the same event
impl PartialEq for EventCellViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.event == other.event
    }
}

impl Eq for EventCellViewModel {}

#[derive(Serialize)]
struct CellRecord<'a> {
    id: &'a str,
    kind: EventKind,
    #[serde(flatten)]
    display: &'a EventCellDisplay,
}

impl Serialize for EventCellViewModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CellRecord {
            id: &self.event.id,
            kind: self.kind(),
            display: &self.display,
        }
        .serialize(serializer)
    }
}
