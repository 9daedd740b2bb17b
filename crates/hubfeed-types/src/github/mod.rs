//! Decoding of GitHub REST "events" responses into [`Event`]s.
//!
//! Decoding is lenient below the top level: malformed payloads degrade to
//! empty payloads, and array elements with a broken envelope are skipped.

mod mapper;
mod schema;

use std::io::Read;

use serde_json::Value;

use crate::Result;
use crate::event::Event;
use schema::GithubEvent;

/// Parse a JSON array of events (the body of `GET /users/{user}/events` and friends)
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let items: Vec<Value> = serde_json::from_str(json)?;
    Ok(map_items(items))
}

/// Parse a single JSON event object
pub fn parse_event(json: &str) -> Result<Event> {
    let raw: GithubEvent = serde_json::from_str(json)?;
    Ok(mapper::map_event(raw))
}

/// Read and parse a JSON array of events from any reader
pub fn read_events<R: Read>(reader: R) -> Result<Vec<Event>> {
    let items: Vec<Value> = serde_json::from_reader(reader)?;
    Ok(map_items(items))
}

fn map_items(items: Vec<Value>) -> Vec<Event> {
    let total = items.len();
    let events: Vec<Event> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<GithubEvent>(item) {
            Ok(raw) => Some(mapper::map_event(raw)),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed event");
                None
            }
        })
        .collect();

    tracing::debug!(total, decoded = events.len(), "decoded event feed");
    events
}
