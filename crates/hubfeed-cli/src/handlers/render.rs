use crate::presentation::formatters::RelativeTo;
use crate::presentation::presenters::present_event_cells;
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::{ColorChoice, DisplayMode, OutputFormat};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use hubfeed_types::{Event, github};
use is_terminal::IsTerminal;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct RenderOptions {
    pub now: Option<String>,
    pub format: OutputFormat,
    pub mode: DisplayMode,
    pub color: ColorChoice,
    pub limit: Option<usize>,
}

pub fn handle(file: Option<&Path>, options: RenderOptions) -> Result<()> {
    let mut events = read_feed(file)?;
    if let Some(limit) = options.limit {
        events.truncate(limit);
    }

    let clock = match options.now.as_deref() {
        Some(ts) => RelativeTo::new(parse_now(ts)?),
        None => RelativeTo::system(),
    };

    tracing::info!(events = events.len(), now = %clock.now(), "presenting feed");
    let cells = present_event_cells(&events, &clock);

    let color = options.color.enabled(std::io::stdout().is_terminal());
    let renderer = ConsoleRenderer::new(options.format.into(), options.mode.into(), color);
    renderer.print_feed(&cells)
}

fn read_feed(file: Option<&Path>) -> Result<Vec<Event>> {
    match file {
        Some(path) if path != Path::new("-") => {
            let reader = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            github::read_events(BufReader::new(reader))
                .with_context(|| format!("failed to parse events from {}", path.display()))
        }
        _ => github::read_events(std::io::stdin().lock())
            .context("failed to parse events from stdin"),
    }
}

fn parse_now(ts: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(ts)
        .with_context(|| format!("--now must be an RFC 3339 timestamp, got '{}'", ts))?;
    Ok(parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_now_normalizes_offset() {
        let now = parse_now("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(now.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_parse_now_rejects_garbage() {
        assert!(parse_now("tomorrow").is_err());
    }
}
