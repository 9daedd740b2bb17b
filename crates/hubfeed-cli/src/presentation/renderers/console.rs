use crate::presentation::view_models::{EventCellViewModel, OutputFormat, ViewMode};
use crate::presentation::views::EventFeedView;
use anyhow::Result;
use std::io::Write;

/// Prints feed cells as text (through [`EventFeedView`]) or JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode, color: bool) -> Self {
        Self {
            format,
            mode,
            color,
        }
    }

    /// JSON output ignores the view mode and always dumps full cells
    pub fn render_feed(&self, cells: &[EventCellViewModel]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(cells)?)),
            OutputFormat::Text => Ok(EventFeedView::new(cells, self.mode, self.color).to_string()),
        }
    }

    pub fn print_feed(&self, cells: &[EventCellViewModel]) -> Result<()> {
        let output = self.render_feed(cells)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::formatters::RelativeTo;
    use crate::presentation::presenters::present_event_cells;
    use hubfeed_testing::{EventBuilder, fixed_now};
    use serde_json::Value;

    #[test]
    fn test_json_output_shape() {
        let events = [EventBuilder::create(Some(hubfeed_types::RefType::Branch), "feature-x")
            .id("77")
            .actor("octocat")
            .avatar("https://avatars.githubusercontent.com/u/583231?v=4")
            .repo("octocat/linguist")
            .created_at(fixed_now())
            .build()];
        let cells = present_event_cells(&events, &RelativeTo::new(fixed_now()));

        let renderer = ConsoleRenderer::new(OutputFormat::Json, ViewMode::Minimal, false);
        let output = renderer.render_feed(&cells).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        insta::assert_json_snapshot!(json, @r#"
        [
          {
            "badge": {
              "icon": "branch",
              "template": true
            },
            "badge_color": "flat_green_dark",
            "detail": "just now",
            "id": "77",
            "image_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "kind": "create",
            "second_detail": "",
            "title": "octocat created branch feature-x in octocat/linguist"
          }
        ]
        "#);
    }

    #[test]
    fn test_text_output_uses_view_mode() {
        let events = [EventBuilder::fork().id("5").actor("a").repo("o/r").build()];
        let cells = present_event_cells(&events, &RelativeTo::new(fixed_now()));

        let minimal = ConsoleRenderer::new(OutputFormat::Text, ViewMode::Minimal, false);
        assert_eq!(minimal.render_feed(&cells).unwrap(), "5\n");

        let compact = ConsoleRenderer::new(OutputFormat::Text, ViewMode::Compact, false);
        assert_eq!(compact.render_feed(&cells).unwrap(), "⑂ a forked o/r\n");
    }
}
