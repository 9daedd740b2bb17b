use owo_colors::OwoColorize;
use std::fmt;

use super::icons::GlyphIcons;
use crate::presentation::view_models::{EventCellViewModel, ViewMode};

const NO_BADGE: &str = "·";
const INDENT: &str = "    ";

// --------------------------------------------------------
// Event Feed View
// --------------------------------------------------------

pub struct EventFeedView<'a> {
    data: &'a [EventCellViewModel],
    mode: ViewMode,
    color: bool,
}

impl<'a> EventFeedView<'a> {
    pub fn new(data: &'a [EventCellViewModel], mode: ViewMode, color: bool) -> Self {
        Self { data, mode, color }
    }

    fn badge(&self, cell: &EventCellViewModel) -> String {
        let glyph = cell
            .display
            .badge
            .and_then(|badge| badge.resolve(&GlyphIcons));

        match glyph {
            Some(glyph) if self.color => {
                let (r, g, b) = glyph.tint.unwrap_or(cell.display.badge_color.rgb());
                glyph.symbol.truecolor(r, g, b).to_string()
            }
            Some(glyph) => glyph.symbol.to_string(),
            None => NO_BADGE.to_string(),
        }
    }

    fn detail(&self, detail: &str) -> String {
        if self.color {
            detail.dimmed().to_string()
        } else {
            detail.to_string()
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in self.data {
            writeln!(f, "{}", cell.event.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in self.data {
            write!(f, "{} {}", self.badge(cell), cell.display.title)?;
            if !cell.display.detail.is_empty() {
                let detail = format!("({})", cell.display.detail);
                write!(f, " {}", self.detail(&detail))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn render_cell(&self, f: &mut fmt::Formatter, cell: &EventCellViewModel) -> fmt::Result {
        writeln!(f, "{} {}", self.badge(cell), cell.display.title)?;
        if !cell.display.detail.is_empty() {
            writeln!(f, "{}{}", INDENT, self.detail(&cell.display.detail))?;
        }
        for line in cell.display.second_detail.lines() {
            writeln!(f, "{}{}", INDENT, line)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, cell) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.render_cell(f, cell)?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, cell) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.render_cell(f, cell)?;

            writeln!(f, "{}kind: {}", INDENT, cell.kind())?;
            if let Some(url) = &cell.display.image_url {
                writeln!(f, "{}avatar: {}", INDENT, url)?;
            }
            if let Some(badge) = &cell.display.badge {
                let rendering = if badge.template { " (template)" } else { "" };
                writeln!(
                    f,
                    "{}badge: {}{}",
                    INDENT,
                    badge.icon.resource_name(),
                    rendering
                )?;
            }
            writeln!(f, "{}color: {}", INDENT, cell.display.badge_color.hex())?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for EventFeedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.is_empty() && self.mode != ViewMode::Minimal {
            return writeln!(f, "No events");
        }

        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
