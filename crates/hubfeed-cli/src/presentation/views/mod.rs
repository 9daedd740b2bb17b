pub mod event_cell;
pub mod icons;

pub use event_cell::EventFeedView;
pub use icons::{Glyph, GlyphIcons};
