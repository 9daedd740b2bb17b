//! # Presentation Layer
//!
//! Turns domain [`Event`](hubfeed_types::Event)s into feed cells and prints them.
//! The data flow is strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//!                                                                                 (Layout)
//! ```
//!
//! ## Rules
//!
//! ### 1. Presenters are pure
//! `present_event_cell` depends only on the event and the collaborators it is
//! handed (the relative-time clock). Same input, same cell.
//!
//! ### 2. Cells carry display strings, views carry layout
//! A feed cell is what a list row shows: title, detail, second detail, avatar,
//! badge, badge color. Views decide indentation, glyphs and colors.
//!
//! ### 3. JSON Output is always "Full Data"
//! `--format json` ignores `ViewMode` and dumps every cell field.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Change a title template or badge choice | **`presenters/`** |
//! | Add a field to a cell | **`view_models/`** |
//! | Change how "2 min ago" is phrased | **`formatters/`** |
//! | Change glyphs, colors, or what a mode shows | **`views/`** |
//! | Switch between JSON and text | **`renderers/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use presenters::{present_event_cell, present_event_cells};
pub use renderers::ConsoleRenderer;
pub use view_models::{
    ActorSelection, BadgeImage, ColorToken, EventCellDisplay, EventCellViewModel, IconKey,
    IconResources,
    common::{OutputFormat, ViewMode},
};
