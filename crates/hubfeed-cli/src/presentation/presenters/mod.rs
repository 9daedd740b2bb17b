pub mod event_cell;

pub use event_cell::{present_display, present_event_cell, present_event_cells};
