pub mod badge;
pub mod common;
pub mod event_cell;
pub mod selection;

pub use badge::*;
pub use common::{OutputFormat, ViewMode};
pub use event_cell::*;
pub use selection::*;
