pub mod error;
pub mod event;
pub mod github;

pub use error::{Error, Result};
pub use event::*;
