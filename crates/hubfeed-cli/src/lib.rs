// NOTE: hubfeed Architecture Rationale
//
// Why keep presentation pure?
// - A feed cell is a projection of one event; the same event must always
//   render the same way, in a terminal, in JSON, or in a test
// - Everything that varies between callers (clock, icon assets, colors) is a
//   collaborator passed in, never global state read by the presenter
//
// Why decode leniently?
// - The events API drops fields for deleted users and repositories, and adds
//   categories over time
// - A partial event still renders (with empty tokens); only an unreadable
//   feed is an error

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
