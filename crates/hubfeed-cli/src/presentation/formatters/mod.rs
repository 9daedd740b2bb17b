pub mod time;

pub use time::{RelativeTime, RelativeTo, format_relative_time};
