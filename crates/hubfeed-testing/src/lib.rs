//! Testing infrastructure for hubfeed.
//!
//! This crate provides utilities for writing presentation tests:
//! - `builders`: Fluent construction of domain events
//! - `fixtures`: Sample feed files and a fixed reference clock

pub mod builders;
pub mod fixtures;

pub use builders::EventBuilder;
pub use fixtures::{SampleFeed, fixed_now};
