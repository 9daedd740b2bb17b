//! Fixtures for sample data and time anchoring.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use hubfeed_types::Event;
use std::fs;
use std::path::PathBuf;

/// Reference "now" used by tests that render relative times.
///
/// `samples/events.json` timestamps are placed relative to this instant.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("fixed reference time is unambiguous")
}

/// Sample feed files shipped with this crate.
pub struct SampleFeed {
    samples_dir: PathBuf,
}

impl Default for SampleFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFeed {
    /// Assumes samples are in `crates/hubfeed-testing/samples/`.
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path(sample_name))?)
    }

    /// Read and decode a sample feed.
    pub fn load(&self, sample_name: &str) -> Result<Vec<Event>> {
        let json = self.read(sample_name)?;
        Ok(hubfeed_types::github::parse_events(&json)?)
    }
}
