use chrono::{DateTime, Utc};

/// Renders an event timestamp relative to some notion of "now".
pub trait RelativeTime {
    fn relative(&self, at: &DateTime<Utc>) -> String;
}

impl<F> RelativeTime for F
where
    F: Fn(&DateTime<Utc>) -> String,
{
    fn relative(&self, at: &DateTime<Utc>) -> String {
        self(at)
    }
}

/// Relative time against a fixed reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTo {
    now: DateTime<Utc>,
}

impl RelativeTo {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Anchored at the wall clock when called
    pub fn system() -> Self {
        Self::new(Utc::now())
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

impl RelativeTime for RelativeTo {
    fn relative(&self, at: &DateTime<Utc>) -> String {
        format_relative_time(at, &self.now)
    }
}

/// Format a timestamp as relative time ("2 min ago", "yesterday").
///
/// Timestamps in the future of `now` count as "just now".
pub fn format_relative_time(ts: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} weeks ago", weeks)
    } else if days < 365 {
        let months = days / 30;
        format!("{} months ago", months)
    } else {
        let years = days / 365;
        format!("{} years ago", years)
    }
}
