use chrono::{DateTime, Duration, NaiveDate, SubsecRound, Utc};
use serde::Serialize;
use std::fmt;

/// Storage format for timestamps: fixed-width RFC 3339 with microseconds,
/// so text comparison in SQL orders the same way as the instants do.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

pub const TITLE_MAX_CHARS: usize = 200;
pub const DEFAULT_PRIORITY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub owner_id: Option<i64>,
    pub title: String,
    pub notes: String,
    pub due_date: Option<NaiveDate>,
    pub priority: u32,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn status(&self) -> StatusFilter {
        if self.is_resolved {
            StatusFilter::Resolved
        } else {
            StatusFilter::Active
        }
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validated field values for a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoInput {
    pub owner_id: Option<i64>,
    pub title: String,
    pub notes: String,
    pub due_date: Option<NaiveDate>,
    pub priority: u32,
    pub is_resolved: bool,
}

impl TodoInput {
    pub fn new(title: &str) -> Self {
        TodoInput {
            owner_id: None,
            title: title.to_string(),
            notes: String::new(),
            due_date: None,
            priority: DEFAULT_PRIORITY,
            is_resolved: false,
        }
    }
}

/// Subset selector for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Resolved,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Resolved];

    /// Lenient parse of a query value: anything unrecognized (or nothing) is `All`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("active") => StatusFilter::Active,
            Some("resolved") => StatusFilter::Resolved,
            _ => StatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Resolved => "Resolved",
        }
    }

    /// The `is_resolved` value this filter selects, `None` for no predicate.
    pub fn resolved(&self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(false),
            StatusFilter::Resolved => Some(true),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counts over the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub total: u64,
    pub active: u64,
    pub resolved: u64,
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

/// Current time at storage precision, strictly after `previous` when given.
pub fn next_timestamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now().trunc_subsecs(6);
    match previous {
        Some(prev) if now <= prev => prev + Duration::microseconds(1),
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parse_is_lenient() {
        assert_eq!(StatusFilter::parse(None), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("active")), StatusFilter::Active);
        assert_eq!(StatusFilter::parse(Some("Resolved ")), StatusFilter::Resolved);
        assert_eq!(StatusFilter::parse(Some("done")), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("")), StatusFilter::All);
    }

    #[test]
    fn timestamps_round_trip_at_microsecond_precision() {
        let ts = next_timestamp(None);
        let text = format_timestamp(&ts);
        assert_eq!(text.len(), "2025-01-31T10:00:00.000000Z".len());
        assert_eq!(parse_timestamp(&text).unwrap(), ts);
    }

    #[test]
    fn next_timestamp_is_strictly_after_previous() {
        let future = Utc::now() + Duration::hours(1);
        let next = next_timestamp(Some(future));
        assert_eq!(next, future + Duration::microseconds(1));

        let past = Utc::now() - Duration::hours(1);
        assert!(next_timestamp(Some(past)) > past);
    }

    #[test]
    fn timestamp_text_orders_like_instants() {
        let earlier = parse_timestamp("2025-01-15T09:00:00.000001Z").unwrap();
        let later = parse_timestamp("2025-01-15T10:00:00.000000Z").unwrap();
        assert!(format_timestamp(&earlier) < format_timestamp(&later));
    }
}
