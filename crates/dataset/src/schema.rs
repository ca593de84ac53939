use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Hash32 = [u8; 32];

/// Columns every uploaded CSV must carry, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "text_clean",
    "sentiment_label",
    "platform",
    "timestamp",
    "likes",
    "retweets",
    "replies",
];

/// Columns read when present; rows get `None` otherwise.
pub const OPTIONAL_COLUMNS: [&str; 2] = ["post_id", "user_handle"];

/// One labelled post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub post_id: Option<String>,
    pub user_handle: Option<String>,
    pub text_clean: String,       // "" when the cell is null
    pub sentiment_label: String,  // "" when the cell is null
    pub platform: String,
    pub timestamp: Option<String>,
    pub likes: f64,               // null cells count as 0
    pub retweets: f64,
    pub replies: f64,
}

impl PostRecord {
    /// Calendar date of the post, `None` when the row has no timestamp.
    pub fn date(&self) -> Option<Result<NaiveDate, &str>> {
        self.timestamp
            .as_deref()
            .map(|raw| parse_date(raw).ok_or(raw))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: Uuid,
    pub source: String,            // uploaded filename or startup path
    pub rows: u64,
    pub columns: Vec<String>,      // header order as read
    #[serde(with = "hex", rename = "dataset_hash_hex")]
    pub dataset_hash: Hash32,      // BLAKE3(csv bytes)
    pub loaded_at: DateTime<Utc>,
}

/// An immutable, fully validated table of posts.
#[derive(Clone, Debug)]
pub struct Dataset {
    info: DatasetInfo,
    rows: Vec<PostRecord>,
}

impl Dataset {
    pub fn new(info: DatasetInfo, rows: Vec<PostRecord>) -> Self {
        Self { info, rows }
    }

    pub fn info(&self) -> &DatasetInfo {
        &self.info
    }

    pub fn rows(&self) -> &[PostRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose label equals `label` exactly, in dataset order.
    pub fn with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a PostRecord> + 'a {
        self.rows.iter().filter(move |r| r.sentiment_label == label)
    }
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Truncates an ISO-style date/time string to its calendar date.
///
/// Offsets are honoured as written: the date is the local date of the
/// timestamp, not its UTC date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.date_naive());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_common_timestamp_shapes() {
        assert_eq!(parse_date("2024-03-05"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05 23:59:59"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05T08:15:00.123"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05T08:15:00Z"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024/03/05"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05 10:00"), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn keeps_local_date_of_offset_timestamps() {
        assert_eq!(parse_date("2024-03-05T01:00:00+07:00"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05 01:00:00+07:00"), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn record_date_distinguishes_missing_from_invalid() {
        let mut rec = PostRecord::default();
        assert!(rec.date().is_none());

        rec.timestamp = Some("not a date".into());
        assert_eq!(rec.date(), Some(Err("not a date")));

        rec.timestamp = Some("2023-12-31 12:00:00".into());
        assert_eq!(rec.date(), Some(Ok(ymd(2023, 12, 31))));
    }
}
