use std::path::Path;

use chrono::Utc;
use csv::StringRecord;
use uuid::Uuid;

use crate::error::{DatasetError, Result};
use crate::schema::{Dataset, DatasetInfo, PostRecord, OPTIONAL_COLUMNS, REQUIRED_COLUMNS};

/// Cell spellings read as null, following common CSV exporters.
const NULL_MARKERS: [&str; 10] = ["", "NA", "N/A", "n/a", "NaN", "nan", "NULL", "null", "None", "<NA>"];

/// Header positions of the columns a `PostRecord` is built from.
struct ColumnMap {
    text_clean: usize,
    sentiment_label: usize,
    platform: usize,
    timestamp: usize,
    likes: usize,
    retweets: usize,
    replies: usize,
    post_id: Option<usize>,
    user_handle: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let found: Vec<Option<usize>> = REQUIRED_COLUMNS.iter().map(|&c| find(c)).collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .zip(&found)
            .filter(|(_, pos)| pos.is_none())
            .map(|(c, _)| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        // every required column is present: one position per name, in REQUIRED_COLUMNS order
        let at: Vec<usize> = found.into_iter().flatten().collect();
        let [post_id, user_handle] = OPTIONAL_COLUMNS.map(find);

        Ok(Self {
            text_clean: at[0],
            sentiment_label: at[1],
            platform: at[2],
            timestamp: at[3],
            likes: at[4],
            retweets: at[5],
            replies: at[6],
            post_id,
            user_handle,
        })
    }

    fn read(&self, record: &StringRecord, row: usize) -> Result<PostRecord> {
        Ok(PostRecord {
            post_id: self.post_id.and_then(|i| cell(record, i)).map(str::to_string),
            user_handle: self.user_handle.and_then(|i| cell(record, i)).map(str::to_string),
            text_clean: text(record, self.text_clean),
            sentiment_label: text(record, self.sentiment_label),
            platform: text(record, self.platform),
            timestamp: cell(record, self.timestamp).map(str::to_string),
            likes: number(record, self.likes, row, "likes")?,
            retweets: number(record, self.retweets, row, "retweets")?,
            replies: number(record, self.replies, row, "replies")?,
        })
    }
}

fn cell(record: &StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).filter(|v| !NULL_MARKERS.contains(v))
}

fn text(record: &StringRecord, idx: usize) -> String {
    cell(record, idx).unwrap_or_default().to_string()
}

fn number(record: &StringRecord, idx: usize, row: usize, column: &'static str) -> Result<f64> {
    let Some(raw) = cell(record, idx).map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(0.0);
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DatasetError::InvalidNumber { row, column, value: raw.to_string() }),
    }
}

/// Parses CSV bytes into a validated `Dataset`.
///
/// Required columns are checked on the header before any row is read. Rows
/// shorter than the header are padded with nulls; longer rows are rejected.
pub fn load_csv(bytes: &[u8], source: impl Into<String>) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record?;
        if record.len() > headers.len() {
            return Err(DatasetError::FieldCount { row, expected: headers.len(), found: record.len() });
        }
        rows.push(columns.read(&record, row)?);
    }

    let info = DatasetInfo {
        id: Uuid::new_v4(),
        source: source.into(),
        rows: rows.len() as u64,
        columns: headers.iter().map(str::to_string).collect(),
        dataset_hash: blake3::hash(bytes).into(),
        loaded_at: Utc::now(),
    };

    Ok(Dataset::new(info, rows))
}

/// Reads and parses a CSV file from disk.
pub fn load_path(path: &Path) -> Result<Dataset> {
    let bytes = std::fs::read(path)?;
    load_csv(&bytes, path.display().to_string())
}
