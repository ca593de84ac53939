use dataset::{Dataset, DatasetError, PostRecord, Result};
use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

/// Sentiment filter value that disables filtering.
pub const ALL_SENTIMENTS: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
    pub sentiment: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE, sentiment: None }
    }
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Result<Self> {
        if page < 1 {
            return Err(DatasetError::validation("page must be >= 1"));
        }
        if per_page < 1 {
            return Err(DatasetError::validation("per_page must be >= 1"));
        }
        Ok(Self { page, per_page, sentiment: None })
    }

    pub fn with_sentiment(mut self, sentiment: Option<String>) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// The label to keep, or `None` for every row.
    fn filter(&self) -> Option<&str> {
        self.sentiment
            .as_deref()
            .filter(|s| !s.is_empty() && *s != ALL_SENTIMENTS)
    }
}

/// The projection of a post shown in the data table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub post_id: Option<String>,
    pub user_handle: Option<String>,
    pub text_clean: String,
    pub sentiment_label: String,
    pub platform: String,
    pub likes: f64,
    pub retweets: f64,
}

impl From<&PostRecord> for TableRow {
    fn from(r: &PostRecord) -> Self {
        Self {
            post_id: r.post_id.clone(),
            user_handle: r.user_handle.clone(),
            text_clean: r.text_clean.clone(),
            sentiment_label: r.sentiment_label.clone(),
            platform: r.platform.clone(),
            likes: r.likes,
            retweets: r.retweets,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TablePage {
    pub data: Vec<TableRow>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// One page of the (optionally filtered) dataset. Pages past the end are empty.
pub fn data_table(ds: &Dataset, req: &PageRequest) -> TablePage {
    let wanted = req.filter();
    let matches = |r: &&PostRecord| wanted.map_or(true, |l| r.sentiment_label == l);

    let total = ds.rows().iter().filter(matches).count();
    let start = (req.page - 1).saturating_mul(req.per_page);

    let data = ds
        .rows()
        .iter()
        .filter(matches)
        .skip(start)
        .take(req.per_page)
        .map(TableRow::from)
        .collect();

    TablePage {
        data,
        total,
        page: req.page,
        per_page: req.per_page,
        total_pages: total.div_ceil(req.per_page),
    }
}
