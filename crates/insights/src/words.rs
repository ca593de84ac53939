use dataset::Dataset;
use serde::Serialize;

use crate::counts::ranked_counts;

pub const DEFAULT_SENTIMENT: &str = "positive";
pub const TOP_WORDS: usize = 50;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WordFrequency {
    pub words: Vec<String>,
    pub frequencies: Vec<u64>,
}

impl WordFrequency {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Most frequent whitespace-separated tokens in posts labelled `sentiment`.
///
/// A label with no rows yields an empty result.
pub fn word_frequency(ds: &Dataset, sentiment: &str) -> WordFrequency {
    let texts = ds.with_label(sentiment).map(|r| r.text_clean.as_str());
    top_words(texts, TOP_WORDS)
}

pub fn top_words<'a, I>(texts: I, limit: usize) -> WordFrequency
where
    I: IntoIterator<Item = &'a str>,
{
    let (words, frequencies) = ranked_counts(texts.into_iter().flat_map(str::split_whitespace))
        .into_iter()
        .take(limit)
        .map(|(w, n)| (w.to_string(), n))
        .unzip();
    WordFrequency { words, frequencies }
}
