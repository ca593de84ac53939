use std::collections::{BTreeMap, HashMap};

use dataset::Dataset;

/// Counts occurrences, most frequent first. Equal counts keep the order in
/// which the values were first seen.
pub fn ranked_counts<'a, I>(values: I) -> Vec<(&'a str, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slot: HashMap<&'a str, usize> = HashMap::new();
    let mut out: Vec<(&'a str, u64)> = Vec::new();

    for v in values {
        match slot.get(v) {
            Some(&i) => out[i].1 += 1,
            None => {
                slot.insert(v, out.len());
                out.push((v, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Rows per sentiment label, in `ranked_counts` order.
pub fn label_counts(ds: &Dataset) -> Vec<(&str, u64)> {
    ranked_counts(ds.rows().iter().map(|r| r.sentiment_label.as_str()))
}

/// platform -> label -> rows
pub fn platform_label_counts(ds: &Dataset) -> BTreeMap<&str, BTreeMap<&str, u64>> {
    let mut out: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
    for r in ds.rows() {
        *out.entry(r.platform.as_str())
            .or_default()
            .entry(r.sentiment_label.as_str())
            .or_default() += 1;
    }
    out
}
