use std::collections::BTreeMap;

use dataset::Dataset;
use serde::Serialize;

use crate::counts::{label_counts, platform_label_counts};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Engagement {
    pub likes: f64,
    pub retweets: f64,
    pub replies: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_data: u64,
    pub sentiment_distribution: BTreeMap<String, u64>,
    pub sentiment_percentage: BTreeMap<String, f64>,
    /// platform -> sentiment label -> rows
    pub platform_distribution: BTreeMap<String, BTreeMap<String, u64>>,
    pub avg_engagement: Engagement,
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Totals, label shares and mean engagement.
///
/// An empty dataset yields empty maps and zero means.
pub fn summary_stats(ds: &Dataset) -> SummaryStats {
    let total = ds.len();
    let labels = label_counts(ds);

    let sentiment_distribution: BTreeMap<String, u64> = labels
        .iter()
        .map(|(l, n)| (l.to_string(), *n))
        .collect();

    let sentiment_percentage = if total == 0 {
        BTreeMap::new()
    } else {
        labels
            .iter()
            .map(|(l, n)| (l.to_string(), round2(*n as f64 / total as f64 * 100.0)))
            .collect()
    };

    let platform_distribution = platform_label_counts(ds)
        .into_iter()
        .map(|(platform, by_label)| {
            let by_label = by_label.into_iter().map(|(l, n)| (l.to_string(), n)).collect();
            (platform.to_string(), by_label)
        })
        .collect();

    let mean = |f: fn(&dataset::PostRecord) -> f64| -> f64 {
        if total == 0 {
            return 0.0;
        }
        round2(ds.rows().iter().map(f).sum::<f64>() / total as f64)
    };

    SummaryStats {
        total_data: total as u64,
        sentiment_distribution,
        sentiment_percentage,
        platform_distribution,
        avg_engagement: Engagement {
            likes: mean(|r| r.likes),
            retweets: mean(|r| r.retweets),
            replies: mean(|r| r.replies),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::load_csv;

    fn sample() -> Dataset {
        let csv = "text_clean,sentiment_label,platform,timestamp,likes,retweets,replies\n\
                   a,positive,twitter,2024-01-01,10,1,0\n\
                   b,positive,instagram,2024-01-01,5,2,1\n\
                   c,negative,twitter,2024-01-02,0,0,0\n";
        load_csv(csv.as_bytes(), "sample.csv").unwrap()
    }

    #[test]
    fn three_row_scenario() {
        let s = summary_stats(&sample());
        assert_eq!(s.total_data, 3);
        assert_eq!(s.sentiment_distribution["positive"], 2);
        assert_eq!(s.sentiment_distribution["negative"], 1);
        assert_eq!(s.sentiment_percentage["positive"], 66.67);
        assert_eq!(s.sentiment_percentage["negative"], 33.33);
    }

    #[test]
    fn platform_breakdown_and_means() {
        let s = summary_stats(&sample());
        assert_eq!(s.platform_distribution["twitter"]["positive"], 1);
        assert_eq!(s.platform_distribution["twitter"]["negative"], 1);
        assert_eq!(s.platform_distribution["instagram"].len(), 1);

        assert_eq!(s.avg_engagement.likes, 5.0);
        assert_eq!(s.avg_engagement.retweets, 1.0);
        assert_eq!(s.avg_engagement.replies, 0.33);
    }

    #[test]
    fn empty_dataset_has_no_shares() {
        let csv = "text_clean,sentiment_label,platform,timestamp,likes,retweets,replies\n";
        let ds = load_csv(csv.as_bytes(), "empty.csv").unwrap();
        let s = summary_stats(&ds);
        assert_eq!(s.total_data, 0);
        assert!(s.sentiment_distribution.is_empty());
        assert!(s.sentiment_percentage.is_empty());
        assert_eq!(s.avg_engagement, Engagement { likes: 0.0, retweets: 0.0, replies: 0.0 });
    }

    #[test]
    fn round2_halves() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0 * 100.0), 66.67);
        assert_eq!(round2(12.0), 12.0);
    }
}
