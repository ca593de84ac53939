use dataset::{load_csv, Dataset};
use insights::{
    data_table, platform_chart, sentiment_chart, summary_stats, timeline_chart, word_frequency, PageRequest,
    TOP_WORDS,
};

const LABELS: [&str; 3] = ["positive", "neutral", "negative"];
const PLATFORMS: [&str; 4] = ["twitter", "instagram", "facebook", "tiktok"];

/// Deterministic mixed dataset of `n` rows.
fn generated(n: usize) -> Dataset {
    let mut csv = String::from("post_id,user_handle,text_clean,sentiment_label,platform,timestamp,likes,retweets,replies\n");
    for i in 0..n {
        let label = LABELS[(i * 7 + i / 3) % 3];
        let platform = PLATFORMS[(i * 5) % 4];
        let day = 1 + (i % 28);
        let words: Vec<String> = (0..(i % 9)).map(|k| format!("w{}", (i + k * 13) % 70)).collect();
        csv.push_str(&format!(
            "p{i},@user{},{},{label},{platform},2024-03-{day:02} 12:00:00,{},{},{}\n",
            i % 11,
            words.join(" "),
            i % 17,
            i % 5,
            i % 3,
        ));
    }
    load_csv(csv.as_bytes(), "generated.csv").unwrap()
}

#[test]
fn distribution_sums_to_total() {
    for n in [1, 2, 10, 97, 250] {
        let s = summary_stats(&generated(n));
        let sum: u64 = s.sentiment_distribution.values().sum();
        assert_eq!(sum, s.total_data);

        let pct: f64 = s.sentiment_percentage.values().sum();
        assert!((pct - 100.0).abs() <= 0.02, "n={n} pct={pct}");

        let by_platform: u64 = s.platform_distribution.values().flat_map(|m| m.values()).sum();
        assert_eq!(by_platform, s.total_data);
    }
}

#[test]
fn charts_account_for_every_row() {
    let ds = generated(120);
    assert_eq!(sentiment_chart(&ds).total(), 120.0);
    assert_eq!(platform_chart(&ds).total(), 120.0);
    assert_eq!(timeline_chart(&ds).unwrap().total(), 120.0);
}

#[test]
fn timeline_points_are_chronological() {
    let chart = timeline_chart(&generated(90)).unwrap();
    for s in &chart.series {
        let mut sorted = s.labels.clone();
        sorted.sort();
        assert_eq!(s.labels, sorted);
    }
}

#[test]
fn word_frequency_is_bounded_and_descending() {
    let ds = generated(400);
    for label in LABELS {
        let wf = word_frequency(&ds, label);
        assert!(wf.len() <= TOP_WORDS);
        assert_eq!(wf.words.len(), wf.frequencies.len());
        assert!(wf.frequencies.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn pagination_covers_filtered_rows_exactly_once() {
    let ds = generated(53);
    for sentiment in [None, Some("all"), Some("neutral")] {
        let filter = sentiment.map(str::to_string);
        let first = data_table(&ds, &PageRequest::new(1, 7).unwrap().with_sentiment(filter.clone()));

        let mut seen = Vec::new();
        for page in 1..=first.total_pages + 1 {
            let req = PageRequest::new(page, 7).unwrap().with_sentiment(filter.clone());
            let got = data_table(&ds, &req);
            let expected = 7usize.min(got.total.saturating_sub((page - 1) * 7));
            assert_eq!(got.data.len(), expected);
            seen.extend(got.data.into_iter().filter_map(|r| r.post_id));
        }

        assert_eq!(seen.len(), first.total);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), first.total);
    }
}
