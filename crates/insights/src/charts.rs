use std::collections::BTreeMap;

use chrono::NaiveDate;
use dataset::{Dataset, DatasetError, Result};

use crate::chart::{ChartData, ChartKind, Series};
use crate::counts::{label_counts, platform_label_counts};
use crate::palette::sentiment_color;

/// Pie of rows per sentiment label, largest slice first.
pub fn sentiment_chart(ds: &Dataset) -> ChartData {
    let mut series = Series::new("sentiment");
    for (label, n) in label_counts(ds) {
        series = series.point(label, n as f64);
        series.point_colors.push(sentiment_color(label).to_string());
    }

    let mut chart = ChartData::new(ChartKind::Pie, "Sentiment Distribution");
    chart.layout.hole = Some(0.3);
    chart.series.push(series);
    chart
}

/// Grouped bars: one series per label, platforms on the x axis.
pub fn platform_chart(ds: &Dataset) -> ChartData {
    let mut by_label: BTreeMap<&str, Series> = BTreeMap::new();
    for (platform, labels) in platform_label_counts(ds) {
        for (label, n) in labels {
            let s = by_label
                .remove(label)
                .unwrap_or_else(|| Series::new(label).color(sentiment_color(label)));
            by_label.insert(label, s.point(platform, n as f64));
        }
    }

    let mut chart = ChartData::new(ChartKind::GroupedBar, "Sentiment per Platform");
    chart.layout.x_title = Some("platform".to_string());
    chart.layout.y_title = Some("count".to_string());
    chart.series = by_label.into_values().collect();
    chart
}

/// Daily counts per label, one line per label in date order.
///
/// Rows without a timestamp are skipped; an unparseable one fails the chart.
pub fn timeline_chart(ds: &Dataset) -> Result<ChartData> {
    let mut by_label: BTreeMap<&str, BTreeMap<NaiveDate, u64>> = BTreeMap::new();

    for (i, row) in ds.rows().iter().enumerate() {
        let date = match row.date() {
            None => continue,
            Some(Ok(d)) => d,
            Some(Err(raw)) => {
                return Err(DatasetError::InvalidTimestamp { row: i + 1, value: raw.to_string() });
            }
        };
        *by_label
            .entry(row.sentiment_label.as_str())
            .or_default()
            .entry(date)
            .or_default() += 1;
    }

    let mut chart = ChartData::new(ChartKind::Line, "Sentiment Timeline");
    chart.layout.x_title = Some("date".to_string());
    chart.layout.y_title = Some("count".to_string());
    for (label, days) in by_label {
        let series = days.into_iter().fold(
            Series::new(label).color(sentiment_color(label)),
            |s, (day, n)| s.point(day.format("%Y-%m-%d").to_string(), n as f64),
        );
        chart.series.push(series);
    }
    Ok(chart)
}
