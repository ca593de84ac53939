//! Reference scores of the offline sentiment classifiers.
//!
//! These are fixed numbers from the training notebook; nothing here is
//! computed from the loaded dataset.

use serde::Serialize;

use crate::chart::{ChartData, ChartKind, Series};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelMetrics {
    pub model: &'static str,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

pub const MODEL_METRICS: [ModelMetrics; 3] = [
    ModelMetrics { model: "Naive Bayes", accuracy: 0.6416, precision: 0.64, recall: 0.64, f1_score: 0.64 },
    ModelMetrics { model: "SVM", accuracy: 0.6977, precision: 0.70, recall: 0.69, f1_score: 0.69 },
    ModelMetrics { model: "Random Forest", accuracy: 0.6501, precision: 0.65, recall: 0.65, f1_score: 0.65 },
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelComparison {
    #[serde(flatten)]
    pub chart: ChartData,
    pub metrics: Vec<ModelMetrics>,
}

/// Accuracy bar chart plus the full metrics table.
pub fn model_comparison() -> ModelComparison {
    let mut series = Series::new("Accuracy");
    for m in &MODEL_METRICS {
        series = series.point(m.model, m.accuracy);
        series.text.push(format!("{:.2}%", m.accuracy * 100.0));
    }

    let mut chart = ChartData::new(ChartKind::Bar, "Model Accuracy Comparison");
    chart.layout.show_legend = false;
    chart.layout.y_title = Some("Accuracy".to_string());
    chart.layout.y_range = Some([0.0, 1.0]);
    chart.series.push(series);

    ModelComparison { chart, metrics: MODEL_METRICS.to_vec() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_labels_are_percentages() {
        let mc = model_comparison();
        let s = &mc.chart.series[0];
        assert_eq!(s.labels, vec!["Naive Bayes", "SVM", "Random Forest"]);
        assert_eq!(s.text, vec!["64.16%", "69.77%", "65.01%"]);
        assert_eq!(mc.chart.layout.y_range, Some([0.0, 1.0]));
        assert!(!mc.chart.layout.show_legend);
    }

    #[test]
    fn flattens_chart_next_to_metrics() {
        let v = serde_json::to_value(model_comparison()).unwrap();
        assert_eq!(v["kind"], "bar");
        assert_eq!(v["metrics"][1]["model"], "SVM");
        assert_eq!(v["metrics"][1]["precision"], 0.70);
    }
}
