//! Renderer-neutral chart descriptions.
//!
//! The dashboard page turns these into plots; nothing here draws.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
    GroupedBar,
    Line,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub labels: Vec<String>,   // x values, or slice names for a pie
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub point_colors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: vec![],
            values: vec![],
            color: None,
            point_colors: vec![],
            text: vec![],
        }
    }

    pub fn point(mut self, label: impl Into<String>, value: f64) -> Self {
        self.labels.push(label.into());
        self.values.push(value);
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub height: u32,
    pub show_legend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
}

pub const CHART_HEIGHT: u32 = 400;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub layout: Layout,
}

impl ChartData {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            series: vec![],
            layout: Layout {
                title: title.into(),
                height: CHART_HEIGHT,
                show_legend: true,
                hole: None,
                x_title: None,
                y_title: None,
                y_range: None,
            },
        }
    }

    pub fn total(&self) -> f64 {
        self.series.iter().flat_map(|s| s.values.iter()).sum()
    }
}
