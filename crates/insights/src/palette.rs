//! Fixed sentiment colors shared by every chart.

pub const NEGATIVE: &str = "#EF4444"; // red
pub const NEUTRAL: &str = "#F59E0B";  // amber
pub const POSITIVE: &str = "#10B981"; // green
pub const OTHER: &str = "#6B7280";    // gray, labels outside the known set

pub fn sentiment_color(label: &str) -> &'static str {
    match label {
        "negative" => NEGATIVE,
        "neutral" => NEUTRAL,
        "positive" => POSITIVE,
        _ => OTHER,
    }
}
