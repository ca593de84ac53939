//! Read-only views over a loaded dataset: summary statistics, chart
//! descriptions, word frequencies and table pages.

pub mod palette;
pub mod counts;
pub mod chart;
pub mod stats;
pub mod charts;
pub mod words;
pub mod table;
pub mod models;

pub use chart::*;
pub use stats::*;
pub use charts::*;
pub use words::*;
pub use table::*;
pub use models::*;
