//! Reporting: charts, console tables, CSV export and the HTML summary.
pub mod html;
pub mod palette;
pub mod plots;
pub mod table;

pub use plots::{render_all_charts, CHART_FILES};
