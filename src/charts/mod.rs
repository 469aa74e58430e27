//! PNG chart renderers. Each draws one figure to `out` and returns nothing else.
pub mod bar;
pub mod histogram;
pub mod line;
pub mod pie;
pub mod style;

pub use bar::bar_chart;
pub use histogram::histogram_plot;
pub use line::line_plot;
pub use pie::pie_chart;
