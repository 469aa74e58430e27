use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

use super::style;
use crate::stats::Bins;

/// Equal-width bars, 0.85 of the bin width, with a horizontal grid.
pub fn histogram_plot(
    out: &Path,
    bins: &Bins,
    x_label: &str,
    y_label: &str,
    title: &str,
) -> Result<()> {
    let n = bins.counts.len();
    let (x_min, x_max) = (bins.edges[0], bins.edges[n]);
    let y_max = (bins.max_count().max(1) as f64 * 1.1).ceil();

    let root = BitMapBackend::new(out, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, style::title_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(style::grid_style())
        .x_desc(x_label)
        .y_desc(y_label)
        .axis_desc_style(style::axis_font())
        .label_style(style::tick_font())
        .draw()?;

    let fill = style::HIST_BLUE.mix(0.75).filled();
    chart.draw_series(bins.counts.iter().enumerate().map(|(i, &count)| {
        let (lo, hi) = (bins.edges[i], bins.edges[i + 1]);
        let pad = (hi - lo) * 0.075;
        Rectangle::new([(lo + pad, 0.0), (hi - pad, count as f64)], fill)
    }))?;

    root.present()
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
