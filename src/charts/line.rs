use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use std::path::Path;

use super::style;
use crate::aggregate::YearlyPivot;

/// One thick marked line per pivot column, with a legend entry from `labels`.
pub fn line_plot(
    out: &Path,
    data: &YearlyPivot,
    x_label: &str,
    y_label: &str,
    title: &str,
    labels: &[String],
) -> Result<()> {
    if data.rows.is_empty() {
        bail!("line plot {:?} has no rows", title);
    }
    if labels.len() != data.columns.len() {
        bail!(
            "line plot {:?}: {} labels for {} columns",
            title,
            labels.len(),
            data.columns.len()
        );
    }
    let years = data.years();
    let (first, last) = (years[0], years[years.len() - 1]);
    // a single year still needs a non-empty axis
    let x_range = if first == last {
        (first - 1)..(last + 1)
    } else {
        first..last
    };
    let y_max = (data.max_cell().max(1) as f64 * 1.1).ceil() as u64;

    let root = BitMapBackend::new(out, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, style::title_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, 0u64..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(style::grid_style())
        .x_labels(years.len().max(2))
        .x_label_formatter(&|y| y.to_string())
        .x_desc(x_label)
        .y_desc(y_label)
        .axis_desc_style(style::axis_font())
        .label_style(style::tick_font())
        .draw()?;

    for (col, label) in labels.iter().enumerate() {
        let color = Palette99::pick(col).to_rgba();
        let points = data.series(col);
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))?
            .label(label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
            });
        chart.draw_series(
            points
                .into_iter()
                .map(|p| Circle::new(p, 5, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .label_font(style::tick_font())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
