use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use std::path::Path;

use super::style;

/// One bar per label, coloured from the ten-colour palette, labels rotated.
pub fn bar_chart(
    out: &Path,
    labels: &[String],
    values: &[u64],
    x_label: &str,
    y_label: &str,
    title: &str,
) -> Result<()> {
    if labels.is_empty() {
        bail!("bar chart {:?} has no bars", title);
    }
    if labels.len() != values.len() {
        bail!(
            "bar chart {:?}: {} labels for {} values",
            title,
            labels.len(),
            values.len()
        );
    }
    let n = labels.len() as i32;
    let y_max = (values.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.1).ceil() as u64;
    let colors = style::cycle(&style::TAB10, labels.len());

    let root = BitMapBackend::new(out, (1400, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, style::title_font())
        .margin(20)
        .x_label_area_size(260)
        .y_label_area_size(90)
        .build_cartesian_2d((0..n).into_segmented(), 0u64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(style::grid_style())
        .x_labels(labels.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(style::tick_font().transform(FontTransform::Rotate90))
        .y_label_style(style::tick_font())
        .x_desc(x_label)
        .y_desc(y_label)
        .axis_desc_style(style::axis_font())
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        let i = i as i32;
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), v)],
            colors[i as usize].mix(0.9).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    root.present()
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
