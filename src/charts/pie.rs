use anyhow::{bail, Context, Result};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;

use super::style;

/// Slices start at twelve o'clock and carry their percentage share.
pub fn pie_chart(out: &Path, values: &[u64], labels: &[String], title: &str) -> Result<()> {
    if values.is_empty() || values.iter().all(|&v| v == 0) {
        bail!("pie chart {:?} has nothing to draw", title);
    }
    if labels.len() != values.len() {
        bail!(
            "pie chart {:?}: {} labels for {} values",
            title,
            labels.len(),
            values.len()
        );
    }

    let root = BitMapBackend::new(out, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled(title, style::title_font())?;

    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;
    let sizes: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    let colors = style::cycle(&style::PAIRED, values.len());

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, labels);
    pie.start_angle(-90.0);
    pie.label_style((style::FONT, 20).into_font().color(&BLACK));
    pie.percentages((style::FONT, 18).into_font().color(&BLACK));
    area.draw(&pie)?;

    root.present()
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
