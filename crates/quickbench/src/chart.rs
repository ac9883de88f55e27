use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::harness::BenchmarkSeries;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no benchmark series to plot")]
    Empty,
    #[error("chart rendering failed: {0}")]
    Render(String),
}

fn draw_err<E: Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Writes an SVG line chart: input size on x, mean seconds on y, one
/// labeled line per series, with axis titles, legend and grid.
pub fn render_chart(path: &Path, series: &[BenchmarkSeries]) -> Result<(), ChartError> {
    if series.iter().all(|s| s.points.is_empty()) {
        return Err(ChartError::Empty);
    }

    let max_size = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| p.size)
        .max()
        .unwrap_or(1);
    let max_secs = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| p.mean.as_secs_f64())
        .fold(f64::EPSILON, f64::max);

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let caption = format!("Quicksort benchmark ({} pivot)", series[0].policy.label());
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(0..max_size, 0.0..max_secs * 1.1)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Input Size (n)")
        .y_desc("Time (seconds)")
        .draw()
        .map_err(draw_err)?;

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(
                s.points.iter().map(|p| (p.size, p.mean.as_secs_f64())),
                color.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label(s.case.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
            });
        chart
            .draw_series(
                s.points
                    .iter()
                    .map(|p| Circle::new((p.size, p.mean.as_secs_f64()), 3, color.filled())),
            )
            .map_err(draw_err)?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.stroke_width(1))
        .background_style(WHITE.mix(0.8).filled())
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}
