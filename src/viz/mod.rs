//! Visualization: render chart descriptions to **SVG** or **PNG** with plotters.
//!
//! - Line plots with circle/square/star markers and solid/dotted/dashed/dash-dotted strokes
//! - Bar graphs with per-bar colors and adjustable bar width
//! - Pie charts with an exploded slice, shadow, and hatch patterns
//! - Grouped bar charts with an external legend panel
//! - Locale-aware value-axis tick labels

pub mod cartesian;
pub mod fonts;
pub mod geometry;
pub mod legend;
pub mod pie;
pub mod text;
pub mod types;
pub mod util;

// Re-export types for public API
pub use types::{BarChart, Chart, GroupedBarChart, LineChart, PieChart};

use anyhow::{Result, anyhow, bail};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;

/// Reject charts the renderer cannot draw faithfully.
pub fn validate(chart: &Chart) -> Result<()> {
    fn finite(values: &[f64]) -> Result<()> {
        if values.iter().any(|v| !v.is_finite()) {
            bail!("values must be finite numbers");
        }
        Ok(())
    }

    match chart {
        Chart::Line(c) => {
            if c.series.is_empty() {
                bail!("no data to plot");
            }
            finite(&c.series.values())
        }
        Chart::Bar(c) => {
            if c.series.is_empty() {
                bail!("no data to plot");
            }
            if c.colors.len() != c.series.len() {
                bail!(
                    "{} colors for {} bars",
                    c.colors.len(),
                    c.series.len()
                );
            }
            if !(c.width > 0.0 && c.width <= 1.0) {
                bail!("bar width {} outside (0, 1]", c.width);
            }
            finite(&c.series.values())
        }
        Chart::Pie(c) => {
            let values = c.series.values();
            if values.is_empty() {
                bail!("no data to plot");
            }
            finite(&values)?;
            if c.colors.len() != values.len() || c.explode.len() != values.len() {
                bail!(
                    "pie needs one color and one explode offset per slice ({} slices)",
                    values.len()
                );
            }
            if values.iter().any(|v| *v < 0.0) {
                bail!("pie slices cannot be negative");
            }
            if values.iter().sum::<f64>() <= 0.0 {
                bail!("pie values must add up to more than zero");
            }
            Ok(())
        }
        Chart::GroupedBar(c) => {
            if c.categories.is_empty() || c.groups.is_empty() {
                bail!("no data to plot");
            }
            for (name, values) in &c.groups {
                if values.len() != c.categories.len() {
                    bail!(
                        "series '{name}' has {} values for {} categories",
                        values.len(),
                        c.categories.len()
                    );
                }
                finite(values)?;
            }
            Ok(())
        }
    }
}

/// Render `chart` to `out_path`; the backend is chosen by extension (`.svg` or bitmap).
pub fn plot<P: AsRef<Path>>(chart: &Chart, out_path: P, config: &RenderConfig) -> Result<()> {
    validate(chart)?;
    let text = fonts::ensure_registered(config.font.as_deref());

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let size = (config.width.max(200), config.height.max(200));

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_chart(root, chart, &config.locale, text)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_chart(root, chart, &config.locale, text)?;
    }
    Ok(())
}

/// Render to the next free file in the configured output directory and return its path.
pub fn render(chart: &Chart, config: &mut RenderConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.out_dir)
        .map_err(|e| anyhow!("cannot create {}: {e}", config.out_dir.display()))?;
    let path = config.next_path(chart.slug());
    plot(chart, &path, config)?;
    log::info!("wrote {} to {}", chart.title(), path.display());
    Ok(path)
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, chart: &Chart, locale: &str, text: bool) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    match chart {
        Chart::Line(c) => cartesian::draw_line(&root, c, locale, text)?,
        Chart::Bar(c) => cartesian::draw_bar(&root, c, locale, text)?,
        Chart::Pie(c) => pie::draw_pie(&root, c, text)?,
        Chart::GroupedBar(c) => cartesian::draw_grouped_bar(&root, c, locale, text)?,
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
