//! Pie charts drawn directly in pixel space.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::geometry::{Px, pie_wedges};
use super::types::PieChart;
use super::util::named_rgb;
use crate::style::Hatch;

const START_DEG: f64 = 90.0;
const TITLE_PX: i32 = 48;
const HATCH_SPACING: f64 = 8.0;

/// Share of each value in the total, in percent.
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    values
        .iter()
        .map(|v| if total > 0.0 { v / total * 100.0 } else { 0.0 })
        .collect()
}

fn closed(mut poly: Vec<Px>) -> Vec<Px> {
    if let Some(first) = poly.first().copied() {
        poly.push(first);
    }
    poly
}

pub fn draw_pie<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &PieChart,
    text: bool,
) -> Result<()> {
    let (w, h) = root.dim_in_pixel();
    let (w, h) = (w as f64, h as f64);
    let top = if text { TITLE_PX as f64 } else { 8.0 };

    if text {
        let style = TextStyle::from((FontFamily::SansSerif, 24u32)).pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(plot.title.as_str(), ((w / 2.0) as i32, 12), style))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let values = plot.series.values();
    let labels = plot.series.labels();
    let center = (w / 2.0, top + (h - top) / 2.0);
    // Leave room for exploded slices and outside labels.
    let radius = (w.min(h - top) * 0.35).max(4.0);
    let wedges: Vec<_> = pie_wedges(&values, center, radius, START_DEG)
        .into_iter()
        .zip(&plot.explode)
        .map(|(wedge, e)| wedge.exploded(*e))
        .collect();
    log::debug!("pie: {} wedges, radius {radius:.1}px", wedges.len());

    if plot.shadow {
        let dx = (radius * 0.02).round() as i32;
        for wedge in wedges.iter().filter(|w| w.end > w.start) {
            let shifted: Vec<Px> = wedge
                .polygon()
                .into_iter()
                .map(|(x, y)| (x - dx, y + dx))
                .collect();
            root.draw(&Polygon::new(shifted, BLACK.mix(0.3).filled()))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    let hatched = plot.hatch != Hatch::None;
    let alpha = if hatched { 0.7 } else { 1.0 };
    for (wedge, color) in wedges.iter().zip(&plot.colors) {
        if wedge.end <= wedge.start {
            continue;
        }
        let poly = wedge.polygon();
        root.draw(&Polygon::new(poly.clone(), named_rgb(*color).mix(alpha).filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        if hatched {
            for [a, b] in wedge.hatch_segments(plot.hatch.directions(), HATCH_SPACING) {
                root.draw(&PathElement::new(vec![a, b], BLACK.stroke_width(1)))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            root.draw(&PathElement::new(closed(poly), BLACK.stroke_width(2)))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    if text {
        let pct_style =
            TextStyle::from((FontFamily::SansSerif, 14u32)).pos(Pos::new(HPos::Center, VPos::Center));
        for ((wedge, label), pct) in wedges.iter().zip(&labels).zip(percentages(&values)) {
            let mid = wedge.mid_angle();
            let (lx, ly) = wedge.point_at(mid, radius * 1.1);
            let hpos = if mid.cos() >= 0.0 { HPos::Left } else { HPos::Right };
            let label_style =
                TextStyle::from((FontFamily::SansSerif, 15u32)).pos(Pos::new(hpos, VPos::Center));
            root.draw(&Text::new(label.as_str(), (lx as i32, ly as i32), label_style))
                .map_err(|e| anyhow!("{:?}", e))?;

            let (px, py) = wedge.point_at(mid, radius * 0.6);
            root.draw(&Text::new(
                format!("{pct:.1}%"),
                (px as i32, py as i32),
                pct_style.clone(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }
    }
    Ok(())
}
