//! Line, bar, and grouped-bar charts over categorical labels.
//!
//! Categories sit at x = 0, 1, .., n-1 on an `f64` axis spanning
//! `-0.5..n-0.5`; only ticks landing on those positions get a label.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontFamily;

use super::geometry::{Px, dash_segments, star_points};
use super::legend::draw_legend_panel;
use super::text::{category_font_px, estimate_text_width_px, truncate_to_width};
use super::types::{BarChart, GroupedBarChart, LineChart, X_DESC, Y_DESC};
use super::util::{format_tick, named_rgb, office_color, value_range};
use crate::style::Marker;

type CategoryCoord = Cartesian2d<RangedCoordf64, RangedCoordf64>;

const MARGIN: u32 = 20;
const TICK_FONT_PX: u32 = 13;
const MARKER_RADIUS: i32 = 10;

/// Everything needed to lay out a categorical chart frame.
struct Frame<'a> {
    title: &'a str,
    categories: &'a [String],
    values: Vec<f64>,
    x_desc: &'a str,
    y_desc: &'a str,
    /// Vertical grid lines as well as horizontal ones.
    x_grid: bool,
    locale: &'a str,
    text: bool,
}

fn category_label(categories: &[String], x: f64, font_px: u32, slot_px: u32) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    categories
        .get(i as usize)
        .map(|l| truncate_to_width(l, font_px, slot_px))
        .unwrap_or_default()
}

/// Build the chart context, draw caption, axes, and grid.
fn category_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    frame: &Frame<'_>,
) -> Result<ChartContext<'a, DB, CategoryCoord>> {
    let n = frame.categories.len().max(1);
    let (y_lo, y_hi) = value_range(&frame.values);

    let left_label_px = [y_lo, y_hi, (y_lo + y_hi) / 2.0]
        .iter()
        .map(|v| estimate_text_width_px(&format_tick(*v, frame.locale), TICK_FONT_PX))
        .max()
        .unwrap_or(0)
        .saturating_add(18)
        .clamp(48, 140);

    let mut builder = ChartBuilder::on(area);
    builder.margin(MARGIN);
    if frame.text {
        builder
            .caption(frame.title, (FontFamily::SansSerif, 24))
            .set_label_area_size(LabelAreaPosition::Left, left_label_px + 24)
            .set_label_area_size(LabelAreaPosition::Bottom, 56);
    }
    let mut chart = builder
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), y_lo..y_hi)
        .map_err(|e| anyhow!("{:?}", e))?;

    let (plot_w, _) = chart.plotting_area().dim_in_pixel();
    let slot_px = (plot_w / n as u32).saturating_sub(4).max(12);
    let x_font_px = category_font_px(frame.categories, plot_w, TICK_FONT_PX);
    let x_fmt = |x: &f64| category_label(frame.categories, *x, x_font_px, slot_px);
    let y_fmt = |v: &f64| format_tick(*v, frame.locale);

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(n)
        .y_labels(10)
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(TRANSPARENT)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt);
    if !frame.x_grid {
        mesh.disable_x_mesh();
    }
    if frame.text {
        mesh.x_desc(frame.x_desc)
            .y_desc(frame.y_desc)
            .x_label_style((FontFamily::SansSerif, x_font_px))
            .y_label_style((FontFamily::SansSerif, TICK_FONT_PX))
            .axis_desc_style((FontFamily::SansSerif, 16));
    }
    mesh.draw().map_err(|e| anyhow!("{:?}", e))?;

    Ok(chart)
}

pub fn draw_line<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &LineChart,
    locale: &str,
    text: bool,
) -> Result<()> {
    let labels = plot.series.labels();
    let values = plot.series.values();
    let chart = category_chart(
        root,
        &Frame {
            title: &plot.title,
            categories: &labels,
            values: values.clone(),
            x_desc: X_DESC,
            y_desc: Y_DESC,
            x_grid: true,
            locale,
            text,
        },
    )?;

    // Strokes are drawn in pixel space so dash lengths do not depend on axis scale.
    let pixels: Vec<Px> = values
        .iter()
        .enumerate()
        .map(|(i, v)| chart.backend_coord(&(i as f64, *v)))
        .collect();

    let color = named_rgb(plot.color);
    let stroke = color.mix(0.7).stroke_width(2);
    for run in dash_segments(&pixels, plot.line_style.dash_pattern()) {
        root.draw(&PathElement::new(run, stroke))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let fill = color.mix(0.7).filled();
    let edge = BLACK.mix(0.7).stroke_width(2);
    for p in pixels {
        draw_marker(root, p, plot.marker, fill, edge)?;
    }
    Ok(())
}

/// Filled marker with an outline.
fn draw_marker<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    c: Px,
    marker: Marker,
    fill: ShapeStyle,
    edge: ShapeStyle,
) -> Result<()> {
    let s = MARKER_RADIUS;
    match marker {
        Marker::Circle => {
            root.draw(&Circle::new(c, s, fill))
                .map_err(|e| anyhow!("{:?}", e))?;
            root.draw(&Circle::new(c, s, edge))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        Marker::Square => {
            let corners = [(c.0 - s, c.1 - s), (c.0 + s, c.1 + s)];
            root.draw(&Rectangle::new(corners, fill))
                .map_err(|e| anyhow!("{:?}", e))?;
            root.draw(&Rectangle::new(corners, edge))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        Marker::Star => {
            let outline = star_points(c, s + 3);
            root.draw(&Polygon::new(outline.clone(), fill))
                .map_err(|e| anyhow!("{:?}", e))?;
            let mut closed = outline;
            closed.push(closed[0]);
            root.draw(&PathElement::new(closed, edge))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }
    Ok(())
}

pub fn draw_bar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &BarChart,
    locale: &str,
    text: bool,
) -> Result<()> {
    let labels = plot.series.labels();
    let values = plot.series.values();
    let mut chart = category_chart(
        root,
        &Frame {
            title: &plot.title,
            categories: &labels,
            values: values.clone(),
            x_desc: X_DESC,
            y_desc: Y_DESC,
            x_grid: false,
            locale,
            text,
        },
    )?;

    let half = plot.width / 2.0;
    let bars: Vec<([(f64, f64); 2], RGBColor)> = values
        .iter()
        .zip(&plot.colors)
        .enumerate()
        .map(|(i, (v, c))| {
            let x = i as f64;
            ([(x - half, 0.0), (x + half, *v)], named_rgb(*c))
        })
        .collect();

    chart
        .draw_series(
            bars.iter()
                .map(|(corners, color)| Rectangle::new(*corners, color.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;
    chart
        .draw_series(
            bars.iter()
                .map(|(corners, _)| Rectangle::new(*corners, BLACK.stroke_width(1))),
        )
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Horizontal center of bar `k` of `groups` around category `x`.
pub fn group_offset(x: f64, k: usize, groups: usize, bar_width: f64) -> f64 {
    x + (k as f64 - (groups as f64 - 1.0) / 2.0) * bar_width
}

pub fn draw_grouped_bar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &GroupedBarChart,
    locale: &str,
    text: bool,
) -> Result<()> {
    let (plot_area, legend_area) = root.split_horizontally((80).percent_width());

    let all_values: Vec<f64> = plot.groups.iter().flat_map(|(_, v)| v.iter().copied()).collect();
    let mut chart = category_chart(
        &plot_area,
        &Frame {
            title: &plot.title,
            categories: &plot.categories,
            values: all_values,
            x_desc: &plot.x_desc,
            y_desc: &plot.y_desc,
            x_grid: false,
            locale,
            text,
        },
    )?;

    let half = plot.bar_width / 2.0;
    let mut legend_items: Vec<(String, RGBAColor)> = Vec::with_capacity(plot.groups.len());
    for (k, (name, values)) in plot.groups.iter().enumerate() {
        let color = office_color(k);
        chart
            .draw_series(values.iter().enumerate().map(|(i, v)| {
                let cx = group_offset(i as f64, k, plot.groups.len(), plot.bar_width);
                Rectangle::new([(cx - half, 0.0), (cx + half, *v)], color.filled())
            }))
            .map_err(|e| anyhow!("{:?}", e))?;
        legend_items.push((name.clone(), color));
    }

    draw_legend_panel(&legend_area, &legend_items, text)?;
    Ok(())
}
