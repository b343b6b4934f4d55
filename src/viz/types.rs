//! Chart descriptions handed to the renderer.
//!
//! These carry validated data only: equal-length labels/values and style
//! values drawn from the closed vocabularies in [`crate::style`].

use crate::models::DataSeries;
use crate::style::{Hatch, LineStyle, Marker, NamedColor};

/// Single series line plot over categorical labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub series: DataSeries,
    pub marker: Marker,
    pub color: NamedColor,
    pub line_style: LineStyle,
}

/// One bar per entry, each with its own color.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub series: DataSeries,
    /// Fraction of the category slot a bar occupies, in `[0.1, 1.0]`.
    pub width: f64,
    /// One color per bar.
    pub colors: Vec<NamedColor>,
}

/// Pie chart of non-negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub series: DataSeries,
    /// Radial offset per slice as a fraction of the radius.
    pub explode: Vec<f64>,
    pub colors: Vec<NamedColor>,
    pub hatch: Hatch,
    pub shadow: bool,
}

/// Several series sharing the same categories, drawn side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub title: String,
    pub categories: Vec<String>,
    /// `(legend label, one value per category)`.
    pub groups: Vec<(String, Vec<f64>)>,
    /// Width of one bar in category units.
    pub bar_width: f64,
    pub x_desc: String,
    pub y_desc: String,
}

/// Anything [`super::plot`] can draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Line(LineChart),
    Bar(BarChart),
    Pie(PieChart),
    GroupedBar(GroupedBarChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Line(c) => &c.title,
            Chart::Bar(c) => &c.title,
            Chart::Pie(c) => &c.title,
            Chart::GroupedBar(c) => &c.title,
        }
    }

    /// File-name stem for this kind of chart.
    pub fn slug(&self) -> &'static str {
        match self {
            Chart::Line(_) => "line-plot",
            Chart::Bar(_) => "bar-graph",
            Chart::Pie(_) => "pie-chart",
            Chart::GroupedBar(_) => "grouped-bar",
        }
    }
}

/// Axis titles used by the single-series charts.
pub const X_DESC: &str = "Labels";
pub const Y_DESC: &str = "Values";
