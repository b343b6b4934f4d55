//! Menu-driven data visualization program: line plots, bar graphs, pie charts.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::collect::{CountPolicy, collect_series};
use crate::config::RenderConfig;
use crate::models::explode_offsets;
use crate::prompt::{Bounds, Console, Menu, MenuError};
use crate::style::{Hatch, LineStyle, Marker, NamedColor};
use crate::viz::{self, BarChart, Chart, LineChart, PieChart};

const RULE: &str = "==================================================";

/// Below this many slices a pie gets a readability note.
pub const PIE_MIN_RECOMMENDED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    LinePlot,
    BarGraph,
    PieChart,
    Exit,
}

pub fn main_menu() -> Result<Menu<MainAction>, MenuError> {
    Menu::from_pairs(
        format!("{RULE}\nDATA VISUALIZATION PROGRAM\n{RULE}"),
        [
            ("Line Plot", MainAction::LinePlot),
            ("Bar Graph", MainAction::BarGraph),
            ("Pie Chart", MainAction::PieChart),
            ("Exit", MainAction::Exit),
        ],
    )
}

/// Run the main menu until the user picks "Exit".
///
/// A chart that fails to render is reported and the menu comes back; only
/// terminal failures (including closed input) end the loop with an error.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &mut RenderConfig,
) -> Result<()> {
    let menu = main_menu()?;
    let prompt = format!("Enter your choice (1-{}): ", menu.len());
    loop {
        let chart = match console.select(&menu, &prompt, None)? {
            MainAction::LinePlot => line_plot(console)?,
            MainAction::BarGraph => bar_graph(console)?,
            MainAction::PieChart => pie_chart(console)?,
            MainAction::Exit => {
                console.say("\nThank you for using the Data Visualization Program!")?;
                return Ok(());
            }
        };
        show(console, &chart, config)?;
    }
}

/// Render a chart and tell the user where it went.
pub fn show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    chart: &Chart,
    config: &mut RenderConfig,
) -> Result<()> {
    match viz::render(chart, config) {
        Ok(path) => console.say(format_args!("Chart saved to {}", path.display()))?,
        Err(e) => {
            log::error!("rendering {} failed: {e:#}", chart.slug());
            console.say(format_args!("Error! Could not render chart: {e}"))?;
        }
    }
    Ok(())
}

pub fn line_plot<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Chart> {
    console.say("\n--- LINE PLOT ---")?;
    let series = collect_series(console, &CountPolicy::data_points())?;
    let marker = console.select(
        &Marker::menu()?,
        "Choose marker (1-3): ",
        Some(&Marker::default_choice()),
    )?;
    let color = console.select(
        &NamedColor::line_menu()?,
        "Choose color (1-3): ",
        Some(&NamedColor::line_default()),
    )?;
    let line_style = console.select(
        &LineStyle::menu()?,
        "Choose line style (1-4): ",
        Some(&LineStyle::default_choice()),
    )?;
    Ok(Chart::Line(LineChart {
        title: "Line Plot".into(),
        series,
        marker,
        color,
        line_style,
    }))
}

/// Show the palette once, then ask for one color per item.
pub fn pick_colors<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    noun: &str,
    count: usize,
) -> Result<Vec<NamedColor>> {
    let menu = NamedColor::palette_menu()?;
    let default = NamedColor::palette_default();
    console.say("")?;
    for line in menu.render() {
        console.say(line)?;
    }
    let mut colors = Vec::with_capacity(count);
    for i in 1..=count {
        let prompt = format!("Choose color for {noun} {i} (1-{}): ", menu.len());
        colors.push(console.choose(&menu, &prompt, Some(&default))?);
    }
    Ok(colors)
}

pub fn bar_graph<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Chart> {
    console.say("\n--- BAR GRAPH ---")?;
    let series = collect_series(console, &CountPolicy::bars())?;
    let width: f64 = console.read_number(
        "Enter bar width (0.1 to 1.0, recommended 0.5): ",
        Some(0.5),
        Bounds::between(0.1, 1.0),
    )?;
    let colors = pick_colors(console, "bar", series.len())?;
    Ok(Chart::Bar(BarChart {
        title: "Bar Graph".into(),
        series,
        width,
        colors,
    }))
}

pub fn pie_chart<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Chart> {
    console.say("\n--- PIE CHART ---")?;
    let series = collect_series(console, &CountPolicy::data_points())?;
    let n = series.len();
    if n < PIE_MIN_RECOMMENDED {
        console.say(format_args!(
            "Note: Pie chart works best with at least {PIE_MIN_RECOMMENDED} values."
        ))?;
    }

    let slice = if console.confirm("\nDo you want to explode any slice? (yes/no): ")? {
        Some(console.read_index(&format!("Which slice to explode? (1-{n}): "), n)?)
    } else {
        None
    };
    let explode = explode_offsets(n, slice);
    let colors = pick_colors(console, "slice", n)?;
    let hatch = console.select(
        &Hatch::menu()?,
        "Choose hatch pattern (1-6): ",
        Some(&Hatch::default_choice()),
    )?;

    Ok(Chart::Pie(PieChart {
        title: "Pie Chart".into(),
        series,
        explode,
        colors,
        hatch,
        shadow: true,
    }))
}
