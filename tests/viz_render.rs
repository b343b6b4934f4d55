use std::fs;
use std::path::PathBuf;
use visprog::config::{ImageFormat, RenderConfig};
use visprog::models::{DataSeries, explode_offsets};
use visprog::style::{Hatch, LineStyle, Marker, NamedColor};
use visprog::viz::{self, BarChart, Chart, GroupedBarChart, LineChart, PieChart};

fn sample_series() -> DataSeries {
    [("Mon", 3.0), ("Tue", 7.5), ("Wed", 2.0), ("Thu", 9.0), ("Fri", 4.0)]
        .into_iter()
        .collect()
}

fn config_in(dir: &tempfile::TempDir, format: ImageFormat) -> RenderConfig {
    let mut cfg = RenderConfig::default();
    cfg.out_dir = dir.path().to_path_buf();
    cfg.format = format;
    cfg.width = 640;
    cfg.height = 400;
    cfg
}

/// Render into a fresh temp dir; the dir is returned so the file outlives the call.
fn write_and_check(chart: &Chart, format: ImageFormat) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(&dir, format);
    let path = viz::render(chart, &mut cfg).unwrap();
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "chart has content");
    assert_eq!(
        path.extension().and_then(|e| e.to_str()),
        Some(format.extension())
    );
    (dir, path)
}

#[test]
fn every_line_style_and_marker_renders() {
    for (i, style) in LineStyle::ALL.iter().enumerate() {
        let chart = Chart::Line(LineChart {
            title: "Line Plot".into(),
            series: sample_series(),
            marker: Marker::ALL[i % Marker::ALL.len()],
            color: NamedColor::LINE[i % NamedColor::LINE.len()],
            line_style: *style,
        });
        write_and_check(&chart, ImageFormat::Svg);
    }
}

#[test]
fn bar_graph_renders_as_png() {
    let chart = Chart::Bar(BarChart {
        title: "Bar Graph".into(),
        series: sample_series(),
        width: 0.5,
        colors: NamedColor::PALETTE[..5].to_vec(),
    });
    write_and_check(&chart, ImageFormat::Png);
}

#[test]
fn negative_bars_render() {
    let series: DataSeries = [("loss", -4.0), ("gain", 6.0)].into_iter().collect();
    let chart = Chart::Bar(BarChart {
        title: "Bar Graph".into(),
        series,
        width: 1.0,
        colors: vec![NamedColor::Red, NamedColor::Green],
    });
    write_and_check(&chart, ImageFormat::Svg);
}

#[test]
fn pie_with_explode_and_every_hatch_renders() {
    for hatch in Hatch::ALL {
        let chart = Chart::Pie(PieChart {
            title: "Pie Chart".into(),
            series: sample_series(),
            explode: explode_offsets(5, Some(2)),
            colors: NamedColor::PALETTE[2..7].to_vec(),
            hatch,
            shadow: true,
        });
        write_and_check(&chart, ImageFormat::Svg);
    }
}

#[test]
fn grouped_bars_render_with_legend() {
    let chart = Chart::GroupedBar(GroupedBarChart {
        title: "Quarterly".into(),
        categories: vec!["Q1".into(), "Q2".into(), "Q3".into()],
        groups: vec![
            ("Laptops".into(), vec![1200.0, 1500.0, 900.0]),
            ("Phones".into(), vec![800.0, 950.0, 1100.0]),
        ],
        bar_width: 0.2,
        x_desc: "Quarter".into(),
        y_desc: "Sales".into(),
    });
    write_and_check(&chart, ImageFormat::Png);
}

#[test]
fn mismatched_colors_are_rejected() {
    let chart = Chart::Bar(BarChart {
        title: "Bar Graph".into(),
        series: sample_series(),
        width: 0.5,
        colors: vec![NamedColor::Red],
    });
    assert!(viz::validate(&chart).is_err());
}

#[test]
fn pie_rejects_negative_and_zero_totals() {
    let make = |values: Vec<f64>| {
        let n = values.len();
        Chart::Pie(PieChart {
            title: "Pie Chart".into(),
            series: values.into_iter().map(|v| ("x", v)).collect(),
            explode: vec![0.0; n],
            colors: vec![NamedColor::Blue; n],
            hatch: Hatch::None,
            shadow: false,
        })
    };
    assert!(viz::validate(&make(vec![1.0, -1.0])).is_err());
    assert!(viz::validate(&make(vec![0.0, 0.0])).is_err());
    assert!(viz::validate(&make(vec![0.0, 2.0])).is_ok());
}

#[test]
fn empty_series_is_error() {
    let chart = Chart::Line(LineChart {
        title: "Line Plot".into(),
        series: DataSeries::new(),
        marker: Marker::Circle,
        color: NamedColor::Red,
        line_style: LineStyle::Solid,
    });
    let tmp = std::env::temp_dir().join("visprog_viz_empty.svg");
    assert!(viz::plot(&chart, &tmp, &RenderConfig::default()).is_err());
}

#[test]
fn svg_carries_title_and_category_labels() {
    let chart = Chart::Line(LineChart {
        title: "Weekly Visits".into(),
        series: sample_series(),
        marker: Marker::Square,
        color: NamedColor::Blue,
        line_style: LineStyle::Solid,
    });
    let (_dir, path) = write_and_check(&chart, ImageFormat::Svg);
    let svg = fs::read_to_string(path).unwrap();
    assert!(svg.contains("Weekly Visits"));
    for day in ["Mon", "Wed", "Fri"] {
        assert!(svg.contains(day), "missing tick label {day}");
    }
    assert!(svg.contains("Values"));
}

#[test]
fn pie_svg_shows_percentages() {
    let series: DataSeries = [("a", 1.0), ("b", 3.0)].into_iter().collect();
    let chart = Chart::Pie(PieChart {
        title: "Split".into(),
        series,
        explode: vec![0.0, 0.0],
        colors: vec![NamedColor::Red, NamedColor::Blue],
        hatch: Hatch::None,
        shadow: false,
    });
    let (_dir, path) = write_and_check(&chart, ImageFormat::Svg);
    let svg = fs::read_to_string(path).unwrap();
    assert!(svg.contains("25.0%"));
    assert!(svg.contains("75.0%"));
}
