//! Quarterly sales report: four product categories over three quarters.

use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::config::RenderConfig;
use crate::models::DataSeries;
use crate::prompt::{Bounds, Console};
use crate::studio::show;
use crate::style::{Hatch, NamedColor};
use crate::viz::util::format_amount;
use crate::viz::{Chart, GroupedBarChart, PieChart};

const RULE: &str = "==================================================";

pub const COMPANY: &str = "VisProg Inc.";
pub const CURRENCY: &str = "₱";

pub const CATEGORIES: [&str; 4] = [
    "Laptops and Computers",
    "Smartphones and Tablets",
    "Gaming Products",
    "Computer Accessories",
];

/// (tick label, prompt label)
pub const QUARTERS: [(&str, &str); 3] = [
    ("Q1", "Q1 (Jan-Mar)"),
    ("Q2", "Q2 (Apr-Jun)"),
    ("Q3", "Q3 (Jul-Sep)"),
];

const PIE_COLORS: [NamedColor; 4] = [
    NamedColor::Red,
    NamedColor::Blue,
    NamedColor::Green,
    NamedColor::Orange,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub name: String,
    pub quarterly: Vec<f64>,
}

impl CategorySales {
    pub fn total(&self) -> f64 {
        self.quarterly.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub categories: Vec<CategoryTotal>,
    pub grand_total: f64,
}

/// Ask for every category's quarterly figures.
pub fn read_sales<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Vec<CategorySales>> {
    console.say(format_args!("{COMPANY} - Sales Data Entry"))?;
    console.say(RULE)?;
    let mut out = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        console.say(format_args!("\n{name}:"))?;
        let mut quarterly = Vec::with_capacity(QUARTERS.len());
        for (_, long) in QUARTERS {
            let v: f64 = console.read_number(
                &format!("Enter sales for {long}:{CURRENCY} "),
                None,
                Bounds::none(),
            )?;
            quarterly.push(v);
        }
        out.push(CategorySales {
            name: name.to_string(),
            quarterly,
        });
    }
    Ok(out)
}

pub fn summarize(sales: &[CategorySales]) -> SalesSummary {
    let categories: Vec<CategoryTotal> = sales
        .iter()
        .map(|c| CategoryTotal {
            name: c.name.clone(),
            total: c.total(),
        })
        .collect();
    let grand_total = categories.iter().map(|c| c.total).sum();
    SalesSummary {
        categories,
        grand_total,
    }
}

/// Text block printed after data entry.
pub fn summary_lines(summary: &SalesSummary, locale: &str) -> Vec<String> {
    let mut lines = vec![
        format!("\n{RULE}"),
        "SALES SUMMARY".to_string(),
        RULE.to_string(),
    ];
    for c in &summary.categories {
        lines.push(format!(
            "{}: {CURRENCY}{}",
            c.name,
            format_amount(c.total, locale)
        ));
    }
    lines.push(format!(
        "Total: {CURRENCY}{}",
        format_amount(summary.grand_total, locale)
    ));
    lines.push(RULE.to_string());
    lines
}

pub fn quarterly_chart(sales: &[CategorySales]) -> Chart {
    Chart::GroupedBar(GroupedBarChart {
        title: format!("{COMPANY} - Quarterly Sales Comparison"),
        categories: QUARTERS.iter().map(|(short, _)| short.to_string()).collect(),
        groups: sales
            .iter()
            .map(|c| (c.name.clone(), c.quarterly.clone()))
            .collect(),
        bar_width: 0.2,
        x_desc: "Quarter".into(),
        y_desc: format!("Sales ({CURRENCY})"),
    })
}

pub fn distribution_chart(summary: &SalesSummary) -> Chart {
    let series: DataSeries = summary
        .categories
        .iter()
        .map(|c| (c.name.clone(), c.total))
        .collect();
    let n = series.len();
    Chart::Pie(PieChart {
        title: format!("{COMPANY} - Product Category Distribution"),
        series,
        explode: vec![0.0; n],
        colors: PIE_COLORS.iter().copied().cycle().take(n).collect(),
        hatch: Hatch::None,
        shadow: false,
    })
}

/// Data entry, summary, then both charts.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &mut RenderConfig,
    json: bool,
) -> Result<SalesSummary> {
    let sales = read_sales(console)?;
    let summary = summarize(&sales);

    if json {
        console.say(serde_json::to_string_pretty(&summary)?)?;
    } else {
        for line in summary_lines(&summary, &config.locale) {
            console.say(line)?;
        }
    }

    show(console, &quarterly_chart(&sales), config)?;
    show(console, &distribution_chart(&summary), config)?;

    console.say("\nVisualization complete!")?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CategorySales> {
        CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, name)| CategorySales {
                name: name.to_string(),
                quarterly: vec![1000.0 * (i as f64 + 1.0), 500.0, 250.5],
            })
            .collect()
    }

    #[test]
    fn totals_add_quarters() {
        let s = summarize(&sample());
        assert_eq!(s.categories.len(), 4);
        assert_eq!(s.categories[0].total, 1750.5);
        assert_eq!(s.grand_total, 10000.0 + 4.0 * 750.5);
    }

    #[test]
    fn summary_uses_grouped_amounts() {
        let lines = summary_lines(&summarize(&sample()), "en");
        assert!(lines.contains(&"Laptops and Computers: ₱1,750.50".to_string()));
        assert!(lines.contains(&"Total: ₱13,002.00".to_string()));
    }

    #[test]
    fn charts_carry_every_category() {
        let sales = sample();
        let Chart::GroupedBar(g) = quarterly_chart(&sales) else {
            panic!("expected grouped bars");
        };
        assert_eq!(g.categories, vec!["Q1", "Q2", "Q3"]);
        assert_eq!(g.groups.len(), 4);
        let Chart::Pie(p) = distribution_chart(&summarize(&sales)) else {
            panic!("expected a pie");
        };
        assert_eq!(p.colors, PIE_COLORS.to_vec());
        assert_eq!(p.explode, vec![0.0; 4]);
    }
}
