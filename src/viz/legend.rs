//! Legend panel drawn beside the plot for multi-series charts.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::truncate_to_width;

const FONT_PX: u32 = 14;
const LINE_H: i32 = FONT_PX as i32 + 8;
const PAD_X: i32 = 6;
const SWATCH: i32 = 6;

/// Single-column legend: one filled square swatch plus label per item.
///
/// With `text == false` (no font registered) only the swatches are drawn.
pub fn draw_legend_panel<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBAColor)],
    text: bool,
) -> Result<()> {
    legend_area
        .fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w_u32, h_u32) = legend_area.dim_in_pixel();
    let w = w_u32 as i32;

    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, FONT_PX)).pos(Pos::new(HPos::Left, VPos::Center));

    // Vertically center the block next to the plot.
    let block_h = items.len() as i32 * LINE_H;
    let mut y = ((h_u32 as i32 - block_h) / 2).max(PAD_X) + LINE_H / 2;
    let swatch_x = PAD_X + SWATCH;
    let text_x = swatch_x + SWATCH + 10;
    let max_text_w = (w - text_x - PAD_X).max(20) as u32;

    for (label, color) in items {
        legend_area
            .draw(&Rectangle::new(
                [(swatch_x - SWATCH, y - SWATCH), (swatch_x + SWATCH, y + SWATCH)],
                color.filled(),
            ))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        legend_area
            .draw(&Rectangle::new(
                [(swatch_x - SWATCH, y - SWATCH), (swatch_x + SWATCH, y + SWATCH)],
                BLACK.stroke_width(1),
            ))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        if text {
            let shown = truncate_to_width(label, FONT_PX, max_text_w);
            legend_area
                .draw(&Text::new(shown, (text_x, y), label_style.clone()))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        y += LINE_H;
    }

    Ok(())
}
