use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point};

pub const LEGEND_FONT_PX: f64 = 12.0;
pub const LEGEND_SWATCH_PX: f64 = 10.0;
pub const LEGEND_SWATCH_GAP_PX: f64 = 6.0;
pub const LEGEND_ENTRY_GAP_PX: f64 = 16.0;
pub const LEGEND_LINE_HEIGHT_PX: f64 = 22.0;

/// Placement of one legend entry; `bounds` doubles as its hover region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendEntryLayout {
    pub index: usize,
    pub swatch: Bounds,
    pub text_anchor: Point,
    pub bounds: Bounds,
}

/// Rough advance width for proportional UI fonts.
#[must_use]
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}

/// Single row centered on `center_x`, vertically centered on `y`.
#[must_use]
pub fn layout_legend_row(labels: &[&str], center_x: f64, y: f64) -> Vec<LegendEntryLayout> {
    let widths: Vec<f64> = labels.iter().copied().map(entry_width).collect();
    let total = widths.iter().sum::<f64>()
        + LEGEND_ENTRY_GAP_PX * labels.len().saturating_sub(1) as f64;

    let mut x = (center_x - total / 2.0).max(0.0);
    widths
        .iter()
        .enumerate()
        .map(|(index, &width)| {
            let entry = entry_at(index, x, y, width);
            x += width + LEGEND_ENTRY_GAP_PX;
            entry
        })
        .collect()
}

/// Entries stacked downward from `top`, left-aligned at `x`.
#[must_use]
pub fn layout_legend_column(labels: &[&str], x: f64, top: f64) -> Vec<LegendEntryLayout> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let center_y = top + LEGEND_LINE_HEIGHT_PX * (index as f64 + 0.5);
            entry_at(index, x, center_y, entry_width(label))
        })
        .collect()
}

fn entry_width(label: &str) -> f64 {
    LEGEND_SWATCH_PX + LEGEND_SWATCH_GAP_PX + estimate_text_width(label, LEGEND_FONT_PX)
}

fn entry_at(index: usize, x: f64, center_y: f64, width: f64) -> LegendEntryLayout {
    LegendEntryLayout {
        index,
        swatch: Bounds::new(
            x,
            center_y - LEGEND_SWATCH_PX / 2.0,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
        ),
        text_anchor: Point::new(
            x + LEGEND_SWATCH_PX + LEGEND_SWATCH_GAP_PX,
            center_y + LEGEND_FONT_PX / 3.0,
        ),
        bounds: Bounds::new(
            x,
            center_y - LEGEND_LINE_HEIGHT_PX / 2.0,
            width,
            LEGEND_LINE_HEIGHT_PX,
        ),
    }
}
