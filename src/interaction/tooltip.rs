use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Payload of the single live tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub label: String,
    pub value: f64,
    pub dataset_label: String,
    pub color: Color,
    pub previous_value: Option<f64>,
}

impl TooltipState {
    #[must_use]
    pub fn percent_change(&self) -> Option<PercentChange> {
        percent_change(self.value, self.previous_value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
        }
    }
}

/// Unsigned change relative to the previous sample; the sign lives in `trend`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentChange {
    pub magnitude: f64,
    pub trend: Trend,
}

/// `|current - previous| / previous * 100`, undefined without a previous
/// sample or when it is zero. An unchanged value counts as `Up`.
#[must_use]
pub fn percent_change(current: f64, previous: Option<f64>) -> Option<PercentChange> {
    let previous = previous?;
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    Some(PercentChange {
        magnitude: ((current - previous).abs() / previous * 100.0).abs(),
        trend: if current >= previous {
            Trend::Up
        } else {
            Trend::Down
        },
    })
}
