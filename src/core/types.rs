use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Chart box in pixels.
///
/// `width` tracks the observed container width and may transiently be zero
/// or negative during layout thrashing; geometry clamps usable spans instead
/// of rejecting it. `height` is caller-supplied and fixed per chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.height > 0.0
    }
}

/// Space reserved around the plot area for ticks, labels and legends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(20.0, 20.0, 30.0, 50.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// One projected sample, owned by the render pass that created it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl PathPoint {
    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One named numeric series plotted against the shared label axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Input of one chart call: shared labels plus the series drawn against them.
///
/// Supplied fresh on every render; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    #[must_use]
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// `true` when there is nothing to plot: no datasets, or the first
    /// dataset has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets
            .first()
            .is_none_or(|dataset| dataset.data.is_empty())
    }

    #[must_use]
    pub fn has_length_mismatch(&self) -> bool {
        self.datasets
            .iter()
            .any(|dataset| dataset.data.len() != self.labels.len())
    }

    /// Returns the data with every series resized to `labels.len()`.
    ///
    /// Missing samples read as `0.0` and surplus samples are dropped. Borrows
    /// when the input is already consistent.
    #[must_use]
    pub fn aligned_to_labels(&self) -> Cow<'_, ChartData> {
        if !self.has_length_mismatch() {
            return Cow::Borrowed(self);
        }

        let count = self.labels.len();
        let datasets = self
            .datasets
            .iter()
            .map(|dataset| {
                let mut data = dataset.data.clone();
                data.resize(count, 0.0);
                Dataset {
                    label: dataset.label.clone(),
                    data,
                    color: dataset.color.clone(),
                }
            })
            .collect();
        Cow::Owned(ChartData {
            labels: self.labels.clone(),
            datasets,
        })
    }
}
