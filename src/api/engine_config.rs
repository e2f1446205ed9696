use serde::{Deserialize, Serialize};

use crate::core::NumberLocale;
use crate::error::{ChartError, ChartResult};
use crate::layout::{BarMode, DEFAULT_DONUT_WIDTH_PX};

use super::RenderStyle;

/// Which of the three renderers draws the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// Per-chart display options.
///
/// Every field has a serde default so hosts can persist partial setups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Bar charts only.
    #[serde(default)]
    pub stacked: bool,
    #[serde(default = "default_true")]
    pub show_tooltip: bool,
    /// Bar tooltips: percent change against the previous label index.
    #[serde(default = "default_true")]
    pub show_comparison: bool,
    /// Line charts: gradient area under each curve.
    #[serde(default = "default_true")]
    pub show_gradient: bool,
    /// Line charts: inline label at each series end.
    #[serde(default = "default_true")]
    pub show_last_value: bool,
    #[serde(default = "default_donut_width")]
    pub donut_width: f64,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub y_axis_label: Option<String>,
    #[serde(default)]
    pub locale: NumberLocale,
    #[serde(default)]
    pub reveal_duration_ms: f64,
    #[serde(default)]
    pub style: RenderStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            stacked: false,
            show_tooltip: true,
            show_comparison: true,
            show_gradient: true,
            show_last_value: true,
            donut_width: default_donut_width(),
            x_axis_label: None,
            y_axis_label: None,
            locale: NumberLocale::default(),
            reveal_duration_ms: 0.0,
            style: RenderStyle::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, show_tooltip: bool) -> Self {
        self.show_tooltip = show_tooltip;
        self
    }

    #[must_use]
    pub fn with_comparison(mut self, show_comparison: bool) -> Self {
        self.show_comparison = show_comparison;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, show_gradient: bool) -> Self {
        self.show_gradient = show_gradient;
        self
    }

    #[must_use]
    pub fn with_last_value(mut self, show_last_value: bool) -> Self {
        self.show_last_value = show_last_value;
        self
    }

    #[must_use]
    pub fn with_donut_width(mut self, donut_width: f64) -> Self {
        self.donut_width = donut_width;
        self
    }

    #[must_use]
    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_label(mut self, label: impl Into<String>) -> Self {
        self.y_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_reveal_duration_ms(mut self, duration_ms: f64) -> Self {
        self.reveal_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn bar_mode(&self) -> BarMode {
        if self.stacked {
            BarMode::Stacked
        } else {
            BarMode::Grouped
        }
    }

    /// Axis titles with blank strings treated as absent.
    #[must_use]
    pub fn x_axis_title(&self) -> Option<&str> {
        non_blank(self.x_axis_label.as_deref())
    }

    #[must_use]
    pub fn y_axis_title(&self) -> Option<&str> {
        non_blank(self.y_axis_label.as_deref())
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.donut_width.is_finite() || self.donut_width < 0.0 {
            return Err(ChartError::InvalidOptions(
                "donut width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.reveal_duration_ms.is_finite() || self.reveal_duration_ms < 0.0 {
            return Err(ChartError::InvalidOptions(
                "reveal duration must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()?;
        Ok(self)
    }
}

/// Engine bootstrap configuration.
///
/// Serializable so host dashboards can store chart setups next to the
/// metric they plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub kind: ChartKind,
    /// Fixed chart height in pixels.
    pub height: f64,
    /// Container width before the first resize notification.
    #[serde(default)]
    pub initial_width: f64,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(kind: ChartKind, height: f64) -> Self {
        Self {
            kind,
            height,
            initial_width: 0.0,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_initial_width(mut self, width: f64) -> Self {
        self.initial_width = width;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.initial_width,
                height: self.height,
            });
        }
        let options = self.options.validate()?;
        Ok(Self { options, ..self })
    }
}

fn default_true() -> bool {
    true
}

fn default_donut_width() -> f64 {
    DEFAULT_DONUT_WIDTH_PX
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
