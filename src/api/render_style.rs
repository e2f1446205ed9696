use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Opacity applied to series that do not match the highlighted legend entry.
pub const DIMMED_OPACITY: f64 = 0.35;

/// Colors and sizes shared by every chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_grid_line_color")]
    pub grid_line_color: Color,
    #[serde(default = "default_axis_label_color")]
    pub axis_label_color: Color,
    #[serde(default = "default_title_color")]
    pub title_color: Color,
    #[serde(default = "default_tooltip_background_color")]
    pub tooltip_background_color: Color,
    #[serde(default = "default_tooltip_text_color")]
    pub tooltip_text_color: Color,
    #[serde(default = "default_trend_up_color")]
    pub trend_up_color: Color,
    #[serde(default = "default_trend_down_color")]
    pub trend_down_color: Color,
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,
    #[serde(default = "default_series_line_width")]
    pub series_line_width: f64,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_tooltip_font_size_px")]
    pub tooltip_font_size_px: f64,
    #[serde(default = "default_bar_corner_radius_px")]
    pub bar_corner_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            grid_line_color: default_grid_line_color(),
            axis_label_color: default_axis_label_color(),
            title_color: default_title_color(),
            tooltip_background_color: default_tooltip_background_color(),
            tooltip_text_color: default_tooltip_text_color(),
            trend_up_color: default_trend_up_color(),
            trend_down_color: default_trend_down_color(),
            grid_line_width: default_grid_line_width(),
            series_line_width: default_series_line_width(),
            axis_font_size_px: default_axis_font_size_px(),
            tooltip_font_size_px: default_tooltip_font_size_px(),
            bar_corner_radius_px: default_bar_corner_radius_px(),
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.background_color,
            self.grid_line_color,
            self.axis_label_color,
            self.title_color,
            self.tooltip_background_color,
            self.tooltip_text_color,
            self.trend_up_color,
            self.trend_down_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("series_line_width", self.series_line_width),
            ("axis_font_size_px", self.axis_font_size_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidOptions(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.bar_corner_radius_px.is_finite() || self.bar_corner_radius_px < 0.0 {
            return Err(ChartError::InvalidOptions(
                "style `bar_corner_radius_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_background_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_grid_line_color() -> Color {
    Color::from_rgb8(229, 231, 235)
}

fn default_axis_label_color() -> Color {
    Color::from_rgb8(107, 114, 128)
}

fn default_title_color() -> Color {
    Color::from_rgb8(55, 65, 81)
}

fn default_tooltip_background_color() -> Color {
    Color::rgba(0.067, 0.094, 0.153, 0.92)
}

fn default_tooltip_text_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_trend_up_color() -> Color {
    Color::from_rgb8(16, 185, 129)
}

fn default_trend_down_color() -> Color {
    Color::from_rgb8(239, 68, 68)
}

fn default_grid_line_width() -> f64 {
    1.0
}

fn default_series_line_width() -> f64 {
    2.0
}

fn default_axis_font_size_px() -> f64 {
    11.0
}

fn default_tooltip_font_size_px() -> f64 {
    12.0
}

fn default_bar_corner_radius_px() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::RenderStyle;
    use crate::render::Color;

    #[test]
    fn default_style_is_valid() {
        assert!(RenderStyle::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_widths_and_colors() {
        let style = RenderStyle {
            grid_line_width: 0.0,
            ..RenderStyle::default()
        };
        assert!(style.validate().is_err());

        let style = RenderStyle {
            title_color: Color::rgba(2.0, 0.0, 0.0, 1.0),
            ..RenderStyle::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let style: RenderStyle = serde_json::from_str("{\"grid_line_width\": 2.0}").expect("json");
        assert_eq!(style.grid_line_width, 2.0);
        assert_eq!(style.series_line_width, RenderStyle::default().series_line_width);
    }
}
