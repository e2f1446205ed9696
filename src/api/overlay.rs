use crate::core::{
    Bounds, NumberLocale, Viewport, format_compact, format_number, format_percentage,
};
use crate::interaction::{TooltipState, Trend};
use crate::layout::{
    AXIS_TITLE_SPACE_PX, CartesianFrame, LEGEND_FONT_PX, LegendEntryLayout, estimate_text_width,
    visible_label_indices,
};
use crate::render::{
    CirclePrimitive, Color, FrameState, LayerKind, LinePrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::{ChartOptions, DIMMED_OPACITY, RenderStyle};

pub const PLACEHOLDER_TEXT: &str = "No data available";

const TICK_LABEL_GAP_PX: f64 = 8.0;
const X_LABEL_OFFSET_PX: f64 = 16.0;
const TOOLTIP_OFFSET_PX: f64 = 12.0;
const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_LINE_HEIGHT_PX: f64 = 16.0;
const TOOLTIP_SWATCH_RADIUS_PX: f64 = 4.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 6.0;

/// Frame for the "no data" state: background plus one centered message.
#[must_use]
pub fn placeholder_frame(viewport: Viewport, style: &RenderStyle) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    frame.state = FrameState::Placeholder;
    draw_background(&mut frame, style);
    frame.push_text(
        LayerKind::Labels,
        TextPrimitive::new(
            PLACEHOLDER_TEXT,
            viewport.width.max(0.0) / 2.0,
            viewport.height / 2.0,
            style.axis_font_size_px + 2.0,
            style.axis_label_color,
            TextHAlign::Center,
        ),
    );
    frame
}

pub fn draw_background(frame: &mut RenderFrame, style: &RenderStyle) {
    let viewport = frame.viewport;
    frame.push_rect(
        LayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            viewport.width.max(0.0),
            viewport.height,
            style.background_color,
        ),
    );
}

/// Horizontal grid lines with compact tick labels left of the plot.
pub fn draw_grid(
    frame: &mut RenderFrame,
    cartesian: &CartesianFrame,
    style: &RenderStyle,
    locale: NumberLocale,
) {
    let plot = cartesian.plot;
    for tick in cartesian.ticks.iter() {
        frame.push_line(
            LayerKind::Grid,
            LinePrimitive::new(
                plot.x,
                tick.pixel,
                plot.right(),
                tick.pixel,
                style.grid_line_width,
                style.grid_line_color,
            ),
        );
        frame.push_text(
            LayerKind::Axis,
            TextPrimitive::new(
                format_compact(tick.value, locale),
                plot.x - TICK_LABEL_GAP_PX,
                tick.pixel + style.axis_font_size_px / 3.0,
                style.axis_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ),
        );
    }
}

/// Category labels under the plot, thinned so neighbours do not collide.
pub fn draw_x_labels(
    frame: &mut RenderFrame,
    labels: &[String],
    label_xs: &[f64],
    plot: Bounds,
    style: &RenderStyle,
) {
    let y = plot.bottom() + X_LABEL_OFFSET_PX;
    for index in visible_label_indices(labels.len().min(label_xs.len()), plot.width) {
        let text = labels[index].as_str();
        if text.is_empty() {
            continue;
        }
        frame.push_text(
            LayerKind::Axis,
            TextPrimitive::new(
                text,
                label_xs[index],
                y,
                style.axis_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ),
        );
    }
}

pub fn draw_axis_titles(
    frame: &mut RenderFrame,
    options: &ChartOptions,
    plot: Bounds,
    style: &RenderStyle,
) {
    if let Some(title) = options.x_axis_title() {
        frame.push_text(
            LayerKind::Axis,
            TextPrimitive::new(
                title,
                plot.x + plot.width / 2.0,
                plot.bottom() + X_LABEL_OFFSET_PX + AXIS_TITLE_SPACE_PX,
                style.axis_font_size_px,
                style.title_color,
                TextHAlign::Center,
            )
            .bold(),
        );
    }
    if let Some(title) = options.y_axis_title() {
        frame.push_text(
            LayerKind::Axis,
            TextPrimitive::new(
                title,
                AXIS_TITLE_SPACE_PX / 2.0 + style.axis_font_size_px / 3.0,
                plot.y + plot.height / 2.0,
                style.axis_font_size_px,
                style.title_color,
                TextHAlign::Center,
            )
            .bold()
            .with_rotation(-90.0),
        );
    }
}

/// Opacity of series `index` while legend entry `highlighted` is hovered.
#[must_use]
pub fn series_opacity(index: usize, highlighted: Option<usize>) -> f64 {
    match highlighted {
        Some(active) if active != index => DIMMED_OPACITY,
        _ => 1.0,
    }
}

/// Swatch plus text for every entry; entries other than the highlighted one
/// are dimmed.
pub fn draw_legend(
    frame: &mut RenderFrame,
    entries: &[LegendEntryLayout],
    texts: &[String],
    colors: &[Color],
    highlighted: Option<usize>,
    style: &RenderStyle,
) {
    for entry in entries {
        let opacity = series_opacity(entry.index, highlighted);
        let color = colors
            .get(entry.index)
            .copied()
            .unwrap_or(style.axis_label_color);
        frame.push_rect(
            LayerKind::Legend,
            RectPrimitive::new(
                entry.swatch.x,
                entry.swatch.y,
                entry.swatch.width,
                entry.swatch.height,
                color,
            )
            .with_corner_radius(2.0)
            .with_opacity(opacity),
        );
        let Some(text) = texts.get(entry.index).filter(|text| !text.is_empty()) else {
            continue;
        };
        let text_color = style.title_color;
        frame.push_text(
            LayerKind::Legend,
            TextPrimitive::new(
                text.as_str(),
                entry.text_anchor.x,
                entry.text_anchor.y,
                LEGEND_FONT_PX,
                text_color.with_alpha(text_color.alpha * opacity),
                TextHAlign::Left,
            ),
        );
    }
}

/// Floating tooltip box next to the hovered primitive.
///
/// The box flips to the left of the anchor when it would leave the right
/// edge, and is clamped so it never starts above or left of the chart.
pub fn draw_tooltip(
    frame: &mut RenderFrame,
    tooltip: &TooltipState,
    locale: NumberLocale,
    style: &RenderStyle,
) -> Bounds {
    let font = style.tooltip_font_size_px;
    let value_line = format!(
        "{}: {}",
        tooltip.dataset_label,
        format_number(tooltip.value, locale)
    );
    let change = tooltip.percent_change().map(|change| {
        let color = match change.trend {
            Trend::Up => style.trend_up_color,
            Trend::Down => style.trend_down_color,
        };
        (
            format!(
                "{} {}",
                change.trend.arrow(),
                format_percentage(change.magnitude, locale)
            ),
            color,
        )
    });

    let swatch_space = TOOLTIP_SWATCH_RADIUS_PX * 2.0 + 6.0;
    let mut content_width = estimate_text_width(&tooltip.label, font)
        .max(swatch_space + estimate_text_width(&value_line, font));
    if let Some((text, _)) = &change {
        content_width = content_width.max(estimate_text_width(text, font));
    }
    let line_count = if change.is_some() { 3.0 } else { 2.0 };
    let width = content_width + TOOLTIP_PADDING_PX * 2.0;
    let height = line_count * TOOLTIP_LINE_HEIGHT_PX + TOOLTIP_PADDING_PX * 2.0;

    let mut x = tooltip.pixel_x + TOOLTIP_OFFSET_PX;
    if x + width > frame.viewport.width {
        x = tooltip.pixel_x - TOOLTIP_OFFSET_PX - width;
    }
    let x = x.max(0.0);
    let y = (tooltip.pixel_y - height - TOOLTIP_OFFSET_PX).max(0.0);

    frame.push_rect(
        LayerKind::Tooltip,
        RectPrimitive::new(x, y, width, height, style.tooltip_background_color)
            .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
    );

    let text_x = x + TOOLTIP_PADDING_PX;
    let baseline = |line: f64| y + TOOLTIP_PADDING_PX + TOOLTIP_LINE_HEIGHT_PX * line - 4.0;
    if !tooltip.label.is_empty() {
        frame.push_text(
            LayerKind::Tooltip,
            TextPrimitive::new(
                tooltip.label.as_str(),
                text_x,
                baseline(1.0),
                font,
                style.tooltip_text_color,
                TextHAlign::Left,
            )
            .bold(),
        );
    }
    frame.push_circle(
        LayerKind::Tooltip,
        CirclePrimitive::new(
            text_x + TOOLTIP_SWATCH_RADIUS_PX,
            baseline(2.0) - font / 3.0,
            TOOLTIP_SWATCH_RADIUS_PX,
            tooltip.color,
        ),
    );
    frame.push_text(
        LayerKind::Tooltip,
        TextPrimitive::new(
            value_line,
            text_x + swatch_space,
            baseline(2.0),
            font,
            style.tooltip_text_color,
            TextHAlign::Left,
        ),
    );
    if let Some((text, color)) = change {
        frame.push_text(
            LayerKind::Tooltip,
            TextPrimitive::new(text, text_x, baseline(3.0), font, color, TextHAlign::Left),
        );
    }

    Bounds::new(x, y, width, height)
}
