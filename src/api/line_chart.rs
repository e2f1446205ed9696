use crate::core::{ChartData, format_compact};
use crate::interaction::HoverTarget;
use crate::layout::{
    CartesianDecorations, LEGEND_ROW_HEIGHT_PX, LineLayout, cartesian_padding, layout_legend_row,
    layout_line,
};
use crate::render::{
    CirclePrimitive, Color, LayerKind, LinePrimitive, LineStrokeStyle, Paint, PathPrimitive,
    RenderFrame, Stroke, TextHAlign, TextPrimitive,
};

use super::overlay::{
    draw_axis_titles, draw_background, draw_grid, draw_legend, draw_tooltip, draw_x_labels,
    series_opacity,
};
use super::recompute::{HitMap, LayoutInputs, RenderedChart, series_colors};

const GRADIENT_TOP_ALPHA: f64 = 0.3;
const HOVER_DOT_RADIUS_PX: f64 = 5.0;
const LONE_POINT_RADIUS_PX: f64 = 3.0;
const LAST_VALUE_GAP_PX: f64 = 6.0;

pub(super) fn build(inputs: &LayoutInputs<'_>, data: &ChartData) -> RenderedChart {
    let options = inputs.options;
    let style = &options.style;
    let show_legend = data.datasets.len() > 1;
    let padding = cartesian_padding(CartesianDecorations {
        x_axis_title: options.x_axis_title().is_some(),
        y_axis_title: options.y_axis_title().is_some(),
        legend: show_legend,
        end_labels: options.show_last_value,
    });
    let layout = layout_line(data, inputs.viewport, padding);
    let colors = series_colors(data);
    let reveal = inputs.reveal();

    let mut frame = RenderFrame::new(inputs.viewport);
    draw_background(&mut frame, style);
    draw_grid(&mut frame, &layout.frame, style, options.locale);
    draw_x_labels(
        &mut frame,
        &data.labels,
        &layout.label_xs,
        layout.frame.plot,
        style,
    );
    draw_axis_titles(&mut frame, options, layout.frame.plot, style);

    for series in &layout.series {
        let color = colors[series.dataset_index];
        let opacity = series_opacity(series.dataset_index, inputs.hovered_dataset_index) * reveal;

        if series.points.len() >= 2 {
            if options.show_gradient {
                frame.push_path(
                    LayerKind::Series,
                    PathPrimitive::filled(
                        series.area_path.clone(),
                        Paint::VerticalGradient {
                            top: color.with_alpha(GRADIENT_TOP_ALPHA),
                            bottom: color.with_alpha(0.0),
                        },
                    )
                    .with_opacity(opacity),
                );
            }
            frame.push_path(
                LayerKind::Series,
                PathPrimitive::stroked(
                    series.line_path.clone(),
                    Stroke::new(color, style.series_line_width),
                )
                .with_opacity(opacity),
            );
        } else if let Some(point) = series.last_point() {
            frame.push_circle(
                LayerKind::Series,
                CirclePrimitive::new(
                    point.x,
                    point.y,
                    LONE_POINT_RADIUS_PX,
                    color.with_alpha(color.alpha * opacity),
                ),
            );
        }

        if options.show_last_value && reveal >= 1.0 {
            if let Some(last) = series.last_point() {
                frame.push_text(
                    LayerKind::Labels,
                    TextPrimitive::new(
                        format_compact(last.value, options.locale),
                        last.x + LAST_VALUE_GAP_PX,
                        last.y + style.axis_font_size_px / 3.0,
                        style.axis_font_size_px,
                        color.with_alpha(color.alpha * opacity),
                        TextHAlign::Left,
                    )
                    .bold(),
                );
            }
        }
    }

    draw_hover_marker(&mut frame, inputs, &layout, &colors);

    let legend = if show_legend {
        let names: Vec<&str> = data.datasets.iter().map(|d| d.label.as_str()).collect();
        let entries = layout_legend_row(
            &names,
            inputs.viewport.width / 2.0,
            inputs.viewport.height - LEGEND_ROW_HEIGHT_PX / 2.0,
        );
        let texts: Vec<String> = data.datasets.iter().map(|d| d.label.clone()).collect();
        draw_legend(
            &mut frame,
            &entries,
            &texts,
            &colors,
            inputs.hovered_dataset_index,
            style,
        );
        entries
    } else {
        Vec::new()
    };

    if options.show_tooltip {
        if let Some(tooltip) = inputs.hover.tooltip() {
            draw_tooltip(&mut frame, tooltip, options.locale, style);
        }
    }

    RenderedChart {
        frame,
        hit_map: HitMap::Line {
            series: layout.series,
            legend,
        },
    }
}

/// Dashed vertical guide plus an emphasized dot at the hovered sample.
fn draw_hover_marker(
    frame: &mut RenderFrame,
    inputs: &LayoutInputs<'_>,
    layout: &LineLayout,
    colors: &[Color],
) {
    let Some(HoverTarget::LinePoint {
        dataset_index,
        index,
    }) = inputs.hover.target()
    else {
        return;
    };
    let Some(point) = layout
        .series
        .get(dataset_index)
        .and_then(|series| series.points.get(index))
    else {
        return;
    };
    let style = &inputs.options.style;
    let plot = layout.frame.plot;

    frame.push_line(
        LayerKind::Grid,
        LinePrimitive::new(
            point.x,
            plot.y,
            point.x,
            plot.bottom(),
            style.grid_line_width,
            style.axis_label_color,
        )
        .with_stroke_style(LineStrokeStyle::Dashed),
    );
    frame.push_circle(
        LayerKind::Series,
        CirclePrimitive::new(
            point.x,
            point.y,
            HOVER_DOT_RADIUS_PX,
            colors[dataset_index],
        )
        .with_stroke(Stroke::new(style.background_color, 2.0)),
    );
}
