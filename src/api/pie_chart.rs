use crate::core::{
    ChartData, PathData, Point, arc_slice_path, format_compact, format_percentage, polar_point,
};
use crate::interaction::HoverTarget;
use crate::layout::{
    LEGEND_LINE_HEIGHT_PX, LeaderSide, PieLayout, Slice, layout_legend_column, layout_pie,
    pie::START_ANGLE_DEG,
};
use crate::render::{
    Color, LayerKind, LinePrimitive, Paint, PathPrimitive, RenderFrame, Stroke, TextHAlign,
    TextPrimitive, Transform, palette_color,
};

use super::overlay::{draw_background, draw_legend, draw_tooltip, series_opacity};
use super::recompute::{HitMap, LayoutInputs, RenderedChart};

/// Share of the width given to the legend column, capped at `LEGEND_MAX_WIDTH_PX`.
const LEGEND_WIDTH_RATIO: f64 = 0.35;
const LEGEND_MAX_WIDTH_PX: f64 = 180.0;
const LEGEND_MARGIN_PX: f64 = 8.0;
const HOVER_OFFSET_PX: f64 = 5.0;
const HOVER_SCALE: f64 = 1.05;
const SLICE_SEPARATOR_PX: f64 = 2.0;
const CENTER_TOTAL_FONT_PX: f64 = 20.0;

pub(super) fn build(inputs: &LayoutInputs<'_>, data: &ChartData) -> RenderedChart {
    let options = inputs.options;
    let style = &options.style;
    let viewport = inputs.viewport;
    let reveal = inputs.reveal();
    let values = data
        .datasets
        .first()
        .map(|dataset| dataset.data.as_slice())
        .unwrap_or_default();

    let width = viewport.width.max(0.0);
    let legend_width = (width * LEGEND_WIDTH_RATIO).min(LEGEND_MAX_WIDTH_PX);
    let pie_width = width - legend_width;
    let size = pie_width.min(viewport.height);
    let center = Point::new(pie_width / 2.0, viewport.height / 2.0);
    let layout = layout_pie(values, size, center, options.donut_width);
    let colors: Vec<Color> = (0..layout.slices.len()).map(palette_color).collect();
    let hovered_slice = match inputs.hover.target() {
        Some(HoverTarget::Slice { index }) => Some(index),
        _ => None,
    };

    let mut frame = RenderFrame::new(viewport);
    draw_background(&mut frame, style);

    for slice in layout.slices.iter().filter(|slice| slice.sweep() > 0.0) {
        let Some(path) = revealed_path(&layout, slice, reveal) else {
            continue;
        };
        let mut primitive = PathPrimitive::filled(path, Paint::Solid(colors[slice.index]))
            .with_stroke(Stroke::new(style.background_color, SLICE_SEPARATOR_PX))
            .with_opacity(series_opacity(slice.index, inputs.hovered_dataset_index));
        if hovered_slice == Some(slice.index) {
            primitive = primitive.with_transform(hover_transform(&layout, slice));
        }
        frame.push_path(LayerKind::Series, primitive);
    }

    if reveal >= 1.0 {
        draw_leader_lines(&mut frame, inputs, &layout, &colors);
    }
    draw_center_summary(&mut frame, inputs, data, &layout);

    let texts: Vec<String> = layout
        .slices
        .iter()
        .map(|slice| {
            let label = data.labels.get(slice.index).map_or("", String::as_str);
            format!(
                "{label} ({})",
                format_percentage(slice.percentage, options.locale)
            )
        })
        .collect();
    let names: Vec<&str> = texts.iter().map(String::as_str).collect();
    let legend_top =
        ((viewport.height - LEGEND_LINE_HEIGHT_PX * names.len() as f64) / 2.0).max(0.0);
    let legend = layout_legend_column(&names, pie_width + LEGEND_MARGIN_PX, legend_top);
    draw_legend(
        &mut frame,
        &legend,
        &texts,
        &colors,
        inputs.hovered_dataset_index,
        style,
    );

    if options.show_tooltip {
        if let Some(tooltip) = inputs.hover.tooltip() {
            draw_tooltip(&mut frame, tooltip, options.locale, style);
        }
    }

    RenderedChart {
        frame,
        hit_map: HitMap::Pie { layout, legend },
    }
}

/// Slice geometry at reveal progress `reveal`: the whole ring sweeps open
/// clockwise from 12 o'clock.
fn revealed_path(layout: &PieLayout, slice: &Slice, reveal: f64) -> Option<PathData> {
    if reveal >= 1.0 {
        return Some(slice.path_data.clone());
    }
    let start = START_ANGLE_DEG + (slice.start_angle - START_ANGLE_DEG) * reveal;
    let end = START_ANGLE_DEG + (slice.end_angle - START_ANGLE_DEG) * reveal;
    if end - start <= 0.0 {
        return None;
    }
    Some(arc_slice_path(
        layout.center.x,
        layout.center.y,
        layout.outer_radius,
        layout.inner_radius,
        start,
        end,
    ))
}

/// Pushes the hovered wedge outward along its mid-angle and enlarges it
/// around the pie center. The slice geometry itself is left untouched.
fn hover_transform(layout: &PieLayout, slice: &Slice) -> Transform {
    let offset = polar_point(0.0, 0.0, HOVER_OFFSET_PX, slice.mid_angle());
    Transform {
        translate_x: offset.x,
        translate_y: offset.y,
        scale: HOVER_SCALE,
        origin_x: layout.center.x,
        origin_y: layout.center.y,
    }
}

fn draw_leader_lines(
    frame: &mut RenderFrame,
    inputs: &LayoutInputs<'_>,
    layout: &PieLayout,
    colors: &[Color],
) {
    let style = &inputs.options.style;
    for leader in &layout.leader_lines {
        let Some(slice) = layout.slice(leader.slice_index) else {
            continue;
        };
        let opacity = series_opacity(leader.slice_index, inputs.hovered_dataset_index);
        let color = colors[leader.slice_index];
        for (from, to) in [(leader.start, leader.bend), (leader.bend, leader.end)] {
            frame.push_line(
                LayerKind::Labels,
                LinePrimitive::new(from.x, from.y, to.x, to.y, 1.0, color).with_opacity(opacity),
            );
        }
        let h_align = match leader.side {
            LeaderSide::Right => TextHAlign::Left,
            LeaderSide::Left => TextHAlign::Right,
        };
        let text_color = style.title_color;
        frame.push_text(
            LayerKind::Labels,
            TextPrimitive::new(
                format_percentage(slice.percentage, inputs.options.locale),
                leader.label_anchor.x,
                leader.label_anchor.y + style.axis_font_size_px / 3.0,
                style.axis_font_size_px,
                text_color.with_alpha(text_color.alpha * opacity),
                h_align,
            ),
        );
    }
}

/// Compact total and dataset label inside the donut hole.
fn draw_center_summary(
    frame: &mut RenderFrame,
    inputs: &LayoutInputs<'_>,
    data: &ChartData,
    layout: &PieLayout,
) {
    if layout.inner_radius <= 0.0 {
        return;
    }
    let style = &inputs.options.style;
    frame.push_text(
        LayerKind::Labels,
        TextPrimitive::new(
            format_compact(layout.total, inputs.options.locale),
            layout.center.x,
            layout.center.y + CENTER_TOTAL_FONT_PX / 3.0,
            CENTER_TOTAL_FONT_PX,
            style.title_color,
            TextHAlign::Center,
        )
        .bold(),
    );
    if let Some(dataset) = data.datasets.first().filter(|d| !d.label.is_empty()) {
        frame.push_text(
            LayerKind::Labels,
            TextPrimitive::new(
                dataset.label.as_str(),
                layout.center.x,
                layout.center.y + CENTER_TOTAL_FONT_PX,
                style.axis_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ChartKind, ChartOptions, HitMap, LayoutInputs, recompute};
    use crate::core::{ChartData, Dataset, Viewport};
    use crate::interaction::{HoverState, HoverTarget, TooltipState};
    use crate::render::{Color, LayerKind};
    use approx::assert_relative_eq;

    fn traffic() -> ChartData {
        ChartData::new(
            vec!["direct".into(), "search".into(), "social".into()],
            vec![Dataset::new("visits", vec![1.0, 1.0, 2.0])],
        )
    }

    #[test]
    fn draws_slices_leaders_center_and_legend() {
        let data = traffic();
        let options = ChartOptions::default();
        let rendered = recompute(&LayoutInputs::new(
            ChartKind::Pie,
            &data,
            Viewport::new(420.0, 240.0),
            &options,
        ));
        assert_eq!(rendered.frame.layer(LayerKind::Series).paths.len(), 3);
        // Two segments per leader line, every slice is above 5%.
        assert_eq!(rendered.frame.layer(LayerKind::Labels).lines.len(), 6);

        let labels: Vec<&str> = rendered
            .frame
            .layer(LayerKind::Labels)
            .texts
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert!(labels.contains(&"50%"));
        assert!(labels.contains(&"4"));
        assert!(labels.contains(&"visits"));

        let legend: Vec<&str> = rendered
            .frame
            .layer(LayerKind::Legend)
            .texts
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(legend, vec!["direct (25%)", "search (25%)", "social (50%)"]);
        assert!(rendered.frame.validate().is_ok());
    }

    #[test]
    fn hovered_slice_is_transformed_not_recomputed() {
        let data = traffic();
        let options = ChartOptions::default();
        let viewport = Viewport::new(420.0, 240.0);
        let idle = recompute(&LayoutInputs::new(ChartKind::Pie, &data, viewport, &options));
        let HitMap::Pie { layout, .. } = &idle.hit_map else {
            panic!("expected pie hit map");
        };
        let anchor = layout.slices[2].label_anchor;

        let hover = HoverState::Hovering {
            target: HoverTarget::Slice { index: 2 },
            tooltip: TooltipState {
                pixel_x: anchor.x,
                pixel_y: anchor.y,
                label: "social".to_owned(),
                value: 2.0,
                dataset_label: "visits".to_owned(),
                color: Color::rgb(1.0, 0.0, 0.0),
                previous_value: None,
            },
        };
        let hovered = recompute(
            &LayoutInputs::new(ChartKind::Pie, &data, viewport, &options).with_hover(&hover),
        );
        let idle_paths = &idle.frame.layer(LayerKind::Series).paths;
        let paths = &hovered.frame.layer(LayerKind::Series).paths;
        assert_eq!(paths[2].path, idle_paths[2].path);
        let transform = paths[2].transform.expect("hover transform");
        assert_relative_eq!(transform.scale, 1.05);
        assert_relative_eq!(
            transform.translate_x.hypot(transform.translate_y),
            5.0,
            epsilon = 1e-9
        );
        assert!(paths[0].transform.is_none());
        assert_eq!(idle.hit_map, hovered.hit_map);
    }

    #[test]
    fn thin_slices_get_no_leader_line() {
        let data = ChartData::new(
            vec!["big".into(), "tiny".into()],
            vec![Dataset::new("share", vec![99.0, 1.0])],
        );
        let options = ChartOptions::default();
        let rendered = recompute(&LayoutInputs::new(
            ChartKind::Pie,
            &data,
            Viewport::new(420.0, 240.0),
            &options,
        ));
        assert_eq!(rendered.frame.layer(LayerKind::Labels).lines.len(), 2);
    }

    #[test]
    fn reveal_scales_every_sweep_and_hides_leaders() {
        let data = traffic();
        let options = ChartOptions::default();
        let viewport = Viewport::new(420.0, 240.0);
        let full = recompute(&LayoutInputs::new(ChartKind::Pie, &data, viewport, &options));
        let partial = recompute(
            &LayoutInputs::new(ChartKind::Pie, &data, viewport, &options)
                .with_reveal_progress(0.5),
        );
        assert!(partial.frame.layer(LayerKind::Labels).lines.is_empty());
        let full_paths = &full.frame.layer(LayerKind::Series).paths;
        let paths = &partial.frame.layer(LayerKind::Series).paths;
        assert_eq!(paths.len(), 3);
        assert_ne!(paths[2].path, full_paths[2].path);

        let nothing = recompute(
            &LayoutInputs::new(ChartKind::Pie, &data, viewport, &options)
                .with_reveal_progress(0.0),
        );
        assert!(nothing.frame.layer(LayerKind::Series).paths.is_empty());
    }
}
