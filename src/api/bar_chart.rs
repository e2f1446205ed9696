use crate::core::ChartData;
use crate::interaction::HoverTarget;
use crate::layout::{
    BarLayout, BarMode, BarSlot, CartesianDecorations, LEGEND_ROW_HEIGHT_PX, cartesian_padding,
    layout_bars, layout_legend_row,
};
use crate::render::{LayerKind, RectPrimitive, RenderFrame};

use super::overlay::{
    draw_axis_titles, draw_background, draw_grid, draw_legend, draw_tooltip, draw_x_labels,
    series_opacity,
};
use super::recompute::{HitMap, LayoutInputs, RenderedChart, series_colors};

const HOVER_BAND_ALPHA: f64 = 0.5;

pub(super) fn build(inputs: &LayoutInputs<'_>, data: &ChartData) -> RenderedChart {
    let options = inputs.options;
    let style = &options.style;
    let show_legend = data.datasets.len() > 1;
    let padding = cartesian_padding(CartesianDecorations {
        x_axis_title: options.x_axis_title().is_some(),
        y_axis_title: options.y_axis_title().is_some(),
        legend: show_legend,
        end_labels: false,
    });
    let layout = layout_bars(data, inputs.viewport, padding, options.bar_mode());
    let colors = series_colors(data);
    let reveal = inputs.reveal();

    let mut frame = RenderFrame::new(inputs.viewport);
    draw_background(&mut frame, style);
    draw_grid(&mut frame, &layout.frame, style, options.locale);
    draw_x_labels(
        &mut frame,
        &data.labels,
        &layout.group_centers,
        layout.frame.plot,
        style,
    );
    draw_axis_titles(&mut frame, options, layout.frame.plot, style);

    if let Some(HoverTarget::Bar { group_index, .. }) = inputs.hover.target() {
        let plot = layout.frame.plot;
        frame.push_rect(
            LayerKind::Grid,
            RectPrimitive::new(
                plot.x + layout.cell_width * group_index as f64,
                plot.y,
                layout.cell_width,
                plot.height,
                style.grid_line_color,
            )
            .with_opacity(HOVER_BAND_ALPHA),
        );
    }

    let baseline_y = layout.frame.baseline_y();
    for slot in layout.slots.iter().filter(|slot| slot.height > 0.0) {
        // Reveal grows every rectangle out of the zero line.
        let top = baseline_y + (slot.y - baseline_y) * reveal;
        let bottom = baseline_y + (slot.y + slot.height - baseline_y) * reveal;
        let corner_radius = if is_column_top(&layout, slot) {
            style.bar_corner_radius_px.min(slot.width / 2.0)
        } else {
            0.0
        };
        frame.push_rect(
            LayerKind::Series,
            RectPrimitive::new(
                slot.x,
                top.min(bottom),
                slot.width,
                (bottom - top).abs(),
                colors[slot.dataset_index],
            )
            .with_corner_radius(corner_radius)
            .with_opacity(series_opacity(
                slot.dataset_index,
                inputs.hovered_dataset_index,
            )),
        );
    }

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
        hit_map: HitMap::Bar {
            slots: layout.slots,
            legend,
        },
    }
}

/// Grouped bars are all column tops; a stacked segment is the top when no
/// later dataset adds height to its column.
fn is_column_top(layout: &BarLayout, slot: &BarSlot) -> bool {
    match layout.mode {
        BarMode::Grouped => true,
        BarMode::Stacked => !layout.slots.iter().any(|other| {
            other.group_index == slot.group_index
                && other.dataset_index > slot.dataset_index
                && other.height > 0.0
        }),
    }
}
