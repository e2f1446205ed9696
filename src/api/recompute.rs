use tracing::debug;

use crate::core::{ChartData, Viewport};
use crate::interaction::{
    HoverState, HoverTarget, TooltipState, bar_at, legend_entry_at, nearest_line_point, slice_at,
};
use crate::layout::{BarSlot, LegendEntryLayout, LineSeriesLayout, PieLayout};
use crate::render::{Color, RenderFrame, palette_color, resolve_dataset_color};

use super::overlay::placeholder_frame;
use super::{ChartKind, ChartOptions, bar_chart, line_chart, pie_chart};

static IDLE_HOVER: HoverState = HoverState::Idle;

/// Everything one draw pass depends on.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInputs<'a> {
    pub kind: ChartKind,
    pub data: &'a ChartData,
    pub viewport: Viewport,
    pub options: &'a ChartOptions,
    pub hover: &'a HoverState,
    pub hovered_dataset_index: Option<usize>,
    /// Reveal transition progress in `0..=1`.
    pub reveal_progress: f64,
}

impl<'a> LayoutInputs<'a> {
    /// Inputs for a fully revealed chart with no pointer interaction.
    #[must_use]
    pub fn new(
        kind: ChartKind,
        data: &'a ChartData,
        viewport: Viewport,
        options: &'a ChartOptions,
    ) -> Self {
        Self {
            kind,
            data,
            viewport,
            options,
            hover: &IDLE_HOVER,
            hovered_dataset_index: None,
            reveal_progress: 1.0,
        }
    }

    #[must_use]
    pub fn with_hover(mut self, hover: &'a HoverState) -> Self {
        self.hover = hover;
        self
    }

    #[must_use]
    pub fn with_legend_highlight(mut self, index: Option<usize>) -> Self {
        self.hovered_dataset_index = index;
        self
    }

    #[must_use]
    pub fn with_reveal_progress(mut self, progress: f64) -> Self {
        self.reveal_progress = progress;
        self
    }

    pub(super) fn reveal(&self) -> f64 {
        if self.reveal_progress.is_finite() {
            self.reveal_progress.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Hit regions of the last drawn frame, always at full reveal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HitMap {
    #[default]
    Empty,
    Line {
        series: Vec<LineSeriesLayout>,
        legend: Vec<LegendEntryLayout>,
    },
    Bar {
        slots: Vec<BarSlot>,
        legend: Vec<LegendEntryLayout>,
    },
    Pie {
        layout: PieLayout,
        legend: Vec<LegendEntryLayout>,
    },
}

impl HitMap {
    #[must_use]
    pub fn legend(&self) -> &[LegendEntryLayout] {
        match self {
            Self::Empty => &[],
            Self::Line { legend, .. } | Self::Bar { legend, .. } | Self::Pie { legend, .. } => {
                legend
            }
        }
    }

    #[must_use]
    pub fn legend_entry_at(&self, x: f64, y: f64) -> Option<usize> {
        legend_entry_at(self.legend(), x, y)
    }

    /// Resolves the primitive under `(x, y)` and the tooltip it would show.
    ///
    /// `data` must be the (label-aligned) data the map was built from.
    #[must_use]
    pub fn hover_at(
        &self,
        data: &ChartData,
        options: &ChartOptions,
        x: f64,
        y: f64,
    ) -> Option<(HoverTarget, TooltipState)> {
        match self {
            Self::Empty => None,
            Self::Line { series, .. } => {
                let hit = nearest_line_point(series, x)?;
                let dataset = data.datasets.get(hit.dataset_index)?;
                let tooltip = TooltipState {
                    pixel_x: hit.point.x,
                    pixel_y: hit.point.y,
                    label: label_at(data, hit.index),
                    value: hit.point.value,
                    dataset_label: dataset.label.clone(),
                    color: resolve_dataset_color(dataset.color.as_deref(), hit.dataset_index),
                    previous_value: None,
                };
                let target = HoverTarget::LinePoint {
                    dataset_index: hit.dataset_index,
                    index: hit.index,
                };
                Some((target, tooltip))
            }
            Self::Bar { slots, .. } => {
                let slot = bar_at(slots, x, y)?;
                let dataset = data.datasets.get(slot.dataset_index)?;
                let previous_value = if options.show_comparison {
                    slot.group_index
                        .checked_sub(1)
                        .and_then(|previous| dataset.data.get(previous).copied())
                } else {
                    None
                };
                let tooltip = TooltipState {
                    pixel_x: slot.center_x(),
                    pixel_y: slot.y,
                    label: label_at(data, slot.group_index),
                    value: slot.value,
                    dataset_label: dataset.label.clone(),
                    color: resolve_dataset_color(dataset.color.as_deref(), slot.dataset_index),
                    previous_value,
                };
                let target = HoverTarget::Bar {
                    dataset_index: slot.dataset_index,
                    group_index: slot.group_index,
                };
                Some((target, tooltip))
            }
            Self::Pie { layout, .. } => {
                let slice = slice_at(layout, x, y)?;
                let dataset = data.datasets.first()?;
                let tooltip = TooltipState {
                    pixel_x: slice.label_anchor.x,
                    pixel_y: slice.label_anchor.y,
                    label: label_at(data, slice.index),
                    value: slice.value,
                    dataset_label: dataset.label.clone(),
                    color: palette_color(slice.index),
                    previous_value: None,
                };
                Some((HoverTarget::Slice { index: slice.index }, tooltip))
            }
        }
    }
}

/// Output of one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub frame: RenderFrame,
    pub hit_map: HitMap,
}

/// Rebuilds the drawable tree from scratch.
///
/// Pure: the same inputs always yield the same frame. Empty input (no
/// datasets, no samples, no labels, or a pie without a positive total)
/// yields the placeholder frame and an empty hit map. Series whose length
/// disagrees with `labels` are resized to it.
#[must_use]
pub fn recompute(inputs: &LayoutInputs<'_>) -> RenderedChart {
    let data = inputs.data.aligned_to_labels();
    if shows_placeholder(inputs.kind, &data) {
        debug!(
            kind = ?inputs.kind,
            width = inputs.viewport.width,
            "rendering empty-state placeholder"
        );
        return RenderedChart {
            frame: placeholder_frame(inputs.viewport, &inputs.options.style),
            hit_map: HitMap::Empty,
        };
    }

    let rendered = match inputs.kind {
        ChartKind::Line => line_chart::build(inputs, &data),
        ChartKind::Bar => bar_chart::build(inputs, &data),
        ChartKind::Pie => pie_chart::build(inputs, &data),
    };
    debug!(
        kind = ?inputs.kind,
        width = inputs.viewport.width,
        labels = data.labels.len(),
        datasets = data.datasets.len(),
        primitives = rendered.frame.primitive_count(),
        "chart recomputed"
    );
    rendered
}

fn shows_placeholder(kind: ChartKind, data: &ChartData) -> bool {
    if data.is_empty() || data.labels.is_empty() {
        return true;
    }
    kind == ChartKind::Pie
        && data.datasets.first().is_none_or(|dataset| {
            dataset
                .data
                .iter()
                .filter(|value| value.is_finite())
                .map(|value| value.max(0.0))
                .sum::<f64>()
                <= 0.0
        })
}

pub(super) fn series_colors(data: &ChartData) -> Vec<Color> {
    data.datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| resolve_dataset_color(dataset.color.as_deref(), index))
        .collect()
}

fn label_at(data: &ChartData, index: usize) -> String {
    data.labels.get(index).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{HitMap, LayoutInputs, recompute};
    use crate::api::{ChartKind, ChartOptions};
    use crate::core::{ChartData, Dataset, Viewport};
    use crate::interaction::HoverTarget;

    fn labels(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("01-0{}", i + 1)).collect()
    }

    #[test]
    fn recompute_is_deterministic() {
        let data = ChartData::new(labels(3), vec![Dataset::new("users", vec![10.0, 0.0, 30.0])]);
        let options = ChartOptions::default();
        let inputs = LayoutInputs::new(
            ChartKind::Line,
            &data,
            Viewport::new(480.0, 240.0),
            &options,
        );
        assert_eq!(recompute(&inputs), recompute(&inputs));
    }

    #[test]
    fn all_zero_pie_is_placeholder_but_zero_bars_are_not() {
        let data = ChartData::new(labels(2), vec![Dataset::new("share", vec![0.0, 0.0])]);
        let options = ChartOptions::default();
        let viewport = Viewport::new(400.0, 240.0);

        let pie = recompute(&LayoutInputs::new(ChartKind::Pie, &data, viewport, &options));
        assert!(pie.frame.is_placeholder());
        assert_eq!(pie.hit_map, HitMap::Empty);

        let bar = recompute(&LayoutInputs::new(ChartKind::Bar, &data, viewport, &options));
        assert!(!bar.frame.is_placeholder());
    }

    #[test]
    fn bar_hover_carries_previous_value_for_comparison() {
        let data = ChartData::new(labels(2), vec![Dataset::new("orders", vec![10.0, 15.0])]);
        let options = ChartOptions::default();
        let rendered = recompute(&LayoutInputs::new(
            ChartKind::Bar,
            &data,
            Viewport::new(400.0, 240.0),
            &options,
        ));
        let HitMap::Bar { slots, .. } = &rendered.hit_map else {
            panic!("expected bar hit map");
        };
        let second = slots[1];
        let (target, tooltip) = rendered
            .hit_map
            .hover_at(&data, &options, second.center_x(), second.y + 1.0)
            .expect("bar hit");
        assert_eq!(
            target,
            HoverTarget::Bar {
                dataset_index: 0,
                group_index: 1
            }
        );
        assert_eq!(tooltip.previous_value, Some(10.0));

        let no_comparison = options.clone().with_comparison(false);
        let (_, tooltip) = rendered
            .hit_map
            .hover_at(&data, &no_comparison, second.center_x(), second.y + 1.0)
            .expect("bar hit");
        assert_eq!(tooltip.previous_value, None);
    }
}
