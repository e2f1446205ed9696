use serde::{Deserialize, Serialize};

use crate::core::{Bounds, ChartData, Padding, Viewport};

use super::cartesian::CartesianFrame;

pub const MAX_BAR_WIDTH_PX: f64 = 24.0;
pub const BAR_GAP_PX: f64 = 4.0;
/// Share of a group cell covered by bars.
pub const BAR_FILL_RATIO: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarMode {
    #[default]
    Grouped,
    Stacked,
}

/// One bar rectangle. In stacked mode `y` is the running top of the column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub group_index: usize,
    pub dataset_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
}

impl BarSlot {
    #[must_use]
    pub fn bounds(self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub frame: CartesianFrame,
    pub mode: BarMode,
    pub cell_width: f64,
    /// Slots in `(group, dataset)` order.
    pub slots: Vec<BarSlot>,
    pub group_centers: Vec<f64>,
}

impl BarLayout {
    #[must_use]
    pub fn slot(&self, group_index: usize, dataset_index: usize) -> Option<&BarSlot> {
        self.slots
            .iter()
            .find(|s| s.group_index == group_index && s.dataset_index == dataset_index)
    }

    /// Summed segment height of one stacked column.
    #[must_use]
    pub fn column_height(&self, group_index: usize) -> f64 {
        self.slots
            .iter()
            .filter(|s| s.group_index == group_index)
            .map(|s| s.height)
            .sum()
    }
}

/// Lays out `G` label groups by `D` datasets.
///
/// The usable width is cut into `G` equal cells. Grouped mode places `D`
/// bars of `min(cell * 0.6 / D, 24)` side by side with 4px gaps, centered in
/// the cell. Stacked mode places one `min(cell * 0.6, 24)` column per cell
/// and walks datasets in declared order upward from the baseline.
#[must_use]
pub fn layout_bars(
    data: &ChartData,
    viewport: Viewport,
    padding: Padding,
    mode: BarMode,
) -> BarLayout {
    let stacked = mode == BarMode::Stacked;
    let frame = CartesianFrame::new(&data.datasets, stacked, viewport, padding);
    let groups = data.labels.len();
    let dataset_count = data.datasets.len();
    let cell_width = frame.plot.width / groups.max(1) as f64;

    let group_centers: Vec<f64> = (0..groups)
        .map(|group| frame.plot.x + cell_width * (group as f64 + 0.5))
        .collect();

    let mut slots = Vec::with_capacity(groups * dataset_count);
    if dataset_count > 0 {
        match mode {
            BarMode::Grouped => layout_grouped(data, &frame, cell_width, &mut slots),
            BarMode::Stacked => layout_stacked(data, &frame, cell_width, &mut slots),
        }
    }

    BarLayout {
        frame,
        mode,
        cell_width,
        slots,
        group_centers,
    }
}

fn layout_grouped(
    data: &ChartData,
    frame: &CartesianFrame,
    cell_width: f64,
    slots: &mut Vec<BarSlot>,
) {
    let dataset_count = data.datasets.len();
    let bar_width = (cell_width * BAR_FILL_RATIO / dataset_count as f64).min(MAX_BAR_WIDTH_PX);
    let group_width = bar_width * dataset_count as f64 + BAR_GAP_PX * (dataset_count - 1) as f64;
    let baseline_y = frame.baseline_y();

    for group_index in 0..data.labels.len() {
        let cell_left = frame.plot.x + cell_width * group_index as f64;
        let start_x = cell_left + (cell_width - group_width) / 2.0;
        for (dataset_index, dataset) in data.datasets.iter().enumerate() {
            let value = dataset.data.get(group_index).copied().unwrap_or(0.0);
            let value_y = frame.scale.value_to_pixel(value);
            slots.push(BarSlot {
                group_index,
                dataset_index,
                x: start_x + dataset_index as f64 * (bar_width + BAR_GAP_PX),
                y: value_y.min(baseline_y),
                width: bar_width,
                height: (baseline_y - value_y).abs(),
                value,
            });
        }
    }
}

fn layout_stacked(
    data: &ChartData,
    frame: &CartesianFrame,
    cell_width: f64,
    slots: &mut Vec<BarSlot>,
) {
    let bar_width = (cell_width * BAR_FILL_RATIO).min(MAX_BAR_WIDTH_PX);
    let chart_height = frame.plot.height;
    let span = frame.scale.span();
    let baseline_y = frame.baseline_y();

    for group_index in 0..data.labels.len() {
        let x = frame.plot.x + cell_width * group_index as f64 + (cell_width - bar_width) / 2.0;
        let mut running_top = baseline_y;
        for (dataset_index, dataset) in data.datasets.iter().enumerate() {
            let value = dataset.data.get(group_index).copied().unwrap_or(0.0);
            // Negative samples have no stacked representation.
            let height = value.max(0.0) / span * chart_height;
            let y = running_top - height;
            slots.push(BarSlot {
                group_index,
                dataset_index,
                x,
                y,
                width: bar_width,
                height,
                value,
            });
            running_top = y;
        }
    }
}
