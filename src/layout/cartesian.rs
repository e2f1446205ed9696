use crate::core::{
    Bounds, DEFAULT_TICK_COUNT, Dataset, Padding, Scale, TickSet, Viewport, compute_scale,
    compute_ticks, usable_height, usable_width,
};

/// Minimum horizontal room per drawn category label.
pub const X_LABEL_MIN_SPACING_PX: f64 = 64.0;
pub const LEGEND_ROW_HEIGHT_PX: f64 = 28.0;
pub const AXIS_TITLE_SPACE_PX: f64 = 18.0;
pub const END_LABEL_SPACE_PX: f64 = 44.0;

/// Optional decorations that claim room around a cartesian plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartesianDecorations {
    pub x_axis_title: bool,
    pub y_axis_title: bool,
    pub legend: bool,
    pub end_labels: bool,
}

#[must_use]
pub fn cartesian_padding(decorations: CartesianDecorations) -> Padding {
    let mut padding = Padding::default();
    if decorations.end_labels {
        padding.right += END_LABEL_SPACE_PX;
    }
    if decorations.x_axis_title {
        padding.bottom += AXIS_TITLE_SPACE_PX;
    }
    if decorations.legend {
        padding.bottom += LEGEND_ROW_HEIGHT_PX;
    }
    if decorations.y_axis_title {
        padding.left += AXIS_TITLE_SPACE_PX;
    }
    padding
}

#[must_use]
pub fn plot_bounds(viewport: Viewport, padding: Padding) -> Bounds {
    Bounds::new(
        padding.left,
        padding.top,
        usable_width(viewport, padding),
        usable_height(viewport, padding),
    )
}

/// Value scale, ticks and plot box shared by line and bar layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianFrame {
    pub viewport: Viewport,
    pub padding: Padding,
    pub plot: Bounds,
    pub scale: Scale,
    pub ticks: TickSet,
}

impl CartesianFrame {
    /// Derives the scale from `datasets`, extends it to the top tick and
    /// binds it to the plot's vertical pixel range.
    #[must_use]
    pub fn new(datasets: &[Dataset], stacked: bool, viewport: Viewport, padding: Padding) -> Self {
        let plot = plot_bounds(viewport, padding);
        let raw = compute_scale(datasets, stacked);
        let scale = raw
            .aligned_to_ticks(&compute_ticks(raw, DEFAULT_TICK_COUNT))
            .with_pixel_range(plot.bottom(), plot.y);
        let ticks = compute_ticks(scale, DEFAULT_TICK_COUNT);
        Self {
            viewport,
            padding,
            plot,
            scale,
            ticks,
        }
    }

    /// Pixel row of the zero line (or the closest domain edge).
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        let zero = 0.0_f64.clamp(self.scale.domain_min, self.scale.domain_max);
        self.scale.value_to_pixel(zero)
    }
}

/// Indices of category labels to draw so neighbours keep
/// `X_LABEL_MIN_SPACING_PX` apart. The last label is added when it fits.
#[must_use]
pub fn visible_label_indices(count: usize, usable_width: f64) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let capacity = (usable_width / X_LABEL_MIN_SPACING_PX).floor().max(1.0) as usize;
    let stride = count.div_ceil(capacity).max(1);

    let mut indices: Vec<usize> = (0..count).step_by(stride).collect();
    let last = count - 1;
    if let Some(&previous) = indices.last() {
        let per_index_px = usable_width / count as f64;
        if previous != last && (last - previous) as f64 * per_index_px >= X_LABEL_MIN_SPACING_PX {
            indices.push(last);
        }
    }
    indices
}
