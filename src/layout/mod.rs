//! Layout engine: turns abstract series into concrete screen slots for the
//! line, bar and pie chart kinds.

pub mod bar;
pub mod cartesian;
pub mod container;
pub mod legend;
pub mod line;
pub mod pie;

pub use bar::{BarLayout, BarMode, BarSlot, layout_bars};
pub use cartesian::{
    AXIS_TITLE_SPACE_PX, CartesianDecorations, CartesianFrame, LEGEND_ROW_HEIGHT_PX,
    cartesian_padding, plot_bounds, visible_label_indices,
};
pub use container::ContainerObserver;
pub use legend::{
    LEGEND_FONT_PX, LEGEND_LINE_HEIGHT_PX, LegendEntryLayout, estimate_text_width,
    layout_legend_column, layout_legend_row,
};
pub use line::{LineLayout, LineSeriesLayout, layout_line};
pub use pie::{
    DEFAULT_DONUT_WIDTH_PX, LeaderLine, LeaderSide, PieLayout, Slice, layout_pie, outer_radius_for,
};
