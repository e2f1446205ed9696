pub mod hit_test;
pub mod tooltip;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use hit_test::{
    LINE_HIT_THRESHOLD_PX, LineHit, bar_at, legend_entry_at, nearest_line_point, slice_at,
};
pub use tooltip::{PercentChange, TooltipState, Trend, percent_change};

/// Drawable primitive currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTarget {
    LinePoint {
        dataset_index: usize,
        index: usize,
    },
    Bar {
        dataset_index: usize,
        group_index: usize,
    },
    Slice {
        index: usize,
    },
}

/// Pointer hover state. `Hovering` carries the one live tooltip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        target: HoverTarget,
        tooltip: TooltipState,
    },
}

impl HoverState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn target(&self) -> Option<HoverTarget> {
        match self {
            Self::Idle => None,
            Self::Hovering { target, .. } => Some(*target),
        }
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        match self {
            Self::Idle => None,
            Self::Hovering { tooltip, .. } => Some(tooltip),
        }
    }
}

/// Ephemeral pointer state of one chart instance.
///
/// Tooltip hover and legend highlight are independent and compose: leaving
/// the legend keeps the tooltip, leaving the chart clears both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
    hovered_dataset_index: Option<usize>,
    pointer: Option<(f64, f64)>,
}

impl InteractionState {
    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.hover.tooltip()
    }

    #[must_use]
    pub fn hovered_dataset_index(&self) -> Option<usize> {
        self.hovered_dataset_index
    }

    #[must_use]
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Applies a hit-test result for a pointer move.
    ///
    /// A hit replaces the previous tooltip in one assignment; a miss resets to
    /// `Idle`. Returns `true` when the hover state changed.
    pub fn on_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        hit: Option<(HoverTarget, TooltipState)>,
    ) -> bool {
        self.pointer = Some((x, y));
        let next = match hit {
            Some((target, tooltip)) => HoverState::Hovering { target, tooltip },
            None => HoverState::Idle,
        };
        if next == self.hover {
            return false;
        }
        trace!(x, y, from = ?self.hover.target(), to = ?next.target(), "hover transition");
        self.hover = next;
        true
    }

    /// Returns `true` when anything was cleared.
    pub fn on_pointer_leave(&mut self) -> bool {
        let changed = !self.hover.is_idle() || self.hovered_dataset_index.is_some();
        self.pointer = None;
        self.hover = HoverState::Idle;
        self.hovered_dataset_index = None;
        if changed {
            trace!("pointer left chart");
        }
        changed
    }

    pub fn set_legend_hover(&mut self, index: Option<usize>) -> bool {
        if self.hovered_dataset_index == index {
            return false;
        }
        trace!(from = ?self.hovered_dataset_index, to = ?index, "legend highlight");
        self.hovered_dataset_index = index;
        true
    }

    /// Drops hover state that may point at geometry from an older frame.
    pub fn reset_hover(&mut self) {
        self.hover = HoverState::Idle;
    }
}
