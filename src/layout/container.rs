use tracing::{trace, warn};

/// Observed container width.
///
/// This is the only mutable state shared by the layout pipeline. It is
/// written exclusively from the resize callback (`on_resize`) and read
/// synchronously by every layout pass on the same thread, so a relayout
/// always happens before the next pointer event is hit-tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerObserver {
    width: f64,
    generation: u64,
}

impl ContainerObserver {
    #[must_use]
    pub fn new(initial_width: f64) -> Self {
        Self {
            width: if initial_width.is_finite() {
                initial_width
            } else {
                0.0
            },
            generation: 0,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    /// Number of accepted width changes since construction.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    /// Records a new border-box width. Returns `true` when geometry must be
    /// recomputed. Non-finite widths are ignored.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if !width.is_finite() {
            warn!(width, "ignoring non-finite container width");
            return false;
        }
        if width == self.width {
            return false;
        }
        trace!(from = self.width, to = width, "container resized");
        self.width = width;
        self.generation += 1;
        true
    }
}
