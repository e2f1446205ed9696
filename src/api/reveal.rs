use serde::{Deserialize, Serialize};

/// The single reveal animation played after mount or a data change.
///
/// Only the drawn geometry is scaled by `progress()`; hit-testing always
/// runs against the fully revealed layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealTransition {
    duration_ms: f64,
    elapsed_ms: f64,
}

impl RevealTransition {
    /// A zero (or invalid) duration is complete immediately.
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        Self {
            duration_ms,
            elapsed_ms: 0.0,
        }
    }

    #[must_use]
    pub fn completed() -> Self {
        Self::new(0.0)
    }

    #[must_use]
    pub fn duration_ms(self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Moves the clock forward. Returns `true` when progress changed.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if self.is_complete() || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return false;
        }
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        true
    }

    /// Cubic ease-out of elapsed time, in `0..=1`.
    #[must_use]
    pub fn progress(self) -> f64 {
        if self.is_complete() {
            return 1.0;
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }
}

impl Default for RevealTransition {
    fn default() -> Self {
        Self::completed()
    }
}
