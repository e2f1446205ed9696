use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{ChartData, Viewport};
use crate::error::ChartResult;
use crate::interaction::{HoverState, InteractionState, TooltipState};
use crate::layout::ContainerObserver;
use crate::render::{RenderFrame, Renderer};

use super::{
    ChartEngineConfig, ChartKind, ChartOptions, HitMap, LayoutInputs, RenderedChart,
    RevealTransition, recompute,
};

/// Lifecycle of one mounted chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    Mounted,
    /// Geometry was recomputed for a new width and not yet rendered.
    RelaidOut,
    TooltipShown,
}

/// Host-facing chart instance.
///
/// Owns the container width, the pointer state and the last drawn frame.
/// Every input change recomputes the frame synchronously, so the hit map
/// used by the next pointer event always matches what was drawn.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    kind: ChartKind,
    height: f64,
    options: ChartOptions,
    data: ChartData,
    container: ContainerObserver,
    interaction: InteractionState,
    legend_from_pointer: bool,
    reveal: RevealTransition,
    rendered: RenderedChart,
    relayout_pending: bool,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let container = ContainerObserver::new(config.initial_width);
        let data = ChartData::default();
        let rendered = recompute(&LayoutInputs::new(
            config.kind,
            &data,
            Viewport::new(container.width(), config.height),
            &config.options,
        ));
        debug!(
            kind = ?config.kind,
            width = container.width(),
            height = config.height,
            "chart mounted"
        );
        Ok(Self {
            renderer,
            kind: config.kind,
            height: config.height,
            reveal: RevealTransition::new(config.options.reveal_duration_ms),
            options: config.options,
            data,
            container,
            interaction: InteractionState::default(),
            legend_from_pointer: false,
            rendered,
            relayout_pending: false,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.container.width(), self.height)
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.rendered.frame
    }

    #[must_use]
    pub fn hit_map(&self) -> &HitMap {
        &self.rendered.hit_map
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn hovered_dataset_index(&self) -> Option<usize> {
        self.interaction.hovered_dataset_index()
    }

    #[must_use]
    pub fn reveal(&self) -> RevealTransition {
        self.reveal
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        if self.relayout_pending {
            EnginePhase::RelaidOut
        } else if self.options.show_tooltip && self.interaction.tooltip().is_some() {
            EnginePhase::TooltipShown
        } else {
            EnginePhase::Mounted
        }
    }

    /// Replaces the plotted data and restarts the reveal transition.
    ///
    /// Series whose length disagrees with `labels` are resized to it (missing
    /// samples read as zero); the mismatch is logged, not rejected.
    pub fn set_data(&mut self, data: ChartData) {
        if data.has_length_mismatch() {
            warn!(
                labels = data.labels.len(),
                lengths = ?data.datasets.iter().map(|d| d.data.len()).collect::<Vec<_>>(),
                "dataset lengths differ from label count; aligning to labels"
            );
        }
        self.data = data.aligned_to_labels().into_owned();
        debug!(
            kind = ?self.kind,
            labels = self.data.labels.len(),
            datasets = self.data.datasets.len(),
            "chart data replaced"
        );
        if self
            .interaction
            .hovered_dataset_index()
            .is_some_and(|index| index >= self.legend_len())
        {
            self.interaction.set_legend_hover(None);
        }
        self.interaction.reset_hover();
        self.reveal = RevealTransition::new(self.options.reveal_duration_ms);
        self.relayout();
    }

    /// Validates and applies new options. A changed reveal duration restarts
    /// the reveal transition with that duration.
    pub fn set_options(&mut self, options: ChartOptions) -> ChartResult<()> {
        let options = options.validate()?;
        if options.reveal_duration_ms != self.reveal.duration_ms() {
            self.reveal = RevealTransition::new(options.reveal_duration_ms);
        }
        self.options = options;
        debug!(
            kind = ?self.kind,
            reveal_ms = self.reveal.duration_ms(),
            "chart options replaced"
        );
        self.relayout();
        Ok(())
    }

    /// Resize-observer entry point; the only writer of the container width.
    ///
    /// Returns `true` when geometry was recomputed.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if !self.container.on_resize(width) {
            return false;
        }
        self.relayout_pending = true;
        self.relayout();
        debug!(
            width,
            generation = self.container.generation(),
            "chart relaid out"
        );
        true
    }

    /// Hit-tests the pointer against the last frame. Returns `true` when the
    /// frame changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let legend_hit = self.rendered.hit_map.legend_entry_at(x, y);
        let mut changed = false;
        if legend_hit.is_some() {
            self.legend_from_pointer = true;
            changed |= self.interaction.set_legend_hover(legend_hit);
        } else if self.legend_from_pointer {
            self.legend_from_pointer = false;
            changed |= self.interaction.set_legend_hover(None);
        }

        let hit = if legend_hit.is_some() {
            None
        } else {
            self.rendered
                .hit_map
                .hover_at(&self.data, &self.options, x, y)
        };
        changed |= self.interaction.on_pointer_move(x, y, hit);
        trace!(x, y, changed, "pointer move");
        if changed {
            self.redraw();
        }
        changed
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.legend_from_pointer = false;
        let changed = self.interaction.on_pointer_leave();
        if changed {
            self.redraw();
        }
        changed
    }

    /// Highlights legend entry `index` (a dataset, or a slice for pie
    /// charts). Out-of-range indices are ignored.
    pub fn legend_enter(&mut self, index: usize) -> bool {
        if index >= self.legend_len() {
            trace!(index, "ignoring legend index out of range");
            return false;
        }
        self.legend_from_pointer = false;
        let changed = self.interaction.set_legend_hover(Some(index));
        if changed {
            self.redraw();
        }
        changed
    }

    pub fn legend_leave(&mut self) -> bool {
        self.legend_from_pointer = false;
        let changed = self.interaction.set_legend_hover(None);
        if changed {
            self.redraw();
        }
        changed
    }

    /// Steps the reveal transition. Returns `true` while it is still
    /// producing new frames.
    pub fn advance_reveal(&mut self, delta_ms: f64) -> bool {
        let changed = self.reveal.advance(delta_ms);
        if changed {
            self.redraw();
        }
        changed
    }

    /// Hands the current frame to the backend.
    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.rendered.frame)?;
        self.relayout_pending = false;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn legend_len(&self) -> usize {
        match self.kind {
            ChartKind::Pie => self.data.labels.len(),
            ChartKind::Line | ChartKind::Bar => self.data.datasets.len(),
        }
    }

    fn layout_inputs(&self) -> LayoutInputs<'_> {
        LayoutInputs::new(self.kind, &self.data, self.viewport(), &self.options)
            .with_hover(self.interaction.hover())
            .with_legend_highlight(self.interaction.hovered_dataset_index())
            .with_reveal_progress(self.reveal.progress())
    }

    fn redraw(&mut self) {
        self.rendered = recompute(&self.layout_inputs());
    }

    /// Recomputes geometry, then re-resolves hover at the last pointer
    /// position so the tooltip tracks the new coordinates.
    fn relayout(&mut self) {
        self.redraw();
        let Some((x, y)) = self.interaction.pointer() else {
            return;
        };
        let hit = self
            .rendered
            .hit_map
            .hover_at(&self.data, &self.options, x, y);
        if self.interaction.on_pointer_move(x, y, hit) {
            self.redraw();
        }
    }
}
