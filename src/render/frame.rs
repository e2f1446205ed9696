use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LayerKind, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

static EMPTY_LAYER: LayerPrimitives = LayerPrimitives {
    lines: Vec::new(),
    rects: Vec::new(),
    paths: Vec::new(),
    circles: Vec::new(),
    texts: Vec::new(),
};

/// Whether the frame carries a chart or the static empty-state placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameState {
    Drawn,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic drawable tree for one chart draw pass.
///
/// Primitives are grouped by paint layer; layers are kept in
/// `LayerKind::CANONICAL_ORDER` so backends can paint them front to back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub state: FrameState,
    layers: IndexMap<LayerKind, LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let layers = LayerKind::CANONICAL_ORDER
            .into_iter()
            .map(|kind| (kind, LayerPrimitives::default()))
            .collect();
        Self {
            viewport,
            state: FrameState::Drawn,
            layers,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.state == FrameState::Placeholder
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &LayerPrimitives {
        self.layers.get(&kind).unwrap_or(&EMPTY_LAYER)
    }

    fn layer_mut(&mut self, kind: LayerKind) -> &mut LayerPrimitives {
        self.layers.entry(kind).or_default()
    }

    pub fn layers(&self) -> impl Iterator<Item = (LayerKind, &LayerPrimitives)> {
        self.layers.iter().map(|(kind, layer)| (*kind, layer))
    }

    pub fn push_line(&mut self, kind: LayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: LayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_path(&mut self, kind: LayerKind, path: PathPrimitive) {
        self.layer_mut(kind).paths.push(path);
    }

    pub fn push_circle(&mut self, kind: LayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: LayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    /// All text nodes in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.values().flat_map(|layer| layer.texts.iter())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.layers
            .values()
            .map(|layer| {
                layer.lines.len()
                    + layer.rects.len()
                    + layer.paths.len()
                    + layer.circles.len()
                    + layer.texts.len()
            })
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.values().all(LayerPrimitives::is_empty)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in self.layers.values() {
            layer.validate()?;
        }
        Ok(())
    }
}
