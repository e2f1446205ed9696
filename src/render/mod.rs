mod frame;
mod layer_stack;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::{FrameState, LayerPrimitives, RenderFrame};
pub use layer_stack::LayerKind;
pub use null_renderer::NullRenderer;
pub use palette::{DEFAULT_PALETTE, palette_color, resolve_dataset_color};
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, Paint, PathPrimitive, RectPrimitive,
    Stroke, TextHAlign, TextPrimitive, Transform,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`, so
/// drawing code stays isolated from chart geometry and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
