mod bar_chart;
mod engine;
mod engine_config;
mod json_contract;
mod line_chart;
mod overlay;
mod pie_chart;
mod recompute;
mod render_style;
mod reveal;

pub use engine::{ChartEngine, EnginePhase};
pub use engine_config::{ChartEngineConfig, ChartKind, ChartOptions};
pub use json_contract::{RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1};
pub use overlay::PLACEHOLDER_TEXT;
pub use recompute::{HitMap, LayoutInputs, RenderedChart, recompute};
pub use render_style::{DIMMED_OPACITY, RenderStyle};
pub use reveal::RevealTransition;
