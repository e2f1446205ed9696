use serde::{Deserialize, Serialize};

/// Paint layers of one chart frame, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Background,
    Grid,
    Series,
    Labels,
    Axis,
    Legend,
    Tooltip,
}

impl LayerKind {
    /// Canonical paint order. The tooltip overlay always lands on top.
    pub const CANONICAL_ORDER: [LayerKind; 7] = [
        LayerKind::Background,
        LayerKind::Grid,
        LayerKind::Series,
        LayerKind::Labels,
        LayerKind::Axis,
        LayerKind::Legend,
        LayerKind::Tooltip,
    ];
}
