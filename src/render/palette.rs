use tracing::warn;

use super::Color;

/// Fallback series colors, cycled by dataset (or slice) index.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

#[must_use]
pub fn palette_color(index: usize) -> Color {
    let hex = DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
    Color::from_hex(hex).unwrap_or(Color::rgb(0.5, 0.5, 0.5))
}

/// Resolves the color for series `index`: the explicit color when it parses,
/// otherwise the palette entry.
#[must_use]
pub fn resolve_dataset_color(color: Option<&str>, index: usize) -> Color {
    match color {
        Some(raw) => match Color::from_hex(raw) {
            Ok(color) => color,
            Err(err) => {
                warn!(error = %err, index, "falling back to palette color");
                palette_color(index)
            }
        },
        None => palette_color(index),
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PALETTE, palette_color, resolve_dataset_color};
    use crate::render::Color;

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(palette_color(1), palette_color(1 + DEFAULT_PALETTE.len()));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn explicit_color_wins_and_bad_color_falls_back() {
        let explicit = resolve_dataset_color(Some("#000000"), 3);
        assert_eq!(explicit, Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(resolve_dataset_color(Some("nope"), 3), palette_color(3));
        assert_eq!(resolve_dataset_color(None, 2), palette_color(2));
    }
}
