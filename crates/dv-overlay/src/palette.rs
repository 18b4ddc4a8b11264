//! Courier colors.

/// Fixed palette, cycled by courier index.
pub const PALETTE: [&str; 5] = ["#ef4444", "#3b82f6", "#10b981", "#f59e0b", "#8b5cf6"];

/// Color for the courier at `index` (wraps around the palette).
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
