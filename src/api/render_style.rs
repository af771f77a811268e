use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Minimal presentation parameters for frame building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub ruler_height_px: f64,
    /// Vertical gap between a row's top edge and its bars.
    pub bar_inset_px: f64,
    pub bar_height_px: f64,
    pub label_font_size_px: f64,
    pub label_top_px: f64,
    pub tick_color: Color,
    pub minor_tick_color: Color,
    pub label_color: Color,
    pub row_divider_color: Color,
    pub fallback_bar_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            ruler_height_px: 48.0,
            bar_inset_px: 6.0,
            bar_height_px: 28.0,
            label_font_size_px: 12.0,
            label_top_px: 4.0,
            tick_color: Color::rgb(0.224, 0.267, 0.329),
            minor_tick_color: Color::rgba(0.224, 0.267, 0.329, 0.5),
            label_color: Color::rgb(0.796, 0.835, 0.882),
            row_divider_color: Color::rgb(0.294, 0.333, 0.388),
            fallback_bar_color: Color::rgb(0.231, 0.510, 0.965),
        }
    }
}
