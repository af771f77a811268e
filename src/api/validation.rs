use crate::core::Viewport;
use crate::error::{GanttError, GanttResult};

use super::RenderStyle;

/// Zero means "not measured yet" and is accepted; negative or non-finite
/// widths are rejected.
pub(super) fn validate_initial_viewport(viewport: Viewport) -> GanttResult<Viewport> {
    if !viewport.width.is_finite() || viewport.width < 0.0 {
        return Err(GanttError::InvalidViewport {
            width: viewport.width,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_pointer(x: f64, y: f64) -> GanttResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GanttError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_render_style(style: RenderStyle) -> GanttResult<RenderStyle> {
    style.tick_color.validate()?;
    style.minor_tick_color.validate()?;
    style.label_color.validate()?;
    style.row_divider_color.validate()?;
    style.fallback_bar_color.validate()?;

    for (name, value) in [
        ("ruler_height_px", style.ruler_height_px),
        ("bar_inset_px", style.bar_inset_px),
        ("bar_height_px", style.bar_height_px),
        ("label_top_px", style.label_top_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(GanttError::InvalidConfig(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    if !style.label_font_size_px.is_finite() || style.label_font_size_px <= 0.0 {
        return Err(GanttError::InvalidConfig(
            "render style `label_font_size_px` must be finite and > 0".to_owned(),
        ));
    }

    Ok(style)
}
