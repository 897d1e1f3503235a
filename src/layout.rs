//! Viewport and overlay layout math.
//!
//! The canvas is deliberately larger than the viewport so zoomed or offset
//! geometry never reveals a hard edge; the overlay wordmark is centered over
//! the figure and scaled with the zoom and textSize inputs.

/// Extra canvas pixels on each side of the viewport.
pub const CANVAS_BUFFER_SPACE: f64 = 1024.0;

const RATIO_LOGO_SIZE: f64 = 1000.0;
// fudge factor to get the wordmark to center accurately
const FUDGE_TO_CENTER: f64 = 0.99;

/// Canvas dimensions and position for a given viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

/// Oversize the canvas by the buffer margin and shift it back so it stays
/// centered on the viewport.
#[must_use]
pub fn canvas_layout(viewport_w: f64, viewport_h: f64) -> CanvasLayout {
    CanvasLayout {
        width: viewport_w + CANVAS_BUFFER_SPACE * 2.0,
        height: viewport_h + CANVAS_BUFFER_SPACE * 2.0,
        left: -CANVAS_BUFFER_SPACE,
        top: -CANVAS_BUFFER_SPACE,
    }
}

/// Style values for the overlay wordmark, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub height: f64,
    pub top: f64,
    pub left: f64,
}

/// Scale the wordmark with the figure radius and center it in the viewport.
///
/// `logo_width` is the image's current rendered width; it depends on the
/// image's aspect ratio so the caller measures it rather than deriving it.
#[must_use]
pub fn overlay_layout(
    radius: f64,
    text_size: u32,
    logo_width: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> OverlayLayout {
    let height = radius * f64::from(text_size) / RATIO_LOGO_SIZE;
    OverlayLayout {
        height,
        top: (viewport_h - height) / 2.0,
        left: (viewport_w - logo_width * FUDGE_TO_CENTER) / 2.0,
    }
}
