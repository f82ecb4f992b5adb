//! Cosmetic settings. Widths and sizes are either fixed pixels or factors of
//! the pass's pixels-per-yard scale, with a floor so small canvases stay legible.

pub const GRID_COLOR: &str = "#cccccc";
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const CENTER_LINE_COLOR: &str = "#999999";
pub const LABEL_COLOR: &str = "#666666";
pub const LABEL_FONT_FAMILY: &str = "Arial, sans-serif";

/// Label font size is `scale * LABEL_FONT_FACTOR`, clamped to this range
pub const LABEL_FONT_MIN: f64 = 8.0;
pub const LABEL_FONT_MAX: f64 = 12.0;
pub const LABEL_FONT_FACTOR: f64 = 0.3;
/// Label inset from the left edge of the field and lift above its line
pub const LABEL_INSET: f64 = 5.0;
pub const LABEL_LIFT: f64 = 3.0;

/// Center line and ellipse outline width factor
pub const OUTLINE_WIDTH_FACTOR: f64 = 0.05;
pub const TRAJECTORY_WIDTH_FACTOR: f64 = 0.03;
pub const MIN_LINE_WIDTH: f64 = 1.0;

pub const DASH_FACTOR: f64 = 0.06;
pub const MIN_DASH: f64 = 2.0;

/// Arc control point rises by `carry * scale * ARC_HEIGHT_FACTOR` pixels
pub const ARC_HEIGHT_FACTOR: f64 = 0.3;

/// Ellipses never shrink below `max(MIN_RADIUS, scale * MIN_RADIUS_FACTOR)`
pub const MIN_RADIUS_FACTOR: f64 = 0.5;
pub const MIN_RADIUS: f64 = 1.0;

pub fn outline_width(scale: f64) -> f64 {
    (scale * OUTLINE_WIDTH_FACTOR).max(MIN_LINE_WIDTH)
}

pub fn label_font_size(scale: f64) -> f64 {
    (scale * LABEL_FONT_FACTOR).clamp(LABEL_FONT_MIN, LABEL_FONT_MAX)
}

pub fn min_radius(scale: f64) -> f64 {
    (scale * MIN_RADIUS_FACTOR).max(MIN_RADIUS)
}
