//! Field-to-canvas coordinate mapping.
//!
//! Field space: yards, origin at the tee (center-bottom), Y up the field.
//! Canvas space: pixels, origin top-left, Y down.
//!
//! A single uniform scale is used on both axes; independent X/Y scales would
//! distort the ellipse orientation on screen. Every renderer goes through
//! [`ScalingContext::field_to_canvas`] so the Y flip is applied in one place.

use glam::{DVec2, dvec2};

use crate::errors::ConfigurationError;
use crate::field::{CanvasSize, FieldDimensions};
use crate::types::{FieldPoint, Yards};

/// Scale and centering offsets for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingContext {
    /// Pixels per yard, identical on both axes
    pub scale: f64,
    /// Horizontal margin left of the field rectangle
    pub offset_x: f64,
    /// Vertical margin below (and above) the field rectangle
    pub offset_y: f64,
    pub field_width_px: f64,
    pub field_length_px: f64,
    pub canvas: CanvasSize,
    pub field: FieldDimensions,
}

/// The field rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Fit the field into the canvas without distortion and center it.
///
/// Non-positive or non-finite dimensions are a host misconfiguration and are
/// rejected before any arithmetic happens.
pub fn compute_scaling(
    canvas: CanvasSize,
    field: FieldDimensions,
) -> Result<ScalingContext, ConfigurationError> {
    canvas.validate()?;
    field.validate()?;

    let scale_x = canvas.width / field.width.raw();
    let scale_y = canvas.height / field.length.raw();
    let scale = scale_x.min(scale_y);

    let field_width_px = field.width.raw() * scale;
    let field_length_px = field.length.raw() * scale;

    let ctx = ScalingContext {
        scale,
        offset_x: (canvas.width - field_width_px) / 2.0,
        offset_y: (canvas.height - field_length_px) / 2.0,
        field_width_px,
        field_length_px,
        canvas,
        field,
    };

    crate::log::debug!(
        scale = ctx.scale,
        offset_x = ctx.offset_x,
        offset_y = ctx.offset_y,
        "computed scaling"
    );

    Ok(ctx)
}

impl ScalingContext {
    /// Map a field position (yards) to canvas pixels
    pub fn field_to_canvas(&self, x: Yards, y: Yards) -> DVec2 {
        dvec2(
            self.offset_x + (self.field.half_width() + x).raw() * self.scale,
            self.canvas.height - self.offset_y - y.raw() * self.scale,
        )
    }

    /// Map a field point to canvas pixels
    pub fn point_to_canvas(&self, p: FieldPoint) -> DVec2 {
        self.field_to_canvas(p.x, p.y)
    }

    /// Convert a field distance to a pixel length
    #[inline]
    pub fn px(&self, d: Yards) -> f64 {
        d.raw() * self.scale
    }

    /// Canvas rectangle covered by the field, used for label placement
    pub fn field_bounds(&self) -> FieldBounds {
        let half = self.field.half_width();
        let top_left = self.field_to_canvas(-half, self.field.length);
        let bottom_right = self.field_to_canvas(half, Yards::ZERO);
        FieldBounds {
            left: top_left.x,
            top: top_left.y,
            right: bottom_right.x,
            bottom: bottom_right.y,
            width: self.field_width_px,
            height: self.field_length_px,
        }
    }

    /// Field corners in canvas pixels: bottom-left, bottom-right, top-right, top-left
    pub fn field_corners(&self) -> [DVec2; 4] {
        let half = self.field.half_width();
        let length = self.field.length;
        [
            self.field_to_canvas(-half, Yards::ZERO),
            self.field_to_canvas(half, Yards::ZERO),
            self.field_to_canvas(half, length),
            self.field_to_canvas(-half, length),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn scaling(w: f64, h: f64) -> ScalingContext {
        compute_scaling(CanvasSize::new(w, h), FieldDimensions::default()).unwrap()
    }

    #[test]
    fn tall_canvas_is_limited_by_height() {
        // 600/120 = 5, 900/300 = 3 -> height limits
        let ctx = scaling(600.0, 900.0);
        assert_eq!(ctx.scale, 3.0);
        assert_eq!(ctx.field_width_px, 360.0);
        assert_eq!(ctx.field_length_px, 900.0);
        assert_eq!(ctx.offset_x, 120.0);
        assert_eq!(ctx.offset_y, 0.0);
    }

    #[test]
    fn wide_canvas_centers_vertically() {
        // 240/120 = 2, 1000/300 = 3.33 -> width limits
        let ctx = scaling(240.0, 1000.0);
        assert_eq!(ctx.scale, 2.0);
        assert_eq!(ctx.offset_x, 0.0);
        assert_eq!(ctx.offset_y, 200.0);
    }

    #[test]
    fn origin_maps_to_bottom_center_of_field() {
        for (w, h) in [(600.0, 900.0), (240.0, 1000.0), (1024.0, 512.0), (77.0, 33.0)] {
            let ctx = scaling(w, h);
            let b = ctx.field_bounds();
            let tee = ctx.field_to_canvas(Yards::ZERO, Yards::ZERO);
            assert!((tee.x - (b.left + b.right) / 2.0).abs() < EPS);
            assert!((tee.y - b.bottom).abs() < EPS);
        }
    }

    #[test]
    fn field_corners_stay_on_canvas() {
        for (w, h) in [(600.0, 900.0), (240.0, 1000.0), (1024.0, 512.0), (1.0, 1.0)] {
            let ctx = scaling(w, h);
            for corner in ctx.field_corners() {
                assert!(corner.x >= -EPS && corner.x <= w + EPS, "{corner:?} in {w}x{h}");
                assert!(corner.y >= -EPS && corner.y <= h + EPS, "{corner:?} in {w}x{h}");
            }
        }
    }

    #[test]
    fn y_axis_is_flipped() {
        let ctx = scaling(600.0, 900.0);
        let near = ctx.field_to_canvas(Yards::ZERO, Yards(10.0));
        let far = ctx.field_to_canvas(Yards::ZERO, Yards(200.0));
        assert!(far.y < near.y);
    }

    #[test]
    fn bounds_match_pixel_extents() {
        let ctx = scaling(600.0, 900.0);
        let b = ctx.field_bounds();
        assert_eq!(b.right - b.left, b.width);
        assert_eq!(b.bottom - b.top, b.height);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(compute_scaling(CanvasSize::new(-1.0, 10.0), FieldDimensions::default()).is_err());
        let field = FieldDimensions { width: Yards(0.0), ..FieldDimensions::default() };
        assert!(compute_scaling(CanvasSize::default(), field).is_err());
    }
}
