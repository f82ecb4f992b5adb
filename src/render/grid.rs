//! Background layer: distance reference lines and the target line

use crate::data::Group;
use crate::scaling::ScalingContext;
use crate::types::Yards;

use super::defaults;
use super::{Layer, RenderReport, RenderSurface, Stroke, TextStyle};

/// Horizontal line every grid interval, labelled with its distance, plus a
/// vertical center line from the tee to the far end of the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayer;

impl Layer for GridLayer {
    fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        scaling: &ScalingContext,
        _groups: &[Group],
        _report: &mut RenderReport,
    ) {
        let field = &scaling.field;
        let canvas_height = scaling.canvas.height;
        let bounds = scaling.field_bounds();
        let half = field.half_width();

        let grid_stroke = Stroke::solid(defaults::GRID_COLOR, defaults::GRID_LINE_WIDTH);
        let label_style = TextStyle {
            color: defaults::LABEL_COLOR.to_string(),
            font_size: defaults::label_font_size(scaling.scale),
            font_family: defaults::LABEL_FONT_FAMILY,
        };

        for distance in field.grid_distances() {
            let left = scaling.field_to_canvas(-half, distance);
            let right = scaling.field_to_canvas(half, distance);

            // Lines on or past the canvas edge are not drawn
            if left.y <= 0.0 || left.y >= canvas_height {
                continue;
            }

            surface.stroke_line(left, right, &grid_stroke);
            surface.fill_text(
                &format!("{distance} yds"),
                glam::dvec2(bounds.left + defaults::LABEL_INSET, left.y - defaults::LABEL_LIFT),
                &label_style,
            );
        }

        let tee = scaling.field_to_canvas(Yards::ZERO, Yards::ZERO);
        let far = scaling.field_to_canvas(Yards::ZERO, field.length);
        surface.stroke_line(
            tee,
            far,
            &Stroke::solid(defaults::CENTER_LINE_COLOR, defaults::outline_width(scaling.scale)),
        );
    }
}
