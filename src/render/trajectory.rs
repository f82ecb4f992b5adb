//! Dashed ball-flight arcs from the tee to each group's mean landing point

use glam::dvec2;

use crate::data::Group;
use crate::scaling::ScalingContext;
use crate::stats::{MIN_POINTS, mean_center};
use crate::types::Yards;

use super::defaults;
use super::{Layer, RenderReport, RenderSurface, Stroke};

#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryLayer;

impl Layer for TrajectoryLayer {
    fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        scaling: &ScalingContext,
        groups: &[Group],
        _report: &mut RenderReport,
    ) {
        let tee = scaling.field_to_canvas(Yards::ZERO, Yards::ZERO);
        let dash = (scaling.scale * defaults::DASH_FACTOR).max(defaults::MIN_DASH);
        let width = (scaling.scale * defaults::TRAJECTORY_WIDTH_FACTOR).max(defaults::MIN_LINE_WIDTH);

        for group in groups {
            // Cosmetic only: groups without an ellipse get no arc either
            if group.points.len() < MIN_POINTS {
                continue;
            }
            let Some(mean) = mean_center(&group.points) else {
                continue;
            };

            let landing = scaling.point_to_canvas(mean);
            let mid = (tee + landing) / 2.0;
            // Lift toward the canvas top in proportion to carry
            let control = dvec2(mid.x, mid.y - scaling.px(mean.y) * defaults::ARC_HEIGHT_FACTOR);

            let stroke = Stroke::solid(group.color.to_css(), width).dashed(dash, dash);
            surface.stroke_quadratic(tee, control, landing, &stroke);
        }
    }
}
