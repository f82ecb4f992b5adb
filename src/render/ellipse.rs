//! Foreground layer: one dispersion ellipse per group

use glam::dvec2;

use crate::data::Group;
use crate::scaling::ScalingContext;
use crate::stats::compute_dispersion_ellipse;

use super::defaults;
use super::{Layer, RenderReport, RenderSurface, Stroke};

#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseLayer;

impl Layer for EllipseLayer {
    fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        scaling: &ScalingContext,
        groups: &[Group],
        report: &mut RenderReport,
    ) {
        let min_radius = defaults::min_radius(scaling.scale);
        let width = defaults::outline_width(scaling.scale);

        for group in groups {
            let ellipse = match compute_dispersion_ellipse(&group.label, &group.points) {
                Ok(ellipse) => ellipse,
                Err(err) => {
                    crate::log::warn!(group = %group.label, count = err.count, "skipping degenerate group");
                    report.skipped.push(err);
                    continue;
                }
            };

            crate::log::debug!(
                group = %group.label,
                center_x = ellipse.center.x.raw(),
                center_y = ellipse.center.y.raw(),
                theta = %ellipse.theta,
                sigma_x = ellipse.sigma_x.raw(),
                sigma_y = ellipse.sigma_y.raw(),
                "dispersion ellipse"
            );

            let center = scaling.point_to_canvas(ellipse.center);
            // Zero-spread groups still get a visible outline
            let radii = dvec2(
                scaling.px(ellipse.sigma_x).max(min_radius),
                scaling.px(ellipse.sigma_y).max(min_radius),
            );

            surface.stroke_ellipse(
                center,
                radii,
                ellipse.theta,
                &Stroke::solid(group.color.to_css(), width),
            );
            report.drawn.push(group.label.clone());
        }
    }
}
