//! Rendering of a dispersion diagram
//!
//! This module is organized into submodules:
//! - `defaults`: Cosmetic stroke and text settings
//! - `grid`, `trajectory`, `ellipse`: the three layers, back to front
//! - `svg`: a render surface that records an SVG document
//! - `raster`: SVG to PNG conversion

pub mod defaults;
pub mod ellipse;
pub mod grid;
pub mod raster;
pub mod svg;
pub mod trajectory;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::data::Group;
use crate::errors::{ConfigurationError, DegenerateGroupError};
use crate::field::{CanvasSize, FieldDimensions};
use crate::scaling::{ScalingContext, compute_scaling};
use crate::types::Radians;

pub use ellipse::EllipseLayer;
pub use grid::GridLayer;
pub use svg::SvgSurface;
pub use trajectory::TrajectoryLayer;

/// Stroke settings for one drawing command
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// CSS color
    pub color: String,
    /// Line width in pixels
    pub width: f64,
    /// Dash and gap length in pixels; solid when `None`
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: None,
        }
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }
}

/// Text settings for labels
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub font_size: f64,
    pub font_family: &'static str,
}

/// The drawing backend a render pass issues commands against.
///
/// Coordinates are canvas pixels: origin top-left, Y down.
pub trait RenderSurface {
    /// Pixel size of the drawable area
    fn size(&self) -> CanvasSize;

    /// Drop everything drawn so far
    fn clear(&mut self);

    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke);

    /// Quadratic Bezier from `from` to `to` bending toward `control`
    fn stroke_quadratic(&mut self, from: DVec2, control: DVec2, to: DVec2, stroke: &Stroke);

    /// Ellipse with semi-axes `radii`, turned clockwise on screen by `rotation`
    fn stroke_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: Radians, stroke: &Stroke);

    /// Text with its baseline starting at `at`
    fn fill_text(&mut self, text: &str, at: DVec2, style: &TextStyle);
}

/// What a render pass drew and what it had to leave out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Labels of groups whose ellipse was drawn
    pub drawn: Vec<String>,
    /// Groups skipped for having too few points
    pub skipped: Vec<DegenerateGroupError>,
}

/// One back-to-front stage of the diagram
#[enum_dispatch]
pub trait Layer {
    fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        scaling: &ScalingContext,
        groups: &[Group],
        report: &mut RenderReport,
    );
}

/// All layers, in paint order
#[enum_dispatch(Layer)]
#[derive(Debug, Clone, Copy)]
pub enum LayerKind {
    GridLayer,
    TrajectoryLayer,
    EllipseLayer,
}

/// Paint order: grid in the background, ellipses in the foreground
pub const LAYERS: [LayerKind; 3] = [
    LayerKind::GridLayer(GridLayer),
    LayerKind::TrajectoryLayer(TrajectoryLayer),
    LayerKind::EllipseLayer(EllipseLayer),
];

/// Options for a whole render
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderOptions {
    pub canvas: CanvasSize,
    pub field: FieldDimensions,
}

/// Run one complete pass: clear, then grid, trajectories and ellipses.
///
/// Invalid dimensions abort before anything is drawn. Degenerate groups are
/// skipped and listed in the report; they never stop their siblings.
pub fn render_pass(
    surface: &mut dyn RenderSurface,
    groups: &[Group],
    field: FieldDimensions,
) -> Result<RenderReport, ConfigurationError> {
    let scaling = compute_scaling(surface.size(), field)?;
    let mut report = RenderReport::default();

    surface.clear();
    for layer in LAYERS {
        layer.draw(surface, &scaling, groups, &mut report);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_groups;
    use crate::stats::mean_center;
    use crate::types::{Color, FieldPoint, Yards};
    use glam::dvec2;

    /// Surface that records which kind of command was issued, in order,
    /// along with the geometry of curves and ellipses
    #[derive(Default)]
    struct Recorder {
        size: Option<CanvasSize>,
        ops: Vec<&'static str>,
        curves: Vec<(DVec2, DVec2, DVec2)>,
        ellipses: Vec<(DVec2, DVec2, Radians)>,
    }

    impl RenderSurface for Recorder {
        fn size(&self) -> CanvasSize {
            self.size.unwrap_or_default()
        }
        fn clear(&mut self) {
            self.ops.clear();
            self.curves.clear();
            self.ellipses.clear();
            self.ops.push("clear");
        }
        fn stroke_line(&mut self, _: DVec2, _: DVec2, _: &Stroke) {
            self.ops.push("line");
        }
        fn stroke_quadratic(&mut self, from: DVec2, control: DVec2, to: DVec2, _: &Stroke) {
            self.ops.push("curve");
            self.curves.push((from, control, to));
        }
        fn stroke_ellipse(&mut self, c: DVec2, r: DVec2, rot: Radians, _: &Stroke) {
            self.ops.push("ellipse");
            self.ellipses.push((c, r, rot));
        }
        fn fill_text(&mut self, _: &str, _: DVec2, _: &TextStyle) {
            self.ops.push("text");
        }
    }

    #[test]
    fn layers_paint_back_to_front() {
        let mut surface = Recorder::default();
        let report = render_pass(&mut surface, &sample_groups(), FieldDimensions::default()).unwrap();

        assert_eq!(surface.ops.first(), Some(&"clear"));
        let last_grid = surface.ops.iter().rposition(|op| *op == "text" || *op == "line").unwrap();
        let first_curve = surface.ops.iter().position(|op| *op == "curve").unwrap();
        let last_curve = surface.ops.iter().rposition(|op| *op == "curve").unwrap();
        let first_ellipse = surface.ops.iter().position(|op| *op == "ellipse").unwrap();
        assert!(last_grid < first_curve);
        assert!(last_curve < first_ellipse);
        assert_eq!(report.drawn.len(), 6);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn arcs_end_exactly_at_ellipse_centers() {
        let groups = sample_groups();
        let mut surface = Recorder::default();
        render_pass(&mut surface, &groups, FieldDimensions::default()).unwrap();

        let scaling = compute_scaling(CanvasSize::default(), FieldDimensions::default()).unwrap();
        let tee = scaling.field_to_canvas(Yards::ZERO, Yards::ZERO);

        assert_eq!(surface.curves.len(), groups.len());
        assert_eq!(surface.ellipses.len(), groups.len());
        for ((group, &(from, control, to)), &(center, _, _)) in
            groups.iter().zip(&surface.curves).zip(&surface.ellipses)
        {
            assert_eq!(from, tee, "{}", group.label);
            assert_eq!(to, center, "{}", group.label);

            let mean = mean_center(&group.points).unwrap();
            let mid = (tee + scaling.point_to_canvas(mean)) / 2.0;
            let lifted = dvec2(mid.x, mid.y - scaling.px(mean.y) * defaults::ARC_HEIGHT_FACTOR);
            assert_eq!(control, lifted, "{}", group.label);
        }
    }

    #[test]
    fn arc_control_point_on_default_canvas() {
        let group = Group::new(
            "three",
            Color::named("red"),
            vec![
                FieldPoint::yards(30.0, 120.0),
                FieldPoint::yards(35.0, 130.0),
                FieldPoint::yards(40.0, 125.0),
            ],
        );
        let mut surface = Recorder::default();
        render_pass(&mut surface, &[group], FieldDimensions::default()).unwrap();

        let (from, control, to) = surface.curves[0];
        assert_eq!(from, dvec2(300.0, 900.0));
        assert_eq!(to, dvec2(405.0, 525.0));
        assert_eq!(to, surface.ellipses[0].0);
        // Midpoint (352.5, 712.5) lifted by 125 yd * 3 px * 0.3
        assert!((control - dvec2(352.5, 600.0)).length() < 1e-9, "{control}");
    }

    #[test]
    fn degenerate_group_does_not_stop_siblings() {
        let groups = vec![
            Group::new("single", Color::named("red"), vec![FieldPoint::yards(0.0, 100.0)]),
            Group::new("empty", Color::named("blue"), vec![]),
            Group::new(
                "pair",
                Color::named("green"),
                vec![FieldPoint::yards(1.0, 100.0), FieldPoint::yards(3.0, 110.0)],
            ),
        ];
        let mut surface = Recorder::default();
        let report = render_pass(&mut surface, &groups, FieldDimensions::default()).unwrap();

        assert_eq!(report.drawn, vec!["pair".to_string()]);
        let skipped: Vec<&str> = report.skipped.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(skipped, vec!["single", "empty"]);
        assert_eq!(surface.ops.iter().filter(|op| **op == "curve").count(), 1);
        assert_eq!(surface.ellipses.len(), 1);
    }

    #[test]
    fn bad_canvas_fails_before_drawing() {
        let mut surface = Recorder {
            size: Some(CanvasSize::new(0.0, 100.0)),
            ..Recorder::default()
        };
        let err = render_pass(&mut surface, &sample_groups(), FieldDimensions::default());
        assert!(err.is_err());
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn later_pass_replaces_earlier_one() {
        let mut surface = Recorder::default();
        render_pass(&mut surface, &sample_groups(), FieldDimensions::default()).unwrap();
        let first = surface.ops.len();
        render_pass(&mut surface, &sample_groups(), FieldDimensions::default()).unwrap();
        assert_eq!(surface.ops.len(), first);
    }
}
