//! SVG generation

use dispersion_svg::facet_xml::SerializeOptions;
use dispersion_svg::{Ellipse, Line, Path, Svg, SvgNode, Text, facet_xml};
use glam::DVec2;

use crate::errors::RenderError;
use crate::field::CanvasSize;
use crate::types::Radians;

use super::{RenderSurface, Stroke, TextStyle};

/// A render surface that records drawing commands as SVG nodes.
///
/// Each [`clear`](RenderSurface::clear) drops every recorded node, so the
/// document always holds exactly one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    size: CanvasSize,
    nodes: Vec<SvgNode>,
}

impl SvgSurface {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            nodes: Vec::new(),
        }
    }

    /// Recorded nodes, in paint order
    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The recorded pass as an SVG element tree
    pub fn document(&self) -> Svg {
        Svg {
            width: Some(self.size.width),
            height: Some(self.size.height),
            view_box: Some(format!(
                "0 0 {} {}",
                fmt_num(self.size.width),
                fmt_num(self.size.height)
            )),
            children: self.nodes.clone(),
        }
    }

    /// Serialize the recorded pass as a standalone SVG document
    pub fn to_svg(&self) -> Result<String, RenderError> {
        fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
            write!(writer, "{}", fmt_num(value))
        }

        let options = SerializeOptions {
            float_formatter: Some(format_float),
            ..Default::default()
        };
        facet_xml::to_string_with_options(&self.document(), &options)
            .map_err(|e| RenderError::Serialize(e.to_string()))
    }
}

impl RenderSurface for SvgSurface {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke) {
        self.nodes.push(SvgNode::Line(Line {
            x1: Some(from.x),
            y1: Some(from.y),
            x2: Some(to.x),
            y2: Some(to.y),
            fill: None,
            stroke: Some(stroke.color.clone()),
            stroke_width: Some(stroke.width),
            stroke_dasharray: dasharray(stroke),
        }));
    }

    fn stroke_quadratic(&mut self, from: DVec2, control: DVec2, to: DVec2, stroke: &Stroke) {
        let d = format!(
            "M {},{} Q {},{} {},{}",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(control.x),
            fmt_num(control.y),
            fmt_num(to.x),
            fmt_num(to.y),
        );
        self.nodes.push(SvgNode::Path(Path {
            d: Some(d),
            fill: Some("none".to_string()),
            stroke: Some(stroke.color.clone()),
            stroke_width: Some(stroke.width),
            stroke_dasharray: dasharray(stroke),
        }));
    }

    fn stroke_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: Radians, stroke: &Stroke) {
        // SVG rotate() is clockwise on screen, same as the ellipse angle
        let transform = (rotation.raw() != 0.0).then(|| {
            format!(
                "rotate({} {} {})",
                fmt_num(rotation.to_degrees()),
                fmt_num(center.x),
                fmt_num(center.y)
            )
        });
        self.nodes.push(SvgNode::Ellipse(Ellipse {
            cx: Some(center.x),
            cy: Some(center.y),
            rx: Some(radii.x),
            ry: Some(radii.y),
            transform,
            fill: Some("none".to_string()),
            stroke: Some(stroke.color.clone()),
            stroke_width: Some(stroke.width),
            stroke_dasharray: dasharray(stroke),
        }));
    }

    fn fill_text(&mut self, text: &str, at: DVec2, style: &TextStyle) {
        self.nodes.push(SvgNode::Text(Text {
            x: Some(at.x),
            y: Some(at.y),
            fill: Some(style.color.clone()),
            font_family: Some(style.font_family.to_string()),
            font_size: Some(style.font_size),
            content: text.to_string(),
        }));
    }
}

fn dasharray(stroke: &Stroke) -> Option<String> {
    stroke
        .dash
        .map(|(dash, gap)| format!("{},{}", fmt_num(dash), fmt_num(gap)))
}

/// Format a coordinate with 6 significant figures, trailing zeros trimmed
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    if !s.contains('.') {
        return s;
    }

    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
