//! Facet-derived SVG element types for dispersion diagrams.
//!
//! Only the elements a diagram is made of are modelled: distance lines,
//! flight arcs, ellipses and labels. Documents serialize with `facet-xml`
//! and parse back into the same tree.
//!
//! ```rust,ignore
//! use dispersion_svg::{Svg, facet_xml};
//!
//! let svg: Svg = facet_xml::from_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"/>"#)?;
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default, PartialEq)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any element a diagram contains
#[derive(Facet, Debug, Clone, PartialEq)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "ellipse")]
    Ellipse(Ellipse),
    #[facet(rename = "text")]
    Text(Text),
}

/// Stroke presentation attributes shared by the outline elements
pub trait PresentationAttrs {
    fn fill(&self) -> Option<&str>;
    fn stroke(&self) -> Option<&str>;
    fn stroke_width(&self) -> Option<f64>;
    fn stroke_dasharray(&self) -> Option<&str>;
}

macro_rules! impl_presentation_attrs {
    ($($ty:ty),*) => {
        $(
            impl PresentationAttrs for $ty {
                fn fill(&self) -> Option<&str> { self.fill.as_deref() }
                fn stroke(&self) -> Option<&str> { self.stroke.as_deref() }
                fn stroke_width(&self) -> Option<f64> { self.stroke_width }
                fn stroke_dasharray(&self) -> Option<&str> { self.stroke_dasharray.as_deref() }
            }
        )*
    };
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<f64>,
    #[facet(xml::attribute)]
    pub y1: Option<f64>,
    #[facet(xml::attribute)]
    pub x2: Option<f64>,
    #[facet(xml::attribute)]
    pub y2: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG ellipse element (`<ellipse>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Ellipse {
    #[facet(xml::attribute)]
    pub cx: Option<f64>,
    #[facet(xml::attribute)]
    pub cy: Option<f64>,
    #[facet(xml::attribute)]
    pub rx: Option<f64>,
    #[facet(xml::attribute)]
    pub ry: Option<f64>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<f64>,
    #[facet(xml::text)]
    pub content: String,
}

impl_presentation_attrs!(Line, Path, Ellipse);

impl Ellipse {
    /// Clockwise rotation in degrees from a `rotate(deg cx cy)` transform
    pub fn rotation_degrees(&self) -> Option<f64> {
        let args = self.transform.as_deref()?.trim().strip_prefix("rotate(")?;
        args.split([' ', ',', ')']).find(|s| !s.is_empty())?.parse().ok()
    }
}

// Re-export facet_xml for convenience
pub use facet_xml;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_from_transform() {
        let ellipse = Ellipse {
            transform: Some("rotate(45 405 525)".into()),
            ..Ellipse::default()
        };
        assert_eq!(ellipse.rotation_degrees(), Some(45.0));
        assert_eq!(Ellipse::default().rotation_degrees(), None);
    }

    #[test]
    fn presentation_attrs() {
        let line = Line {
            stroke: Some("#cccccc".into()),
            stroke_width: Some(1.0),
            ..Line::default()
        };
        assert_eq!(line.stroke(), Some("#cccccc"));
        assert_eq!(line.stroke_width(), Some(1.0));
        assert_eq!(line.stroke_dasharray(), None);
    }
}
