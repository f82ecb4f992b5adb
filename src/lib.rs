//! Golf shot dispersion diagrams.
//!
//! Shots are landing points in yards relative to the tee: `x` is the lateral
//! miss (positive right), `y` the carry downfield. Each group of shots gets a
//! one-sigma dispersion ellipse and a dashed flight arc, drawn over a 120 × 300
//! yard field with distance lines every 50 yards.
//!
//! ```
//! use dispersion::{DataSource, RenderOptions, render_document};
//!
//! let (svg, report) = render_document(&DataSource::Samples, &RenderOptions::default()).unwrap();
//! assert_eq!(report.drawn.len(), 6);
//! assert!(svg.contains("viewBox"));
//! ```

pub mod data;
pub mod errors;
pub mod field;
pub mod ingest;
pub mod log;
pub mod render;
pub mod scaling;
pub mod stats;
pub mod types;

pub use data::{DataSource, Group, sample_groups};
pub use errors::{ConfigurationError, DegenerateGroupError, InputError, RenderError};
pub use field::{CanvasSize, FieldDimensions};
pub use ingest::{Ingested, load_csv_file, parse_csv};
pub use render::raster::rasterize_png;
pub use render::{RenderOptions, RenderReport, RenderSurface, SvgSurface, render_pass};
pub use scaling::{ScalingContext, compute_scaling};
pub use stats::{DispersionEllipse, GroupSummary, compute_dispersion_ellipse, mean_center};
pub use types::{Color, FieldPoint, Radians, Yards};

/// Render the selected data source to an SVG document, along with what the
/// pass drew and skipped.
pub fn render_document(
    source: &DataSource,
    options: &RenderOptions,
) -> Result<(String, RenderReport), RenderError> {
    let mut surface = SvgSurface::new(options.canvas);
    let report = render_pass(&mut surface, &source.groups(), options.field)?;
    Ok((surface.to_svg()?, report))
}

/// Render the selected data source to an SVG document.
///
/// Degenerate groups are left out of the drawing; see [`render_document`] to
/// find out which.
pub fn render_svg(source: &DataSource, options: &RenderOptions) -> Result<String, miette::Report> {
    let (svg, _report) = render_document(source, options)?;
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispersion_svg::{Svg, SvgNode, facet_xml};

    #[test]
    fn samples_render_with_default_options() {
        let (svg, report) = render_document(&DataSource::Samples, &RenderOptions::default()).unwrap();
        let parsed: Svg = facet_xml::from_str(&svg).unwrap();
        assert_eq!(parsed.view_box.as_deref(), Some("0 0 600 900"));
        assert_eq!(report.drawn.len(), 6);
        let arcs = parsed
            .children
            .iter()
            .filter(|node| matches!(node, SvgNode::Path(_)))
            .count();
        assert_eq!(arcs, 6);
    }

    #[test]
    fn invalid_canvas_is_reported() {
        let options = RenderOptions {
            canvas: CanvasSize::new(600.0, -1.0),
            ..RenderOptions::default()
        };
        let err = render_document(&DataSource::Samples, &options).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Configuration(ConfigurationError::NonPositive { dimension: "canvas height", .. })
        ));
        let err = render_svg(&DataSource::Samples, &options).unwrap_err();
        assert!(err.to_string().contains("canvas height"));
    }
}
