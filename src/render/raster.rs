//! SVG to PNG conversion

use crate::errors::RenderError;

/// Rasterize an SVG document at its own pixel size onto a white background
pub fn rasterize_png(svg: &str) -> Result<Vec<u8>, RenderError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Rasterize { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    crate::log::debug!(width, height, "rasterized diagram");

    pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))
}
