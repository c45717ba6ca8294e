use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{SnaplineError, SnaplineResult};

/// RGBA8 image, straight (non-premultiplied) alpha.
#[derive(Clone, Debug)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

fn svg_options() -> usvg::Options<'static> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    }
}

/// Parse and rasterise an SVG document at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> SnaplineResult<RasterImage> {
    let tree = usvg::Tree::from_str(svg, &svg_options()).with_context(|| "parse svg tree")?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SnaplineError::render(format!("failed to allocate {width}x{height} pixmap")))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(RasterImage {
        width,
        height,
        data,
    })
}

/// Rasterise `svg` and write it to `out` as PNG.
pub fn rasterize_svg_to_png(svg: &str, out: &Path) -> SnaplineResult<()> {
    let img = rasterize_svg(svg)?;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &img.data,
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}
