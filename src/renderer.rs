/// Icon rendering: one flat-color canvas, a centered label, an optional
/// leaf decoration, and a PNG on disk
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{layout, palette, targets};
use crate::font::{FontProvider, Typesetter};

/// One icon to produce: an edge length in pixels and the file the PNG lands in
#[derive(Debug, Clone)]
pub struct IconRequest {
    pub size: u32,
    pub output_path: PathBuf,
}

/// Visual parameters shared by every icon in a run
#[derive(Debug, Clone)]
pub struct IconStyle {
    pub label: String,
    pub background: Rgba<u8>,
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle {
            label: "MM".to_string(),
            background: Rgba(palette::BACKGROUND),
        }
    }
}

/// Build the fixed launcher set, rooted at `out_dir`.
pub fn launcher_requests(out_dir: &Path) -> Vec<IconRequest> {
    targets::LAUNCHER_ICONS
        .iter()
        .map(|(size, path)| IconRequest {
            size: *size,
            output_path: out_dir.join(path),
        })
        .collect()
}

/// Top-left corner that centers a `w x h` box on a `size x size` canvas,
/// using floor division on both axes.
pub fn centered_origin(size: u32, w: u32, h: u32) -> (i64, i64) {
    (
        (size as i64 - w as i64).div_euclid(2),
        (size as i64 - h as i64).div_euclid(2),
    )
}

/// Render one icon into memory using an already-resolved font provider.
/// Split out from `render` so tests can stub the provider and inspect pixels
/// without touching the filesystem.
pub fn render_with_provider(
    size: u32,
    style: &IconStyle,
    provider: &FontProvider,
    typesetter: &mut Typesetter,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, style.background);

    let (w, h) = typesetter.measure(&style.label, provider);
    let (x, y) = centered_origin(size, w, h);
    typesetter.draw(&style.label, provider, &mut canvas, x, y, Rgba(palette::LABEL));

    if size >= layout::LEAF_MIN_SIZE {
        draw_leaf(&mut canvas, size);
    }

    canvas
}

/// Stylized maple leaf: a filled triangle hanging from the icon's
/// upper-quarter line. Pixels are written directly rather than blended so the
/// overlay keeps its translucent alpha in the output file.
fn draw_leaf(canvas: &mut RgbaImage, size: u32) {
    let leaf_size = size / layout::LEAF_DIVISOR;
    let cx = (size / 2) as i64;
    let cy = (size / 4) as i64;
    let leaf = Rgba(palette::LEAF);

    // Apex at (cx, cy); edges widen one pixel per row down to the base
    for dy in 0..=leaf_size as i64 {
        let y = cy + dy;
        for x in (cx - dy)..=(cx + dy) {
            if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                canvas.put_pixel(x as u32, y as u32, leaf);
            }
        }
    }
}

/// Render one icon and write it to its output path, creating parent
/// directories as needed. Existing files are overwritten.
pub fn render(request: &IconRequest, style: &IconStyle, typesetter: &mut Typesetter) -> Result<()> {
    let provider = typesetter.resolve(request.size);
    let canvas = render_with_provider(request.size, style, &provider, typesetter);

    if let Some(parent) = request.output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    canvas
        .save(&request.output_path)
        .with_context(|| format!("Failed to write {}", request.output_path.display()))?;

    Ok(())
}

/// Render every request in order, stopping at the first failure. Requests are
/// independent, so a failure leaves earlier icons on disk and later ones
/// untouched.
pub fn generate_all(
    requests: &[IconRequest],
    style: &IconStyle,
    typesetter: &mut Typesetter,
) -> Result<()> {
    for request in requests {
        render(request, style, typesetter)?;
        println!("✅ Created: {}", request.output_path.display());
    }
    Ok(())
}
