/// Font acquisition and text rasterization for icon labels
///
/// Font loading is best-effort: a missing bold face falls back to whatever
/// the system database offers, and an empty database falls back to a
/// heuristic text box. No step in the chain ever returns an error.
use cosmic_text::fontdb::Query;
use cosmic_text::{
    Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight,
};
use image::{Rgba, RgbaImage};

use crate::constants::layout;

/// Ordered font-acquisition strategies. Each variant is only reached when the
/// previous one failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontProvider {
    /// A bold sans-serif face exists; scaled to the icon edge
    SystemFont { px: f32 },

    /// No bold sans-serif match, but some face is available; fixed small size
    DefaultFont { px: f32 },

    /// No usable face at all. Carries the heuristic text box used for
    /// centering; nothing is drawn on this path.
    NoFont { width: u32, height: u32 },
}

/// Owns the system font database and glyph cache for a whole run.
/// Building a `FontSystem` scans system fonts, so create one and reuse it.
pub struct Typesetter {
    font_system: FontSystem,
    cache: SwashCache,
}

impl Typesetter {
    pub fn new() -> Self {
        Typesetter {
            font_system: FontSystem::new(),
            cache: SwashCache::new(),
        }
    }

    /// Walk the fallback chain for one icon size.
    pub fn resolve(&self, size: u32) -> FontProvider {
        let db = self.font_system.db();

        let bold_sans = Query {
            families: &[cosmic_text::fontdb::Family::SansSerif],
            weight: Weight::BOLD,
            ..Query::default()
        };
        if db.query(&bold_sans).is_some() {
            return FontProvider::SystemFont {
                px: size as f32 * layout::FONT_SCALE,
            };
        }

        if db.len() > 0 {
            return FontProvider::DefaultFont {
                px: layout::DEFAULT_FONT_PX,
            };
        }

        FontProvider::NoFont {
            width: size * 2 / 5,
            height: size * 3 / 10,
        }
    }

    /// Bounding box of `label` under the given provider, in pixels.
    pub fn measure(&mut self, label: &str, provider: &FontProvider) -> (u32, u32) {
        if let FontProvider::NoFont { width, height } = provider {
            return (*width, *height);
        }

        let buffer = self.shape(label, provider);
        let line_height = buffer.metrics().line_height;

        let mut width = 0.0f32;
        let mut lines = 0u32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }

        (
            width.ceil() as u32,
            (line_height * lines.max(1) as f32).ceil() as u32,
        )
    }

    /// Blend the shaped label into `canvas` with its top-left corner at
    /// `(x, y)`. `NoFont` draws nothing; the caller has already centered the
    /// heuristic box, so the icon simply ships without visible text.
    pub fn draw(
        &mut self,
        label: &str,
        provider: &FontProvider,
        canvas: &mut RgbaImage,
        x: i64,
        y: i64,
        color: Rgba<u8>,
    ) {
        if matches!(provider, FontProvider::NoFont { .. }) {
            return;
        }

        let mut buffer = self.shape(label, provider);
        let text_color = Color::rgba(color[0], color[1], color[2], color[3]);
        let (width, height) = (canvas.width() as i64, canvas.height() as i64);

        buffer.draw(
            &mut self.font_system,
            &mut self.cache,
            text_color,
            |gx, gy, gw, gh, pixel| {
                // Per-pixel glyph coverage arrives in the alpha channel
                let coverage = pixel.a();
                if coverage == 0 {
                    return;
                }
                for dy in 0..gh as i64 {
                    for dx in 0..gw as i64 {
                        let px = x + gx as i64 + dx;
                        let py = y + gy as i64 + dy;
                        if px >= 0 && py >= 0 && px < width && py < height {
                            blend(canvas, px as u32, py as u32, color, coverage);
                        }
                    }
                }
            },
        );
    }

    fn shape(&mut self, label: &str, provider: &FontProvider) -> Buffer {
        let (px, attrs) = match provider {
            FontProvider::SystemFont { px } => (
                *px,
                Attrs::new().family(Family::SansSerif).weight(Weight::BOLD),
            ),
            FontProvider::DefaultFont { px } => (*px, Attrs::new()),
            // Callers skip NoFont before shaping
            FontProvider::NoFont { .. } => (layout::DEFAULT_FONT_PX, Attrs::new()),
        };

        let metrics = Metrics::new(px, (px * 1.2).ceil());
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_text(&mut self.font_system, label, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl Default for Typesetter {
    fn default() -> Self {
        Self::new()
    }
}

/// Source-over blend of `color` at `coverage` onto an opaque-background canvas.
fn blend(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: u8) {
    let Rgba([br, bg, bb, ba]) = *canvas.get_pixel(x, y);
    let a = coverage as u32;
    let inv = 255 - a;
    let r = ((color[0] as u32 * a + br as u32 * inv) / 255) as u8;
    let g = ((color[1] as u32 * a + bg as u32 * inv) / 255) as u8;
    let b = ((color[2] as u32 * a + bb as u32 * inv) / 255) as u8;
    let out_a = (a + ba as u32 * inv / 255).min(255) as u8;
    canvas.put_pixel(x, y, Rgba([r, g, b, out_a]));
}
