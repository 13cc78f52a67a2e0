use std::path::Path;

use image::RgbaImage;
use rusttype::{Font, Scale, point};

use crate::foundation::error::{CardError, CardResult};

/// Width of the standalone name image in pixels.
pub const NAME_CANVAS_WIDTH: u32 = 576;
/// Height of the standalone name image in pixels.
pub const NAME_CANVAS_HEIGHT: u32 = 128;
/// Baseline offset from the canvas top in pixels.
pub const NAME_BASELINE_Y: f32 = 90.0;
/// Glyph size in pixels per em.
pub const NAME_SIZE_PX: f32 = 45.0;

/// A parsed TrueType face used to rasterize member names.
///
/// The face is loaded once per run and reused for every card.
#[derive(Debug)]
pub struct NameFace {
    font: Font<'static>,
}

impl NameFace {
    /// Read and parse a TrueType font file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| CardError::font_load(format!("read '{}': {e}", path.display())))?;
        Self::from_bytes(bytes)
            .map_err(|_| CardError::font_load(format!("parse '{}' as truetype", path.display())))
    }

    /// Parse a face from raw font bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> CardResult<Self> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| CardError::font_load("font bytes are not parsable truetype"))?;
        Ok(Self { font })
    }

    /// Advance width of `text` at the card's fixed glyph size, kerning
    /// included. Empty text measures zero.
    pub fn measure(&self, text: &str) -> f32 {
        let scale = Scale::uniform(NAME_SIZE_PX);
        let glyphs: Vec<_> = self.font.layout(text, scale, point(0.0, 0.0)).collect();
        match glyphs.last() {
            Some(g) => g.position().x + g.unpositioned().h_metrics().advance_width,
            None => 0.0,
        }
    }

    /// Rasterize `text` in black onto a transparent 576x128 canvas.
    ///
    /// The string is horizontally centered by advance width and sits on a
    /// fixed baseline 90px from the top. Single line, left to right; glyphs
    /// that fall outside the canvas are clipped.
    pub fn render(&self, text: &str) -> RgbaImage {
        let mut img = RgbaImage::new(NAME_CANVAS_WIDTH, NAME_CANVAS_HEIGHT);
        let scale = Scale::uniform(NAME_SIZE_PX);
        let origin_x = centered_origin(NAME_CANVAS_WIDTH, self.measure(text));

        for glyph in self.font.layout(text, scale, point(origin_x, NAME_BASELINE_Y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let x = gx as i32 + bb.min.x;
                let y = gy as i32 + bb.min.y;
                if x < 0 || y < 0 || x as u32 >= NAME_CANVAS_WIDTH || y as u32 >= NAME_CANVAS_HEIGHT
                {
                    return;
                }
                let src_a = (coverage * 255.0).round().clamp(0.0, 255.0) as u16;
                if src_a == 0 {
                    return;
                }
                // Source-over of black onto a canvas that only ever holds
                // black pixels: color channels stay zero, alpha accumulates.
                let px = img.get_pixel_mut(x as u32, y as u32);
                let dst_a = px.0[3] as u16;
                px.0[3] = (src_a + (dst_a * (255 - src_a) + 127) / 255).min(255) as u8;
            });
        }

        img
    }
}

/// Left edge for a centered run of `advance` pixels on a `canvas_width`
/// canvas. May be negative for text wider than the canvas.
pub(crate) fn centered_origin(canvas_width: u32, advance: f32) -> f32 {
    (canvas_width as f32 - advance) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/text/render.rs"]
mod tests;
