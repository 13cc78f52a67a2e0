use std::sync::Arc;

use image::{RgbaImage, imageops};

/// Left edge of the club icon column, in canvas coordinates.
pub const CLUB_SLOT_ORIGIN_X: i64 = 468;
/// Vertical distance between consecutive club slots.
pub const CLUB_SLOT_STEP_Y: i64 = 108;
/// Top edge of the first special icon slot, in canvas coordinates.
pub const SPECIAL_SLOT_ORIGIN_Y: i64 = 916;
/// Vertical distance between consecutive special slots.
pub const SPECIAL_SLOT_STEP_Y: i64 = 108;

/// Canvas offset of the club slot at `index` (0-based sequence position).
///
/// Slot coordinates are tied to the layout of the default frame asset and
/// are preserved exactly, not derived from any measured geometry.
pub fn club_slot_offset(index: usize) -> (i64, i64) {
    (CLUB_SLOT_ORIGIN_X, CLUB_SLOT_STEP_Y * index as i64)
}

/// Canvas offset of the special icon slot at `index`. Specials stack
/// upward from a fixed origin near the canvas bottom.
pub fn special_slot_offset(index: usize) -> (i64, i64) {
    (0, SPECIAL_SLOT_ORIGIN_Y - SPECIAL_SLOT_STEP_Y * index as i64)
}

/// Every resolved layer of one member's card, in paint order.
pub struct CardLayers {
    /// Grade badge. Establishes the canvas bounds and is painted first as
    /// an opaque source, alpha included.
    pub grade: Arc<RgbaImage>,
    /// Background frame, painted over at the origin.
    pub frame: Arc<RgbaImage>,
    /// Member avatar, painted over at the origin.
    pub avatar: Arc<RgbaImage>,
    /// Club icons in slot order.
    pub clubs: Vec<Arc<RgbaImage>>,
    /// Special icons in slot order.
    pub specials: Vec<Arc<RgbaImage>>,
    /// Rendered name image, painted last at the origin.
    pub name: RgbaImage,
}

/// Compose all layers into the final card image.
///
/// The canvas starts as a copy of the grade badge; every subsequent layer
/// is painted with source-over alpha blending and clipped to the canvas.
/// The result's dimensions always equal the grade image's.
pub fn compose_card(layers: &CardLayers) -> RgbaImage {
    let mut canvas: RgbaImage = (*layers.grade).clone();

    imageops::overlay(&mut canvas, &*layers.frame, 0, 0);
    imageops::overlay(&mut canvas, &*layers.avatar, 0, 0);

    for (i, club) in layers.clubs.iter().enumerate() {
        let (x, y) = club_slot_offset(i);
        imageops::overlay(&mut canvas, &**club, x, y);
    }
    for (j, special) in layers.specials.iter().enumerate() {
        let (x, y) = special_slot_offset(j);
        imageops::overlay(&mut canvas, &**special, x, y);
    }

    imageops::overlay(&mut canvas, &layers.name, 0, 0);
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/compose/card.rs"]
mod tests;
