use image::RgbaImage;

/// Decode PNG bytes into straight-alpha RGBA8.
///
/// All card assets share one codec; bytes that are not valid PNG are an
/// error here rather than a silently empty image.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, image::ImageError> {
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
