use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use image::RgbaImage;

use crate::foundation::error::{CardError, CardResult};

/// Write a composed card as `<dir>/<id>.png`, creating the output
/// directory if needed. An existing file is truncated.
///
/// Creation and encoding failures are reported as distinct error kinds.
pub fn write_card(dir: impl AsRef<Path>, id: &str, image: &RgbaImage) -> CardResult<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .map_err(|e| CardError::output_create(dir.display().to_string(), e.to_string()))?;

    let path = dir.join(format!("{id}.png"));
    let file = File::create(&path)
        .map_err(|e| CardError::output_create(path.display().to_string(), e.to_string()))?;

    let mut out = BufWriter::new(file);
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| CardError::output_encode(path.display().to_string(), e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/output/writer.rs"]
mod tests;
