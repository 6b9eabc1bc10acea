use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use image::{ImageFormat, RgbaImage};

use crate::foundation::error::{BoothError, BoothResult};
use crate::render::composite::unpremultiply_in_place;
use crate::render::strip::CompositeImage;

/// Default file name offered for the "save print" action.
pub const EXPORT_FILE_NAME: &str = "photobooth.png";

/// Encode a finalized strip into an in-memory PNG byte stream.
pub fn encode_png(strip: &CompositeImage) -> BoothResult<Vec<u8>> {
    let mut rgba8 = strip.rgba8_premul().to_vec();
    unpremultiply_in_place(&mut rgba8);

    let img = RgbaImage::from_raw(strip.width(), strip.height(), rgba8)
        .ok_or_else(|| BoothError::render("strip buffer does not match its dimensions"))?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| BoothError::render(format!("png encode: {e}")))?;
    Ok(out.into_inner())
}

/// Encode the strip and write it to `path`, creating parent directories.
pub fn write_png(strip: &CompositeImage, path: &Path) -> BoothResult<()> {
    let bytes = encode_png(strip)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("write print '{}'", path.display()))?;
    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> BoothResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
