use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::{debug, info, warn};

use crate::core::buffer::PixelBuffer;
use crate::error::EncodeError;

/// Serialize an RGBA8 buffer as PNG. Output is always lossless with alpha.
pub fn encode(buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    buffer
        .validate()
        .map_err(|e| EncodeError::Png(e.to_string()))?;
    if buffer.width == 0 || buffer.height == 0 {
        return Err(EncodeError::Png(format!(
            "cannot encode a {}x{} image",
            buffer.width, buffer.height
        )));
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            &buffer.data,
            buffer.width,
            buffer.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::Png(e.to_string()))?;

    debug!(
        "Encoded {}x{} PNG ({} bytes)",
        buffer.width,
        buffer.height,
        out.len()
    );
    Ok(out)
}

/// Encode then write to `output`; nothing is written if encoding fails.
pub fn write_png(output: &Path, buffer: &PixelBuffer) -> Result<(), EncodeError> {
    let bytes = encode(buffer)?;
    write_encoded(output, &bytes)
}

/// Write already-encoded PNG bytes to `output`.
///
/// A file that fails mid-write is removed, so `output` either holds the
/// complete PNG or does not exist.
pub fn write_encoded(output: &Path, bytes: &[u8]) -> Result<(), EncodeError> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    if let Err(err) = writer.write_all(bytes).and_then(|_| writer.flush()) {
        drop(writer);
        discard(output);
        return Err(err.into());
    }
    info!("Wrote {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}

/// Best-effort removal of an artifact from a failed request.
pub fn discard(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => debug!("Removed partial output {}", path.display()),
        Err(err) => warn!("Could not remove partial output {}: {}", path.display(), err),
    }
}
