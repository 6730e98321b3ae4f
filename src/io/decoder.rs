//! Input side of the pipeline: sniff the format from the bytes, enforce the
//! size limit, and decode to an RGBA8 `PixelBuffer`.
use std::path::Path;

use image::ImageError;
use tracing::{debug, info, warn};

use crate::core::buffer::PixelBuffer;
use crate::error::DecodeError;
use crate::types::InputFormat;

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(e) => DecodeError::UnsupportedFormat(e.to_string()),
        ImageError::Limits(e) => DecodeError::ExceedsLimits(e.to_string()),
        other => DecodeError::Corrupted(other.to_string()),
    }
}

fn check_size(size: u64, max_size_bytes: u64) -> Result<(), DecodeError> {
    if size > max_size_bytes {
        warn!(
            "Rejecting input of {:.2} MB (limit: {:.2} MB)",
            size as f64 / 1024.0 / 1024.0,
            max_size_bytes as f64 / 1024.0 / 1024.0
        );
        return Err(DecodeError::TooLarge {
            size,
            max: max_size_bytes,
        });
    }
    Ok(())
}

/// Identify which accepted format `bytes` holds, from magic bytes only.
pub fn sniff_format(bytes: &[u8]) -> Result<InputFormat, DecodeError> {
    let format = image::guess_format(bytes).map_err(map_image_error)?;
    InputFormat::from_image_format(format)
        .ok_or_else(|| DecodeError::UnsupportedFormat(format!("{:?}", format)))
}

/// Decode PNG/JPEG/WEBP/BMP/GIF bytes into an RGBA8 buffer.
///
/// Sources without alpha decode as fully opaque. GIF yields its first frame.
pub fn decode(bytes: &[u8], max_size_bytes: u64) -> Result<PixelBuffer, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    check_size(bytes.len() as u64, max_size_bytes)?;

    let format = sniff_format(bytes)?;
    debug!("Decoding {} bytes as {}", bytes.len(), format);

    let image = image::load_from_memory_with_format(bytes, format.image_format())
        .map_err(map_image_error)?;
    let buffer = PixelBuffer::from(image.into_rgba8());

    info!(
        "Decoded {} image: {}x{}",
        format, buffer.width, buffer.height
    );
    Ok(buffer)
}

/// Read a file's bytes, refusing oversized files before reading them.
pub fn read_file_bytes(path: &Path, max_size_bytes: u64) -> Result<Vec<u8>, DecodeError> {
    let metadata = std::fs::metadata(path)?;
    check_size(metadata.len(), max_size_bytes)?;
    Ok(std::fs::read(path)?)
}

/// Read and decode a file.
pub fn decode_file(path: &Path, max_size_bytes: u64) -> Result<PixelBuffer, DecodeError> {
    let bytes = read_file_bytes(path, max_size_bytes)?;
    decode(&bytes, max_size_bytes)
}
