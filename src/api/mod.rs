//! High-level, ergonomic library API: the three pipeline stages as standalone
//! calls, one-call helpers for bytes and files, and the download artifact
//! naming. Prefer these entrypoints over the low-level `core` and `io` modules.
use std::path::Path;

use tracing::info;

use crate::core::buffer::PixelBuffer;
use crate::core::params::{PipelineConfig, RemovalParams};
use crate::core::processing::classify;
use crate::core::processing::pipeline::process_bytes_pipeline;
use crate::core::processing::preview::composite_preview;
use crate::error::{ClassifyError, DecodeError, EncodeError, Error, Result};
use crate::io::{decoder, writers};
use crate::types::PreviewBackground;

pub use crate::core::processing::pipeline::ProcessedImage;

const OUTPUT_SUFFIX: &str = "_transparent_white_bg";

/// Decode image bytes into a fresh RGBA buffer.
pub fn decode(bytes: &[u8], max_size_bytes: u64) -> std::result::Result<PixelBuffer, DecodeError> {
    decoder::decode(bytes, max_size_bytes)
}

/// Take ownership of `buffer`, clear alpha on background pixels, and hand it back.
pub fn remove_background(
    buffer: PixelBuffer,
    params: &RemovalParams,
) -> std::result::Result<PixelBuffer, ClassifyError> {
    classify::remove_background(buffer, params).map(|(buffer, _stats)| buffer)
}

/// Encode a buffer as PNG.
pub fn encode(buffer: &PixelBuffer) -> std::result::Result<Vec<u8>, EncodeError> {
    writers::png::encode(buffer)
}

/// Flatten a processed buffer onto white or black for viewing.
pub fn preview(buffer: &PixelBuffer, background: PreviewBackground) -> PixelBuffer {
    composite_preview(buffer, background)
}

/// Run the whole pipeline on in-memory bytes.
pub fn process_bytes(bytes: &[u8], config: &PipelineConfig) -> Result<ProcessedImage> {
    process_bytes_pipeline(bytes, config, None)
}

/// Run the whole pipeline on in-memory bytes, also rendering a flattened preview.
pub fn process_bytes_with_preview(
    bytes: &[u8],
    config: &PipelineConfig,
    background: PreviewBackground,
) -> Result<ProcessedImage> {
    process_bytes_pipeline(bytes, config, Some(background))
}

/// Read `input`, remove its white background and write the PNG to `output`.
pub fn process_file_to_path(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<ProcessedImage> {
    process_file_with_options(input, output, config, None)
}

/// Like [`process_file_to_path`], additionally writing a flattened preview to
/// `preview.1` over the backdrop `preview.0`.
pub fn process_file_with_options(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
    preview: Option<(PreviewBackground, &Path)>,
) -> Result<ProcessedImage> {
    let bytes = decoder::read_file_bytes(input, config.max_input_bytes)?;

    let processed = process_bytes_pipeline(&bytes, config, preview.map(|(bg, _)| bg))?;

    writers::png::write_encoded(output, &processed.png)?;
    info!("Saved transparent PNG: {:?}", output);

    if let (Some((_, preview_path)), Some(preview_png)) = (preview, processed.preview.as_ref()) {
        // A failed request leaves neither artifact behind.
        if let Err(err) = writers::png::write_encoded(preview_path, preview_png) {
            writers::png::discard(output);
            return Err(err.into());
        }
        info!("Saved preview PNG: {:?}", preview_path);
    }

    Ok(processed)
}

/// Base name used for download artifacts: everything before the last `.`,
/// or the whole name when there is no usable extension.
fn artifact_base(original_name: &str) -> &str {
    match original_name.rfind('.') {
        Some(idx) if idx > 0 => &original_name[..idx],
        _ => original_name,
    }
}

/// `<basename>_transparent_white_bg.png`
pub fn output_file_name(original_name: &str) -> String {
    format!("{}{}.png", artifact_base(original_name), OUTPUT_SUFFIX)
}

/// `<basename>_preview_<white|black>.png`
pub fn preview_file_name(original_name: &str, background: PreviewBackground) -> String {
    format!("{}_preview_{}.png", artifact_base(original_name), background)
}

/// Output path next to `input` (or inside `output_dir`) named by [`output_file_name`].
pub fn default_output_path(input: &Path, output_dir: Option<&Path>) -> Result<std::path::PathBuf> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("input path has no file name: {:?}", input),
            ))
        })?;
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(output_file_name(&name)))
}
