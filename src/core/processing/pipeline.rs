use tracing::{info, info_span};

use crate::core::params::PipelineConfig;
use crate::core::processing::classify::{ClassifyStats, remove_background};
use crate::core::processing::preview::composite_preview;
use crate::error::Result;
use crate::io::decoder::decode;
use crate::io::writers::png::encode;
use crate::types::PreviewBackground;

/// Result of one background-removal request
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub width: u32,
    pub height: u32,
    /// Transparent PNG
    pub png: Vec<u8>,
    /// Flattened PNG over the requested backdrop, if any
    pub preview: Option<Vec<u8>>,
    pub stats: ClassifyStats,
}

/// Decode, classify and encode `bytes` in one pass.
///
/// The pixel buffer is created here and dropped once encoded; a failure at
/// any stage returns that stage's error and no output.
pub fn process_bytes_pipeline(
    bytes: &[u8],
    config: &PipelineConfig,
    preview: Option<PreviewBackground>,
) -> Result<ProcessedImage> {
    let span = info_span!("remove_background", input_bytes = bytes.len());
    let _guard = span.enter();

    let buffer = decode(bytes, config.max_input_bytes)?;
    let (buffer, stats) = remove_background(buffer, &config.removal)?;

    let preview = match preview {
        Some(bg) => Some(encode(&composite_preview(&buffer, bg))?),
        None => None,
    };
    let png = encode(&buffer)?;
    let (width, height) = (buffer.width, buffer.height);
    drop(buffer);

    info!(
        "Processed {}x{} image: {} transparent pixels, {} PNG bytes",
        width,
        height,
        stats.background_pixels,
        png.len()
    );

    Ok(ProcessedImage {
        width,
        height,
        png,
        preview,
        stats,
    })
}
