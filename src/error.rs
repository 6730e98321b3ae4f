//! Crate-level error types and `Result` alias for stable, structured error handling.
//! Each pipeline stage (decode, classify, encode) reports its own error kind so
//! callers can tell "file too large" apart from "corrupted file" apart from
//! "could not process image" without string matching.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while turning input bytes into a `PixelBuffer`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Input is empty")]
    Empty,

    #[error("Input is too large: {size} bytes (limit: {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Image exceeds decoding limits: {0}")]
    ExceedsLimits(String),

    #[error("Corrupted image data: {0}")]
    Corrupted(String),

    #[error("I/O error while reading image: {0}")]
    Io(#[from] std::io::Error),
}

/// Internal invariant violation on a pixel buffer handed to the classifier.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Malformed pixel buffer: {width}x{height} RGBA needs {expected} bytes, got {len}")]
    MalformedBuffer {
        width: u32,
        height: u32,
        expected: u64,
        len: usize,
    },
}

/// Failures while serializing a `PixelBuffer` to PNG.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("PNG encoding failed: {0}")]
    Png(String),

    #[error("I/O error while writing image: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Classify error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a byte limit in the largest unit that divides it exactly.
fn format_limit(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    match bytes {
        0 => "0 bytes".to_string(),
        b if b % MB == 0 => format!("{}MB", b / MB),
        b if b % KB == 0 => format!("{}KB", b / KB),
        b => format!("{} bytes", b),
    }
}

impl Error {
    /// Short, user-facing message for the error kind.
    pub fn user_message(&self) -> String {
        match self {
            Error::Decode(DecodeError::TooLarge { max, .. }) => {
                format!("File is too large. Maximum size is {}.", format_limit(*max))
            }
            Error::Decode(DecodeError::ExceedsLimits(_)) => {
                "Image dimensions are too large to process.".to_string()
            }
            Error::Decode(DecodeError::UnsupportedFormat(_)) => {
                "Unsupported image format. Supported: PNG, JPEG, WEBP, BMP, GIF.".to_string()
            }
            Error::Decode(_) => "Failed to read the file. It might be corrupted.".to_string(),
            Error::Classify(_) => "Failed to load image for processing.".to_string(),
            Error::Encode(_) => "Could not process image.".to_string(),
            Error::Config(_) => "Invalid configuration file.".to_string(),
            Error::Io(_) => "Failed to read the file.".to_string(),
        }
    }
}
