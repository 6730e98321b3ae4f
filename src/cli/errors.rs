use thiserror::Error;

use whiteout::InputFormat;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file extension: {path}. Accepted: {accepted}")]
    UnsupportedExtension { path: String, accepted: String },

    #[error("Max size must be greater than 0 MiB, got: {size}")]
    ZeroMaxSize { size: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pipeline(#[from] whiteout::Error),
}

impl AppError {
    pub fn unsupported_extension(path: &std::path::Path) -> Self {
        AppError::UnsupportedExtension {
            path: path.display().to_string(),
            accepted: InputFormat::ACCEPTED_EXTENSIONS.join(", "),
        }
    }

    /// Message shown to the user before the technical cause.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UnsupportedExtension { .. } => {
                "Unsupported file type. Supported: PNG, JPEG, WEBP, BMP, GIF.".to_string()
            }
            AppError::ZeroMaxSize { .. } => "Invalid maximum file size.".to_string(),
            AppError::Io(_) => "Failed to write the output.".to_string(),
            AppError::Pipeline(e) => e.user_message(),
        }
    }
}
