//! Shared types used across whiteout.
//! Includes `Color`, the accepted `InputFormat`s, and the `PreviewBackground`
//! backdrop choices.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// An RGB color; channels are 8-bit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// L1 (Manhattan) distance in RGB space: `|r-r0| + |g-g0| + |b-b0|`.
    #[inline]
    pub fn l1_distance(self, other: Color) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Image formats accepted as input.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    Png,
    Jpeg,
    Webp,
    Bmp,
    Gif,
}

impl InputFormat {
    /// File extensions accepted for upload, lowercase and without the dot.
    pub const ACCEPTED_EXTENSIONS: [&'static str; 6] = ["png", "jpeg", "jpg", "webp", "bmp", "gif"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(InputFormat::Png),
            "jpeg" | "jpg" => Some(InputFormat::Jpeg),
            "webp" => Some(InputFormat::Webp),
            "bmp" => Some(InputFormat::Bmp),
            "gif" => Some(InputFormat::Gif),
            _ => None,
        }
    }

    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Map a sniffed `image` crate format onto the accepted set.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(InputFormat::Png),
            image::ImageFormat::Jpeg => Some(InputFormat::Jpeg),
            image::ImageFormat::WebP => Some(InputFormat::Webp),
            image::ImageFormat::Bmp => Some(InputFormat::Bmp),
            image::ImageFormat::Gif => Some(InputFormat::Gif),
            _ => None,
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            InputFormat::Png => image::ImageFormat::Png,
            InputFormat::Jpeg => image::ImageFormat::Jpeg,
            InputFormat::Webp => image::ImageFormat::WebP,
            InputFormat::Bmp => image::ImageFormat::Bmp,
            InputFormat::Gif => image::ImageFormat::Gif,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InputFormat::Png => "PNG",
            InputFormat::Jpeg => "JPEG",
            InputFormat::Webp => "WEBP",
            InputFormat::Bmp => "BMP",
            InputFormat::Gif => "GIF",
        };
        write!(f, "{}", s)
    }
}

/// Solid backdrop used to flatten a transparent result for preview.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Serialize, Deserialize)]
pub enum PreviewBackground {
    White,
    Black,
}

impl PreviewBackground {
    pub fn color(self) -> Color {
        match self {
            PreviewBackground::White => Color::WHITE,
            PreviewBackground::Black => Color::BLACK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PreviewBackground::White => "white",
            PreviewBackground::Black => "black",
        }
    }
}

impl std::fmt::Display for PreviewBackground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
