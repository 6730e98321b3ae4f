use image::RgbaImage;

use crate::error::ClassifyError;

/// Row-major RGBA8 pixel grid.
///
/// `data.len()` must equal `width * height * 4`; [`PixelBuffer::validate`]
/// checks it. A buffer is owned by exactly one pipeline stage at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub const CHANNELS: usize = 4;

    /// Build a buffer from raw RGBA bytes, rejecting a length mismatch.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ClassifyError> {
        let buffer = Self {
            width,
            height,
            data,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// A `width x height` buffer filled with one RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * Self::CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn expected_len(width: u32, height: u32) -> Option<u64> {
        (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(Self::CHANNELS as u64))
    }

    pub fn validate(&self) -> Result<(), ClassifyError> {
        let malformed = |expected| ClassifyError::MalformedBuffer {
            width: self.width,
            height: self.height,
            expected,
            len: self.data.len(),
        };
        let expected = Self::expected_len(self.width, self.height).ok_or_else(|| malformed(u64::MAX))?;
        if self.data.len() as u64 != expected || self.data.len() % Self::CHANNELS != 0 {
            return Err(malformed(expected));
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / Self::CHANNELS
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        self.data
            .get(offset..offset + Self::CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Overwrite one pixel; `None` when `(x, y)` is outside the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Option<()> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        let px = self.data.get_mut(offset..offset + Self::CHANNELS)?;
        px.copy_from_slice(&rgba);
        Some(())
    }

    pub fn into_rgba_image(self) -> Result<RgbaImage, ClassifyError> {
        self.validate()?;
        let (width, height, len) = (self.width, self.height, self.data.len());
        RgbaImage::from_raw(width, height, self.data).ok_or(ClassifyError::MalformedBuffer {
            width,
            height,
            expected: Self::expected_len(width, height).unwrap_or(u64::MAX),
            len,
        })
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }
}
