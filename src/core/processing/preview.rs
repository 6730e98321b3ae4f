use tracing::debug;

use crate::core::buffer::PixelBuffer;
use crate::types::PreviewBackground;

#[inline]
fn blend_channel(channel: u8, backdrop: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((channel as u32 * a + backdrop as u32 * (255 - a) + 127) / 255) as u8
}

/// Flatten `buffer` onto a solid backdrop, producing a fully opaque copy.
///
/// Fully opaque pixels keep their RGB; fully transparent ones take the
/// backdrop color. The source buffer is left as is.
pub fn composite_preview(buffer: &PixelBuffer, background: PreviewBackground) -> PixelBuffer {
    let backdrop = background.color();
    debug!(
        "Compositing {}x{} preview over {} backdrop",
        buffer.width, buffer.height, background
    );

    let mut data = Vec::with_capacity(buffer.data.len());
    for px in buffer.data.chunks_exact(PixelBuffer::CHANNELS) {
        let alpha = px[3];
        data.extend_from_slice(&[
            blend_channel(px[0], backdrop.r, alpha),
            blend_channel(px[1], backdrop.g, alpha),
            blend_channel(px[2], backdrop.b, alpha),
            255,
        ]);
    }

    PixelBuffer {
        width: buffer.width,
        height: buffer.height,
        data,
    }
}
