use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::buffer::PixelBuffer;
use crate::core::params::RemovalParams;
use crate::error::ClassifyError;
use crate::types::Color;

/// Per-request classification summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub total_pixels: usize,
    pub background_pixels: usize,
}

impl ClassifyStats {
    pub fn foreground_pixels(&self) -> usize {
        self.total_pixels - self.background_pixels
    }
}

#[inline]
pub fn is_background(rgb: Color, params: &RemovalParams) -> bool {
    rgb.l1_distance(params.target) <= params.tolerance
}

/// Clear alpha on every background pixel of `row`; returns how many matched.
fn classify_row(row: &mut [u8], params: &RemovalParams) -> usize {
    let mut matched = 0;
    for px in row.chunks_exact_mut(PixelBuffer::CHANNELS) {
        if is_background(Color::new(px[0], px[1], px[2]), params) {
            px[3] = 0;
            matched += 1;
        }
    }
    matched
}

/// Make background pixels fully transparent, leaving every other byte untouched.
///
/// Already-transparent background pixels keep alpha 0, so running this twice
/// gives the same buffer as running it once.
pub fn remove_background_in_place(
    buffer: &mut PixelBuffer,
    params: &RemovalParams,
) -> Result<ClassifyStats, ClassifyError> {
    buffer.validate()?;

    let total_pixels = buffer.pixel_count();
    if total_pixels == 0 {
        return Ok(ClassifyStats::default());
    }

    let row_len = buffer.width as usize * PixelBuffer::CHANNELS;
    debug!(
        "Classifying {}x{} pixels against {} (tolerance {})",
        buffer.width, buffer.height, params.target, params.tolerance
    );

    let background_pixels: usize = buffer
        .data
        .par_chunks_mut(row_len)
        .map(|row| classify_row(row, params))
        .sum();

    info!(
        "Background removal: {} of {} pixels made transparent",
        background_pixels, total_pixels
    );

    Ok(ClassifyStats {
        total_pixels,
        background_pixels,
    })
}

/// Owned form: the buffer moves in and comes back with background alpha cleared.
pub fn remove_background(
    mut buffer: PixelBuffer,
    params: &RemovalParams,
) -> Result<(PixelBuffer, ClassifyStats), ClassifyError> {
    let stats = remove_background_in_place(&mut buffer, params)?;
    Ok((buffer, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn single(rgba: [u8; 4]) -> PixelBuffer {
        PixelBuffer::filled(1, 1, rgba)
    }

    #[test]
    fn all_white_image_becomes_transparent() {
        let mut buffer = PixelBuffer::filled(2, 2, [255, 255, 255, 255]);
        let stats = remove_background_in_place(&mut buffer, &RemovalParams::default()).unwrap();
        assert_eq!(stats.background_pixels, 4);
        assert!(buffer.data.chunks_exact(4).all(|px| px == [255, 255, 255, 0]));
    }

    #[test]
    fn black_pixel_stays_opaque() {
        let mut buffer = single([0, 0, 0, 255]);
        remove_background_in_place(&mut buffer, &RemovalParams::default()).unwrap();
        assert_eq!(buffer.data, vec![0, 0, 0, 255]);
    }

    #[test]
    fn light_gray_is_foreground() {
        let mut buffer = single([240, 240, 240, 255]);
        let stats = remove_background_in_place(&mut buffer, &RemovalParams::default()).unwrap();
        assert_eq!(stats.background_pixels, 0);
        assert_eq!(buffer.data, vec![240, 240, 240, 255]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let params = RemovalParams::default();

        let mut at_30 = single([245, 245, 245, 200]);
        remove_background_in_place(&mut at_30, &params).unwrap();
        assert_eq!(at_30.data, vec![245, 245, 245, 0]);

        let mut at_31 = single([245, 245, 244, 200]);
        remove_background_in_place(&mut at_31, &params).unwrap();
        assert_eq!(at_31.data, vec![245, 245, 244, 200]);
    }

    #[test]
    fn foreground_keeps_its_original_alpha() {
        let mut buffer = single([10, 120, 200, 77]);
        remove_background_in_place(&mut buffer, &RemovalParams::default()).unwrap();
        assert_eq!(buffer.data, vec![10, 120, 200, 77]);
    }

    #[test]
    fn custom_target_and_tolerance_are_honored() {
        let params = RemovalParams {
            target: Color::new(0, 255, 0),
            tolerance: 0,
        };
        let mut buffer = PixelBuffer::from_raw(2, 1, vec![0, 255, 0, 255, 0, 254, 0, 255]).unwrap();
        remove_background_in_place(&mut buffer, &params).unwrap();
        assert_eq!(buffer.data, vec![0, 255, 0, 0, 0, 254, 0, 255]);
    }

    #[test]
    fn malformed_buffer_is_rejected_untouched() {
        let mut buffer = PixelBuffer {
            width: 2,
            height: 2,
            data: vec![255; 15],
        };
        let err = remove_background_in_place(&mut buffer, &RemovalParams::default()).unwrap_err();
        assert!(matches!(err, ClassifyError::MalformedBuffer { len: 15, .. }));
        assert!(buffer.data.iter().all(|&b| b == 255));
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut buffer = PixelBuffer::filled(0, 5, [0; 4]);
        let stats = remove_background_in_place(&mut buffer, &RemovalParams::default()).unwrap();
        assert_eq!(stats, ClassifyStats::default());
    }

    #[test]
    fn owned_form_returns_the_same_buffer() {
        let buffer = PixelBuffer::filled(3, 1, [250, 250, 250, 255]);
        let (buffer, stats) = remove_background(buffer, &RemovalParams::default()).unwrap();
        assert_eq!(stats.foreground_pixels(), 0);
        assert_eq!(buffer.width, 3);
        assert!(buffer.data.chunks_exact(4).all(|px| px[3] == 0));
    }

    proptest! {
        #[test]
        fn per_pixel_rule_holds(pixels in proptest::collection::vec(any::<[u8; 4]>(), 1..64)) {
            let params = RemovalParams::default();
            let width = pixels.len() as u32;
            let original: Vec<u8> = pixels.iter().flatten().copied().collect();
            let mut buffer = PixelBuffer::from_raw(width, 1, original.clone()).unwrap();
            remove_background_in_place(&mut buffer, &params).unwrap();

            for (before, after) in original.chunks_exact(4).zip(buffer.data.chunks_exact(4)) {
                let rgb = Color::new(before[0], before[1], before[2]);
                prop_assert_eq!(&after[..3], &before[..3]);
                if rgb.l1_distance(Color::WHITE) <= 30 {
                    prop_assert_eq!(after[3], 0);
                } else {
                    prop_assert_eq!(after[3], before[3]);
                }
            }
        }

        #[test]
        fn classification_is_idempotent(
            pixels in proptest::collection::vec(any::<[u8; 4]>(), 1..64),
            tolerance in 0u32..=765,
        ) {
            let params = RemovalParams { target: Color::WHITE, tolerance };
            let width = pixels.len() as u32;
            let data: Vec<u8> = pixels.iter().flatten().copied().collect();
            let mut once = PixelBuffer::from_raw(width, 1, data).unwrap();
            remove_background_in_place(&mut once, &params).unwrap();
            let mut twice = once.clone();
            remove_background_in_place(&mut twice, &params).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
