// End-to-end tests for decode -> remove_background -> encode
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use proptest::prelude::*;
use whiteout::{
    Color, DEFAULT_MAX_INPUT_BYTES, DecodeError, Error, PipelineConfig, PixelBuffer,
    RemovalParams, decode, encode, process_bytes, remove_background,
};

fn encode_as(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

fn bordered_image() -> RgbaImage {
    // 5x5, white border, colored 3x3 center
    RgbaImage::from_fn(5, 5, |x, y| {
        if x == 0 || y == 0 || x == 4 || y == 4 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([200, 30, 60, 255])
        }
    })
}

#[test]
fn scenario_a_all_white_becomes_transparent() {
    let input = encode(&PixelBuffer::filled(2, 2, [255, 255, 255, 255])).unwrap();
    let buffer = decode(&input, DEFAULT_MAX_INPUT_BYTES).unwrap();
    let buffer = remove_background(buffer, &RemovalParams::default()).unwrap();
    assert_eq!(buffer.pixel_count(), 4);
    assert!(buffer.data.chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn scenario_b_black_pixel_is_unchanged() {
    let buffer = PixelBuffer::filled(1, 1, [0, 0, 0, 255]);
    let buffer = remove_background(buffer, &RemovalParams::default()).unwrap();
    assert_eq!(buffer.data, vec![0, 0, 0, 255]);
}

#[test]
fn scenario_c_light_gray_is_unchanged() {
    let buffer = PixelBuffer::filled(1, 1, [240, 240, 240, 255]);
    let buffer = remove_background(buffer, &RemovalParams::default()).unwrap();
    assert_eq!(buffer.data, vec![240, 240, 240, 255]);
}

#[test]
fn scenario_d_oversized_input_is_a_decode_error() {
    let bytes = vec![0u8; DEFAULT_MAX_INPUT_BYTES as usize + 1];
    let err = decode(&bytes, DEFAULT_MAX_INPUT_BYTES).unwrap_err();
    assert!(matches!(err, DecodeError::TooLarge { .. }));

    let err = process_bytes(&bytes, &PipelineConfig::default()).unwrap_err();
    assert_eq!(err.user_message(), "File is too large. Maximum size is 30MB.");
}

#[test]
fn scenario_e_only_the_border_becomes_transparent() {
    let input = encode_as(&bordered_image(), ImageFormat::Png);
    let processed = process_bytes(&input, &PipelineConfig::default()).unwrap();
    assert_eq!(processed.stats.background_pixels, 16);
    assert_eq!(processed.stats.foreground_pixels(), 9);

    let out = decode(&processed.png, DEFAULT_MAX_INPUT_BYTES).unwrap();
    for y in 0..5 {
        for x in 0..5 {
            let px = out.pixel(x, y).unwrap();
            if x == 0 || y == 0 || x == 4 || y == 4 {
                assert_eq!(px, [255, 255, 255, 0], "border ({x},{y})");
            } else {
                assert_eq!(px, [200, 30, 60, 255], "center ({x},{y})");
            }
        }
    }
}

#[test]
fn lossless_inputs_decode_to_the_same_pixels() {
    let source = bordered_image();
    for format in [ImageFormat::Png, ImageFormat::WebP, ImageFormat::Bmp] {
        let buffer = decode(&encode_as(&source, format), DEFAULT_MAX_INPUT_BYTES).unwrap();
        assert_eq!(buffer, PixelBuffer::from(source.clone()), "{format:?}");
    }
}

#[test]
fn gif_input_is_processed() {
    let white = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
    let input = encode_as(&white, ImageFormat::Gif);
    let processed = process_bytes(&input, &PipelineConfig::default()).unwrap();
    assert_eq!((processed.width, processed.height), (4, 4));
    assert_eq!(processed.stats.background_pixels, 16);
}

#[test]
fn jpeg_output_is_never_produced() {
    let source = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
    let rgb = image::DynamicImage::ImageRgba8(source).to_rgb8();
    let mut jpeg = Cursor::new(Vec::new());
    rgb.write_to(&mut jpeg, ImageFormat::Jpeg).unwrap();

    let processed = process_bytes(jpeg.get_ref(), &PipelineConfig::default()).unwrap();
    assert_eq!(image::guess_format(&processed.png).unwrap(), ImageFormat::Png);
}

#[test]
fn corrupted_input_reports_a_read_failure() {
    let mut png = encode(&PixelBuffer::filled(16, 16, [9, 9, 9, 255])).unwrap();
    png.truncate(40);
    let err = process_bytes(&png, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Decode(DecodeError::Corrupted(_))), "{err:?}");
    assert_eq!(
        err.user_message(),
        "Failed to read the file. It might be corrupted."
    );
}

#[test]
fn reprocessing_from_original_bytes_is_stable() {
    let input = encode_as(&bordered_image(), ImageFormat::Png);
    let first = process_bytes(&input, &PipelineConfig::default()).unwrap();
    let second = process_bytes(&input, &PipelineConfig::default()).unwrap();
    assert_eq!(first.png, second.png);
}

fn arb_buffer() -> impl Strategy<Value = PixelBuffer> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
            .prop_map(move |data| PixelBuffer::from_raw(w, h, data).unwrap())
    })
}

proptest! {
    #[test]
    fn classified_buffers_round_trip_through_png(buffer in arb_buffer()) {
        let buffer = remove_background(buffer, &RemovalParams::default()).unwrap();
        let png = encode(&buffer).unwrap();
        let decoded = decode(&png, u64::MAX).unwrap();
        prop_assert_eq!(decoded, buffer);
    }

    #[test]
    fn near_white_pixels_lose_alpha_and_others_are_untouched(buffer in arb_buffer()) {
        let original = buffer.clone();
        let processed = remove_background(buffer, &RemovalParams::default()).unwrap();
        for (before, after) in original.data.chunks_exact(4).zip(processed.data.chunks_exact(4)) {
            let distance = Color::new(before[0], before[1], before[2]).l1_distance(Color::WHITE);
            if distance <= 30 {
                prop_assert_eq!(after, &[before[0], before[1], before[2], 0][..]);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
