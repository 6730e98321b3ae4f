#![doc = r#"
whiteout: remove solid white backgrounds from raster images.

This crate decodes an uploaded image (PNG, JPEG, WEBP, BMP or GIF), makes every
pixel within a fixed L1 color distance of white fully transparent, and encodes
the result as a PNG. Everything runs in-process; nothing is sent anywhere. It
powers the `whiteout` CLI and can be embedded in your own Rust applications.

Classification
--------------
A pixel is background when `|r-255| + |g-255| + |b-255| <= 30`. Background pixels
get alpha 0 and keep their RGB; every other pixel is left byte-for-byte
unchanged. There is no feathering at the boundary.

Quick start: file to file
-------------------------
```rust,no_run
use std::path::Path;
use whiteout::{output_file_name, process_file_to_path, PipelineConfig};

fn main() -> whiteout::Result<()> {
    let output = output_file_name("product.jpg"); // "product_transparent_white_bg.png"
    let processed = process_file_to_path(
        Path::new("product.jpg"),
        Path::new(&output),
        &PipelineConfig::default(),
    )?;
    println!(
        "{}x{}: {} pixels made transparent",
        processed.width, processed.height, processed.stats.background_pixels
    );
    Ok(())
}
```

Stage by stage
--------------
The pixel buffer moves through the stages by value: decode creates it,
`remove_background` takes it and hands it back, `encode` reads it.

```rust
use whiteout::{decode, encode, remove_background, PixelBuffer, RemovalParams, DEFAULT_MAX_INPUT_BYTES};

fn main() -> whiteout::Result<()> {
    let input = encode(&PixelBuffer::filled(2, 2, [255, 255, 255, 255]))?;

    let buffer = decode(&input, DEFAULT_MAX_INPUT_BYTES)?;
    let buffer = remove_background(buffer, &RemovalParams::default())?;
    assert!(buffer.data.chunks_exact(4).all(|px| px[3] == 0));

    let png = encode(&buffer)?;
    assert_eq!(decode(&png, DEFAULT_MAX_INPUT_BYTES)?, buffer);
    Ok(())
}
```

Error handling
--------------
Each stage has its own error type (`DecodeError`, `ClassifyError`,
`EncodeError`); the high-level helpers wrap them in `whiteout::Error`, whose
`user_message()` gives a short message suitable for display.

```rust
use whiteout::{process_bytes, DecodeError, Error, PipelineConfig};

let config = PipelineConfig { max_input_bytes: 8, ..PipelineConfig::default() };
match process_bytes(&[0u8; 16], &config) {
    Err(err @ Error::Decode(DecodeError::TooLarge { .. })) => {
        assert!(err.user_message().starts_with("File is too large."));
    }
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`]: high-level entry points and artifact naming.
- [`core`]: pixel buffer, parameters, classifier, preview compositor.
- [`io`]: decoder and PNG writer.
- [`types`]: `Color`, `InputFormat`, `PreviewBackground`.
- [`error`]: stage errors, crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::buffer::PixelBuffer;
pub use crate::core::params::{
    DEFAULT_MAX_INPUT_BYTES, DEFAULT_TARGET, DEFAULT_TOLERANCE, PipelineConfig, RemovalParams,
};
pub use crate::core::processing::classify::{ClassifyStats, remove_background_in_place};
pub use error::{ClassifyError, DecodeError, EncodeError, Error, Result};
pub use types::{Color, InputFormat, PreviewBackground};

// High-level API re-exports
pub use api::{
    ProcessedImage, decode, default_output_path, encode, output_file_name, preview,
    preview_file_name, process_bytes, process_bytes_with_preview, process_file_to_path,
    process_file_with_options, remove_background,
};
