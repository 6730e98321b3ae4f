//! I/O layer: the `decoder` turns uploaded bytes or files into pixel buffers,
//! and `writers` serialize processed buffers back to PNG.
pub mod decoder;
pub use decoder::{decode, decode_file, read_file_bytes, sniff_format};

pub mod writers;
pub use writers::png::{encode, write_encoded, write_png};
