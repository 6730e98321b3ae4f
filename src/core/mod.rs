//! Core processing building blocks: the pixel buffer, request parameters,
//! background classification and preview compositing. These are internal
//! primitives consumed by the high-level `api` module.
pub mod buffer;
pub mod params;
pub mod processing;
