//! Output writers. Results are always PNG so the transparency survives.
pub mod png;
