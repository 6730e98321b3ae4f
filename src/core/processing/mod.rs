pub mod classify;
pub mod pipeline;
pub mod preview;
