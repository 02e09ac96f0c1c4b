//! Rendering the transcript and writing it out

pub mod render;
pub mod sink;

pub use render::{render_line, render_transcript};
pub use sink::{OutputTarget, write_output};
