//! Rendering
//!
//! The [`Pipeline`] trait is the seam between the host and OpenGL: the resize
//! notifier and the draw routine only talk to it, [`GlPipeline`] forwards to
//! the driver, and tests substitute a recorder.

pub mod gl;
pub mod pipeline;
pub mod triangle;

pub use gl::GlPipeline;
pub use pipeline::{ColoredVertex, MatrixMode, Pipeline};
pub use triangle::{draw_frame, prepare, TRIANGLE};
