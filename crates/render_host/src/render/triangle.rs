//! The scene: one triangle, one draw call

use crate::render::pipeline::{ColoredVertex, Pipeline};

/// Red top, green left, blue right, four units in front of the camera
pub const TRIANGLE: [ColoredVertex; 3] = [
    ColoredVertex::new([0.0, 0.5, -4.0], [1.0, 0.0, 0.0]),
    ColoredVertex::new([-0.5, 0.0, -4.0], [0.0, 1.0, 0.0]),
    ColoredVertex::new([0.0, 0.0, -4.0], [0.0, 0.0, 1.0]),
];

/// One-time pipeline state, applied before the first frame
pub fn prepare<P: Pipeline + ?Sized>(pipeline: &mut P) {
    pipeline.enable_smooth_shading();
    pipeline.enable_depth_test();
}

/// Draw a frame into the back buffer.
///
/// Expects the model/view stack to be current, which the resize notifier
/// guarantees.
pub fn draw_frame<P: Pipeline + ?Sized>(pipeline: &mut P) {
    pipeline.clear();
    pipeline.load_identity();

    pipeline.push_matrix();
    pipeline.draw_triangle(&TRIANGLE);
    pipeline.pop_matrix();
}
