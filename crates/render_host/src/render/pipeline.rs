//! Fixed-function pipeline interface

use crate::foundation::math::Mat4d;

/// Which matrix stack subsequent transform calls apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    /// Scene to clip space
    Projection,
    /// Object placement relative to the camera
    ModelView,
}

/// A vertex with its own color; colors are interpolated across the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    /// Eye-space position
    pub position: [f32; 3],
    /// RGB, each channel in `0.0..=1.0`
    pub color: [f32; 3],
}

impl ColoredVertex {
    /// Create a vertex
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Legacy OpenGL state machine operations used by the host
///
/// Calls must happen on the thread whose context is current. Implementations
/// are not expected to report errors; the driver state is authoritative.
pub trait Pipeline {
    /// Map normalized device coordinates onto the given pixel rectangle
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Select the matrix stack that later transform calls modify
    fn set_matrix_mode(&mut self, mode: MatrixMode);

    /// Replace the current matrix with identity
    fn load_identity(&mut self);

    /// Post-multiply the current matrix by `matrix`
    fn multiply_matrix(&mut self, matrix: &Mat4d);

    /// Duplicate the top of the current matrix stack
    fn push_matrix(&mut self);

    /// Discard the top of the current matrix stack
    fn pop_matrix(&mut self);

    /// Interpolate vertex colors across primitives
    fn enable_smooth_shading(&mut self);

    /// Reject fragments behind what is already in the depth buffer
    fn enable_depth_test(&mut self);

    /// Clear both the color and the depth buffer
    fn clear(&mut self);

    /// Submit one triangle in immediate mode
    fn draw_triangle(&mut self, vertices: &[ColoredVertex; 3]);
}
