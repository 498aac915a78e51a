//! Projection math
//!
//! Only what the resize notifier needs: a perspective transform matching
//! `gluPerspective`, stored column-major so it can be handed to OpenGL as is.

pub use nalgebra::Matrix4;

use crate::config::ProjectionConfig;

/// 4x4 double precision matrix, the element type of the fixed-function matrix stack
pub type Mat4d = Matrix4<f64>;

/// Perspective projection parameters currently loaded into the projection transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f64,
    /// Width divided by height of the viewport
    pub aspect: f64,
    /// Near clip plane distance
    pub near: f64,
    /// Far clip plane distance
    pub far: f64,
}

impl Projection {
    /// Build the projection for a framebuffer of `width` x `height` pixels.
    ///
    /// Returns `None` when either dimension is zero, which happens while the
    /// window is iconified.
    pub fn for_framebuffer(config: &ProjectionConfig, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }

        Some(Self {
            fov_y_degrees: config.fov_y_degrees,
            aspect: f64::from(width) / f64::from(height),
            near: config.near,
            far: config.far,
        })
    }

    /// Vertical field of view in radians
    pub fn fov_y_radians(&self) -> f64 {
        self.fov_y_degrees.to_radians()
    }

    /// Column-major perspective matrix, identical to what `gluPerspective`
    /// multiplies onto the current matrix
    pub fn to_matrix(&self) -> Mat4d {
        Mat4d::new_perspective(self.aspect, self.fov_y_radians(), self.near, self.far)
    }
}
