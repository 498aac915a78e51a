//! OpenGL implementation of [`Pipeline`]

use std::ffi::c_void;
use std::marker::PhantomData;

use crate::foundation::math::Mat4d;
use crate::render::pipeline::{ColoredVertex, MatrixMode, Pipeline};
use crate::window::WindowError;

#[allow(
    missing_docs,
    unused,
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

/// Fixed-function pipeline backed by the current OpenGL context
///
/// Only constructible through [`GlPipeline::load`], after a context has been
/// made current on this thread. Not `Send`: the context belongs to the thread
/// that created the window.
pub struct GlPipeline {
    _context: PhantomData<*const ()>,
}

impl GlPipeline {
    /// Resolve the GL entry points through `loader` and check that the legacy
    /// matrix and immediate-mode functions are available.
    ///
    /// A core-profile context lacks them, which is reported as a
    /// window-creation failure since the window cannot be drawn into.
    pub fn load<F>(loader: F) -> Result<Self, WindowError>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        bindings::load_with(loader);

        let missing: Vec<&str> = [
            ("glViewport", bindings::Viewport::is_loaded()),
            ("glMatrixMode", bindings::MatrixMode::is_loaded()),
            ("glLoadIdentity", bindings::LoadIdentity::is_loaded()),
            ("glMultMatrixd", bindings::MultMatrixd::is_loaded()),
            ("glPushMatrix", bindings::PushMatrix::is_loaded()),
            ("glPopMatrix", bindings::PopMatrix::is_loaded()),
            ("glShadeModel", bindings::ShadeModel::is_loaded()),
            ("glEnable", bindings::Enable::is_loaded()),
            ("glClear", bindings::Clear::is_loaded()),
            ("glBegin", bindings::Begin::is_loaded()),
            ("glEnd", bindings::End::is_loaded()),
            ("glColor3f", bindings::Color3f::is_loaded()),
            ("glVertex3f", bindings::Vertex3f::is_loaded()),
        ]
        .into_iter()
        .filter(|(_, loaded)| !loaded)
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(WindowError::CreationFailed(format!(
                "OpenGL context lacks fixed-function entry points: {}",
                missing.join(", ")
            )));
        }

        log::debug!("OpenGL entry points loaded");
        Ok(Self {
            _context: PhantomData,
        })
    }
}

impl Pipeline for GlPipeline {
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { bindings::Viewport(x, y, width, height) };
    }

    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        let mode = match mode {
            MatrixMode::Projection => bindings::PROJECTION,
            MatrixMode::ModelView => bindings::MODELVIEW,
        };
        unsafe { bindings::MatrixMode(mode) };
    }

    fn load_identity(&mut self) {
        unsafe { bindings::LoadIdentity() };
    }

    fn multiply_matrix(&mut self, matrix: &Mat4d) {
        // nalgebra storage is column-major, which is what GL expects.
        unsafe { bindings::MultMatrixd(matrix.as_ptr()) };
    }

    fn push_matrix(&mut self) {
        unsafe { bindings::PushMatrix() };
    }

    fn pop_matrix(&mut self) {
        unsafe { bindings::PopMatrix() };
    }

    fn enable_smooth_shading(&mut self) {
        unsafe { bindings::ShadeModel(bindings::SMOOTH) };
    }

    fn enable_depth_test(&mut self) {
        unsafe { bindings::Enable(bindings::DEPTH_TEST) };
    }

    fn clear(&mut self) {
        unsafe { bindings::Clear(bindings::COLOR_BUFFER_BIT | bindings::DEPTH_BUFFER_BIT) };
    }

    fn draw_triangle(&mut self, vertices: &[ColoredVertex; 3]) {
        unsafe {
            bindings::Begin(bindings::TRIANGLES);
            for vertex in vertices {
                let [r, g, b] = vertex.color;
                let [x, y, z] = vertex.position;
                bindings::Color3f(r, g, b);
                bindings::Vertex3f(x, y, z);
            }
            bindings::End();
        }
    }
}
