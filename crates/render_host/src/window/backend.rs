//! Traits the host is written against
//!
//! The host never names GLFW directly; it drives a [`WindowSystem`] and the
//! [`WindowBackend`] it creates. Tests run the full lifecycle against mocks.

use crate::config::WindowConfig;
use crate::render::Pipeline;
use crate::window::{HostEvent, WindowResult};

/// Process-wide windowing subsystem handle
///
/// Dropping it releases the subsystem, so it must outlive every window it
/// created.
pub trait WindowSystem {
    /// Window type produced by this subsystem
    type Window: WindowBackend;

    /// Create a window with a current rendering context and input
    /// notifications enabled
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Self::Window>;
}

/// One on-screen surface plus its rendering context
pub trait WindowBackend {
    /// Pipeline bound to this window's context
    type Pipeline: Pipeline;

    /// Whether the close flag is set, either by the user closing the window
    /// or by [`set_should_close`](Self::set_should_close)
    fn should_close(&self) -> bool;

    /// Set or clear the close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Process pending events without blocking and return them in arrival order
    fn poll_events(&mut self) -> Vec<HostEvent>;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (i32, i32);

    /// Load the rendering entry points for this window's context
    fn create_pipeline(&mut self) -> WindowResult<Self::Pipeline>;
}
