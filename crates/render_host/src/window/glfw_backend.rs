//! Window management using GLFW
//!
//! Provides window creation, an OpenGL context and event polling.

use glfw::{Context, WindowHint, WindowMode};

use crate::callbacks;
use crate::config::WindowConfig;
use crate::render::GlPipeline;
use crate::window::{HostEvent, WindowBackend, WindowError, WindowResult, WindowSystem};

/// GLFW library handle
///
/// Installs the error notifier before initialization so failures during
/// `glfwInit` itself are reported. Dropping the last handle terminates GLFW.
pub struct GlfwSystem {
    glfw: glfw::Glfw,
}

impl GlfwSystem {
    /// Initialize GLFW
    pub fn init() -> WindowResult<Self> {
        let glfw = glfw::init(callbacks::on_error)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        log::debug!("GLFW initialized");
        Ok(Self { glfw })
    }
}

impl WindowSystem for GlfwSystem {
    type Window = GlfwWindow;

    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<GlfwWindow> {
        self.glfw.window_hint(WindowHint::Resizable(config.resizable));

        let (mut window, events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, WindowMode::Windowed)
            .ok_or_else(|| {
                WindowError::CreationFailed(format!(
                    "{}x{} \"{}\"",
                    config.width, config.height, config.title
                ))
            })?;

        window.make_current();

        // Polling stands in for callback registration: every enabled event
        // lands in `events` and is dispatched by the host in arrival order.
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);

        log::info!(
            "Window created: {}x{} \"{}\"",
            config.width,
            config.height,
            config.title
        );

        Ok(GlfwWindow {
            window,
            events,
            glfw: self.glfw.clone(),
        })
    }
}

/// GLFW window with its OpenGL context
///
/// Field order matters: the window is destroyed before this handle's
/// reference to the library is released.
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl WindowBackend for GlfwWindow {
    type Pipeline = GlPipeline;

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) -> Vec<HostEvent> {
        self.glfw.poll_events();

        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| HostEvent::from_window_event(event))
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn create_pipeline(&mut self) -> WindowResult<GlPipeline> {
        let window = &mut self.window;
        GlPipeline::load(|symbol| window.get_proc_address(symbol) as *const _)
    }
}
