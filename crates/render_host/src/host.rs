//! Render loop host
//!
//! Owns the windowing subsystem, the window and its pipeline, and drives the
//! frame loop:
//!
//! ```text
//! Uninitialized ──init ok──► Running ──close flag──► Closing ──shutdown──► Terminated
//!       │
//!       └──init failed──► process exits with code 1
//! ```
//!
//! Everything runs on the calling thread. Polling never blocks; the close flag
//! is checked once per iteration, before polling.

use thiserror::Error;

use crate::callbacks::{self, Viewport};
use crate::config::{ConfigError, HostConfig};
use crate::foundation::math::Projection;
use crate::render;
use crate::window::{HostEvent, WindowBackend, WindowError, WindowResult, WindowSystem};

/// Lifecycle of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostState {
    /// Nothing acquired yet
    Uninitialized,
    /// Window open, frames being drawn
    Running,
    /// Close flag observed, resources not yet released
    Closing,
    /// Window and subsystem released
    Terminated,
}

/// Host-level errors. Every variant is fatal.
#[derive(Error, Debug)]
pub enum HostError {
    /// Subsystem or window acquisition failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Configuration rejected before anything was acquired
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HostError {
    /// Process exit code for this failure
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames drawn and presented
    pub frames_rendered: u64,
    /// Always [`HostState::Terminated`] for a run that returned
    pub final_state: HostState,
}

impl RunSummary {
    /// Process exit code for a normal run
    pub const fn exit_code(&self) -> i32 {
        0
    }
}

type PipelineOf<S> = <<S as WindowSystem>::Window as WindowBackend>::Pipeline;

/// Owner of the window resource and driver of the frame loop
pub struct RenderLoopHost<S: WindowSystem> {
    pipeline: PipelineOf<S>,
    window: S::Window,
    system: S,
    config: HostConfig,
    viewport: Viewport,
    projection: Option<Projection>,
    state: HostState,
    frames_rendered: u64,
}

impl<S: WindowSystem> RenderLoopHost<S> {
    /// Acquire the subsystem with `init`, open the window, load the pipeline
    /// and establish the initial viewport and projection.
    ///
    /// The configuration is validated first; a rejected one never reaches
    /// `init`. On later failures whatever was acquired is released, in
    /// reverse order, before the error is returned.
    pub fn initialize<F>(init: F, config: HostConfig) -> Result<Self, HostError>
    where
        F: FnOnce() -> WindowResult<S>,
    {
        log::debug!("Host state: {:?}", HostState::Uninitialized);

        if let Err(e) = config.validate() {
            log::error!("Error configuration: {}", e);
            return Err(e.into());
        }

        let mut system = init().map_err(|e| {
            log::error!("Error glfwInit: {}", e);
            e
        })?;

        let mut window = match system.create_window(&config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Error glfwCreateWindow: {}", e);
                drop(system);
                return Err(e.into());
            }
        };

        let mut pipeline = match window.create_pipeline() {
            Ok(pipeline) => pipeline,
            Err(e) => {
                log::error!("Error glfwCreateWindow: {}", e);
                drop(window);
                drop(system);
                return Err(e.into());
            }
        };

        // GLFW does not promise an initial framebuffer-size event.
        let (width, height) = window.framebuffer_size();
        let (viewport, projection) =
            callbacks::on_resize(&mut pipeline, &config.projection, width, height);

        render::prepare(&mut pipeline);

        log::debug!("Host state: {:?}", HostState::Running);
        Ok(Self {
            pipeline,
            window,
            system,
            config,
            viewport,
            projection,
            state: HostState::Running,
            frames_rendered: 0,
        })
    }

    /// Poll, draw and present until the close flag is set.
    ///
    /// The flag is only checked at the top of an iteration, so a close
    /// requested while dispatching lets that iteration's frame finish and no
    /// further frame start. Returns the total number of frames presented.
    pub fn run_loop(&mut self) -> u64 {
        log::info!("Starting main loop...");

        while !self.window.should_close() {
            for event in self.window.poll_events() {
                self.dispatch(event);
            }

            render::draw_frame(&mut self.pipeline);
            self.window.swap_buffers();
            self.frames_rendered += 1;
        }

        self.state = HostState::Closing;
        log::debug!(
            "Host state: {:?} after {} frames",
            self.state,
            self.frames_rendered
        );
        self.frames_rendered
    }

    /// Release the window, then the subsystem
    pub fn shutdown(self) -> RunSummary {
        let Self {
            pipeline,
            window,
            system,
            frames_rendered,
            ..
        } = self;

        drop(pipeline);
        drop(window);
        log::debug!("Window destroyed");
        drop(system);
        log::debug!("Host state: {:?}", HostState::Terminated);

        RunSummary {
            frames_rendered,
            final_state: HostState::Terminated,
        }
    }

    fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::Key {
                key,
                scancode,
                action,
                mods,
            } => callbacks::on_key(&mut self.window, key, scancode, action, mods),
            HostEvent::FramebufferSize { width, height } => {
                let (viewport, projection) = callbacks::on_resize(
                    &mut self.pipeline,
                    &self.config.projection,
                    width,
                    height,
                );
                self.viewport = viewport;
                if projection.is_some() {
                    self.projection = projection;
                }
            }
            HostEvent::CursorPos { x, y } => callbacks::on_cursor_move(x, y),
            HostEvent::MouseButton {
                button,
                action,
                mods,
            } => callbacks::on_mouse_button(button, action, mods),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> HostState {
        self.state
    }

    /// Framebuffer area the viewport maps to
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Projection currently loaded, `None` until a non-empty framebuffer has
    /// been seen
    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    /// Frames presented so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// The window handle
    pub fn window(&self) -> &S::Window {
        &self.window
    }

    /// The pipeline bound to the window's context
    pub fn pipeline(&self) -> &PipelineOf<S> {
        &self.pipeline
    }
}

/// Run the whole lifecycle: initialize, loop until closed, shut down.
///
/// ```rust,no_run
/// use render_host::{config::HostConfig, window::GlfwSystem};
///
/// let summary = render_host::run(GlfwSystem::init, &HostConfig::default())?;
/// assert_eq!(summary.exit_code(), 0);
/// # Ok::<(), render_host::HostError>(())
/// ```
pub fn run<S, F>(init: F, config: &HostConfig) -> Result<RunSummary, HostError>
where
    S: WindowSystem,
    F: FnOnce() -> WindowResult<S>,
{
    let mut host = RenderLoopHost::initialize(init, config.clone())?;
    host.run_loop();
    let summary = host.shutdown();

    log::info!("Host shutdown complete");
    Ok(summary)
}
