//! # Render Host
//!
//! Opens a GLFW window, wires the input notifiers, and draws a single
//! smooth-shaded triangle with fixed-function OpenGL every frame until the
//! window is closed or escape is pressed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_host::{config::HostConfig, window::GlfwSystem};
//!
//! render_host::foundation::logging::init();
//!
//! let config = HostConfig::default();
//! let exit_code = match render_host::run(GlfwSystem::init, &config) {
//!     Ok(_) => 0,
//!     Err(e) => e.exit_code(),
//! };
//! std::process::exit(exit_code);
//! ```

pub mod callbacks;
pub mod config;
pub mod foundation;
pub mod host;
pub mod render;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use host::{run, HostError, HostState, RenderLoopHost, RunSummary};
