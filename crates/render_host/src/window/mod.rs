//! Window management subsystem
//!
//! ```text
//! ┌─────────────────┐
//! │ RenderLoopHost  │
//! └───────┬─────────┘
//!         │ owns
//! ┌───────▼─────────┐   creates   ┌──────────────────┐
//! │ WindowSystem    ├────────────►│ WindowBackend    │
//! │ (GlfwSystem)    │             │ (GlfwWindow)     │
//! └─────────────────┘             └──────────────────┘
//! ```
//!
//! - **`backend`**: traits the host is written against
//! - **`events`**: notifications delivered by polling
//! - **`glfw_backend`**: GLFW implementation

pub mod backend;
pub mod events;
pub mod glfw_backend;

pub use backend::{WindowBackend, WindowSystem};
pub use events::HostEvent;
pub use glfw_backend::{GlfwSystem, GlfwWindow};

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing subsystem could not be acquired
    #[error("windowing subsystem initialization failed: {0}")]
    InitializationFailed(String),

    /// The window or its rendering context could not be created
    #[error("window creation failed: {0}")]
    CreationFailed(String),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
