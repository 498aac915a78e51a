//! Input and surface notifications

use glfw::{Action, Key, Modifiers, MouseButton, WindowEvent};

/// A notification delivered by polling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Key press, release or repeat
    Key {
        /// Key identity
        key: Key,
        /// Platform-specific scan code
        scancode: i32,
        /// Press, release or repeat
        action: Action,
        /// Modifier keys held
        mods: Modifiers,
    },

    /// Framebuffer resized, in pixels
    FramebufferSize {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },

    /// Cursor moved, in window coordinates
    CursorPos {
        /// Horizontal position
        x: f64,
        /// Vertical position
        y: f64,
    },

    /// Mouse button press or release
    MouseButton {
        /// Button identity
        button: MouseButton,
        /// Press or release
        action: Action,
        /// Modifier keys held
        mods: Modifiers,
    },
}

impl HostEvent {
    /// Convert a GLFW event, dropping the kinds the host does not listen to
    pub fn from_window_event(event: WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::Key(key, scancode, action, mods) => Some(Self::Key {
                key,
                scancode,
                action,
                mods,
            }),
            WindowEvent::FramebufferSize(width, height) => {
                Some(Self::FramebufferSize { width, height })
            }
            WindowEvent::CursorPos(x, y) => Some(Self::CursorPos { x, y }),
            WindowEvent::MouseButton(button, action, mods) => Some(Self::MouseButton {
                button,
                action,
                mods,
            }),
            _ => None,
        }
    }
}
