//! Notification handlers
//!
//! Plain functions of their arguments. Each logs one diagnostic line; the key
//! and resize handlers additionally act on the window or the pipeline.
//! Key, action, button and modifier values are logged as their numeric GLFW
//! codes.

use glfw::{Action, Key, Modifiers, MouseButton};

use crate::config::ProjectionConfig;
use crate::foundation::math::Projection;
use crate::render::{MatrixMode, Pipeline};
use crate::window::WindowBackend;

/// Framebuffer area the viewport currently maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

/// GLFW error callback. Never panics.
#[allow(clippy::needless_pass_by_value)]
pub fn on_error(error: glfw::Error, description: String) {
    log::error!("{}", error_line(error, &description));
}

fn error_line(error: glfw::Error, description: &str) -> String {
    format!("Error code: {} - {}", error as i32, description)
}

/// Keyboard notifier. Escape press requests close; the loop stops at its next
/// check, after the current event batch and frame.
pub fn on_key<W: WindowBackend + ?Sized>(
    window: &mut W,
    key: Key,
    _scancode: i32,
    action: Action,
    mods: Modifiers,
) {
    log::info!("{}", key_line(key, action, mods));

    if key == Key::Escape && action == Action::Press {
        window.set_should_close(true);
    }
}

/// Framebuffer resize notifier.
///
/// Points the viewport at the new framebuffer, reloads the projection stack
/// with a perspective for the new aspect ratio, and leaves the model/view
/// stack current. With a zero dimension the viewport is still updated but the
/// projection is left as it was and `None` is returned.
pub fn on_resize<P: Pipeline + ?Sized>(
    pipeline: &mut P,
    config: &ProjectionConfig,
    width: i32,
    height: i32,
) -> (Viewport, Option<Projection>) {
    log::info!("{}", resize_line(width, height));

    let viewport = Viewport { width, height };
    pipeline.set_viewport(0, 0, width, height);

    let projection = Projection::for_framebuffer(config, width, height);
    match projection {
        Some(projection) => {
            pipeline.set_matrix_mode(MatrixMode::Projection);
            pipeline.load_identity();
            pipeline.multiply_matrix(&projection.to_matrix());
            pipeline.set_matrix_mode(MatrixMode::ModelView);
        }
        None => log::debug!("zero-sized framebuffer, keeping previous projection"),
    }

    (viewport, projection)
}

/// Cursor move notifier
pub fn on_cursor_move(x: f64, y: f64) {
    log::info!("{}", cursor_line(x, y));
}

/// Mouse button notifier
pub fn on_mouse_button(button: MouseButton, action: Action, mods: Modifiers) {
    log::info!("{}", mouse_button_line(button, action, mods));
}

fn key_line(key: Key, action: Action, mods: Modifiers) -> String {
    format!(
        "key= {} action= {} mods= {}",
        key as i32,
        action as i32,
        mods.bits()
    )
}

fn resize_line(width: i32, height: i32) -> String {
    format!("resize width= {width} height= {height}")
}

fn cursor_line(x: f64, y: f64) -> String {
    format!("mouse move x= {x} y= {y}")
}

fn mouse_button_line(button: MouseButton, action: Action, mods: Modifiers) -> String {
    format!(
        "mouse button button= {} action= {} mods= {}",
        button as i32,
        action as i32,
        mods.bits()
    )
}
