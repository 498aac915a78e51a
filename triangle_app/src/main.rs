//! Colored triangle demo
//!
//! Opens an 800x600 window and draws a red/green/blue triangle until the
//! window is closed or escape is pressed. Every input event is echoed to
//! stdout.

use render_host::config::HostConfig;
use render_host::foundation::logging;
use render_host::window::GlfwSystem;

fn main() {
    logging::init();

    // Failures are logged by the host where they happen.
    let exit_code = match render_host::run(GlfwSystem::init, &HostConfig::default()) {
        Ok(summary) => {
            log::info!("Rendered {} frames", summary.frames_rendered);
            summary.exit_code()
        }
        Err(e) => e.exit_code(),
    };

    std::process::exit(exit_code);
}
