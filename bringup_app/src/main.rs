//! Device bring-up demo application
//!
//! Opens a window and brings up the Vulkan device chain: instance (with
//! validation layers in debug builds), debug messenger, physical device,
//! logical device. Then polls window events until the window is closed
//! and tears everything down in reverse order.

use render_engine::render::{VulkanContext, Window};
use render_engine::settings::EngineSettings;
use render_engine::{VulkanError, WindowError};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
enum AppError {
    /// Window system failure
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Vulkan bring-up failure
    #[error("Vulkan error: {0}")]
    Vulkan(#[from] VulkanError),
}

/// Application state for the bring-up demo
///
/// Field order matters for Drop: the Vulkan context goes down before the
/// window.
struct BringupApp {
    vulkan: VulkanContext,
    window: Window,
}

impl BringupApp {
    fn new(settings: &EngineSettings) -> Result<Self, AppError> {
        log::info!(
            "Creating window: {}x{} \"{}\"",
            settings.window.width,
            settings.window.height,
            settings.window.title
        );
        let window = Window::new(
            &settings.window.title,
            settings.window.width,
            settings.window.height,
            settings.window.resizable,
        )?;

        let vulkan = VulkanContext::new(&window, settings)?;
        log::info!(
            "Vulkan ready (graphics queue family {}, validation {})",
            vulkan.graphics_queue_family(),
            if vulkan.validation_active() { "on" } else { "off" }
        );

        Ok(Self { vulkan, window })
    }

    /// Poll window events until the user closes the window
    fn run(&mut self) -> Result<(), AppError> {
        while !self.window.should_close() {
            self.window.poll_events();
        }

        log::info!("Close requested, shutting down");
        self.vulkan.device.wait_idle()?;
        Ok(())
    }
}

fn run() -> Result<(), AppError> {
    let settings = EngineSettings::load();
    let mut app = BringupApp::new(&settings)?;
    app.run()
    // App drops here: logical device, debug messenger, instance, window
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting device bring-up demo");

    if let Err(e) = run() {
        log::error!("Application error: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    log::info!("Shutdown complete");
}
