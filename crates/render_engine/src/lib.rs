//! # Render Engine
//!
//! Foundation crate for a Vulkan-based renderer. The current scope is the
//! device bring-up path: window creation, Vulkan instance creation with
//! optional validation layers, the debug-messenger bridge, physical-device
//! selection, and logical-device creation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_engine::settings::EngineSettings;
//! use render_engine::render::{Window, VulkanContext};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = EngineSettings::load();
//!     let mut window = Window::new(
//!         &settings.window.title,
//!         settings.window.width,
//!         settings.window.height,
//!         settings.window.resizable,
//!     )?;
//!     let _vulkan = VulkanContext::new(&window, &settings)?;
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod render;
pub mod settings;

pub use render::window::{Window, WindowError};
pub use render::vulkan::{VulkanContext, VulkanError, VulkanResult};
pub use settings::EngineSettings;
