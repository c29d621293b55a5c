//! Rendering subsystem
//!
//! Currently covers the windowing layer and the Vulkan device bring-up
//! path. Rendering proper (swapchain, pipelines, frame loop) builds on top
//! of these once presentation lands.

/// Window management (GLFW)
pub mod window;

/// Vulkan backend bring-up
pub mod vulkan;

pub use vulkan::{VulkanContext, VulkanError, VulkanResult};
pub use window::{Window, WindowError};
