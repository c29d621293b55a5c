//! Vulkan bring-up error types
//!
//! Every stage of device acquisition has its own variant so a failure
//! report names the stage that broke. All of these are fatal: bring-up has
//! no degraded mode, so errors propagate straight to the driver.

use ash::vk;
use thiserror::Error;

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// Bring-up failed before the platform was reachable (loader or
    /// window-system query)
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    /// General Vulkan API error with result code
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// A requested validation layer is not installed on this system
    #[error("Validation layer requested but not available: {0}")]
    ValidationLayerUnavailable(String),

    /// A required extension function could not be resolved
    #[error("Required extension not present: {0}")]
    ExtensionNotPresent(&'static str),

    /// Instance creation was rejected by the platform
    #[error("Failed to create Vulkan instance: {0:?}")]
    InstanceCreationFailed(vk::Result),

    /// The platform reported zero physical devices
    #[error("No GPU with Vulkan support found")]
    NoVulkanCapableGpu,

    /// Physical devices exist, but none satisfies the suitability predicate
    #[error("No suitable GPU found")]
    NoSuitableGpu,

    /// A queue-family record is missing a required role
    #[error("Queue family indices are incomplete: no graphics-capable family")]
    IncompleteQueueFamilies,

    /// Logical-device creation was rejected by the platform
    #[error("Failed to create logical device: {0:?}")]
    LogicalDeviceCreationFailed(vk::Result),
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;
