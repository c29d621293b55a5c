//! Vulkan backend bring-up
//!
//! Organized along the initialization chain: instance creation (with
//! optional validation layers), the debug-messenger bridge, physical-device
//! selection, and logical-device creation. `VulkanContext` ties the chain
//! together and owns every handle.

/// Bring-up error taxonomy
pub mod error;

/// Instance creation and layer/extension probing
pub mod instance;

/// Validation-layer debug messenger bridge
pub mod debug;

/// Physical-device selection and queue-family location
pub mod physical;

/// Logical-device creation
pub mod device;

/// Owning context for all core Vulkan handles
pub mod context;

pub use context::VulkanContext;
pub use debug::DebugMessenger;
pub use device::LogicalDevice;
pub use error::{VulkanError, VulkanResult};
pub use instance::{ValidationSettings, VulkanInstance};
pub use physical::{PhysicalDeviceInfo, QueueFamilyIndices};
