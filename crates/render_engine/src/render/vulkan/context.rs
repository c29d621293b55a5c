//! Owning context for all core Vulkan handles

use crate::render::window::Window;
use crate::settings::EngineSettings;

use super::debug::DebugMessenger;
use super::device::LogicalDevice;
use super::error::VulkanResult;
use super::instance::{ValidationSettings, VulkanInstance};
use super::physical::PhysicalDeviceInfo;

/// Main Vulkan context that owns all core Vulkan resources
///
/// Handle destruction order is the strict reverse of creation order, and
/// the underlying API treats violations as undefined behavior. Fields drop
/// in declaration order, so the declaration order below IS the teardown
/// order: logical device, then debug messenger, then instance. Do not
/// reorder the fields.
pub struct VulkanContext {
    /// Logical device and graphics queue
    pub device: LogicalDevice,
    /// Selected physical device (owned by the platform, never destroyed)
    pub physical_device: PhysicalDeviceInfo,
    debug_messenger: DebugMessenger,
    /// Instance and entry point; root handle, destroyed last
    pub instance: VulkanInstance,
}

impl VulkanContext {
    /// Run the device bring-up chain for the window
    ///
    /// Stages run strictly in order: instance creation, debug-messenger
    /// attach, physical-device selection, logical-device creation. On
    /// failure the handles created so far unwind in reverse creation
    /// order before the error reaches the caller.
    pub fn new(window: &Window, settings: &EngineSettings) -> VulkanResult<Self> {
        let validation = ValidationSettings::new(settings.debug.validation_layers);

        let instance = VulkanInstance::new(window, &settings.app, &validation)?;
        let debug_messenger = DebugMessenger::attach(&instance, &validation)?;
        let physical_device = PhysicalDeviceInfo::pick(&instance.instance)?;
        let device = LogicalDevice::new(&instance.instance, &physical_device, &validation)?;

        Ok(Self {
            device,
            physical_device,
            debug_messenger,
            instance,
        })
    }

    /// Whether a debug messenger is attached to this instance
    pub fn validation_active(&self) -> bool {
        self.debug_messenger.is_attached()
    }

    /// The graphics queue family index of the selected device
    pub fn graphics_queue_family(&self) -> u32 {
        self.device.graphics_family
    }
}
