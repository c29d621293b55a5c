//! Logical-device creation

use ash::{vk, Device, Instance};

use super::error::{VulkanError, VulkanResult};
use super::instance::ValidationSettings;
use super::physical::PhysicalDeviceInfo;

/// Logical device wrapper with RAII cleanup
///
/// Must be dropped before the instance that created it.
pub struct LogicalDevice {
    /// Vulkan logical device handle
    pub device: Device,
    /// Graphics operations queue
    pub graphics_queue: vk::Queue,
    /// Index of the graphics queue family
    pub graphics_family: u32,
}

impl LogicalDevice {
    /// Create a logical device with a single graphics queue
    ///
    /// The selected device's queue-family record must be complete; an
    /// incomplete record is rejected before any platform call is made.
    pub fn new(
        instance: &Instance,
        physical_device: &PhysicalDeviceInfo,
        validation: &ValidationSettings,
    ) -> VulkanResult<Self> {
        let graphics_family = physical_device.indices.require_graphics()?;

        // One queue at maximum priority; no contention model yet
        let queue_priorities = [1.0_f32];
        let queue_create_info = vk::DeviceQueueCreateInfo::builder()
            .queue_family_index(graphics_family)
            .queue_priorities(&queue_priorities)
            .build();

        // No special device features needed at this stage
        let device_features = vk::PhysicalDeviceFeatures::default();

        // Device-level layers are a legacy field; older implementations
        // still read them, so mirror the instance layer list. No device
        // extensions until presentation needs the swapchain.
        let layer_pointers = validation.layer_pointers();

        let create_info = vk::DeviceCreateInfo::builder()
            .queue_create_infos(std::slice::from_ref(&queue_create_info))
            .enabled_layer_names(&layer_pointers)
            .enabled_features(&device_features);

        let device =
            unsafe { instance.create_device(physical_device.device, &create_info, None) }
                .map_err(VulkanError::LogicalDeviceCreationFailed)?;

        let graphics_queue = unsafe { device.get_device_queue(graphics_family, 0) };

        log::info!("Created logical device (graphics family {})", graphics_family);

        Ok(Self {
            device,
            graphics_queue,
            graphics_family,
        })
    }

    /// Wait for the device to finish all submitted work
    pub fn wait_idle(&self) -> VulkanResult<()> {
        unsafe { self.device.device_wait_idle() }.map_err(VulkanError::Api)
    }
}

impl Drop for LogicalDevice {
    fn drop(&mut self) {
        let _ = self.wait_idle();
        unsafe {
            self.device.destroy_device(None);
        }
    }
}
