//! Physical-device selection and queue-family location

use ash::{vk, Instance};
use std::ffi::CStr;

use super::error::{VulkanError, VulkanResult};

/// Queue family roles resolved for one physical device
///
/// Recomputed per device; a record is never reused across devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueFamilyIndices {
    /// Index of the first graphics-capable family, if any
    pub graphics_family: Option<u32>,
}

impl QueueFamilyIndices {
    /// Locate the required queue families in a device's family table
    ///
    /// Scans in platform order and records the first graphics-capable
    /// family; deterministic for a fixed table. The record may come back
    /// incomplete when no family matches.
    pub fn from_family_properties(families: &[vk::QueueFamilyProperties]) -> Self {
        let graphics_family = families
            .iter()
            .position(|family| family.queue_flags.contains(vk::QueueFlags::GRAPHICS))
            .map(|index| index as u32);

        Self { graphics_family }
    }

    /// Whether every required role has a resolved index
    pub fn is_complete(&self) -> bool {
        self.graphics_family.is_some()
    }

    /// The graphics family index, or an error for an incomplete record
    pub fn require_graphics(&self) -> VulkanResult<u32> {
        self.graphics_family
            .ok_or(VulkanError::IncompleteQueueFamilies)
    }
}

/// Selected physical device and its capabilities
///
/// The handle is a non-owning reference into the platform's device list;
/// the application never destroys it.
pub struct PhysicalDeviceInfo {
    /// Vulkan physical device handle
    pub device: vk::PhysicalDevice,
    /// Device properties and limits
    pub properties: vk::PhysicalDeviceProperties,
    /// Resolved queue family roles
    pub indices: QueueFamilyIndices,
}

impl PhysicalDeviceInfo {
    /// Select the first suitable physical device
    ///
    /// Suitability is "has a complete queue-family record". Selection is
    /// first-match over platform enumeration order; a device-type or
    /// feature-based ranking would change observable selection and belongs
    /// in an explicit ranking function when it is needed.
    pub fn pick(instance: &Instance) -> VulkanResult<Self> {
        let devices =
            unsafe { instance.enumerate_physical_devices() }.map_err(VulkanError::Api)?;

        let family_tables: Vec<Vec<vk::QueueFamilyProperties>> = devices
            .iter()
            .map(|&device| unsafe {
                instance.get_physical_device_queue_family_properties(device)
            })
            .collect();

        let (selected, indices) = first_suitable(&family_tables)?;
        let device = devices[selected];
        let properties = unsafe { instance.get_physical_device_properties(device) };

        log::info!("Selected GPU: {}", unsafe {
            CStr::from_ptr(properties.device_name.as_ptr()).to_string_lossy()
        });
        log::info!(
            "Driver API version: {}.{}.{}",
            vk::api_version_major(properties.api_version),
            vk::api_version_minor(properties.api_version),
            vk::api_version_patch(properties.api_version)
        );

        Ok(Self {
            device,
            properties,
            indices,
        })
    }
}

/// Index of the first device (enumeration order) whose queue-family record
/// is complete, along with that record
fn first_suitable(
    family_tables: &[Vec<vk::QueueFamilyProperties>],
) -> VulkanResult<(usize, QueueFamilyIndices)> {
    if family_tables.is_empty() {
        return Err(VulkanError::NoVulkanCapableGpu);
    }

    family_tables
        .iter()
        .enumerate()
        .find_map(|(index, families)| {
            let indices = QueueFamilyIndices::from_family_properties(families);
            indices.is_complete().then_some((index, indices))
        })
        .ok_or(VulkanError::NoSuitableGpu)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(flags: vk::QueueFlags) -> vk::QueueFamilyProperties {
        vk::QueueFamilyProperties {
            queue_flags: flags,
            queue_count: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_graphics_family_wins() {
        let families = [
            family(vk::QueueFlags::TRANSFER),
            family(vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE),
            family(vk::QueueFlags::GRAPHICS),
        ];

        let indices = QueueFamilyIndices::from_family_properties(&families);

        assert_eq!(indices.graphics_family, Some(1), "First match must win");
        assert!(indices.is_complete());
    }

    #[test]
    fn test_location_is_deterministic() {
        let families = [
            family(vk::QueueFlags::COMPUTE),
            family(vk::QueueFlags::GRAPHICS),
        ];

        let first = QueueFamilyIndices::from_family_properties(&families);
        let second = QueueFamilyIndices::from_family_properties(&families);

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_graphics_family_is_incomplete() {
        let families = [
            family(vk::QueueFlags::TRANSFER),
            family(vk::QueueFlags::COMPUTE),
        ];

        let indices = QueueFamilyIndices::from_family_properties(&families);

        assert_eq!(indices.graphics_family, None);
        assert!(!indices.is_complete());
    }

    #[test]
    fn test_empty_family_table_is_incomplete() {
        let indices = QueueFamilyIndices::from_family_properties(&[]);
        assert!(!indices.is_complete());
    }

    #[test]
    fn test_require_graphics_rejects_incomplete_record() {
        let indices = QueueFamilyIndices::default();

        assert!(matches!(
            indices.require_graphics(),
            Err(VulkanError::IncompleteQueueFamilies)
        ));
    }

    #[test]
    fn test_require_graphics_on_complete_record() {
        let indices = QueueFamilyIndices {
            graphics_family: Some(3),
        };

        assert_eq!(indices.require_graphics().unwrap(), 3);
    }

    #[test]
    fn test_selection_picks_first_suitable_device() {
        let tables = vec![
            vec![family(vk::QueueFlags::TRANSFER)],          // D0: incomplete
            vec![family(vk::QueueFlags::GRAPHICS)],          // D1: complete
            vec![family(vk::QueueFlags::GRAPHICS)],          // D2: complete
        ];

        let (selected, indices) = first_suitable(&tables).expect("a suitable device exists");

        assert_eq!(selected, 1, "Enumeration order breaks ties");
        assert_eq!(indices.graphics_family, Some(0));
    }

    #[test]
    fn test_selection_fails_without_devices() {
        assert!(matches!(
            first_suitable(&[]),
            Err(VulkanError::NoVulkanCapableGpu)
        ));
    }

    #[test]
    fn test_selection_fails_when_no_device_is_suitable() {
        let tables = vec![
            vec![family(vk::QueueFlags::COMPUTE)],
            vec![family(vk::QueueFlags::TRANSFER)],
        ];

        assert!(matches!(
            first_suitable(&tables),
            Err(VulkanError::NoSuitableGpu)
        ));
    }
}
