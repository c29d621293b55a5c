//! Vulkan instance creation and layer/extension probing

use ash::extensions::ext::DebugUtils;
use ash::{vk, Entry, Instance};
use std::ffi::{c_char, CStr, CString};

use crate::render::window::Window;
use crate::settings::AppSettings;

use super::error::{VulkanError, VulkanResult};

/// Vulkan API version targeted by the engine
pub const API_VERSION: u32 = vk::API_VERSION_1_0;

/// Resolved validation-layer configuration
///
/// Layers are only ever requested in debug builds; release builds keep the
/// set empty regardless of settings.
pub struct ValidationSettings {
    enabled: bool,
    layers: Vec<CString>,
}

impl ValidationSettings {
    /// Resolve the validation configuration for this build
    pub fn new(requested: bool) -> Self {
        Self {
            enabled: cfg!(debug_assertions) && requested,
            layers: vec![CString::new("VK_LAYER_KHRONOS_validation").unwrap()],
        }
    }

    /// Whether validation layers will be requested
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The requested layer names
    pub fn layers(&self) -> &[CString] {
        &self.layers
    }

    /// Layer name pointers for a create-info struct; empty when disabled
    pub(crate) fn layer_pointers(&self) -> Vec<*const c_char> {
        if self.enabled {
            self.layers.iter().map(|layer| layer.as_ptr()).collect()
        } else {
            Vec::new()
        }
    }
}

/// List the validation layers installed on this system
pub fn available_instance_layers(entry: &Entry) -> VulkanResult<Vec<CString>> {
    let layers = entry
        .enumerate_instance_layer_properties()
        .map_err(VulkanError::Api)?;

    Ok(layers
        .iter()
        .map(|layer| unsafe { CStr::from_ptr(layer.layer_name.as_ptr()) }.to_owned())
        .collect())
}

/// List the instance extensions supported on this system
pub fn available_instance_extensions(entry: &Entry) -> VulkanResult<Vec<CString>> {
    let extensions = entry
        .enumerate_instance_extension_properties(None)
        .map_err(VulkanError::Api)?;

    Ok(extensions
        .iter()
        .map(|extension| unsafe { CStr::from_ptr(extension.extension_name.as_ptr()) }.to_owned())
        .collect())
}

/// First requested layer missing from the available set, if any
fn missing_layer<'a>(requested: &'a [CString], available: &[CString]) -> Option<&'a CString> {
    requested.iter().find(|&layer| !available.contains(layer))
}

/// Assemble the instance extension set: everything the window system
/// requires, plus debug utils when validation is on
fn instance_extensions(window_extensions: &[String], validation_enabled: bool) -> Vec<CString> {
    let mut extensions: Vec<CString> = window_extensions
        .iter()
        .map(|extension| CString::new(extension.as_str()).unwrap())
        .collect();

    if validation_enabled {
        extensions.push(DebugUtils::name().to_owned());
    }

    extensions
}

/// Vulkan instance wrapper with RAII cleanup
///
/// Root of every other graphics handle; must be dropped last.
pub struct VulkanInstance {
    /// Vulkan entry point
    pub entry: Entry,
    /// Vulkan instance handle
    pub instance: Instance,
}

impl VulkanInstance {
    /// Create a Vulkan instance for the given window
    ///
    /// Requested validation layers are verified against the installed set
    /// before anything is submitted to the platform; on any failure no
    /// instance exists.
    pub fn new(
        window: &Window,
        app: &AppSettings,
        validation: &ValidationSettings,
    ) -> VulkanResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| VulkanError::InitializationFailed(format!("Failed to load Vulkan: {}", e)))?;

        if validation.enabled() {
            let available = available_instance_layers(&entry)?;
            if let Some(layer) = missing_layer(validation.layers(), &available) {
                return Err(VulkanError::ValidationLayerUnavailable(
                    layer.to_string_lossy().into_owned(),
                ));
            }
        }

        let available_extensions = available_instance_extensions(&entry)?;
        log::debug!("Available instance extensions: {:?}", available_extensions);

        let app_name = CString::new(app.name.as_str()).unwrap();
        let engine_name = CString::new(app.engine.as_str()).unwrap();
        let [app_major, app_minor, app_patch] = app.app_version;
        let [engine_major, engine_minor, engine_patch] = app.engine_version;

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(vk::make_api_version(0, app_major, app_minor, app_patch))
            .engine_name(&engine_name)
            .engine_version(vk::make_api_version(0, engine_major, engine_minor, engine_patch))
            .api_version(API_VERSION);

        let window_extensions = window.required_instance_extensions().map_err(|e| {
            VulkanError::InitializationFailed(format!("Failed to get required extensions: {}", e))
        })?;

        let extension_names = instance_extensions(&window_extensions, validation.enabled());
        let extension_pointers: Vec<*const c_char> =
            extension_names.iter().map(|name| name.as_ptr()).collect();
        let layer_pointers = validation.layer_pointers();

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_pointers)
            .enabled_layer_names(&layer_pointers);

        let instance = unsafe { entry.create_instance(&create_info, None) }
            .map_err(VulkanError::InstanceCreationFailed)?;

        log::info!(
            "Created Vulkan instance: {} extensions, {} layers",
            extension_names.len(),
            layer_pointers.len()
        );
        if validation.enabled() {
            log::info!("Validation layers enabled: {:?}", validation.layers());
        }

        Ok(Self { entry, instance })
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cstrings(names: &[&str]) -> Vec<CString> {
        names.iter().map(|n| CString::new(*n).unwrap()).collect()
    }

    #[test]
    fn test_missing_layer_none_when_all_present() {
        let requested = cstrings(&["VK_LAYER_KHRONOS_validation"]);
        let available = cstrings(&[
            "VK_LAYER_NV_optimus",
            "VK_LAYER_KHRONOS_validation",
            "VK_LAYER_MESA_overlay",
        ]);

        assert!(missing_layer(&requested, &available).is_none());
    }

    #[test]
    fn test_missing_layer_reports_absent_name() {
        let requested = cstrings(&["VK_LAYER_KHRONOS_validation"]);
        let available = cstrings(&["VK_LAYER_NV_optimus"]);

        let missing = missing_layer(&requested, &available).expect("layer should be missing");
        assert_eq!(missing.to_str().unwrap(), "VK_LAYER_KHRONOS_validation");
    }

    #[test]
    fn test_missing_layer_on_empty_available_set() {
        let requested = cstrings(&["VK_LAYER_KHRONOS_validation"]);

        assert!(missing_layer(&requested, &[]).is_some());
    }

    #[test]
    fn test_instance_extensions_without_validation() {
        let window_extensions = vec![
            "VK_KHR_surface".to_string(),
            "VK_KHR_xcb_surface".to_string(),
        ];

        let extensions = instance_extensions(&window_extensions, false);

        // Exactly the window set, in order, nothing else
        assert_eq!(extensions, cstrings(&["VK_KHR_surface", "VK_KHR_xcb_surface"]));
    }

    #[test]
    fn test_instance_extensions_with_validation_appends_debug_utils() {
        let window_extensions = vec!["VK_KHR_surface".to_string()];

        let extensions = instance_extensions(&window_extensions, true);

        assert_eq!(extensions.len(), 2);
        assert_eq!(extensions[0].to_str().unwrap(), "VK_KHR_surface");
        assert_eq!(extensions[1].as_c_str(), DebugUtils::name());
    }

    #[test]
    fn test_validation_settings_disabled_requests_no_layers() {
        let validation = ValidationSettings::new(false);

        assert!(!validation.enabled());
        assert!(validation.layer_pointers().is_empty());
    }
}
