//! Validation-layer debug messenger bridge
//!
//! The debug-utils attach/detach entry points are extension functions and
//! not guaranteed to exist, so they are resolved dynamically from the
//! instance. A missing attach symbol fails the attach call; a missing
//! detach symbol is tolerated at teardown.

use ash::{vk, Entry};
use std::ffi::{c_void, CStr};

use super::error::{VulkanError, VulkanResult};
use super::instance::{ValidationSettings, VulkanInstance};

const CREATE_FN_NAME: &[u8] = b"vkCreateDebugUtilsMessengerEXT\0";
const DESTROY_FN_NAME: &[u8] = b"vkDestroyDebugUtilsMessengerEXT\0";

/// Debug messenger handle with RAII detach
///
/// Inert when validation is disabled: no platform call is made on attach
/// or on drop. Must be dropped before the instance it was attached to.
pub struct DebugMessenger {
    instance: vk::Instance,
    messenger: vk::DebugUtilsMessengerEXT,
    destroy_fn: Option<vk::PFN_vkDestroyDebugUtilsMessengerEXT>,
}

impl DebugMessenger {
    /// Attach a debug messenger to the instance
    ///
    /// Returns an inert handle without touching the platform when
    /// validation is disabled.
    pub fn attach(
        instance: &VulkanInstance,
        validation: &ValidationSettings,
    ) -> VulkanResult<Self> {
        if !validation.enabled() {
            return Ok(Self::inert());
        }

        let handle = instance.instance.handle();

        let create_fn = match resolve(&instance.entry, handle, CREATE_FN_NAME) {
            Some(f) => unsafe {
                std::mem::transmute::<
                    unsafe extern "system" fn(),
                    vk::PFN_vkCreateDebugUtilsMessengerEXT,
                >(f)
            },
            None => return Err(VulkanError::ExtensionNotPresent("VK_EXT_debug_utils")),
        };

        // Resolved up front so teardown never has to fail
        let destroy_fn = resolve(&instance.entry, handle, DESTROY_FN_NAME).map(|f| unsafe {
            std::mem::transmute::<
                unsafe extern "system" fn(),
                vk::PFN_vkDestroyDebugUtilsMessengerEXT,
            >(f)
        });

        let create_info = messenger_create_info();
        let mut messenger = vk::DebugUtilsMessengerEXT::null();
        let result =
            unsafe { create_fn(handle, &create_info, std::ptr::null(), &mut messenger) };
        if result != vk::Result::SUCCESS {
            return Err(VulkanError::Api(result));
        }

        log::info!("Debug messenger attached");

        Ok(Self {
            instance: handle,
            messenger,
            destroy_fn,
        })
    }

    /// Whether a messenger is actually registered with the platform
    pub fn is_attached(&self) -> bool {
        self.messenger != vk::DebugUtilsMessengerEXT::null()
    }

    fn inert() -> Self {
        Self {
            instance: vk::Instance::null(),
            messenger: vk::DebugUtilsMessengerEXT::null(),
            destroy_fn: None,
        }
    }
}

impl Drop for DebugMessenger {
    fn drop(&mut self) {
        if !self.is_attached() {
            return;
        }

        // A missing destroy symbol is skipped rather than crashing teardown
        if let Some(destroy_fn) = self.destroy_fn {
            unsafe {
                destroy_fn(self.instance, self.messenger, std::ptr::null());
            }
        }
    }
}

/// Look up an instance-level entry point by name
fn resolve(entry: &Entry, instance: vk::Instance, name: &'static [u8]) -> vk::PFN_vkVoidFunction {
    unsafe { (entry.static_fn().get_instance_proc_addr)(instance, name.as_ptr().cast()) }
}

fn messenger_create_info() -> vk::DebugUtilsMessengerCreateInfoEXT {
    vk::DebugUtilsMessengerCreateInfoEXT::builder()
        .message_severity(
            vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        )
        .message_type(
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        )
        .pfn_user_callback(Some(debug_callback))
        .build()
}

/// Log level for a validation message; messages below warning are dropped
fn log_level_for(severity: vk::DebugUtilsMessageSeverityFlagsEXT) -> Option<log::Level> {
    if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        Some(log::Level::Error)
    } else if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        Some(log::Level::Warn)
    } else {
        None
    }
}

/// Debug callback for validation layers
///
/// Executes inside the driver's call stack: must never panic or unwind,
/// and always tells the platform not to abort the triggering call.
unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    if let Some(level) = log_level_for(message_severity) {
        if !callback_data.is_null() {
            let p_message = (*callback_data).p_message;
            if !p_message.is_null() {
                let message = CStr::from_ptr(p_message).to_string_lossy();
                log::log!(level, "[Vulkan] {:?} - {}", message_type, message);
            }
        }
    }

    vk::FALSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_messenger_reports_not_attached() {
        let messenger = DebugMessenger::inert();
        assert!(!messenger.is_attached());
    }

    #[test]
    fn test_inert_messenger_drop_makes_no_platform_call() {
        // No instance exists here; drop must not touch the platform.
        let messenger = DebugMessenger::inert();
        drop(messenger);
    }

    #[test]
    fn test_log_level_drops_info_and_verbose() {
        assert_eq!(
            log_level_for(vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE),
            None
        );
        assert_eq!(
            log_level_for(vk::DebugUtilsMessageSeverityFlagsEXT::INFO),
            None
        );
    }

    #[test]
    fn test_log_level_maps_warning_and_error() {
        assert_eq!(
            log_level_for(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING),
            Some(log::Level::Warn)
        );
        assert_eq!(
            log_level_for(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR),
            Some(log::Level::Error)
        );
    }
}
