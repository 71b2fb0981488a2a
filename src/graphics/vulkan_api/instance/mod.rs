use std::ffi::CString;

use ash::{extensions::ext::DebugReport, vk};

use crate::{
    graphics::vulkan_api::{
        ffi::{extension_name, to_os_ptrs},
        DeviceConfig, VulkanError,
    },
    logging::PrettyList,
};

mod debug_callback;
mod extensions;
mod layers;

pub(crate) use self::extensions::split_available;

const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// The Vulkan library instance.
///
/// VK_EXT_debug_report is enabled whenever the platform has it, because
/// VK_EXT_debug_marker can only be enabled on top of it.
pub struct Instance {
    debug_report: Option<(DebugReport, vk::DebugReportCallbackEXT)>,
    layers: Vec<String>,
    ash: ash::Instance,
    _entry: ash::Entry,
}

impl Instance {
    pub fn new(config: &DeviceConfig) -> Result<Self, VulkanError> {
        let entry = unsafe { ash::Entry::load()? };

        let available_extensions = extensions::available_extensions(&entry)?;
        let debug_report_name = extension_name(DebugReport::name());
        let (enabled_extensions, missing) =
            split_available(&[debug_report_name], &available_extensions);
        if !missing.is_empty() {
            log::warn!(
                "{} is unavailable, debug names will only be cached",
                PrettyList(&missing)
            );
        }

        let requested_layers = if config.enable_validation {
            vec![VALIDATION_LAYER.to_owned()]
        } else {
            vec![]
        };
        let layers = layers::installed_layers(&entry, &requested_layers)?;

        let ash =
            create_instance(&entry, config, &enabled_extensions, &layers)?;

        let debug_report = if enabled_extensions.is_empty() {
            None
        } else {
            match debug_callback::create_debug_reporter(&entry, &ash) {
                Ok(reporter) => Some(reporter),
                Err(error) => {
                    unsafe { ash.destroy_instance(None) };
                    return Err(error);
                }
            }
        };

        Ok(Self {
            debug_report,
            layers,
            ash,
            _entry: entry,
        })
    }

    /// True when VK_EXT_debug_report was enabled on this instance.
    pub fn is_debug_report_enabled(&self) -> bool {
        self.debug_report.is_some()
    }

    /// The raw ash instance.
    pub fn ash(&self) -> &ash::Instance {
        &self.ash
    }

    /// Create a logical device with the instance's layers enabled.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - the caller must destroy the device before the instance is dropped
    pub unsafe fn create_logical_device(
        &self,
        physical_device: vk::PhysicalDevice,
        device_extensions: &[String],
        queue_create_infos: &[vk::DeviceQueueCreateInfo],
    ) -> Result<ash::Device, VulkanError> {
        let (_layer_names, layer_ptrs) = to_os_ptrs(&self.layers)?;
        let (_ext_names, ext_ptrs) = to_os_ptrs(device_extensions)?;
        let features = vk::PhysicalDeviceFeatures::default();

        let create_info = vk::DeviceCreateInfo {
            queue_create_info_count: queue_create_infos.len() as u32,
            p_queue_create_infos: queue_create_infos.as_ptr(),
            p_enabled_features: &features,
            pp_enabled_layer_names: layer_ptrs.as_ptr(),
            enabled_layer_count: layer_ptrs.len() as u32,
            pp_enabled_extension_names: ext_ptrs.as_ptr(),
            enabled_extension_count: ext_ptrs.len() as u32,
            ..Default::default()
        };

        self.ash
            .create_device(physical_device, &create_info, None)
            .map_err(VulkanError::UnableToCreateLogicalDevice)
    }
}

impl Drop for Instance {
    /// The owner must drop every device created from this instance first.
    fn drop(&mut self) {
        unsafe {
            if let Some((debug_report, callback)) = self.debug_report.take() {
                debug_report.destroy_debug_report_callback(callback, None);
            }
            self.ash.destroy_instance(None);
        }
    }
}

fn create_instance(
    entry: &ash::Entry,
    config: &DeviceConfig,
    extensions: &[String],
    layers: &[String],
) -> Result<ash::Instance, VulkanError> {
    log::debug!("Instance extensions: {}", PrettyList(extensions));
    log::debug!("Instance layers: {}", PrettyList(layers));

    let app_name = CString::new(config.application_name.as_str())?;
    let engine_name = CString::new("no engine")?;

    let app_info = vk::ApplicationInfo {
        p_engine_name: engine_name.as_ptr(),
        p_application_name: app_name.as_ptr(),
        application_version: vk::make_api_version(0, 1, 0, 0),
        engine_version: vk::make_api_version(0, 1, 0, 0),
        api_version: vk::make_api_version(0, 1, 1, 0),
        ..Default::default()
    };

    let (_layer_names, layer_ptrs) = to_os_ptrs(layers)?;
    let (_ext_names, ext_ptrs) = to_os_ptrs(extensions)?;

    let create_info = vk::InstanceCreateInfo {
        p_application_info: &app_info,
        pp_enabled_layer_names: layer_ptrs.as_ptr(),
        enabled_layer_count: layer_ptrs.len() as u32,
        pp_enabled_extension_names: ext_ptrs.as_ptr(),
        enabled_extension_count: ext_ptrs.len() as u32,
        ..Default::default()
    };

    unsafe {
        entry
            .create_instance(&create_info, None)
            .map_err(VulkanError::UnableToCreateInstance)
    }
}
