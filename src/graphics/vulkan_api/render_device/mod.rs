mod api;
mod physical_device;

use std::ffi::CStr;

use ash::{extensions::ext::DebugMarker, prelude::VkResult, vk};

use crate::graphics::vulkan_api::{
    debug_marker::{DebugMarkerDevice, ObjectKind},
    ffi::extension_name,
    DeviceConfig, Instance, VulkanError,
};

pub use self::physical_device::SelectedDevice;

const QUEUE_PRIORITY: [f32; 1] = [1.0];

/// A headless Vulkan logical device which can name and tag the objects it
/// creates.
pub struct RenderDevice {
    debug_marker: Option<DebugMarker>,
    selected_device: SelectedDevice,
    logical_device: ash::Device,
    instance: Instance,
}

impl RenderDevice {
    /// Create the logical Vulkan device for this application.
    ///
    /// VK_EXT_debug_marker is enabled when the config asks for it, the
    /// physical device supports it, and the instance has debug report
    /// enabled. Otherwise debug metadata is only cached.
    pub fn new(
        instance: Instance,
        config: &DeviceConfig,
    ) -> Result<Self, VulkanError> {
        let selected_device = physical_device::find_physical_device(&instance)?;
        log::info!("Using physical device {}", selected_device.name);

        let enable_debug_marker = config.request_debug_marker
            && selected_device.supports_debug_marker
            && instance.is_debug_report_enabled();
        if config.request_debug_marker && !enable_debug_marker {
            log::warn!(
                "VK_EXT_debug_marker is unavailable on {}, debug names will only be cached",
                selected_device.name
            );
        }

        let device_extensions = if enable_debug_marker {
            vec![extension_name(DebugMarker::name())]
        } else {
            vec![]
        };
        let queue_create_infos = [vk::DeviceQueueCreateInfo {
            queue_family_index: selected_device.queue_family_index,
            p_queue_priorities: QUEUE_PRIORITY.as_ptr(),
            queue_count: 1,
            ..Default::default()
        }];
        let logical_device = unsafe {
            instance.create_logical_device(
                selected_device.physical_device,
                &device_extensions,
                &queue_create_infos,
            )?
        };

        let debug_marker = if enable_debug_marker {
            Some(DebugMarker::new(instance.ash(), &logical_device))
        } else {
            None
        };

        Ok(Self {
            debug_marker,
            selected_device,
            logical_device,
            instance,
        })
    }

    /// The physical device backing this logical device.
    pub fn selected_device(&self) -> &SelectedDevice {
        &self.selected_device
    }
}

impl DebugMarkerDevice for RenderDevice {
    fn is_debug_marker_enabled(&self) -> bool {
        self.debug_marker.is_some()
    }

    unsafe fn set_object_name(
        &self,
        object_kind: ObjectKind,
        object: u64,
        name: &CStr,
    ) -> VkResult<()> {
        let debug_marker = match &self.debug_marker {
            Some(debug_marker) => debug_marker,
            None => return Err(vk::Result::ERROR_EXTENSION_NOT_PRESENT),
        };
        let name_info = vk::DebugMarkerObjectNameInfoEXT {
            object_type: object_kind,
            object,
            p_object_name: name.as_ptr(),
            ..Default::default()
        };
        debug_marker.debug_marker_set_object_name(&name_info)
    }

    unsafe fn set_object_tag(
        &self,
        object_kind: ObjectKind,
        object: u64,
        tag_name: u64,
        tag: &[u8],
    ) -> VkResult<()> {
        let debug_marker = match &self.debug_marker {
            Some(debug_marker) => debug_marker,
            None => return Err(vk::Result::ERROR_EXTENSION_NOT_PRESENT),
        };
        let tag_info = vk::DebugMarkerObjectTagInfoEXT {
            object_type: object_kind,
            object,
            tag_name,
            tag_size: tag.len(),
            p_tag: tag.as_ptr().cast(),
            ..Default::default()
        };
        (debug_marker.fp().debug_marker_set_object_tag_ext)(
            debug_marker.device(),
            &tag_info,
        )
        .result()
    }
}

impl Drop for RenderDevice {
    fn drop(&mut self) {
        unsafe {
            if let Err(error) = self.logical_device.device_wait_idle() {
                log::error!(
                    "Error while idling the device before destruction! {:?}",
                    error
                );
            }
            self.logical_device.destroy_device(None);
        }
    }
}
