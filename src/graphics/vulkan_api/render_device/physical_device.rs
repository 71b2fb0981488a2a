use ash::{extensions::ext::DebugMarker, vk};

use crate::{
    graphics::vulkan_api::{
        ffi::{extension_name, name_from_raw},
        instance::split_available,
        Instance, VulkanError,
    },
    logging::PrettyList,
};

/// The physical device picked for the application along with what it can do.
#[derive(Debug, Clone)]
pub struct SelectedDevice {
    pub physical_device: vk::PhysicalDevice,
    pub name: String,
    pub queue_family_index: u32,
    pub supports_debug_marker: bool,
}

/// Pick the first physical device which has a graphics or compute queue.
pub fn find_physical_device(
    instance: &Instance,
) -> Result<SelectedDevice, VulkanError> {
    let physical_devices = unsafe {
        instance
            .ash()
            .enumerate_physical_devices()
            .map_err(VulkanError::UnableToEnumeratePhysicalDevices)?
    };

    physical_devices
        .into_iter()
        .find_map(|physical_device| inspect(instance, physical_device))
        .ok_or(VulkanError::NoSuitableDeviceFound)
}

fn inspect(
    instance: &Instance,
    physical_device: vk::PhysicalDevice,
) -> Option<SelectedDevice> {
    let properties = unsafe {
        instance
            .ash()
            .get_physical_device_properties(physical_device)
    };
    let name = name_from_raw(&properties.device_name);

    let queue_families = unsafe {
        instance
            .ash()
            .get_physical_device_queue_family_properties(physical_device)
    };
    let queue_family_index = match find_queue_family(&queue_families) {
        Some(index) => index,
        None => {
            log::trace!("{} has no graphics or compute queue", name);
            return None;
        }
    };

    let available_extensions: Vec<String> = unsafe {
        instance
            .ash()
            .enumerate_device_extension_properties(physical_device)
            .unwrap_or_else(|_| vec![])
    }
    .iter()
    .map(|extension| name_from_raw(&extension.extension_name))
    .collect();

    log::trace!(
        "Available extensions for {}: {}",
        name,
        PrettyList(&available_extensions)
    );

    let (found, _) = split_available(
        &[extension_name(DebugMarker::name())],
        &available_extensions,
    );

    Some(SelectedDevice {
        physical_device,
        name,
        queue_family_index,
        supports_debug_marker: !found.is_empty(),
    })
}

/// Prefer a family which can do both graphics and compute, then either one.
fn find_queue_family(families: &[vk::QueueFamilyProperties]) -> Option<u32> {
    let find = |flags: vk::QueueFlags| {
        families
            .iter()
            .position(|family| {
                family.queue_count > 0 && family.queue_flags.contains(flags)
            })
            .map(|index| index as u32)
    };
    find(vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE)
        .or_else(|| find(vk::QueueFlags::GRAPHICS))
        .or_else(|| find(vk::QueueFlags::COMPUTE))
}
