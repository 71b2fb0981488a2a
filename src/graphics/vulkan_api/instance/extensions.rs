use crate::{
    graphics::vulkan_api::{ffi::name_from_raw, VulkanError},
    logging::PrettyList,
};

/// Get the names of every instance extension available on this platform.
pub fn available_extensions(
    entry: &ash::Entry,
) -> Result<Vec<String>, VulkanError> {
    let available_names: Vec<String> = entry
        .enumerate_instance_extension_properties(None)
        .map_err(VulkanError::UnableToListAvailableExtensions)?
        .iter()
        .map(|ext| name_from_raw(&ext.extension_name))
        .collect();

    log::trace!("Available extensions: {}", PrettyList(&available_names));

    Ok(available_names)
}

/// Split the wanted names into the ones which are available and the ones
/// which are missing. Order is preserved in both halves.
pub fn split_available(
    wanted: &[String],
    available: &[String],
) -> (Vec<String>, Vec<String>) {
    wanted
        .iter()
        .cloned()
        .partition(|name| available.iter().any(|item| item == name))
}
