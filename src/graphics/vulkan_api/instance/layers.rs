use crate::{
    graphics::vulkan_api::{
        ffi::name_from_raw, instance::extensions::split_available, VulkanError,
    },
    logging::PrettyList,
};

/// Keep only the requested layers which are installed. Missing layers are
/// logged and skipped.
pub fn installed_layers(
    entry: &ash::Entry,
    requested_layers: &[String],
) -> Result<Vec<String>, VulkanError> {
    if requested_layers.is_empty() {
        return Ok(vec![]);
    }

    let available_names: Vec<String> = entry
        .enumerate_instance_layer_properties()
        .map_err(VulkanError::UnableToListAvailableLayers)?
        .iter()
        .map(|layer| name_from_raw(&layer.layer_name))
        .collect();

    log::trace!("Available layers: {}", PrettyList(&available_names));

    let (installed, missing) =
        split_available(requested_layers, &available_names);
    if !missing.is_empty() {
        log::warn!(
            "Requested layers are not installed and will be skipped: {}",
            PrettyList(&missing)
        );
    }

    Ok(installed)
}
