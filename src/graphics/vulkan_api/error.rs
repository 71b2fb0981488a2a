use std::ffi::NulError;

use ash::vk;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VulkanError {
    #[error("Unable to load the Vulkan library")]
    UnableToLoadVulkan(#[from] ash::LoadingError),

    #[error("A name passed to Vulkan contains a nul byte")]
    InvalidName(#[from] NulError),

    #[error("Unable to get the available Vulkan extensions {:?}", .0)]
    UnableToListAvailableExtensions(#[source] vk::Result),

    #[error("Unable to get the available Vulkan layers {:?}", .0)]
    UnableToListAvailableLayers(#[source] vk::Result),

    #[error("Unable to create a Vulkan instance {:?}", .0)]
    UnableToCreateInstance(#[source] vk::Result),

    #[error("Unable to create the Vulkan debug report callback {:?}", .0)]
    UnableToCreateDebugReportCallback(#[source] vk::Result),

    #[error("Unable to enumerate physical devices {:?}", .0)]
    UnableToEnumeratePhysicalDevices(#[source] vk::Result),

    #[error("No physical device with a graphics or compute queue was found")]
    NoSuitableDeviceFound,

    #[error("Unable to create the logical device {:?}", .0)]
    UnableToCreateLogicalDevice(#[source] vk::Result),

    #[error("Unable to wait for the device to idle {:?}", .0)]
    UnableToWaitForDeviceToIdle(#[source] vk::Result),

    #[error("Unable to create a fence {:?}", .0)]
    UnableToCreateFence(#[source] vk::Result),

    #[error("Unable to create a semaphore {:?}", .0)]
    UnableToCreateSemaphore(#[source] vk::Result),
}
