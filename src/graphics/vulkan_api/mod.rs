mod config;
mod error;
mod ffi;
// ash 0.37 marks the VK_EXT_debug_report and VK_EXT_debug_marker loaders
// deprecated in favor of VK_EXT_debug_utils. These two modules target the
// older extensions.
#[allow(deprecated)]
mod instance;
#[allow(deprecated)]
mod render_device;
mod sync;

pub mod debug_marker;

pub use self::{
    config::DeviceConfig,
    debug_marker::VulkanDebug,
    error::VulkanError,
    instance::Instance,
    render_device::{RenderDevice, SelectedDevice},
    sync::{Fence, Semaphore, SemaphorePool},
};
