//! Name and tag caching for Vulkan handles, forwarded to VK_EXT_debug_marker
//! whenever the device has it enabled.
//!
//! Tools like RenderDoc show whatever name the driver was told about, so every
//! wrapper that owns a Vulkan handle carries a [MetadataProvider]. The provider
//! either tracks exactly one handle or a dynamic set of delegate handles which
//! all share the same name and tag.

mod bounded_name;
mod object_kind;
mod provider;
mod worker;

#[cfg(test)]
pub(crate) mod recording_device;

use std::{
    ffi::CStr,
    fmt,
    sync::{Arc, Weak},
};

use ash::{prelude::VkResult, vk};

pub use self::{
    bounded_name::NAME_CAPACITY,
    object_kind::{DebugReportObject, ObjectKind},
    provider::{MetadataProvider, ProviderMode},
    worker::MetadataWorker,
};

/// The raw value of a Vulkan handle which has not been assigned.
pub(crate) const NULL_HANDLE: u64 = 0;

/// A non-owning reference to the device which receives debug metadata.
pub type DeviceRef = Weak<dyn DebugMarkerDevice>;

/// The device-side surface needed to name and tag Vulkan objects.
pub trait DebugMarkerDevice: Send + Sync {
    /// True when VK_EXT_debug_marker is enabled on this device.
    fn is_debug_marker_enabled(&self) -> bool;

    /// Give the object a name which shows up in debugging tools.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - `object` must be a live handle of kind `object_kind` which was
    ///     created by this device.
    unsafe fn set_object_name(
        &self,
        object_kind: ObjectKind,
        object: u64,
        name: &CStr,
    ) -> VkResult<()>;

    /// Attach an opaque tag to the object.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - `object` must be a live handle of kind `object_kind` which was
    ///     created by this device.
    unsafe fn set_object_tag(
        &self,
        object_kind: ObjectKind,
        object: u64,
        tag_name: u64,
        tag: &[u8],
    ) -> VkResult<()>;
}

/// Build the weak device reference consumed by workers and providers.
pub fn weak_device<D>(device: &Arc<D>) -> DeviceRef
where
    D: DebugMarkerDevice + 'static,
{
    let weak: Weak<D> = Arc::downgrade(device);
    weak
}

/// Types which wrap Vulkan handles and expose a debug name and tag for them.
///
/// Implementors only hand out their provider. Everything else is provided.
pub trait VulkanDebug {
    fn debug_metadata(&self) -> &MetadataProvider;

    fn debug_metadata_mut(&mut self) -> &mut MetadataProvider;

    /// Set the name which shows up in debugging tools for this resource.
    fn set_debug_name(&mut self, name: &str) {
        self.debug_metadata_mut().set_name(name);
    }

    /// Same as [VulkanDebug::set_debug_name] with a formatted name.
    ///
    /// The rendered name is truncated to fit [NAME_CAPACITY].
    fn set_debug_name_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.set_debug_name(&bounded_name::render(args));
    }

    /// Attach an opaque tag to this resource.
    fn set_debug_tag(&mut self, tag_id: u64, tag: &[u8]) {
        self.debug_metadata_mut().set_tag(tag_id, tag);
    }

    /// The last name assigned to this resource, if any handle is tracked.
    fn debug_name(&self) -> Option<&str> {
        self.debug_metadata().name()
    }
}
