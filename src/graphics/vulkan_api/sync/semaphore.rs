use std::sync::Arc;

use ash::vk;

use crate::graphics::vulkan_api::{
    debug_marker::{weak_device, MetadataProvider, ProviderMode},
    RenderDevice, VulkanDebug, VulkanError,
};

/// An owned Vulkan semaphore object which is automatically destroyed when
/// dropped.
pub struct Semaphore {
    /// The raw semaphore handle.
    raw: vk::Semaphore,

    debug_metadata: MetadataProvider,

    /// The device which created the semaphore.
    render_device: Arc<RenderDevice>,
}

impl Semaphore {
    /// Create a new binary semaphore.
    pub fn new(render_device: Arc<RenderDevice>) -> Result<Self, VulkanError> {
        let raw = unsafe { create_raw(&render_device)? };
        let mut debug_metadata =
            MetadataProvider::for_handle_type::<vk::Semaphore>(
                weak_device(&render_device),
                ProviderMode::SingleHandle,
            );
        unsafe { debug_metadata.set_handle(raw) };
        Ok(Self {
            raw,
            debug_metadata,
            render_device,
        })
    }

    /// Destroy the semaphore and create a fresh, unsignaled one in its place.
    /// The new handle keeps the debug name and tag of the old one.
    ///
    /// Useful when a binary semaphore was signaled but its wait was never
    /// submitted, e.g. after a failed present.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - the old semaphore must not be in use by the GPU
    pub unsafe fn replace(&mut self) -> Result<(), VulkanError> {
        let replacement = create_raw(&self.render_device)?;

        self.debug_metadata.set_handle(vk::Semaphore::null());
        self.render_device.destroy_semaphore(self.raw);

        self.raw = replacement;
        self.debug_metadata.set_handle(self.raw);
        self.debug_metadata.refresh();
        Ok(())
    }

    /// Get the underlying Vulkan resource handle.
    ///
    /// # Safety
    ///
    /// Ownership is not transfered. The caller is responsible for ensuring that
    /// the handle is not kept beyond the lifetime of this object.
    pub unsafe fn raw(&self) -> &vk::Semaphore {
        &self.raw
    }
}

unsafe fn create_raw(
    render_device: &RenderDevice,
) -> Result<vk::Semaphore, VulkanError> {
    let create_info = vk::SemaphoreCreateInfo {
        ..Default::default()
    };
    render_device.create_semaphore(&create_info)
}

impl VulkanDebug for Semaphore {
    fn debug_metadata(&self) -> &MetadataProvider {
        &self.debug_metadata
    }

    fn debug_metadata_mut(&mut self) -> &mut MetadataProvider {
        &mut self.debug_metadata
    }
}

impl Drop for Semaphore {
    /// # Safety
    ///
    /// The application must ensure the Semaphore is no longer in use by the GPU
    /// before it is dropped.
    fn drop(&mut self) {
        unsafe {
            self.debug_metadata.set_handle(vk::Semaphore::null());
            self.render_device.destroy_semaphore(self.raw);
        }
    }
}
