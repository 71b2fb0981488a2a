use std::sync::Arc;

use ash::vk;

use crate::graphics::vulkan_api::{
    debug_marker::{weak_device, MetadataProvider, ProviderMode},
    RenderDevice, VulkanDebug, VulkanError,
};

/// An owned Vulkan fence object which is automatically destroyed when dropped.
pub struct Fence {
    /// The raw fence handle.
    raw: vk::Fence,

    debug_metadata: MetadataProvider,

    /// The device which created the fence.
    render_device: Arc<RenderDevice>,
}

impl Fence {
    /// Create a new Fence in the SIGNALED state.
    pub fn new(render_device: Arc<RenderDevice>) -> Result<Self, VulkanError> {
        let raw = {
            let create_info = vk::FenceCreateInfo {
                flags: vk::FenceCreateFlags::SIGNALED,
                ..Default::default()
            };
            unsafe { render_device.create_fence(&create_info)? }
        };
        let mut debug_metadata = MetadataProvider::for_handle_type::<vk::Fence>(
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

    /// Get the raw Vulkan resource handle.
    ///
    /// # Safety
    ///
    /// Ownership is *not* transfered. It is the responsibility of the caller
    /// to ensure the underlying resource handle is not kept beyond the
    /// lifetime of this Fence instance.
    pub unsafe fn raw(&self) -> &vk::Fence {
        &self.raw
    }
}

impl VulkanDebug for Fence {
    fn debug_metadata(&self) -> &MetadataProvider {
        &self.debug_metadata
    }

    fn debug_metadata_mut(&mut self) -> &mut MetadataProvider {
        &mut self.debug_metadata
    }
}

impl Drop for Fence {
    /// # Safety
    ///
    /// The application must ensure that this Fence is not in-use by the GPU
    /// when it is dropped.
    fn drop(&mut self) {
        unsafe {
            self.debug_metadata.set_handle(vk::Fence::null());
            self.render_device.destroy_fence(self.raw);
        }
    }
}
