use ash::vk;

use super::RenderDevice;
use crate::graphics::vulkan_api::VulkanError;

impl RenderDevice {
    /// Stall the thread until the GPU is done with all operations.
    pub fn wait_idle(&self) -> Result<(), VulkanError> {
        unsafe {
            self.logical_device
                .device_wait_idle()
                .map_err(VulkanError::UnableToWaitForDeviceToIdle)
        }
    }

    /// Create a raw Vulkan Fence.
    ///
    /// # Safety
    ///
    /// Unsafe because the caller must ensure the Fence is destroyed before the
    /// RenderDevice is dropped.
    pub unsafe fn create_fence(
        &self,
        create_info: &vk::FenceCreateInfo,
    ) -> Result<vk::Fence, VulkanError> {
        self.logical_device
            .create_fence(create_info, None)
            .map_err(VulkanError::UnableToCreateFence)
    }

    /// Destroy the raw Vulkan Fence.
    ///
    /// # Safety
    ///
    /// Unsafe because the caller must ensure the Fence is no longer being used
    /// by any GPU operations at the time of destruction.
    pub unsafe fn destroy_fence(&self, fence: vk::Fence) {
        self.logical_device.destroy_fence(fence, None)
    }

    /// Create a Vulkan semaphore.
    ///
    /// # Safety
    ///
    /// The caller is responsible for destroying the Semaphore before the
    /// RenderDevice is dropped.
    pub unsafe fn create_semaphore(
        &self,
        create_info: &vk::SemaphoreCreateInfo,
    ) -> Result<vk::Semaphore, VulkanError> {
        self.logical_device
            .create_semaphore(create_info, None)
            .map_err(VulkanError::UnableToCreateSemaphore)
    }

    /// Destroy a vulkan semaphore.
    ///
    /// # Safety
    ///
    /// The caller is responsible for ensuring that the Semaphore is not being
    /// used by the GPU when this method is called.
    pub unsafe fn destroy_semaphore(&self, semaphore: vk::Semaphore) {
        self.logical_device.destroy_semaphore(semaphore, None)
    }
}
