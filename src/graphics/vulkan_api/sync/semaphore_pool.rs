use std::sync::Arc;

use ash::vk;

use crate::graphics::vulkan_api::{
    debug_marker::{weak_device, MetadataProvider, ProviderMode},
    RenderDevice, VulkanDebug, VulkanError,
};

/// A semaphore pool maintains a collection of binary semaphores which are
/// available for re-use.
///
/// Every semaphore the pool has created shares the pool's debug name and tag,
/// including the ones currently handed out. All of them are destroyed when
/// the pool is dropped.
pub struct SemaphorePool {
    semaphores: Vec<vk::Semaphore>,
    idle_semaphores: Vec<vk::Semaphore>,
    debug_metadata: MetadataProvider,
    label: PoolLabel,
    render_device: Arc<RenderDevice>,
}

impl SemaphorePool {
    /// Create a new, empty semaphore pool.
    pub fn new(render_device: Arc<RenderDevice>) -> Self {
        let debug_metadata = MetadataProvider::for_handle_type::<vk::Semaphore>(
            weak_device(&render_device),
            ProviderMode::Delegates,
        );
        Self {
            semaphores: vec![],
            idle_semaphores: vec![],
            debug_metadata,
            label: PoolLabel::default(),
            render_device,
        }
    }

    /// Get a semaphore from the pool, or create a new one if none are
    /// available. New semaphores pick up the pool's debug name and tag.
    ///
    /// # Safety
    ///
    /// Ownership is not transfered. The semaphore must be returned to the pool
    /// or simply abandoned before the pool is dropped.
    pub unsafe fn get_semaphore(
        &mut self,
    ) -> Result<vk::Semaphore, VulkanError> {
        if let Some(recycled) = self.idle_semaphores.pop() {
            return Ok(recycled);
        }

        let create_info = vk::SemaphoreCreateInfo {
            ..Default::default()
        };
        let semaphore = self.render_device.create_semaphore(&create_info)?;
        self.debug_metadata.add_delegate(semaphore);
        self.label.apply_to_first_delegate(&mut self.debug_metadata);
        self.semaphores.push(semaphore);
        log::trace!(
            "{:?} now owns {} semaphores",
            self.debug_name(),
            self.semaphores.len()
        );
        Ok(semaphore)
    }

    /// Return a semaphore to the pool for future use.
    pub fn return_semaphore(&mut self, semaphore: vk::Semaphore) {
        debug_assert!(
            self.semaphores.contains(&semaphore),
            "{:?} does not belong to this pool",
            semaphore
        );
        self.idle_semaphores.push(semaphore);
    }

    /// Destroy every idle semaphore.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - the idle semaphores must not be in use by the GPU
    pub unsafe fn trim(&mut self) {
        for semaphore in self.idle_semaphores.drain(..) {
            self.debug_metadata.remove_delegate(semaphore);
            self.semaphores.retain(|&owned| owned != semaphore);
            self.render_device.destroy_semaphore(semaphore);
        }
    }

    /// How many semaphores the pool owns, idle or not.
    pub fn len(&self) -> usize {
        self.semaphores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.semaphores.is_empty()
    }

    /// How many semaphores are waiting to be handed out again.
    pub fn idle_count(&self) -> usize {
        self.idle_semaphores.len()
    }
}

impl VulkanDebug for SemaphorePool {
    fn debug_metadata(&self) -> &MetadataProvider {
        &self.debug_metadata
    }

    fn debug_metadata_mut(&mut self) -> &mut MetadataProvider {
        &mut self.debug_metadata
    }

    fn set_debug_name(&mut self, name: &str) {
        self.label.set_name(&mut self.debug_metadata, name);
    }

    fn set_debug_tag(&mut self, tag_id: u64, tag: &[u8]) {
        self.label.set_tag(&mut self.debug_metadata, tag_id, tag);
    }

    /// The pool's own name. Set even while the pool owns no semaphores.
    fn debug_name(&self) -> Option<&str> {
        self.label.name()
    }
}

/// The label a pool hands to its semaphores.
///
/// A delegate provider with no delegates has nowhere to keep a name, so the
/// pool remembers it and gives it to the first semaphore it creates, both
/// before the first `get_semaphore` and after `trim` removed every delegate.
/// Later semaphores copy it from the first delegate.
#[derive(Debug, Default)]
struct PoolLabel {
    name: Option<String>,
    tag: Option<(u64, Vec<u8>)>,
}

impl PoolLabel {
    fn set_name(&mut self, provider: &mut MetadataProvider, name: &str) {
        self.name = Some(name.to_owned());
        provider.set_name(name);
    }

    fn set_tag(
        &mut self,
        provider: &mut MetadataProvider,
        tag_id: u64,
        tag: &[u8],
    ) {
        self.tag = Some((tag_id, tag.to_vec()));
        provider.set_tag(tag_id, tag);
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Label the provider's only delegate. Does nothing when there are
    /// other delegates, they already carry the label.
    fn apply_to_first_delegate(&self, provider: &mut MetadataProvider) {
        if provider.delegate_count() != 1 {
            return;
        }
        if let Some(name) = &self.name {
            provider.set_name(name);
        }
        if let Some((tag_id, tag)) = &self.tag {
            provider.set_tag(*tag_id, tag);
        }
    }
}

impl Drop for SemaphorePool {
    /// # Safety
    ///
    /// The application must ensure no semaphore from the pool is in use by the
    /// GPU when the pool is dropped.
    fn drop(&mut self) {
        for semaphore in self.semaphores.drain(..) {
            self.debug_metadata.remove_delegate(semaphore);
            unsafe {
                self.render_device.destroy_semaphore(semaphore);
            }
        }
    }
}
