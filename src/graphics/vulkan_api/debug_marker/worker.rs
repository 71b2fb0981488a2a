use std::ffi::CString;

use ash::vk;

use super::{DeviceRef, ObjectKind, NULL_HANDLE};

/// Caches the name and tag for a single Vulkan handle and forwards them to
/// VK_EXT_debug_marker when the device supports it.
///
/// The cache is always updated, even when the driver never hears about the
/// change, so [MetadataWorker::name] and [MetadataWorker::tag] reflect what
/// the application asked for.
#[derive(Debug)]
pub struct MetadataWorker {
    device: DeviceRef,
    object_kind: ObjectKind,
    handle: u64,
    is_debug_marker_available: bool,
    name: String,
    tag_id: u64,
    tag: Vec<u8>,
}

impl MetadataWorker {
    /// Create a worker for handles of the given kind.
    ///
    /// Extension support is queried exactly once, here. The device must still
    /// be alive.
    pub fn new(device: DeviceRef, object_kind: ObjectKind) -> Self {
        let live_device = device.upgrade();
        debug_assert!(
            live_device.is_some(),
            "The device was dropped before a {:?} debug worker was created",
            object_kind
        );
        let is_debug_marker_available = live_device
            .map(|device| device.is_debug_marker_enabled())
            .unwrap_or(false);

        Self {
            device,
            object_kind,
            handle: NULL_HANDLE,
            is_debug_marker_available,
            name: String::new(),
            tag_id: 0,
            tag: vec![],
        }
    }

    /// The cached name. Empty until a name is set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cached tag bytes and tag id. Empty and zero until a tag is set.
    pub fn tag(&self) -> (&[u8], u64) {
        (&self.tag, self.tag_id)
    }

    /// The raw handle currently represented by this worker. Zero when unbound.
    pub fn handle(&self) -> u64 {
        self.handle
    }

    pub fn object_kind(&self) -> ObjectKind {
        self.object_kind
    }

    /// True when the device had VK_EXT_debug_marker enabled at the time this
    /// worker was created.
    pub fn is_debug_marker_available(&self) -> bool {
        self.is_debug_marker_available
    }

    /// Replace the represented handle. The null handle unbinds the worker.
    ///
    /// A bound worker must be unbound before it takes another handle.
    /// Rebinding directly panics in debug builds and is ignored in release
    /// builds. No driver call happens here. The driver learns about the new handle
    /// on the next name or tag update.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - a non-null handle must have been created by the worker's device
    ///   - the handle must be replaced or unbound before it is destroyed
    pub unsafe fn set_handle<H: vk::Handle>(&mut self, handle: H) {
        let raw = handle.as_raw();
        if self.handle != NULL_HANDLE && raw != NULL_HANDLE {
            debug_assert!(
                false,
                "{:?} worker is still bound to {:#x}, unbind it with the null \
                 handle before binding {:#x}",
                self.object_kind,
                self.handle,
                raw
            );
            return;
        }
        self.handle = raw;
    }

    /// Update the cached name and forward it to the driver.
    ///
    /// Setting the same name twice is a no-op unless `force_update` is true.
    pub fn set_name(&mut self, name: &str, force_update: bool) {
        if !force_update && self.name == name {
            return;
        }

        self.name.clear();
        self.name.push_str(name);

        if self.should_call_driver() {
            self.send_name();
        }
    }

    /// Update the cached tag and forward it to the driver.
    ///
    /// The bytes are copied. Setting the same tag id and bytes twice is a
    /// no-op unless `force_update` is true.
    pub fn set_tag(&mut self, tag_id: u64, tag: &[u8], force_update: bool) {
        if !force_update && self.tag_id == tag_id && self.tag == tag {
            return;
        }

        self.tag_id = tag_id;
        self.tag.clear();
        self.tag.extend_from_slice(tag);

        if self.should_call_driver() {
            self.send_tag();
        }
    }

    fn should_call_driver(&self) -> bool {
        self.is_debug_marker_available && self.handle != NULL_HANDLE
    }

    fn send_name(&self) {
        let device = match self.device.upgrade() {
            Some(device) => device,
            None => {
                log::trace!(
                    "Device is gone, skipping name {:?} for {:?} {:#x}",
                    self.name,
                    self.object_kind,
                    self.handle
                );
                return;
            }
        };

        let c_name = match CString::new(self.name.as_str()) {
            Ok(c_name) => c_name,
            Err(_) => {
                log::warn!(
                    "Debug name {:?} contains a nul byte and was not sent to the driver",
                    self.name
                );
                return;
            }
        };

        let result = unsafe {
            device.set_object_name(self.object_kind, self.handle, &c_name)
        };
        if let Err(error) = result {
            log::debug!(
                "Unable to name {:?} {:#x} as {:?}: {:?}",
                self.object_kind,
                self.handle,
                self.name,
                error
            );
        }
    }

    fn send_tag(&self) {
        // VK_EXT_debug_marker rejects zero-sized tags
        if self.tag.is_empty() {
            log::trace!(
                "Skipping empty tag {} for {:?} {:#x}",
                self.tag_id,
                self.object_kind,
                self.handle
            );
            return;
        }

        let device = match self.device.upgrade() {
            Some(device) => device,
            None => {
                log::trace!(
                    "Device is gone, skipping tag {} for {:?} {:#x}",
                    self.tag_id,
                    self.object_kind,
                    self.handle
                );
                return;
            }
        };

        let result = unsafe {
            device.set_object_tag(
                self.object_kind,
                self.handle,
                self.tag_id,
                &self.tag,
            )
        };
        if let Err(error) = result {
            log::debug!(
                "Unable to tag {:?} {:#x} with tag {}: {:?}",
                self.object_kind,
                self.handle,
                self.tag_id,
                error
            );
        }
    }
}
