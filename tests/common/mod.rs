//! A driver stand-in for exercising debug metadata without a GPU.

use std::{
    ffi::CStr,
    sync::{Arc, Mutex},
};

use ash::{prelude::VkResult, vk};
use ccthw_debug_marker::graphics::vulkan_api::debug_marker::{
    weak_device, DebugMarkerDevice, DeviceRef, ObjectKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Name(u64, String),
    Tag(u64, u64, Vec<u8>),
}

/// Records every call. Names are accepted and tags are always rejected, so
/// the scenarios also cover a driver that fails part of the time. The cache
/// must reflect the requested tag either way.
pub struct FakeDriver {
    enabled: bool,
    calls: Mutex<Vec<Call>>,
}

#[allow(dead_code)]
impl FakeDriver {
    pub fn new(enabled: bool) -> Arc<Self> {
        Arc::new(Self {
            enabled,
            calls: Mutex::new(vec![]),
        })
    }

    pub fn weak(self: &Arc<Self>) -> DeviceRef {
        weak_device(self)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn name_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Name(..)))
            .count()
    }
}

impl DebugMarkerDevice for FakeDriver {
    fn is_debug_marker_enabled(&self) -> bool {
        self.enabled
    }

    unsafe fn set_object_name(
        &self,
        _object_kind: ObjectKind,
        object: u64,
        name: &CStr,
    ) -> VkResult<()> {
        let name = name.to_string_lossy().into_owned();
        self.calls.lock().unwrap().push(Call::Name(object, name));
        Ok(())
    }

    /// Rejects every tag after recording it.
    unsafe fn set_object_tag(
        &self,
        _object_kind: ObjectKind,
        object: u64,
        tag_name: u64,
        tag: &[u8],
    ) -> VkResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Tag(object, tag_name, tag.to_vec()));
        Err(vk::Result::ERROR_VALIDATION_FAILED_EXT)
    }
}
