use std::{
    ffi::CStr,
    sync::{Arc, Mutex},
};

use ash::{prelude::VkResult, vk};

use super::{weak_device, DebugMarkerDevice, DeviceRef, ObjectKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    Name {
        object_kind: ObjectKind,
        object: u64,
        name: String,
    },
    Tag {
        object_kind: ObjectKind,
        object: u64,
        tag_name: u64,
        tag: Vec<u8>,
    },
}

/// A device which records every debug marker call instead of reaching a
/// driver.
pub struct RecordingDevice {
    enabled: bool,
    failing: bool,
    calls: Mutex<Vec<DriverCall>>,
}

impl RecordingDevice {
    pub fn supported() -> Arc<Self> {
        Self::build(true, false)
    }

    pub fn unsupported() -> Arc<Self> {
        Self::build(false, false)
    }

    /// Supports the extension but rejects every call.
    pub fn failing() -> Arc<Self> {
        Self::build(true, true)
    }

    fn build(enabled: bool, failing: bool) -> Arc<Self> {
        Arc::new(Self {
            enabled,
            failing,
            calls: Mutex::new(vec![]),
        })
    }

    pub fn weak(self: &Arc<Self>) -> DeviceRef {
        weak_device(self)
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn name_calls(&self) -> Vec<(u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DriverCall::Name { object, name, .. } => Some((object, name)),
                _ => None,
            })
            .collect()
    }

    pub fn tag_calls(&self) -> Vec<(u64, u64, Vec<u8>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DriverCall::Tag {
                    object,
                    tag_name,
                    tag,
                    ..
                } => Some((object, tag_name, tag)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: DriverCall) -> VkResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(vk::Result::ERROR_OUT_OF_HOST_MEMORY)
        } else {
            Ok(())
        }
    }
}

impl DebugMarkerDevice for RecordingDevice {
    fn is_debug_marker_enabled(&self) -> bool {
        self.enabled
    }

    unsafe fn set_object_name(
        &self,
        object_kind: ObjectKind,
        object: u64,
        name: &CStr,
    ) -> VkResult<()> {
        self.record(DriverCall::Name {
            object_kind,
            object,
            name: name.to_string_lossy().into_owned(),
        })
    }

    unsafe fn set_object_tag(
        &self,
        object_kind: ObjectKind,
        object: u64,
        tag_name: u64,
        tag: &[u8],
    ) -> VkResult<()> {
        self.record(DriverCall::Tag {
            object_kind,
            object,
            tag_name,
            tag: tag.to_vec(),
        })
    }
}
