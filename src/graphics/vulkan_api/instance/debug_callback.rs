use std::{
    ffi::{c_void, CStr},
    os::raw::c_char,
};

use ash::{extensions::ext::DebugReport, vk};

use crate::graphics::vulkan_api::VulkanError;

/// Install a debug report callback which forwards driver and layer messages
/// to the log.
pub fn create_debug_reporter(
    entry: &ash::Entry,
    instance: &ash::Instance,
) -> Result<(DebugReport, vk::DebugReportCallbackEXT), VulkanError> {
    let debug_report = DebugReport::new(entry, instance);
    let create_info = vk::DebugReportCallbackCreateInfoEXT {
        flags: vk::DebugReportFlagsEXT::ERROR
            | vk::DebugReportFlagsEXT::WARNING
            | vk::DebugReportFlagsEXT::PERFORMANCE_WARNING
            | vk::DebugReportFlagsEXT::INFORMATION
            | vk::DebugReportFlagsEXT::DEBUG,
        pfn_callback: Some(debug_report_callback),
        ..Default::default()
    };
    let callback = unsafe {
        debug_report
            .create_debug_report_callback(&create_info, None)
            .map_err(VulkanError::UnableToCreateDebugReportCallback)?
    };
    Ok((debug_report, callback))
}

unsafe extern "system" fn debug_report_callback(
    flags: vk::DebugReportFlagsEXT,
    object_type: vk::DebugReportObjectTypeEXT,
    object: u64,
    _location: usize,
    _message_code: i32,
    p_layer_prefix: *const c_char,
    p_message: *const c_char,
    _p_user_data: *mut c_void,
) -> vk::Bool32 {
    let prefix = lossy(p_layer_prefix);
    let message = lossy(p_message);

    if flags.contains(vk::DebugReportFlagsEXT::ERROR) {
        log::error!("[{}] {:?} {:#x}\n{}", prefix, object_type, object, message);
    } else if flags.intersects(
        vk::DebugReportFlagsEXT::WARNING
            | vk::DebugReportFlagsEXT::PERFORMANCE_WARNING,
    ) {
        log::warn!("[{}] {:?} {:#x}\n{}", prefix, object_type, object, message);
    } else if flags.contains(vk::DebugReportFlagsEXT::INFORMATION) {
        log::debug!("[{}] {:?} {:#x}\n{}", prefix, object_type, object, message);
    } else {
        log::trace!("[{}] {:?} {:#x}\n{}", prefix, object_type, object, message);
    }

    vk::FALSE
}

unsafe fn lossy<'a>(ptr: *const c_char) -> std::borrow::Cow<'a, str> {
    if ptr.is_null() {
        "".into()
    } else {
        CStr::from_ptr(ptr).to_string_lossy()
    }
}
