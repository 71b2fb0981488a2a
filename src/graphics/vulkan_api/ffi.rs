use std::{
    ffi::{CStr, CString},
    os::raw::c_char,
};

use crate::graphics::vulkan_api::VulkanError;

/// Build a vector of pointers to c-style strings from a slice of rust
/// strings.
///
/// The pointers are only valid while the returned CStrings are alive, so keep
/// both halves of the tuple around for the duration of the Vulkan call.
pub fn to_os_ptrs(
    strings: &[String],
) -> Result<(Vec<CString>, Vec<*const c_char>), VulkanError> {
    let cstrings = strings
        .iter()
        .map(|name| CString::new(name.as_str()))
        .collect::<Result<Vec<CString>, _>>()?;
    let ptrs = cstrings
        .iter()
        .map(|cstr| cstr.as_ptr())
        .collect::<Vec<*const c_char>>();
    Ok((cstrings, ptrs))
}

/// Read a fixed-size, nul-terminated name from a Vulkan properties struct.
/// Invalid utf-8 is replaced rather than rejected.
pub fn name_from_raw(raw: &[c_char]) -> String {
    let bytes: Vec<u8> = raw
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// The name of a Vulkan extension as an owned string.
pub fn extension_name(name: &CStr) -> String {
    name.to_string_lossy().into_owned()
}
