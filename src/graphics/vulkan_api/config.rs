/// Options used when creating the [super::Instance] and
/// [super::RenderDevice].
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Reported to the driver in the application info.
    pub application_name: String,

    /// Enable VK_LAYER_KHRONOS_validation when the layer is installed.
    pub enable_validation: bool,

    /// Enable VK_EXT_debug_marker when the device supports it. When this is
    /// false, debug names and tags are only cached.
    pub request_debug_marker: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            application_name: "ccthw debug marker".to_owned(),
            enable_validation: cfg!(debug_assertions),
            request_debug_marker: true,
        }
    }
}
