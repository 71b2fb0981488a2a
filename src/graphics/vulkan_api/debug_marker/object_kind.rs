use ash::vk;

/// The category of a Vulkan handle, as understood by VK_EXT_debug_marker.
pub type ObjectKind = vk::DebugReportObjectTypeEXT;

/// Vulkan handle types which can be named through VK_EXT_debug_marker.
pub trait DebugReportObject: vk::Handle + Copy {
    const OBJECT_KIND: ObjectKind;
}

macro_rules! impl_debug_report_object {
    ($($handle:ident = $kind:ident;)*) => {
        $(
            impl DebugReportObject for vk::$handle {
                const OBJECT_KIND: ObjectKind = ObjectKind::$kind;
            }
        )*
    }
}

impl_debug_report_object! {
    Instance = INSTANCE;
    PhysicalDevice = PHYSICAL_DEVICE;
    Device = DEVICE;
    Queue = QUEUE;
    Semaphore = SEMAPHORE;
    CommandBuffer = COMMAND_BUFFER;
    Fence = FENCE;
    DeviceMemory = DEVICE_MEMORY;
    Buffer = BUFFER;
    Image = IMAGE;
    Event = EVENT;
    QueryPool = QUERY_POOL;
    BufferView = BUFFER_VIEW;
    ImageView = IMAGE_VIEW;
    ShaderModule = SHADER_MODULE;
    PipelineCache = PIPELINE_CACHE;
    PipelineLayout = PIPELINE_LAYOUT;
    RenderPass = RENDER_PASS;
    Pipeline = PIPELINE;
    DescriptorSetLayout = DESCRIPTOR_SET_LAYOUT;
    Sampler = SAMPLER;
    DescriptorPool = DESCRIPTOR_POOL;
    DescriptorSet = DESCRIPTOR_SET;
    Framebuffer = FRAMEBUFFER;
    CommandPool = COMMAND_POOL;
    SurfaceKHR = SURFACE_KHR;
    SwapchainKHR = SWAPCHAIN_KHR;
    DebugReportCallbackEXT = DEBUG_REPORT_CALLBACK_EXT;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_types_map_to_their_report_kind() {
        assert_eq!(vk::Fence::OBJECT_KIND, ObjectKind::FENCE);
        assert_eq!(vk::Buffer::OBJECT_KIND, ObjectKind::BUFFER);
        assert_eq!(vk::Pipeline::OBJECT_KIND, ObjectKind::PIPELINE);
        assert_eq!(vk::SwapchainKHR::OBJECT_KIND, ObjectKind::SWAPCHAIN_KHR);
    }
}
