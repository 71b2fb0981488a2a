pub mod vulkan_api;
