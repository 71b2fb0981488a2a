//! Create a headless device, name a few objects, and show what each wrapper
//! reports. Run it under RenderDoc or with validation layers enabled to see
//! the names on the driver side.

use std::sync::Arc;

use anyhow::Result;
use ccthw_debug_marker::{
    graphics::vulkan_api::{
        DeviceConfig, Fence, Instance, RenderDevice, Semaphore, SemaphorePool,
        VulkanDebug,
    },
    logging,
};

fn main() -> Result<()> {
    let _logger = logging::setup()?;

    let config = DeviceConfig::default();
    let instance = Instance::new(&config)?;
    let render_device = Arc::new(RenderDevice::new(instance, &config)?);

    let mut fence = Fence::new(render_device.clone())?;
    fence.set_debug_name("frame fence");

    let mut semaphore = Semaphore::new(render_device.clone())?;
    semaphore.set_debug_name_fmt(format_args!("acquire semaphore #{}", 0));
    semaphore.set_debug_tag(0xcc7, b"acquire");
    unsafe { semaphore.replace()? };

    let mut pool = SemaphorePool::new(render_device.clone());
    pool.set_debug_name("render finished");
    let (first, second) = unsafe { (pool.get_semaphore()?, pool.get_semaphore()?) };
    pool.return_semaphore(first);
    pool.return_semaphore(second);

    log::info!("fence: {:?}", fence.debug_name());
    log::info!("semaphore: {:?}", semaphore.debug_name());
    log::info!(
        "pool: {:?} across {} semaphores, {} idle",
        pool.debug_name(),
        pool.len(),
        pool.idle_count()
    );

    unsafe { pool.trim() };
    log::info!("pool after trim: {} semaphores", pool.len());

    render_device.wait_idle()?;
    Ok(())
}
