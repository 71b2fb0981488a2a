mod fence;
mod semaphore;
mod semaphore_pool;

pub use self::{
    fence::Fence, semaphore::Semaphore, semaphore_pool::SemaphorePool,
};
