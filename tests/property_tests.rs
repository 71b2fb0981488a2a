//! Property-based tests for debug metadata caching.

mod common;

use ash::vk::{self, Handle};
use proptest::prelude::*;

use ccthw_debug_marker::graphics::vulkan_api::debug_marker::{
    MetadataProvider, MetadataWorker, ObjectKind, ProviderMode,
    NAME_CAPACITY,
};

use common::FakeDriver;

/// Names without nul bytes, which the driver would reject.
fn debug_name() -> impl Strategy<Value = String> {
    "[^\\x00]{0,64}"
}

fn bound_worker(driver: &std::sync::Arc<FakeDriver>) -> MetadataWorker {
    let mut worker = MetadataWorker::new(driver.weak(), ObjectKind::BUFFER);
    unsafe { worker.set_handle(vk::Buffer::from_raw(0x5)) };
    worker
}

proptest! {
    #[test]
    fn repeated_names_are_sent_at_most_once(
        name in debug_name(),
        repeats in 1usize..16,
    ) {
        let driver = FakeDriver::new(true);
        let mut worker = bound_worker(&driver);

        for _ in 0..repeats {
            worker.set_name(&name, false);
        }

        let expected = if name.is_empty() { 0 } else { 1 };
        prop_assert_eq!(driver.name_call_count(), expected);
    }

    #[test]
    fn forced_names_are_always_sent(
        name in debug_name(),
        repeats in 1usize..16,
    ) {
        let driver = FakeDriver::new(true);
        let mut worker = bound_worker(&driver);

        for _ in 0..repeats {
            worker.set_name(&name, true);
        }

        prop_assert_eq!(driver.name_call_count(), repeats);
    }

    #[test]
    fn the_cache_reflects_the_last_name(
        names in prop::collection::vec(debug_name(), 1..8),
        enabled in any::<bool>(),
    ) {
        let driver = FakeDriver::new(enabled);
        let mut worker = bound_worker(&driver);

        for name in &names {
            worker.set_name(name, false);
        }

        prop_assert_eq!(worker.name(), names.last().unwrap().as_str());
    }

    #[test]
    fn the_cache_reflects_the_last_tag(
        tag_id in any::<u64>(),
        tag in prop::collection::vec(any::<u8>(), 1..32),
        enabled in any::<bool>(),
    ) {
        let driver = FakeDriver::new(enabled);
        let mut worker = bound_worker(&driver);

        worker.set_tag(tag_id, &tag, false);

        prop_assert_eq!(worker.tag(), (&tag[..], tag_id));
    }

    #[test]
    fn formatted_names_match_plain_names(
        prefix in "[a-z]{1,16}",
        index in any::<u32>(),
    ) {
        let driver = FakeDriver::new(true);
        let mut formatted = MetadataProvider::for_handle_type::<vk::Fence>(
            driver.weak(),
            ProviderMode::SingleHandle,
        );
        let mut plain = MetadataProvider::for_handle_type::<vk::Fence>(
            driver.weak(),
            ProviderMode::SingleHandle,
        );

        formatted.set_name_fmt(format_args!("{}-{}", prefix, index));
        plain.set_name(&format!("{}-{}", prefix, index));

        prop_assert_eq!(formatted.name(), plain.name());
    }

    #[test]
    fn formatted_names_never_exceed_capacity(len in 0usize..3000) {
        let driver = FakeDriver::new(true);
        let mut provider = MetadataProvider::for_handle_type::<vk::Fence>(
            driver.weak(),
            ProviderMode::SingleHandle,
        );

        provider.set_name_fmt(format_args!("{}", "n".repeat(len)));

        let cached = provider.name().unwrap();
        prop_assert_eq!(cached.len(), len.min(NAME_CAPACITY - 1));
    }

    #[test]
    fn every_delegate_carries_the_first_delegates_label(
        name in debug_name(),
        count in 1u64..12,
    ) {
        let driver = FakeDriver::new(true);
        let mut provider = MetadataProvider::for_handle_type::<vk::Image>(
            driver.weak(),
            ProviderMode::Delegates,
        );

        unsafe { provider.add_delegate(vk::Image::from_raw(1)) };
        provider.set_name(&name);
        for raw in 2..=count {
            unsafe { provider.add_delegate(vk::Image::from_raw(raw)) };
        }

        prop_assert_eq!(provider.delegate_count() as u64, count);
        for worker in provider.delegates() {
            prop_assert_eq!(worker.name(), name.as_str());
        }
    }
}
