mod common;

use ash::vk::{self, Handle};
use ccthw_debug_marker::graphics::vulkan_api::debug_marker::{
    MetadataProvider, ProviderMode,
};

use common::{Call, FakeDriver};

fn texture(raw: u64) -> vk::Image {
    vk::Image::from_raw(raw)
}

#[test]
fn delegates_share_one_label() {
    let driver = FakeDriver::new(true);
    let mut provider = MetadataProvider::for_handle_type::<vk::Image>(
        driver.weak(),
        ProviderMode::Delegates,
    );
    let bytes = [0xde, 0xad, 0xbe, 0xef];

    unsafe { provider.add_delegate(texture(1)) };
    provider.set_name("Texture A");
    unsafe { provider.add_delegate(texture(2)) };
    assert_eq!(provider.delegate(texture(2)).unwrap().name(), "Texture A");

    provider.set_tag(42, &bytes);
    for handle in [texture(1), texture(2)].iter() {
        let worker = provider.delegate(*handle).unwrap();
        assert_eq!(worker.tag(), (&bytes[..], 42));
    }

    provider.remove_delegate(texture(1));
    assert_eq!(provider.delegate_count(), 1);
    assert_eq!(provider.delegates()[0].handle(), 2);

    unsafe { provider.add_delegate(texture(1)) };
    let readded = provider.delegate(texture(1)).unwrap();
    assert_eq!(readded.name(), "Texture A");
    assert_eq!(readded.tag(), (&bytes[..], 42));

    assert_eq!(driver.calls(), vec![
        Call::Name(1, "Texture A".to_owned()),
        Call::Name(2, "Texture A".to_owned()),
        Call::Tag(1, 42, bytes.to_vec()),
        Call::Tag(2, 42, bytes.to_vec()),
        Call::Name(1, "Texture A".to_owned()),
        Call::Tag(1, 42, bytes.to_vec()),
    ]);
}

#[test]
fn readded_delegates_follow_the_current_first_delegate() {
    let driver = FakeDriver::new(true);
    let mut provider = MetadataProvider::for_handle_type::<vk::Buffer>(
        driver.weak(),
        ProviderMode::Delegates,
    );

    unsafe {
        provider.add_delegate(vk::Buffer::from_raw(1));
        provider.add_delegate(vk::Buffer::from_raw(2));
    }
    provider.set_name("staging");
    provider.remove_delegate(vk::Buffer::from_raw(1));
    provider.set_name("staging (resized)");
    unsafe { provider.add_delegate(vk::Buffer::from_raw(1)) };

    let names: Vec<&str> =
        provider.delegates().iter().map(|worker| worker.name()).collect();
    assert_eq!(names, vec!["staging (resized)", "staging (resized)"]);
}

#[test]
fn single_handle_rebinding_keeps_the_cache() {
    let driver = FakeDriver::new(true);
    let mut provider = MetadataProvider::for_handle_type::<vk::Fence>(
        driver.weak(),
        ProviderMode::SingleHandle,
    );

    provider.set_name("in flight");
    assert!(driver.calls().is_empty());

    unsafe { provider.set_handle(vk::Fence::from_raw(10)) };
    provider.set_name("in flight");
    assert!(driver.calls().is_empty());

    provider.refresh();
    assert_eq!(driver.calls(), vec![Call::Name(10, "in flight".to_owned())]);
    assert_eq!(provider.worker().unwrap().handle(), 10);
}

#[test]
fn unsupported_drivers_never_hear_anything() {
    let driver = FakeDriver::new(false);
    let mut provider = MetadataProvider::for_handle_type::<vk::Image>(
        driver.weak(),
        ProviderMode::Delegates,
    );

    unsafe { provider.add_delegate(texture(1)) };
    provider.set_name("hidden");
    provider.set_tag(1, b"t");
    unsafe { provider.add_delegate(texture(2)) };

    assert!(driver.calls().is_empty());
    assert_eq!(provider.name(), Some("hidden"));
    assert_eq!(provider.tag(), Some((&b"t"[..], 1)));
}

#[test]
fn rejected_tags_stay_cached_and_are_not_retried() {
    let driver = FakeDriver::new(true);
    let mut provider = MetadataProvider::for_handle_type::<vk::Image>(
        driver.weak(),
        ProviderMode::Delegates,
    );
    unsafe { provider.add_delegate(texture(7)) };

    provider.set_tag(3, b"atlas");
    provider.set_tag(3, b"atlas");

    assert_eq!(driver.calls(), vec![Call::Tag(7, 3, b"atlas".to_vec())]);
    assert_eq!(provider.tag(), Some((&b"atlas"[..], 3)));
}
