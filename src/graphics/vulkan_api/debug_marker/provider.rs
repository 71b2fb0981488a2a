use std::fmt;

use ash::vk;

use super::{
    bounded_name, DebugReportObject, DeviceRef, MetadataWorker, ObjectKind,
    NULL_HANDLE,
};

/// How many handles a [MetadataProvider] keeps metadata for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProviderMode {
    /// Exactly one handle, rebound with [MetadataProvider::set_handle].
    SingleHandle,

    /// Any number of handles, added and removed with
    /// [MetadataProvider::add_delegate] and
    /// [MetadataProvider::remove_delegate]. All delegates share one name and
    /// tag.
    Delegates,
}

#[derive(Debug)]
enum Workers {
    Single(MetadataWorker),
    Delegates {
        device: DeviceRef,
        object_kind: ObjectKind,
        workers: Vec<MetadataWorker>,
    },
}

/// The debug name and tag shared by every Vulkan handle an owning wrapper
/// manages.
///
/// The mode is fixed at creation. Calling a method meant for the other mode
/// is a programming error: it panics in debug builds and does nothing in
/// release builds.
#[derive(Debug)]
pub struct MetadataProvider {
    workers: Workers,
}

impl MetadataProvider {
    /// Create a provider for handles of the given kind.
    ///
    /// In [ProviderMode::SingleHandle] the worker is created immediately. In
    /// [ProviderMode::Delegates] workers are created as delegates are added.
    pub fn new(
        device: DeviceRef,
        object_kind: ObjectKind,
        mode: ProviderMode,
    ) -> Self {
        debug_assert!(
            device.strong_count() > 0,
            "The device was dropped before a {:?} debug provider was created",
            object_kind
        );

        let workers = match mode {
            ProviderMode::SingleHandle => {
                Workers::Single(MetadataWorker::new(device, object_kind))
            }
            ProviderMode::Delegates => Workers::Delegates {
                device,
                object_kind,
                workers: vec![],
            },
        };
        Self { workers }
    }

    /// Create a provider for handles of type `H`.
    pub fn for_handle_type<H: DebugReportObject>(
        device: DeviceRef,
        mode: ProviderMode,
    ) -> Self {
        Self::new(device, H::OBJECT_KIND, mode)
    }

    pub fn mode(&self) -> ProviderMode {
        match self.workers {
            Workers::Single(_) => ProviderMode::SingleHandle,
            Workers::Delegates { .. } => ProviderMode::Delegates,
        }
    }

    /// The shared name. In delegate mode this is the first delegate's name,
    /// or None when there are no delegates.
    pub fn name(&self) -> Option<&str> {
        self.representative().map(MetadataWorker::name)
    }

    /// The shared tag bytes and tag id, chosen the same way as
    /// [MetadataProvider::name].
    pub fn tag(&self) -> Option<(&[u8], u64)> {
        self.representative().map(MetadataWorker::tag)
    }

    /// The single worker. None in delegate mode.
    pub fn worker(&self) -> Option<&MetadataWorker> {
        match &self.workers {
            Workers::Single(worker) => Some(worker),
            Workers::Delegates { .. } => None,
        }
    }

    /// Every delegate in the order it was added. Empty in single-handle mode.
    pub fn delegates(&self) -> &[MetadataWorker] {
        match &self.workers {
            Workers::Single(_) => &[],
            Workers::Delegates { workers, .. } => workers,
        }
    }

    /// Find the delegate bound to `handle`.
    pub fn delegate<H: vk::Handle>(&self, handle: H) -> Option<&MetadataWorker> {
        let raw = handle.as_raw();
        self.delegates()
            .iter()
            .find(|worker| worker.handle() == raw)
    }

    pub fn delegate_count(&self) -> usize {
        self.delegates().len()
    }

    /// Track another handle. Delegate mode only.
    ///
    /// The new delegate copies the name and tag of the first existing
    /// delegate, so every handle converges on the same label.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - the handle must have been created by the provider's device
    ///   - the handle must be removed with
    ///     [MetadataProvider::remove_delegate] before it is destroyed
    pub unsafe fn add_delegate<H: vk::Handle + Copy>(&mut self, handle: H) {
        let (device, object_kind, workers) = match &mut self.workers {
            Workers::Delegates {
                device,
                object_kind,
                workers,
            } => (device, *object_kind, workers),
            Workers::Single(_) => {
                debug_assert!(
                    false,
                    "add_delegate called on a single-handle debug provider"
                );
                return;
            }
        };

        let raw = handle.as_raw();
        if raw == NULL_HANDLE {
            debug_assert!(
                false,
                "add_delegate requires a non-null {:?} handle",
                object_kind
            );
            return;
        }
        debug_assert!(
            workers.iter().all(|worker| worker.handle() != raw),
            "{:?} {:#x} is already a delegate",
            object_kind,
            raw
        );

        let mut delegate = MetadataWorker::new(device.clone(), object_kind);
        delegate.set_handle(handle);

        if let Some(first) = workers.first() {
            let (tag, tag_id) = first.tag();
            delegate.set_name(first.name(), false);
            delegate.set_tag(tag_id, tag, false);
        }

        log::trace!(
            "Added {:?} {:#x} as delegate #{}",
            object_kind,
            raw,
            workers.len()
        );
        workers.push(delegate);
    }

    /// Stop tracking a handle. Delegate mode only.
    ///
    /// Nothing is sent to the driver, the cached metadata is simply dropped.
    pub fn remove_delegate<H: vk::Handle>(&mut self, handle: H) {
        let workers = match &mut self.workers {
            Workers::Delegates { workers, .. } => workers,
            Workers::Single(_) => {
                debug_assert!(
                    false,
                    "remove_delegate called on a single-handle debug provider"
                );
                return;
            }
        };

        let raw = handle.as_raw();
        match workers.iter().position(|worker| worker.handle() == raw) {
            Some(index) => {
                let removed = workers.remove(index);
                log::trace!(
                    "Removed {:?} {:#x} from the delegates",
                    removed.object_kind(),
                    raw
                );
            }
            None => {
                debug_assert!(false, "{:#x} is not a delegate", raw);
            }
        }
    }

    /// Set the name for every tracked handle.
    ///
    /// Delegates are updated one at a time, in order.
    pub fn set_name(&mut self, name: &str) {
        for worker in self.workers_mut() {
            worker.set_name(name, false);
        }
    }

    /// Format a name, then behave exactly like [MetadataProvider::set_name].
    ///
    /// The name is rendered into a buffer of [super::NAME_CAPACITY] bytes,
    /// including the nul terminator, and silently truncated.
    pub fn set_name_fmt(&mut self, args: fmt::Arguments<'_>) {
        let name = bounded_name::render(args);
        self.set_name(&name);
    }

    /// Set the tag for every tracked handle. The bytes are copied.
    pub fn set_tag(&mut self, tag_id: u64, tag: &[u8]) {
        for worker in self.workers_mut() {
            worker.set_tag(tag_id, tag, false);
        }
    }

    /// Send the cached name and tag to the driver again for every handle.
    ///
    /// Binding a handle never reaches the driver, so owners call this after
    /// [MetadataProvider::set_handle] when the new handle should carry the
    /// existing name.
    pub fn refresh(&mut self) {
        for worker in self.workers_mut() {
            let name = worker.name().to_owned();
            let (tag, tag_id) = worker.tag();
            let tag = tag.to_vec();
            if !name.is_empty() {
                worker.set_name(&name, true);
            }
            if !tag.is_empty() {
                worker.set_tag(tag_id, &tag, true);
            }
        }
    }

    /// Replace the tracked handle. Single-handle mode only.
    ///
    /// The old handle must be unbound with the null handle before a new one
    /// is bound. Rebinding directly panics in debug builds and is ignored in
    /// release builds.
    ///
    /// # Safety
    ///
    /// Unsafe because:
    ///   - a non-null handle must have been created by the provider's device
    ///   - the handle must be replaced or unbound before it is destroyed
    pub unsafe fn set_handle<H: vk::Handle>(&mut self, handle: H) {
        match &mut self.workers {
            Workers::Single(worker) => worker.set_handle(handle),
            Workers::Delegates { .. } => {
                debug_assert!(
                    false,
                    "set_handle called on a delegate debug provider"
                );
            }
        }
    }

    fn representative(&self) -> Option<&MetadataWorker> {
        match &self.workers {
            Workers::Single(worker) => Some(worker),
            Workers::Delegates { workers, .. } => workers.first(),
        }
    }

    fn workers_mut(&mut self) -> std::slice::IterMut<'_, MetadataWorker> {
        match &mut self.workers {
            Workers::Single(worker) => std::slice::from_mut(worker).iter_mut(),
            Workers::Delegates { workers, .. } => workers.iter_mut(),
        }
    }
}
