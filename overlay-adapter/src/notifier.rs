use alloc::sync::Arc;

use overlay::{ToastEntry, ToastId, ToastManager, ToastManagerOptions};

/// A framework-neutral facade that wraps an [`overlay::ToastManager`] for
/// imperative hosts.
///
/// Component-driven hosts mount each toast themselves and forward the
/// `notify_*` lifecycle events as their transitions run. Imperative hosts
/// (a `notify()`-style API) have no separate mount phase: the visual
/// representation is created on the spot. This facade folds the two steps
/// together — each [`Self::notify`] registers the entry and immediately
/// reports the mount through the provided `mount` callback.
pub struct Notifier<C, H> {
    toasts: ToastManager<C, H>,
    mount: Arc<dyn Fn(&C) -> H + Send + Sync>,
}

impl<C, H> Notifier<C, H> {
    pub fn new(
        options: ToastManagerOptions<C, H>,
        mount: impl Fn(&C) -> H + Send + Sync + 'static,
    ) -> Self {
        Self {
            toasts: ToastManager::new(options),
            mount: Arc::new(mount),
        }
    }

    pub fn toasts(&self) -> &ToastManager<C, H> {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager<C, H> {
        &mut self.toasts
    }

    pub fn into_toasts(self) -> ToastManager<C, H> {
        self.toasts
    }

    /// Registers a toast and mounts it in one step. Returns its id.
    pub fn notify(&mut self, config: C) -> ToastId {
        let id = self.toasts.open(config);
        let handle = self
            .toasts
            .get(id)
            .map(|entry| (self.mount)(entry.config()));
        if let Some(handle) = handle {
            self.toasts.notify_open(id, handle);
        }
        id
    }

    /// Starts the toast's exit: followers close ranks while the entry keeps
    /// its layout for the exit transition.
    pub fn close(&mut self, id: ToastId) {
        self.toasts.notify_close(id);
    }

    /// Completes the toast's exit and removes the entry.
    pub fn destroy(&mut self, id: ToastId) {
        self.toasts.notify_destroy(id);
    }

    /// Close and destroy in one step, for hosts without exit transitions.
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.batch_update(|toasts| {
            toasts.notify_close(id);
            toasts.notify_destroy(id);
        });
    }

    pub fn entries(&self) -> &[ToastEntry<C, H>] {
        self.toasts.entries()
    }
}

impl<C, H> core::fmt::Debug for Notifier<C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Notifier")
            .field("toasts", &self.toasts)
            .finish_non_exhaustive()
    }
}
