use core::sync::atomic::{AtomicU64, Ordering};

/// Opaque identity token for a toast entry.
///
/// Ids are drawn from a process-wide monotonic counter: they are never
/// reused and carry no meaning beyond equality. Hosts hold on to the id
/// returned by [`crate::ToastManager::open`] and feed it back through the
/// lifecycle callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToastId(pub(crate) u64);

impl ToastId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Snapshot of the page scroll lock, reported to the host on every
/// engage/release transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollLockState {
    pub locked: bool,
    /// Scrollbar-width compensation in pixels (applied as trailing padding so
    /// content does not shift when the scrollbar disappears). 0 when unlocked.
    pub compensation: u32,
}
