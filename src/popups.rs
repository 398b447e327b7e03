use alloc::vec::Vec;
use core::cell::Cell;

use crate::options::PopupManagerOptions;
use crate::types::ScrollLockState;

/// A headless popup (modal) stack manager.
///
/// Tracks two insertion-ordered collections over the host's popup identity
/// type `P`:
/// - the visual stack, which answers [`Self::is_top`] (e.g. which popup owns
///   Escape-to-close right now), and
/// - the lock collection, whose occupancy drives the page scroll lock.
///
/// The two are separate because a popup can be open without holding the
/// scroll lock (non-modal), and top-ness must reflect visual stacking order
/// only.
///
/// `P` is compared by equality; hosts use whatever stable identity they have
/// (an id, a component key). Absent entries make `remove`/`unlock` return
/// `None` without mutating anything — never an error.
pub struct PopupManager<P> {
    options: PopupManagerOptions<P>,
    popups: Vec<P>,
    locks: Vec<P>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<P: PartialEq> PopupManager<P> {
    pub fn new(options: PopupManagerOptions<P>) -> Self {
        odebug!(
            has_scroll_lock = options.on_scroll_lock.is_some(),
            "PopupManager::new"
        );
        Self {
            options,
            popups: Vec::new(),
            locks: Vec::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PopupManagerOptions<P> {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }

    /// The visual stack, in registration order.
    pub fn popups(&self) -> &[P] {
        &self.popups
    }

    pub fn top(&self) -> Option<&P> {
        self.popups.last()
    }

    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    /// Whether the page scroll lock is currently engaged.
    pub fn is_locked(&self) -> bool {
        !self.locks.is_empty()
    }

    /// Appends `popup` to the visual stack and returns its index.
    ///
    /// Idempotent: an already-present popup keeps its position and that index
    /// is returned unchanged.
    pub fn add(&mut self, popup: P) -> usize {
        if let Some(index) = index_of(&self.popups, &popup) {
            return index;
        }
        let index = self.popups.len();
        self.popups.push(popup);
        otrace!(index, "PopupManager::add");
        self.notify();
        index
    }

    /// Removes `popup` from the visual stack, returning the index it
    /// occupied, or `None` if it was not present.
    pub fn remove(&mut self, popup: &P) -> Option<usize> {
        let index = index_of(&self.popups, popup)?;
        self.popups.remove(index);
        otrace!(index, "PopupManager::remove");
        self.notify();
        Some(index)
    }

    /// Whether `popup` is the top of a non-empty visual stack.
    pub fn is_top(&self, popup: &P) -> bool {
        self.popups.last().is_some_and(|top| top == popup)
    }

    /// Adds `popup` to the lock collection and returns its index.
    ///
    /// Idempotent like [`Self::add`]. On the empty→non-empty transition the
    /// scroll lock is engaged exactly once: the scrollbar width is queried
    /// and reported through `on_scroll_lock`.
    pub fn lock(&mut self, popup: P) -> usize {
        if let Some(index) = index_of(&self.locks, &popup) {
            return index;
        }
        if self.locks.is_empty() {
            self.engage_scroll_lock();
        }
        let index = self.locks.len();
        self.locks.push(popup);
        otrace!(index, "PopupManager::lock");
        self.notify();
        index
    }

    /// Removes `popup` from the lock collection, returning the index it
    /// occupied, or `None` if it was not holding the lock.
    ///
    /// On the non-empty→empty transition the scroll lock is released exactly
    /// once.
    pub fn unlock(&mut self, popup: &P) -> Option<usize> {
        let index = index_of(&self.locks, popup)?;
        self.locks.remove(index);
        otrace!(index, "PopupManager::unlock");
        if self.locks.is_empty() {
            self.release_scroll_lock();
        }
        self.notify();
        Some(index)
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&PopupManager<P>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    pub fn set_on_scroll_lock(
        &mut self,
        on_scroll_lock: Option<impl Fn(ScrollLockState) + Send + Sync + 'static>,
    ) {
        self.options.on_scroll_lock = on_scroll_lock.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn engage_scroll_lock(&self) {
        let compensation = self
            .options
            .scrollbar_width
            .as_ref()
            .map(|f| f())
            .unwrap_or(0);
        odebug!(compensation, "scroll lock engaged");
        if let Some(cb) = &self.options.on_scroll_lock {
            cb(ScrollLockState {
                locked: true,
                compensation,
            });
        }
    }

    fn release_scroll_lock(&self) {
        odebug!("scroll lock released");
        if let Some(cb) = &self.options.on_scroll_lock {
            cb(ScrollLockState {
                locked: false,
                compensation: 0,
            });
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}

impl<P: PartialEq> Default for PopupManager<P> {
    fn default() -> Self {
        Self::new(PopupManagerOptions::new())
    }
}

impl<P: core::fmt::Debug> core::fmt::Debug for PopupManager<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PopupManager")
            .field("popups", &self.popups)
            .field("locks", &self.locks)
            .finish_non_exhaustive()
    }
}

fn index_of<P: PartialEq>(collection: &[P], popup: &P) -> Option<usize> {
    collection.iter().position(|candidate| candidate == popup)
}
