use alloc::vec::Vec;
use core::cell::Cell;

use crate::options::ToastManagerOptions;
use crate::types::ToastId;

/// A registered toast: caller config plus manager-derived stacking state.
pub struct ToastEntry<C, H> {
    id: ToastId,
    config: C,
    offset: u32,
    handle: Option<H>,
}

impl<C, H> ToastEntry<C, H> {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Cumulative vertical displacement of this entry in the stack, in pixels.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The host's mounted-representation handle, once reported via
    /// [`ToastManager::notify_open`].
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }
}

impl<C, H> core::fmt::Debug for ToastEntry<C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToastEntry")
            .field("id", &self.id)
            .field("offset", &self.offset)
            .field("mounted", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

/// A headless toast stack manager.
///
/// This type is intentionally UI-agnostic:
/// - It does not render anything and never touches the platform.
/// - The host mounts a visual representation per entry and drives the manager
///   through the `notify_*` lifecycle callbacks.
/// - Offsets are recomputed incrementally so each entry sits `gap` pixels
///   below the previous entry's rendered extent.
///
/// Entry lifecycle, as driven by the host:
/// 1. [`Self::open`] registers the entry (offset seeded with `gap`).
/// 2. [`Self::notify_open`] attaches the mounted handle once the visual layer
///    is up; from then on the entry's height participates in the stack.
/// 3. [`Self::notify_close`] marks the entry as logically removed when its
///    exit transition starts: followers' offsets close the gap while the
///    entry itself stays in the collection (its exit animation may still read
///    stale layout).
/// 4. [`Self::notify_destroy`] physically removes the entry once the exit
///    transition completes.
///
/// All lookups tolerate ids that were already destroyed and no-op on a miss;
/// a destroy callback firing twice is benign.
pub struct ToastManager<C, H> {
    options: ToastManagerOptions<C, H>,
    entries: Vec<ToastEntry<C, H>>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<C, H> ToastManager<C, H> {
    pub fn new(options: ToastManagerOptions<C, H>) -> Self {
        odebug!(gap = options.gap, "ToastManager::new");
        Self {
            options,
            entries: Vec::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &ToastManagerOptions<C, H> {
        &self.options
    }

    pub fn gap(&self) -> u32 {
        self.options.gap
    }

    /// Changes the stacking gap and recomputes the whole offset column.
    pub fn set_gap(&mut self, gap: u32) {
        if self.options.gap == gap {
            return;
        }
        self.options.gap = gap;
        self.recompute_from(0);
        self.notify();
    }

    /// Replaces the height-measurement callback and recomputes all offsets.
    pub fn set_measure(&mut self, measure: impl Fn(&H) -> u32 + Send + Sync + 'static) {
        self.options.measure = alloc::sync::Arc::new(measure);
        self.recompute_from(0);
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ToastManager<C, H>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The live collection, in registration order.
    ///
    /// Entries that are closing (logically removed, exit transition running)
    /// are still present until their destroy callback fires.
    pub fn entries(&self) -> &[ToastEntry<C, H>] {
        &self.entries
    }

    pub fn index_of(&self, id: ToastId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn get(&self, id: ToastId) -> Option<&ToastEntry<C, H>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn offset_of(&self, id: ToastId) -> Option<u32> {
        self.get(id).map(|entry| entry.offset)
    }

    /// Registers a new entry and returns its id. Always succeeds.
    ///
    /// The offset is seeded with `gap` and settles once the host reports the
    /// mount via [`Self::notify_open`] (by then the predecessor is
    /// measurable).
    pub fn open(&mut self, config: C) -> ToastId {
        let id = ToastId::next();
        otrace!(id = id.0, "ToastManager::open");

        self.entries.push(ToastEntry {
            id,
            config,
            offset: self.options.gap,
            handle: None,
        });
        self.notify();
        id
    }

    /// Host callback: the entry's visual representation finished mounting.
    ///
    /// Stores the handle and recomputes this entry's offset against its
    /// predecessor. No-op if the entry was already destroyed.
    pub fn notify_open(&mut self, id: ToastId, handle: H) {
        let Some(index) = self.index_of(id) else {
            otrace!(id = id.0, "notify_open: entry already gone");
            return;
        };
        self.entries[index].handle = Some(handle);
        self.update_offset(index);
        self.notify();
    }

    /// Host callback: the entry's exit transition is starting.
    ///
    /// Logical removal: every entry at or after the removal point gets the
    /// offset it will have once this entry is gone, while the entry itself
    /// stays in the collection until [`Self::notify_destroy`]. No-op if the
    /// entry was already destroyed.
    pub fn notify_close(&mut self, id: ToastId) {
        let Some(index) = self.index_of(id) else {
            otrace!(id = id.0, "notify_close: entry already gone");
            return;
        };
        otrace!(id = id.0, index, "ToastManager::notify_close");

        // Walk the collection as if `index` were already removed: logical
        // position p lives at p below the removal point and at p + 1 above it.
        let remaining = self.entries.len() - 1;
        for p in index..remaining {
            let offset = match p.checked_sub(1) {
                None => self.options.gap,
                Some(prev_p) => {
                    let live_prev = if prev_p < index { prev_p } else { prev_p + 1 };
                    let prev = &self.entries[live_prev];
                    self.options
                        .gap
                        .saturating_add(prev.offset)
                        .saturating_add(self.height_of(prev))
                }
            };
            self.entries[p + 1].offset = offset;
        }
        self.notify();
    }

    /// Host callback: the entry's exit transition completed.
    ///
    /// Physically removes the entry. Offsets were already settled at close
    /// time, so none are recomputed here. No-op on a second call.
    pub fn notify_destroy(&mut self, id: ToastId) {
        let Some(index) = self.index_of(id) else {
            otrace!(id = id.0, "notify_destroy: entry already gone");
            return;
        };
        self.entries.remove(index);
        self.notify();
    }

    /// Mutates an entry's config in place, then notifies. Returns `false` if
    /// the entry is gone.
    pub fn update_config(&mut self, id: ToastId, f: impl FnOnce(&mut C)) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        f(&mut self.entries[index].config);
        self.notify();
        true
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when the host applies several lifecycle events at once
    /// (e.g. draining a transition-event queue) and `on_change` drives
    /// rendering.
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

    fn height_of(&self, entry: &ToastEntry<C, H>) -> u32 {
        entry
            .handle
            .as_ref()
            .map(|handle| (self.options.measure)(handle))
            .unwrap_or(0)
    }

    // offset[i] = gap + offset[i-1] + height(entry[i-1]); gap alone for the
    // first entry.
    fn update_offset(&mut self, index: usize) {
        let offset = match index.checked_sub(1) {
            None => self.options.gap,
            Some(prev_index) => {
                let prev = &self.entries[prev_index];
                self.options
                    .gap
                    .saturating_add(prev.offset)
                    .saturating_add(self.height_of(prev))
            }
        };
        self.entries[index].offset = offset;
    }

    fn recompute_from(&mut self, start: usize) {
        for index in start..self.entries.len() {
            self.update_offset(index);
        }
    }
}

impl<C, H> core::fmt::Debug for ToastManager<C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToastManager")
            .field("entries", &self.entries)
            .field("gap", &self.options.gap)
            .finish_non_exhaustive()
    }
}
