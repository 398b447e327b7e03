use alloc::sync::Arc;

use crate::popups::PopupManager;
use crate::toasts::ToastManager;
use crate::types::ScrollLockState;

/// Reads the rendered height of a mounted toast, in pixels.
///
/// Entries whose handle is not yet set (or whose representation is not
/// measurable) contribute a height of 0 to the stack.
pub type MeasureCallback<H> = Arc<dyn Fn(&H) -> u32 + Send + Sync>;

/// A callback fired when the toast collection or its offsets change.
pub type ToastChangeCallback<C, H> = Arc<dyn Fn(&ToastManager<C, H>) + Send + Sync>;

/// A callback fired when the popup or lock collections change.
pub type PopupChangeCallback<P> = Arc<dyn Fn(&PopupManager<P>) + Send + Sync>;

/// Provides the page scrollbar width at lock time.
///
/// In a browser host this is `window.innerWidth - documentElement.clientWidth`;
/// other hosts can return 0.
pub type ScrollbarWidthCallback = Arc<dyn Fn() -> u32 + Send + Sync>;

/// A callback fired on every scroll-lock transition (engage and release).
pub type ScrollLockCallback = Arc<dyn Fn(ScrollLockState) + Send + Sync>;

/// Vertical gap between stacked toasts, and the offset of the first one.
pub const DEFAULT_GAP: u32 = 16;

/// Configuration for [`crate::ToastManager`].
///
/// Cheap to clone: callback fields are stored in `Arc`s.
pub struct ToastManagerOptions<C, H> {
    /// Gap between stacked entries; also the offset of the first entry.
    pub gap: u32,

    /// Reads a mounted entry's rendered height in the stacking axis.
    pub measure: MeasureCallback<H>,

    /// Optional callback fired when the manager's state changes.
    ///
    /// Reactive hosts typically re-render the stack from here. Use
    /// [`crate::ToastManager::batch_update`] to coalesce bursts of mutations
    /// into a single notification.
    pub on_change: Option<ToastChangeCallback<C, H>>,
}

impl<C, H> ToastManagerOptions<C, H> {
    /// Creates options with the default gap.
    ///
    /// `measure(handle)` should return the rendered height of the mounted
    /// representation behind `handle`, or 0 when it cannot be measured.
    pub fn new(measure: impl Fn(&H) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            gap: DEFAULT_GAP,
            measure: Arc::new(measure),
            on_change: None,
        }
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ToastManager<C, H>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<C, H> Clone for ToastManagerOptions<C, H> {
    fn clone(&self) -> Self {
        Self {
            gap: self.gap,
            measure: Arc::clone(&self.measure),
            on_change: self.on_change.clone(),
        }
    }
}

impl<C, H> core::fmt::Debug for ToastManagerOptions<C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToastManagerOptions")
            .field("gap", &self.gap)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::PopupManager`].
///
/// Cheap to clone: callback fields are stored in `Arc`s.
pub struct PopupManagerOptions<P> {
    /// Queried once per empty→non-empty lock transition to size the
    /// trailing-padding compensation. When absent, compensation is 0.
    pub scrollbar_width: Option<ScrollbarWidthCallback>,

    /// Fired exactly once per lock transition: engage with
    /// `ScrollLockState { locked: true, compensation }`, release with
    /// `ScrollLockState { locked: false, compensation: 0 }`.
    ///
    /// The host performs the actual side effect (e.g. `overflow: hidden` plus
    /// `padding-right` on the document body).
    pub on_scroll_lock: Option<ScrollLockCallback>,

    /// Optional callback fired when the popup or lock collections change.
    pub on_change: Option<PopupChangeCallback<P>>,
}

impl<P> PopupManagerOptions<P> {
    pub fn new() -> Self {
        Self {
            scrollbar_width: None,
            on_scroll_lock: None,
            on_change: None,
        }
    }

    pub fn with_scrollbar_width(
        mut self,
        scrollbar_width: Option<impl Fn() -> u32 + Send + Sync + 'static>,
    ) -> Self {
        self.scrollbar_width = scrollbar_width.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_lock(
        mut self,
        on_scroll_lock: Option<impl Fn(ScrollLockState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_lock = on_scroll_lock.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&PopupManager<P>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<P> Default for PopupManagerOptions<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for PopupManagerOptions<P> {
    fn clone(&self) -> Self {
        Self {
            scrollbar_width: self.scrollbar_width.clone(),
            on_scroll_lock: self.on_scroll_lock.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<P> core::fmt::Debug for PopupManagerOptions<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PopupManagerOptions")
            .field("has_scrollbar_width", &self.scrollbar_width.is_some())
            .field("has_on_scroll_lock", &self.on_scroll_lock.is_some())
            .finish_non_exhaustive()
    }
}
