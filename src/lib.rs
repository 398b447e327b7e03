//! Headless stacking managers for transient overlay UI.
//!
//! For adapter-level utilities (drag, focus traversal, CSS helpers), see the
//! `overlay-adapter` crate.
//!
//! This crate owns the state machinery behind toast and popup stacks: ordered,
//! identity-keyed collections, cascading vertical-offset recomputation, an
//! edge-triggered page scroll lock, a pagination range computation, and a
//! reference-counted pool for platform observers.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - mount/close/destroy lifecycle events for each overlay
//! - rendered heights of mounted overlays (for stacking offsets)
//! - the scrollbar width and the actual scroll-lock side effect
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod observers;
mod options;
mod pagination;
mod popups;
mod toasts;
mod types;


pub use observers::{ObserverCallback, ObserverFactory, ObserverPool, PlatformObserver};
pub use options::{
    DEFAULT_GAP, MeasureCallback, PopupChangeCallback, PopupManagerOptions, ScrollLockCallback,
    ScrollbarWidthCallback, ToastChangeCallback, ToastManagerOptions,
};
pub use pagination::{PageItem, PageItemKind, PaginationOptions, paginate};
pub use popups::PopupManager;
pub use toasts::{ToastEntry, ToastManager};
pub use types::{ScrollLockState, ToastId};

#[doc(hidden)]
pub use observers::TargetKey;
