//! Adapter utilities for the `overlay` crate.
//!
//! The `overlay` crate is UI-agnostic and focuses on the core stacking state.
//! This crate provides small, framework-neutral helpers commonly needed by
//! hosts:
//!
//! - An imperative notifier facade for hosts without a separate mount phase
//! - A pointer-driven drag-translate controller
//! - Roving focus traversal over generic focusable collections
//! - CSS unit/percentage formatting and hex color parsing
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod color;
mod drag;
mod focus;
mod notifier;
mod unit;

#[cfg(test)]
mod tests;

pub use color::{hex_to_rgb, to_expanded_hex};
pub use drag::{Coords, DragController};
pub use focus::{FocusDirection, FocusTarget, move_focus, next_index, previous_index};
pub use notifier::Notifier;
pub use unit::{CssValue, percentage, to_unit};
