use crate::*;

use alloc::string::String;
use alloc::vec::Vec;

use overlay::ToastManagerOptions;

fn notifier() -> Notifier<u32, u32> {
    // Config doubles as the rendered height in these tests.
    Notifier::new(ToastManagerOptions::new(|height: &u32| *height), |config: &u32| {
        *config
    })
}

#[test]
fn notifier_mounts_on_notify() {
    let mut n = notifier();
    let a = n.notify(40);
    let b = n.notify(24);

    let entries = n.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|entry| entry.is_mounted()));

    assert_eq!(n.toasts().offset_of(a), Some(16));
    assert_eq!(n.toasts().offset_of(b), Some(16 + 16 + 40));
}

#[test]
fn notifier_dismiss_removes_and_restacks() {
    let mut n = notifier();
    let a = n.notify(40);
    let b = n.notify(24);
    let c = n.notify(32);

    n.dismiss(b);
    let ids: Vec<_> = n.entries().iter().map(|entry| entry.id()).collect();
    assert_eq!(ids, alloc::vec![a, c]);
    assert_eq!(n.toasts().offset_of(c), Some(16 + 16 + 40));

    // Dismissing again is benign.
    n.dismiss(b);
    assert_eq!(n.entries().len(), 2);
}

#[test]
fn notifier_two_phase_close_keeps_the_entry() {
    let mut n = notifier();
    let a = n.notify(40);
    let b = n.notify(24);

    n.close(a);
    assert_eq!(n.entries().len(), 2);
    assert_eq!(n.toasts().offset_of(b), Some(16));

    n.destroy(a);
    assert_eq!(n.entries().len(), 1);
}

#[test]
fn drag_translate_accumulates_across_sessions() {
    let mut d = DragController::new();
    assert!(!d.is_dragging());

    d.on_pointer_move(100, 100);
    d.on_drag_start();
    assert!(d.is_dragging());

    d.on_pointer_move(110, 125);
    assert_eq!(d.translate(), Coords::new(10, 25));

    d.on_pointer_up();
    assert!(!d.is_dragging());

    // Moves outside a drag only track the pointer.
    d.on_pointer_move(200, 200);
    assert_eq!(d.translate(), Coords::new(10, 25));

    // A second session continues from the existing translation.
    d.on_drag_start();
    d.on_pointer_move(210, 215);
    assert_eq!(d.translate(), Coords::new(20, 40));
}

#[test]
fn drag_disabled_freezes_the_translation() {
    let mut d = DragController::new();
    d.on_pointer_move(10, 10);
    d.on_drag_start();
    d.on_pointer_move(20, 20);
    assert_eq!(d.translate(), Coords::new(10, 10));

    d.set_enabled(false);
    d.on_pointer_move(50, 50);
    assert_eq!(d.translate(), Coords::new(10, 10));
    assert_eq!(d.pointer(), Coords::new(50, 50));

    d.set_enabled(true);
    d.on_pointer_move(30, 30);
    assert_eq!(d.translate(), Coords::new(20, 20));

    d.reset();
    assert_eq!(d.translate(), Coords::default());
    assert!(!d.is_dragging());
}

struct Item {
    focusable: bool,
    disabled: bool,
}

impl Item {
    fn ok() -> Self {
        Self {
            focusable: true,
            disabled: false,
        }
    }

    fn disabled() -> Self {
        Self {
            focusable: true,
            disabled: true,
        }
    }

    fn skipped() -> Self {
        Self {
            focusable: false,
            disabled: false,
        }
    }
}

impl FocusTarget for Item {
    fn focusable(&self) -> bool {
        self.focusable
    }

    fn disabled(&self) -> bool {
        self.disabled
    }
}

#[test]
fn move_focus_skips_disabled_and_wraps() {
    let items = [Item::ok(), Item::disabled(), Item::skipped(), Item::ok()];

    assert_eq!(move_focus(&items, Some(0), FocusDirection::Next), Some(3));
    assert_eq!(move_focus(&items, Some(3), FocusDirection::Next), Some(0));
    assert_eq!(
        move_focus(&items, Some(0), FocusDirection::Previous),
        Some(3)
    );

    // No current focus: enter at the edge.
    assert_eq!(move_focus(&items, None, FocusDirection::Next), Some(0));
    assert_eq!(move_focus(&items, None, FocusDirection::Previous), Some(3));
}

#[test]
fn move_focus_gives_up_when_nothing_is_focusable() {
    let items = [Item::disabled(), Item::skipped()];
    assert_eq!(move_focus(&items, Some(0), FocusDirection::Next), None);

    let empty: [Item; 0] = [];
    assert_eq!(move_focus(&empty, None, FocusDirection::Next), None);
    assert_eq!(next_index(0, None), None);
    assert_eq!(previous_index(0, Some(3)), None);
}

#[test]
fn to_unit_formats_numbers_and_passes_strings_through() {
    assert_eq!(to_unit(16, "px"), "16px");
    assert_eq!(to_unit(16.5, "px"), "16.5px");
    assert_eq!(to_unit(0, "px"), "0px");
    assert_eq!(to_unit("2rem", "px"), "2rem");
    assert_eq!(to_unit(String::from("50%"), "px"), "50%");
}

#[test]
fn percentage_clamps_and_rounds() {
    assert_eq!(percentage(50.0, 200.0), 25.0);
    assert_eq!(percentage(300.0, 100.0), 100.0);
    assert_eq!(percentage(-5.0, 100.0), 0.0);
    assert_eq!(percentage(1.0, 3.0), 33.33);
    assert_eq!(percentage(0.0, 0.0), 0.0);
    assert_eq!(percentage(1.0, 0.0), 100.0);
}

#[test]
fn hex_parsing_expands_shorthand_and_falls_back() {
    assert_eq!(hex_to_rgb("#09afAF"), [0x09, 0xaf, 0xaf]);
    assert_eq!(hex_to_rgb("abc"), [0xaa, 0xbb, 0xcc]);
    assert_eq!(hex_to_rgb("color: #123456;"), [0x12, 0x34, 0x56]);
    assert_eq!(hex_to_rgb("nope"), [0, 0, 0]);

    assert_eq!(to_expanded_hex("#abc"), "#aabbcc");
    assert_eq!(to_expanded_hex("#123456"), "#123456");
    assert_eq!(to_expanded_hex("zz"), "#000000");
}
