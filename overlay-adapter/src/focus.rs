/// A slot that roving focus can land on.
///
/// Hosts implement this over whatever their focusable collection holds
/// (menu items, page buttons, list rows).
pub trait FocusTarget {
    /// Whether the slot participates in focus traversal at all (e.g. carries
    /// a tabindex).
    fn focusable(&self) -> bool;

    fn disabled(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusDirection {
    Next,
    Previous,
}

/// The wrap-around successor of `current` in a collection of `len` slots.
///
/// With no current focus, traversal enters at the first slot.
pub fn next_index(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(index) if index + 1 < len => Some(index + 1),
        _ => Some(0),
    }
}

/// The wrap-around predecessor of `current` in a collection of `len` slots.
///
/// With no current focus, traversal enters at the last slot.
pub fn previous_index(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(index) if index > 0 => Some(index - 1),
        _ => Some(len - 1),
    }
}

/// Finds the next slot to focus, walking from `current` in `direction` and
/// skipping slots that are not focusable or disabled.
///
/// Each slot is visited at most once; returns `None` when nothing in the
/// collection can take focus.
pub fn move_focus<T: FocusTarget>(
    items: &[T],
    current: Option<usize>,
    direction: FocusDirection,
) -> Option<usize> {
    let step: fn(usize, Option<usize>) -> Option<usize> = match direction {
        FocusDirection::Next => next_index,
        FocusDirection::Previous => previous_index,
    };

    let mut cursor = current;
    for _ in 0..items.len() {
        let candidate = step(items.len(), cursor)?;
        let item = &items[candidate];
        if item.focusable() && !item.disabled() {
            return Some(candidate);
        }
        cursor = Some(candidate);
    }
    None
}
