/// A 2D pointer position or translation, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A framework-neutral drag-translate state machine.
///
/// The host forwards raw pointer events; the controller turns them into a
/// persistent translation (e.g. for a draggable dialog):
/// - `on_pointer_move(x, y)` on every pointer move
/// - `on_drag_start()` when a drag handle is grabbed
/// - `on_pointer_up()` when the pointer is released
///
/// The translation survives across drag sessions: a new drag continues from
/// where the previous one left the element.
#[derive(Clone, Copy, Debug)]
pub struct DragController {
    enabled: bool,
    pointer: Coords,
    start: Option<Coords>,
    translate: Coords,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pointer: Coords::default(),
            start: None,
            translate: Coords::default(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling does not end an in-flight drag; it only freezes the
    /// translation until re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn translate(&self) -> Coords {
        self.translate
    }

    pub fn pointer(&self) -> Coords {
        self.pointer
    }

    /// Tracks the pointer, and while a drag is active (and the controller is
    /// enabled) updates the translation relative to the drag origin.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        self.pointer = Coords::new(x, y);

        if !self.enabled {
            return;
        }
        let Some(start) = self.start else {
            return;
        };
        self.translate = Coords::new(
            self.pointer.x.saturating_sub(start.x),
            self.pointer.y.saturating_sub(start.y),
        );
    }

    /// Begins a drag at the current pointer position.
    ///
    /// The origin is offset by the existing translation so the element does
    /// not jump when grabbed again.
    pub fn on_drag_start(&mut self) {
        self.start = Some(Coords::new(
            self.pointer.x.saturating_sub(self.translate.x),
            self.pointer.y.saturating_sub(self.translate.y),
        ));
    }

    /// Ends the drag; the translation stays where it was left.
    pub fn on_pointer_up(&mut self) {
        self.start = None;
    }

    /// Clears the translation and any in-flight drag.
    pub fn reset(&mut self) {
        self.start = None;
        self.translate = Coords::default();
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
