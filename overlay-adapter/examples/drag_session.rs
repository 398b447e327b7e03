use overlay_adapter::DragController;

fn main() {
    // Example: dragging a dialog by its title bar.
    //
    // The host forwards pointer events; the controller yields a translation
    // to apply to the element (e.g. `transform: translate(x, y)`).
    let mut drag = DragController::new();

    drag.on_pointer_move(320, 180);
    drag.on_drag_start();
    for (x, y) in [(330, 184), (352, 199), (371, 210)] {
        drag.on_pointer_move(x, y);
        println!("dragging: translate={:?}", drag.translate());
    }
    drag.on_pointer_up();

    // The element stays where it was dropped; a later grab continues from
    // there instead of jumping.
    drag.on_pointer_move(500, 400);
    drag.on_drag_start();
    drag.on_pointer_move(510, 420);
    println!(
        "second session: translate={:?} dragging={}",
        drag.translate(),
        drag.is_dragging()
    );

    drag.on_pointer_up();
    drag.reset();
    println!("after reset: translate={:?}", drag.translate());
}
