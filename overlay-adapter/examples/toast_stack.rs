use overlay::ToastManagerOptions;
use overlay_adapter::Notifier;

fn main() {
    // Example: an imperative toast flow with no UI framework attached.
    //
    // A host would:
    // - call notify() wherever a toast is needed
    // - position each entry at its offset() (e.g. `top: {offset}px`)
    // - call close()/destroy() as its exit transition starts/ends
    //
    // Here the "rendered height" is derived from the message so the stack
    // has something to measure.
    let mut notifier = Notifier::new(
        ToastManagerOptions::new(|height: &u32| *height),
        |message: &&str| 24 + 2 * message.len() as u32,
    );

    let first = notifier.notify("saved");
    let second = notifier.notify("sync in progress, this may take a while");
    let third = notifier.notify("done");

    println!("stack after three notifications:");
    for entry in notifier.entries() {
        println!("  id={:?} offset={}", entry.id(), entry.offset());
    }

    // The middle toast leaves: followers close ranks while it plays its exit
    // transition, then the destroy event removes it.
    notifier.close(second);
    println!("during exit of the middle toast:");
    for entry in notifier.entries() {
        println!("  id={:?} offset={}", entry.id(), entry.offset());
    }

    notifier.destroy(second);
    println!(
        "after destroy: {} entries, offsets {:?}",
        notifier.entries().len(),
        notifier
            .entries()
            .iter()
            .map(|entry| entry.offset())
            .collect::<Vec<_>>()
    );

    notifier.dismiss(first);
    notifier.dismiss(third);
    println!("stack empty: {}", notifier.entries().is_empty());
}
