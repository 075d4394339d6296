//! Outside-click detection.

/// A pointer-down event as seen by the outside-click logic.
pub trait PointerDown {
    /// Local name of the event target element (`"button"`, `"div"`, ...),
    /// or `None` when the target is absent or not an element.
    fn target_local_name(&self) -> Option<&str>;
}

/// Returns true if the event landed on a button.
///
/// A button owns its own action; if it also closes the panel, letting the
/// outside-click path fire as well would close twice.
pub fn is_control_click<E: PointerDown + ?Sized>(event: &E) -> bool {
    event.target_local_name() == Some("button")
}

/// Decides whether a pointer-down should dismiss the panel.
///
/// `inside_panel` is `None` while the panel is not mounted, in which case
/// nothing is dismissed.
pub fn should_dismiss<E: PointerDown + ?Sized>(event: &E, inside_panel: Option<bool>) -> bool {
    match inside_panel {
        None | Some(true) => false,
        Some(false) => !is_control_click(event),
    }
}
