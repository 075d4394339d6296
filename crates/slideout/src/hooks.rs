//! # Hooks
//!
//! Animation and dismissal hooks used by [`Sidebar`](crate::Sidebar).

use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use slideout_core::{dismiss_handler, Easing, Frame, OutsideClick, PresenceTracker, Transition};

use crate::document::{EvalDocument, PointerDownReport};

/// Interval between animation frames (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Tracks mount state and animation progress for an element that enters
/// when `is_open` becomes true and exits when it becomes false.
///
/// While the animation is unsettled a task ticks the tracker every
/// [`FRAME_INTERVAL`]. A change of `is_open` cancels the running task and
/// starts a new one, so reopening mid-exit animates back instead of
/// unmounting.
pub fn use_presence(is_open: bool, transition: Transition) -> Frame {
    let duration = transition.effective_duration();
    let mut tracker = use_signal(|| {
        PresenceTracker::new(is_open, duration, Easing::default(), Instant::now())
    });
    let mut frame = use_signal(|| tracker.peek().frame(Instant::now()));
    let mut driver = use_signal(|| Option::<Task>::None);

    use_effect(use_reactive(
        (&is_open, &duration),
        move |(is_open, duration)| {
            {
                let mut tracker = tracker.write();
                tracker.set_duration(duration);
                if tracker.set_open(is_open, Instant::now()) {
                    tracing::debug!(is_open, "Presence changed");
                }
            }

            if let Some(task) = driver.write().take() {
                task.cancel();
            }

            let task = spawn(async move {
                loop {
                    let now = Instant::now();
                    let next = tracker.write().tick(now);
                    frame.set(next);
                    if tracker.peek().is_settled(now) {
                        break;
                    }
                    tokio::time::sleep(FRAME_INTERVAL).await;
                }
            });
            driver.set(Some(task));
        },
    ));

    frame()
}

/// Keeps one document-level pointer-down listener attached while `enabled`,
/// calling `on_close` for pointer-downs outside the element with `panel_id`
/// that are not on a button.
///
/// The listener is replaced when `on_close` or `panel_id` changes and is
/// removed when `enabled` turns false or the calling component unmounts.
/// Returns the listener registry the binding attaches to.
pub fn use_outside_click(
    panel_id: &str,
    enabled: bool,
    on_close: EventHandler<()>,
) -> EvalDocument {
    let binding = use_hook(|| {
        Rc::new(RefCell::new(OutsideClick::new(EvalDocument::new(
            panel_id,
        ))))
    });

    {
        let mut binding = binding.borrow_mut();
        binding.document().set_panel_id(panel_id);
        binding.sync(enabled, (on_close, panel_id.to_string()), || {
            dismiss_handler(
                |report: &PointerDownReport| report.inside,
                move || on_close.call(()),
            )
        });
    }

    let document = binding.borrow().document().clone();

    use_drop(move || {
        binding.borrow_mut().release();
    });

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{flush, render, run_for, settle};
    use slideout_core::transition_for;
    use slideout_core::TransitionProfile;
    use std::cell::Cell;

    #[derive(Clone)]
    struct Toggle(Rc<Cell<bool>>);

    fn presence_app() -> Element {
        let open = use_context::<Toggle>().0.get();
        let frame = use_presence(open, transition_for(TransitionProfile::Fast));
        let mounted = frame.mounted;
        let progress = format!("{:.1}", frame.progress);
        rsx! {
            span { "mounted={mounted} progress={progress}" }
        }
    }

    #[tokio::test]
    async fn test_presence_enters_and_exits() {
        let open = Rc::new(Cell::new(false));
        let mut dom = VirtualDom::new(presence_app).with_root_context(Toggle(open.clone()));
        settle(&mut dom);
        assert!(render(&dom).contains("mounted=false progress=0.0"));

        open.set(true);
        dom.mark_all_dirty();
        run_for(&mut dom, Duration::from_millis(250)).await;
        assert!(render(&dom).contains("mounted=true progress=1.0"));

        open.set(false);
        dom.mark_all_dirty();
        run_for(&mut dom, Duration::from_millis(250)).await;
        assert!(render(&dom).contains("mounted=false progress=0.0"));
    }

    #[derive(Clone)]
    struct ClickHarness {
        enabled: Rc<Cell<bool>>,
        mounted: Rc<Cell<bool>>,
        document: Rc<RefCell<Option<EvalDocument>>>,
    }

    #[component]
    fn Dismissable(enabled: bool) -> Element {
        let harness = use_context::<ClickHarness>();
        let on_close = use_callback(|_: ()| {});
        let document = use_outside_click("panel", enabled, on_close);
        *harness.document.borrow_mut() = Some(document);
        rsx! { div { id: "panel" } }
    }

    fn click_app() -> Element {
        let harness = use_context::<ClickHarness>();
        rsx! {
            if harness.mounted.get() {
                Dismissable { enabled: harness.enabled.get() }
            }
        }
    }

    fn listeners(harness: &ClickHarness) -> usize {
        harness.document.borrow().as_ref().map_or(0, EvalDocument::len)
    }

    #[tokio::test]
    async fn test_outside_click_listener_follows_flag_and_lifetime() {
        let harness = ClickHarness {
            enabled: Rc::new(Cell::new(true)),
            mounted: Rc::new(Cell::new(true)),
            document: Rc::new(RefCell::new(None)),
        };
        let mut dom = VirtualDom::new(click_app).with_root_context(harness.clone());
        settle(&mut dom);
        assert_eq!(listeners(&harness), 1);

        harness.enabled.set(false);
        dom.mark_all_dirty();
        flush(&mut dom);
        assert_eq!(listeners(&harness), 0);

        harness.enabled.set(true);
        dom.mark_all_dirty();
        flush(&mut dom);
        assert_eq!(listeners(&harness), 1);

        harness.mounted.set(false);
        dom.mark_all_dirty();
        flush(&mut dom);
        assert_eq!(listeners(&harness), 0);
    }
}
