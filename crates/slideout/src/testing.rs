//! Helpers for driving a [`VirtualDom`] in tests.

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use std::time::Duration;

/// Builds the dom and runs queued effects and tasks.
pub fn settle(dom: &mut VirtualDom) {
    dom.rebuild_in_place();
    flush(dom);
}

/// Re-renders until pending effects and dirty scopes are drained.
pub fn flush(dom: &mut VirtualDom) {
    for _ in 0..16 {
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Keeps rendering as tasks wake up, for `duration` of wall time.
pub async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    flush(dom);
    while tokio::time::timeout_at(deadline, dom.wait_for_work())
        .await
        .is_ok()
    {
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Renders the current tree to HTML.
pub fn render(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}
