//! # Document Listeners
//!
//! Document-level `mousedown` listeners installed through `document::eval`.
//!
//! Each listener is a small script that forwards every pointer-down to Rust
//! as a [`PointerDownReport`], computed against the panel element with the
//! configured id. Removing the listener cancels the receiving task and runs
//! a second script that calls `removeEventListener`.

use dioxus::core::Task;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slideout_core::{DocumentListeners, Handler, ListenerId, PointerDown};

/// Global object holding installed handlers, keyed by listener id.
const REGISTRY_GLOBAL: &str = "__slideoutListeners";

/// A pointer-down as reported by the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerDownReport {
    /// `localName` of the event target, if it is an element.
    #[serde(default)]
    pub target: Option<String>,

    /// Whether the target is inside the panel; `None` if no panel element
    /// with the configured id is in the document.
    #[serde(default)]
    pub inside: Option<bool>,
}

impl PointerDown for PointerDownReport {
    fn target_local_name(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// Builds the script that installs listener `id` for panel `panel_id`.
pub(crate) fn attach_script(id: ListenerId, panel_id: &str) -> String {
    // serde_json yields a quoted, escaped JS string literal.
    let panel_id = serde_json::Value::String(panel_id.to_string());
    format!(
        r#"
const listeners = (window.{REGISTRY_GLOBAL} = window.{REGISTRY_GLOBAL} || {{}});
const handler = (event) => {{
    const target = event.target;
    const panel = document.getElementById({panel_id});
    dioxus.send({{
        target: target instanceof Element ? target.localName : null,
        inside: panel ? panel.contains(target) : null,
    }});
}};
listeners["{id}"] = handler;
document.addEventListener("mousedown", handler);
"#
    )
}

/// Builds the script that removes listener `id`.
pub(crate) fn detach_script(id: ListenerId) -> String {
    format!(
        r#"
const listeners = window.{REGISTRY_GLOBAL} || {{}};
const handler = listeners["{id}"];
if (handler) {{
    document.removeEventListener("mousedown", handler);
    delete listeners["{id}"];
}}
"#
    )
}

/// Listener registry backed by the page's `document`.
///
/// Must be used from within a Dioxus component scope, since attaching spawns
/// a task that receives the forwarded events.
#[derive(Clone)]
pub struct EvalDocument {
    panel_id: Rc<RefCell<String>>,
    tasks: Rc<RefCell<HashMap<ListenerId, Task>>>,
}

impl EvalDocument {
    /// Creates a registry reporting containment against `panel_id`.
    pub fn new(panel_id: impl Into<String>) -> Self {
        Self {
            panel_id: Rc::new(RefCell::new(panel_id.into())),
            tasks: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Changes the panel id used by listeners attached from now on.
    pub fn set_panel_id(&self, panel_id: &str) {
        let mut current = self.panel_id.borrow_mut();
        if *current != panel_id {
            *current = panel_id.to_string();
        }
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Returns true if no listeners are attached.
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

impl DocumentListeners for EvalDocument {
    type Event = PointerDownReport;

    fn add(&self, handler: Handler<PointerDownReport>) -> ListenerId {
        let id = ListenerId::next();
        let script = attach_script(id, &self.panel_id.borrow());

        let task = spawn(async move {
            let mut eval = document::eval(&script);
            while let Ok(report) = eval.recv::<PointerDownReport>().await {
                handler(&report);
            }
            tracing::debug!(listener = %id, "Pointer-down channel closed");
        });

        self.tasks.borrow_mut().insert(id, task);
        id
    }

    fn remove(&self, id: ListenerId) -> bool {
        let Some(task) = self.tasks.borrow_mut().remove(&id) else {
            return false;
        };
        task.cancel();
        // Fire and forget: the script returns nothing.
        let _eval = document::eval(&detach_script(id));
        true
    }
}
