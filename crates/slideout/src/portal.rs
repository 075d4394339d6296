//! # Portal Components
//!
//! Detached-subtree rendering for Dioxus.
//!
//! A [`Portal`] keeps its children in its own place in the component tree, so
//! they inherit every context provided above the portal, and moves only the
//! rendered DOM into the element of the [`PortalOutlet`] hosting the target
//! [`MountNode`]. The [`PortalHost`] registry records which outlets exist and
//! which portal elements belong to each of them.
//!
//! # Structure
//!
//! ```text
//! component tree               document
//! --------------               --------
//! SlideoutHost                 div#slideout-mount-body
//! |-- Provider                 `-- div#slideout-portal-1 (moved here)
//! |   `-- Portal(body)
//! |       `-- children
//! `-- PortalOutlet(body)
//! ```

use dioxus::prelude::*;

use slideout_core::{project_into, MountNode, PortalKey, PortalRegistry};

/// Shared projection registry, provided by [`SlideoutHost`](crate::SlideoutHost).
///
/// Projections map a portal to the DOM id of its element.
#[derive(Clone, Copy)]
pub struct PortalHost {
    /// Mount nodes and projected portal elements.
    pub registry: Signal<PortalRegistry<String>>,
}

impl PortalHost {
    /// Creates a host in the current scope with [`MountNode::body`] hosted.
    pub fn new() -> Self {
        let mut registry = PortalRegistry::new();
        registry.register_mount(MountNode::body());
        Self {
            registry: Signal::new(registry),
        }
    }
}

impl Default for PortalHost {
    fn default() -> Self {
        Self::new()
    }
}

/// DOM id of the element a [`PortalOutlet`] renders for `node`.
pub fn mount_dom_id(node: &MountNode) -> String {
    format!("slideout-mount-{node}")
}

/// DOM id of the element wrapping a portal's children.
pub fn portal_dom_id(key: PortalKey) -> String {
    format!("slideout-{key}")
}

/// Builds the script that moves the elements `content_ids` under `mount_id`.
pub(crate) fn relocate_script(mount_id: &str, content_ids: &[String]) -> String {
    // serde_json yields quoted, escaped JS literals.
    let mount_id = serde_json::Value::String(mount_id.to_string());
    let content_ids = serde_json::Value::from(content_ids.to_vec());
    format!(
        r#"
const mount = document.getElementById({mount_id});
if (mount) {{
    for (const id of {content_ids}) {{
        const content = document.getElementById(id);
        if (content && content.parentNode !== mount) {{
            mount.appendChild(content);
        }}
    }}
}}
"#
    )
}

fn relocate(mount_id: &str, content_ids: &[String]) {
    if content_ids.is_empty() {
        return;
    }
    // Fire and forget: the script returns nothing.
    let _eval = document::eval(&relocate_script(mount_id, content_ids));
}

/// Renders `children` under the mount node `target`.
///
/// Renders nothing if `target` is absent, not hosted by any outlet, or if
/// there is no [`PortalHost`] in context.
#[component]
pub fn Portal(target: Option<MountNode>, children: Element) -> Element {
    let host = try_use_context::<PortalHost>();
    let key = use_hook(PortalKey::next);

    use_effect(use_reactive!(|target| {
        let Some(host) = host else {
            return;
        };
        let mut registry = host.registry;
        if !registry
            .write()
            .project(key, target.as_ref(), portal_dom_id(key))
        {
            tracing::debug!(%key, ?target, "Mount node not available, nothing projected");
        }
    }));

    use_drop(move || {
        let Some(host) = host else {
            return;
        };
        let mut registry = host.registry;
        match registry.try_write() {
            Ok(mut registry) => {
                registry.withdraw(key);
            }
            Err(e) => tracing::debug!(%key, error = %e, "Could not withdraw projection"),
        };
    });

    let Some(host) = host else {
        tracing::debug!(%key, "No portal host in context, rendering nothing");
        return rsx! {};
    };
    let Some((node, content)) = project_into(target.as_ref(), children) else {
        return rsx! {};
    };
    if !host.registry.read().is_mounted(&node) {
        return rsx! {};
    }

    let id = portal_dom_id(key);
    let mount_id = mount_dom_id(&node);
    let content_ids = vec![id.clone()];

    rsx! {
        div {
            key: "{node}",
            id: "{id}",
            class: "slideout-portal",
            style: "display: contents;",
            "data-mount": "{node}",
            onmounted: move |_| relocate(&mount_id, &content_ids),
            {content}
        }
    }
}

/// Hosts `node`: renders the element projected portals are moved into.
#[component]
pub fn PortalOutlet(node: MountNode) -> Element {
    let host = try_use_context::<PortalHost>();

    use_hook({
        let node = node.clone();
        move || {
            if let Some(host) = host {
                let mut registry = host.registry;
                registry.write().register_mount(node);
            }
        }
    });

    use_drop({
        let node = node.clone();
        move || {
            let Some(host) = host else {
                return;
            };
            let mut registry = host.registry;
            match registry.try_write() {
                Ok(mut registry) => {
                    registry.unregister_mount(&node);
                }
                Err(e) => tracing::debug!(node = %node, error = %e, "Could not unregister mount node"),
            };
        }
    });

    let Some(host) = host else {
        tracing::warn!(node = %node, "PortalOutlet used outside of SlideoutHost");
        return rsx! {};
    };

    let mount_id = mount_dom_id(&node);
    let adopt = {
        let mount_id = mount_id.clone();
        let node = node.clone();
        move |_: MountedEvent| {
            let content_ids: Vec<String> = host
                .registry
                .peek()
                .contents(&node)
                .map(|(_, id)| id.clone())
                .collect();
            relocate(&mount_id, &content_ids);
        }
    };

    rsx! {
        div {
            id: "{mount_id}",
            class: "slideout-mount",
            "data-mount": "{node}",
            onmounted: adopt,
        }
    }
}
