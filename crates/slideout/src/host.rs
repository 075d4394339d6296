//! # Host Component
//!
//! Root wrapper that provides the portal registry and the default mount node.

use dioxus::prelude::*;

use slideout_core::MountNode;

use crate::portal::{PortalHost, PortalOutlet};

/// Provides portal rendering to everything inside it.
///
/// Wrap the application root with this component. Its trailing outlet hosts
/// [`MountNode::body`], the mount node sidebars use when none is given.
///
/// # Structure
///
/// ```text
/// SlideoutHost
/// |-- children            (application)
/// `-- PortalOutlet(body)  (detached panels)
/// ```
#[component]
pub fn SlideoutHost(children: Element) -> Element {
    use_context_provider(PortalHost::new);

    rsx! {
        {children}
        PortalOutlet { node: MountNode::body() }
    }
}
