//! Registry behind detached-subtree rendering.
//!
//! Content is projected under a [`MountNode`] by the component that owns it
//! and rendered by whichever outlet hosts that node. Projections targeting a
//! node nobody hosts render nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Name of the body-equivalent mount node provided by the host.
pub const BODY: &str = "body";

/// Identifier of a mount point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountNode(String);

impl MountNode {
    /// Creates a mount node identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The top-level container used when no node is supplied.
    pub fn body() -> Self {
        Self(BODY.to_string())
    }

    /// Returns the node name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MountNode {
    fn default() -> Self {
        Self::body()
    }
}

impl fmt::Display for MountNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one projecting component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortalKey(u64);

impl PortalKey {
    /// Allocates a process-wide unique key.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PortalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "portal-{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Projection<T> {
    key: PortalKey,
    node: MountNode,
    content: T,
}

/// Mount points and the content projected into them.
#[derive(Debug, Clone)]
pub struct PortalRegistry<T> {
    mounts: Vec<MountNode>,
    projections: Vec<Projection<T>>,
}

impl<T> Default for PortalRegistry<T> {
    fn default() -> Self {
        Self {
            mounts: Vec::new(),
            projections: Vec::new(),
        }
    }
}

impl<T> PortalRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that an outlet hosts `node`. Returns false if it already did.
    pub fn register_mount(&mut self, node: MountNode) -> bool {
        if self.is_mounted(&node) {
            return false;
        }
        tracing::debug!(node = %node, "Mount node registered");
        self.mounts.push(node);
        true
    }

    /// Removes a mount point and every projection targeting it.
    pub fn unregister_mount(&mut self, node: &MountNode) -> bool {
        let before = self.mounts.len();
        self.mounts.retain(|m| m != node);
        if self.mounts.len() == before {
            return false;
        }
        self.projections.retain(|p| &p.node != node);
        tracing::debug!(node = %node, "Mount node unregistered");
        true
    }

    /// Returns true if an outlet hosts `node`.
    pub fn is_mounted(&self, node: &MountNode) -> bool {
        self.mounts.contains(node)
    }

    /// Projects `content` under `node`, replacing any earlier projection
    /// with the same key while keeping its position.
    ///
    /// Returns false, storing nothing, if `node` is absent or not hosted.
    pub fn project(&mut self, key: PortalKey, node: Option<&MountNode>, content: T) -> bool {
        let Some(node) = node.filter(|n| self.is_mounted(n)) else {
            self.withdraw(key);
            return false;
        };

        match self.projections.iter_mut().find(|p| p.key == key) {
            Some(existing) => {
                existing.node = node.clone();
                existing.content = content;
            }
            None => {
                tracing::debug!(%key, node = %node, "Content projected");
                self.projections.push(Projection {
                    key,
                    node: node.clone(),
                    content,
                });
            }
        }
        true
    }

    /// Removes the projection registered under `key`.
    pub fn withdraw(&mut self, key: PortalKey) -> Option<T> {
        let idx = self.projections.iter().position(|p| p.key == key)?;
        tracing::debug!(%key, "Content withdrawn");
        Some(self.projections.remove(idx).content)
    }

    /// Content projected under `node`, in projection order.
    pub fn contents<'a>(
        &'a self,
        node: &'a MountNode,
    ) -> impl Iterator<Item = (PortalKey, &'a T)> + 'a {
        self.projections
            .iter()
            .filter(move |p| &p.node == node)
            .map(|p| (p.key, &p.content))
    }

    /// Total number of live projections.
    pub fn len(&self) -> usize {
        self.projections.len()
    }

    /// Returns true if nothing is projected.
    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }
}

/// Resolves where content should be rendered.
///
/// Returns the content paired with its mount node, or `None` when no node is
/// available, in which case the caller renders nothing for this frame.
pub fn project_into<T>(mount: Option<&MountNode>, content: T) -> Option<(MountNode, T)> {
    mount.map(|node| (node.clone(), content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PortalRegistry<&'static str> {
        let mut registry = PortalRegistry::new();
        registry.register_mount(MountNode::body());
        registry
    }

    #[test]
    fn test_project_into_without_node_renders_nothing() {
        assert!(project_into(None, "panel").is_none());
        let (node, content) = project_into(Some(&MountNode::new("drawer-root")), "panel").unwrap();
        assert_eq!(node.as_str(), "drawer-root");
        assert_eq!(content, "panel");
    }

    #[test]
    fn test_projection_into_hosted_node() {
        let mut registry = registry();
        let key = PortalKey::next();
        assert!(registry.project(key, Some(&MountNode::body()), "panel"));

        let body = MountNode::body();
        let contents: Vec<_> = registry.contents(&body).map(|(_, c)| *c).collect();
        assert_eq!(contents, vec!["panel"]);
    }

    #[test]
    fn test_unhosted_or_absent_node_stores_nothing() {
        let mut registry = registry();
        assert!(!registry.project(PortalKey::next(), Some(&MountNode::new("missing")), "x"));
        assert!(!registry.project(PortalKey::next(), None, "y"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reprojection_replaces_in_place() {
        let mut registry = registry();
        let body = MountNode::body();
        let first = PortalKey::next();
        let second = PortalKey::next();
        registry.project(first, Some(&body), "a");
        registry.project(second, Some(&body), "b");
        registry.project(first, Some(&body), "a2");

        let contents: Vec<_> = registry.contents(&body).map(|(_, c)| *c).collect();
        assert_eq!(contents, vec!["a2", "b"]);
    }

    #[test]
    fn test_moving_to_unhosted_node_withdraws() {
        let mut registry = registry();
        let key = PortalKey::next();
        registry.project(key, Some(&MountNode::body()), "a");
        registry.project(key, Some(&MountNode::new("gone")), "a");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_mount_drops_projections() {
        let mut registry = registry();
        let side = MountNode::new("side");
        registry.register_mount(side.clone());
        registry.project(PortalKey::next(), Some(&side), "s");
        registry.project(PortalKey::next(), Some(&MountNode::body()), "b");

        assert!(registry.unregister_mount(&side));
        assert!(!registry.unregister_mount(&side));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_mounted(&side));
    }

    #[test]
    fn test_withdraw() {
        let mut registry = registry();
        let key = PortalKey::next();
        registry.project(key, Some(&MountNode::body()), "a");
        assert_eq!(registry.withdraw(key), Some("a"));
        assert_eq!(registry.withdraw(key), None);
    }

    #[test]
    fn test_register_mount_is_idempotent() {
        let mut registry = registry();
        assert!(!registry.register_mount(MountNode::body()));
    }
}
