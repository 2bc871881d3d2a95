//! Arena storage for rocket components.
//!
//! Handles are never reused: once a component is removed, its
//! [`ComponentId`] stays dead and every lookup through it fails with
//! [`TreeError::UnknownComponent`].

use super::component::{BodyTube, Component, ComponentKind, PodSet, Transition};
use crate::error::TreeError;

/// Handle to a component in a [`ComponentTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

impl ComponentId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct Node {
    component: Component,
    parent: Option<ComponentId>,
    children: Vec<ComponentId>,
}

/// Ordered tree of rocket components.
///
/// Components are created detached and linked with [`add_child`] or
/// [`insert_child`]. A component has at most one parent.
///
/// [`add_child`]: ComponentTree::add_child
/// [`insert_child`]: ComponentTree::insert_child
#[derive(Clone, Debug, Default)]
pub struct ComponentTree {
    nodes: Vec<Option<Node>>,
    live: usize,
}

impl ComponentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live components.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // ── Creation ────────────────────────────────────────────────────

    /// Store a detached component and return its handle.
    pub fn create(&mut self, component: Component) -> ComponentId {
        let id = ComponentId(self.nodes.len() as u32);
        tracing::trace!(%id, name = %component.name, "create component");
        self.nodes.push(Some(Node {
            component,
            parent: None,
            children: Vec::new(),
        }));
        self.live += 1;
        id
    }

    // ── Lookup ──────────────────────────────────────────────────────

    pub fn contains(&self, id: ComponentId) -> bool {
        self.node(id).is_ok()
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.node(id).ok().map(|n| &n.component)
    }

    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.node_mut(id).ok().map(|n| &mut n.component)
    }

    pub fn kind(&self, id: ComponentId) -> Option<&ComponentKind> {
        self.get(id).map(|c| &c.kind)
    }

    pub fn body_tube(&self, id: ComponentId) -> Option<&BodyTube> {
        self.get(id).and_then(Component::as_body_tube)
    }

    pub fn body_tube_mut(&mut self, id: ComponentId) -> Option<&mut BodyTube> {
        self.get_mut(id).and_then(Component::as_body_tube_mut)
    }

    pub fn pod_set(&self, id: ComponentId) -> Option<&PodSet> {
        self.get(id).and_then(Component::as_pod_set)
    }

    pub fn transition(&self, id: ComponentId) -> Option<&Transition> {
        self.get(id).and_then(Component::as_transition)
    }

    /// Iterate over live components in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &Component)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|n| (ComponentId(i as u32), &n.component)))
    }

    /// Live components without a parent.
    pub fn roots(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match n {
            Some(node) if node.parent.is_none() => Some(ComponentId(i as u32)),
            _ => None,
        })
    }

    // ── Structure ───────────────────────────────────────────────────

    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.node(id).ok().and_then(|n| n.parent)
    }

    /// Ordered children; empty for unknown handles.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn child_count(&self, id: ComponentId) -> usize {
        self.children(id).len()
    }

    pub fn last_child(&self, id: ComponentId) -> Option<ComponentId> {
        self.children(id).last().copied()
    }

    /// Append `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<(), TreeError> {
        let len = self.node(parent)?.children.len();
        self.insert_child(parent, len, child)
    }

    /// Insert `child` at `index` in `parent`'s children, shifting later
    /// children back.
    pub fn insert_child(
        &mut self,
        parent: ComponentId,
        index: usize,
        child: ComponentId,
    ) -> Result<(), TreeError> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if !parent_node.component.kind.allows_child(&child_node.component.kind) {
            return Err(TreeError::IncompatibleChild {
                parent: parent_node.component.kind.type_name(),
                child: child_node.component.kind.type_name(),
            });
        }
        if child_node.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::WouldCycle(child));
        }
        let len = parent_node.children.len();
        if index > len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }

        self.node_mut(parent)?.children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Remove a component and its whole subtree, detaching it from its
    /// parent first. Returns the removed component.
    pub fn remove(&mut self, id: ComponentId) -> Result<Component, TreeError> {
        if let Some(parent) = self.node(id)?.parent {
            self.node_mut(parent)?.children.retain(|&c| c != id);
        }

        let mut pending: Vec<ComponentId> = self.node(id)?.children.clone();
        while let Some(next) = pending.pop() {
            if let Some(node) = self.take(next) {
                pending.extend(node.children);
            }
        }

        self.take(id)
            .map(|n| n.component)
            .ok_or(TreeError::UnknownComponent(id))
    }

    // ── Internals ───────────────────────────────────────────────────

    fn node(&self, id: ComponentId) -> Result<&Node, TreeError> {
        self.nodes
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(TreeError::UnknownComponent(id))
    }

    fn node_mut(&mut self, id: ComponentId) -> Result<&mut Node, TreeError> {
        self.nodes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(TreeError::UnknownComponent(id))
    }

    fn take(&mut self, id: ComponentId) -> Option<Node> {
        let node = self.nodes.get_mut(id.index())?.take()?;
        self.live -= 1;
        Some(node)
    }

    /// Returns true if `ancestor` is `id` or lies on `id`'s parent chain.
    fn is_ancestor_or_self(&self, ancestor: ComponentId, id: ComponentId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent(c);
        }
        false
    }
}
