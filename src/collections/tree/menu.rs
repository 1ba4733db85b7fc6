//! `MenuTree` - role-filtered navigation menus on top of [`Tree`].
//!
//! Items hang below a synthetic root whose id is [`MenuTree::ROOT_ID`]. Each
//! stored [`MenuItem`] keeps an empty `children` vector; the hierarchy lives in
//! the tree structure and is rebuilt when items are handed back to callers.
//!
//! Role filtering is top-down: an item whose `roles` do not include the
//! requested role is dropped together with its entire subtree, even if some
//! descendants would have matched.

use super::tree::{NodeId, Tree};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier, used as the attachment point for children.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Route the entry navigates to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Roles allowed to see the entry.
    #[serde(default)]
    pub roles: BTreeSet<String>,
    /// Nested entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Creates an entry visible to nobody, without path, icon or children.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: None,
            icon: None,
            roles: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    /// Sets the route.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Adds roles allowed to see the entry.
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    /// Appends a nested entry.
    #[must_use]
    pub fn with_child(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }

    /// Returns `true` if `role` may see this entry.
    #[inline]
    pub fn allows(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Copy of the entry without its children.
    fn detached(&self) -> Self {
        Self {
            children: Vec::new(),
            ..self.clone()
        }
    }
}

/// Errors raised while loading a menu definition.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The definition is not a valid JSON array of menu items.
    #[error("invalid menu definition: {0}")]
    Json(#[from] serde_json::Error),
    /// Two entries share an id, so children could not be attached unambiguously.
    #[error("duplicate menu item id `{0}`")]
    DuplicateId(String),
}

/// A menu hierarchy that can be filtered by role.
#[derive(Debug, Clone)]
pub struct MenuTree {
    tree: Tree<MenuItem>,
}

impl MenuTree {
    /// Id of the synthetic root that top-level items attach to.
    pub const ROOT_ID: &'static str = "root";

    /// Creates a menu containing only the synthetic root.
    pub fn new() -> Self {
        Self {
            tree: Tree::with_root(MenuItem::new(Self::ROOT_ID, "Root")),
        }
    }

    /// Builds a menu from top-level items (with their nested children).
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = MenuItem>,
    {
        let mut menu = Self::new();
        for item in items {
            menu.add_menu_item(Self::ROOT_ID, item);
        }
        menu
    }

    /// Parses a JSON array of top-level items.
    ///
    /// # Errors
    /// Returns [`MenuError::Json`] for malformed input and
    /// [`MenuError::DuplicateId`] if any two entries share an id.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        seen.insert(Self::ROOT_ID.to_owned());
        let mut pending: Vec<&MenuItem> = items.iter().collect();
        while let Some(item) = pending.pop() {
            if !seen.insert(item.id.clone()) {
                return Err(MenuError::DuplicateId(item.id.clone()));
            }
            pending.extend(item.children.iter());
        }

        Ok(Self::from_items(items))
    }

    /// Number of menu items, excluding the synthetic root.
    pub fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    /// Returns `true` if no items were added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.find_by(|item| item.id == id)
    }

    /// Attaches `item` and its nested children below the entry `parent_id`.
    ///
    /// The parent is located by pre-order search. Returns `false` if no entry
    /// has that id.
    pub fn add_menu_item(&mut self, parent_id: &str, item: MenuItem) -> bool {
        let Some(parent) = self.node_by_id(parent_id) else {
            trace_event!(parent_id, item_id = %item.id, "menu parent not found");
            return false;
        };
        trace_event!(parent_id, item_id = %item.id, "attaching menu item");
        self.attach(parent, item);
        true
    }

    fn attach(&mut self, parent: NodeId, mut item: MenuItem) {
        let children = core::mem::take(&mut item.children);
        if let Some(node) = self.tree.add_child(parent, item) {
            for child in children {
                self.attach(node, child);
            }
        }
    }

    /// Returns the entry with `id` (without its children).
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.node_by_id(id).and_then(|node| self.tree.get(node))
    }

    /// Labels from the top-level ancestor down to the entry `id`.
    ///
    /// Empty if `id` is unknown or names the synthetic root.
    pub fn breadcrumbs(&self, id: &str) -> Vec<&str> {
        let Some(node) = self.node_by_id(id) else {
            return Vec::new();
        };
        let mut path = self.tree.path_to_root(node);
        // Drop the synthetic root.
        path.pop();
        path.iter()
            .rev()
            .filter_map(|&n| self.tree.get(n))
            .map(|item| item.label.as_str())
            .collect()
    }

    /// Returns the top-level items visible to `role`, with visible children.
    pub fn menu_for_role(&self, role: &str) -> Vec<MenuItem> {
        self.collect_children(self.tree.root(), Some(role))
    }

    /// Returns every top-level item with its full hierarchy.
    pub fn to_items(&self) -> Vec<MenuItem> {
        self.collect_children(self.tree.root(), None)
    }

    fn collect_children(&self, node: Option<NodeId>, role: Option<&str>) -> Vec<MenuItem> {
        let Some(node) = node else {
            return Vec::new();
        };
        self.tree
            .children(node)
            .filter_map(|child| {
                let item = self.tree.get(child)?;
                if role.is_some_and(|r| !item.allows(r)) {
                    return None;
                }
                let mut visible = item.detached();
                visible.children = self.collect_children(Some(child), role);
                Some(visible)
            })
            .collect()
    }

    /// Borrows the underlying tree, synthetic root included.
    pub fn tree(&self) -> &Tree<MenuItem> {
        &self.tree
    }
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new()
    }
}
