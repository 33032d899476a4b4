//! Arena-backed forest of version nodes

use std::collections::HashMap;

use crate::model::Version;

/// Index of a node inside its [`Forest`].
///
/// Only meaningful for the forest that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A version placed in the tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) version: Version,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) depth: usize,
    pub(crate) is_last_child: bool,
}

impl TreeNode {
    pub(crate) fn detached(version: Version) -> Self {
        Self {
            version,
            parent: None,
            children: Vec::new(),
            depth: 0,
            is_last_child: true,
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn id(&self) -> &str {
        &self.version.id
    }

    /// Resolved parent; `None` for roots, including orphans whose
    /// declared parent does not exist.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in sibling order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_last_child(&self) -> bool {
        self.is_last_child
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Set of root trees built from one version snapshot
#[derive(Debug, Clone, Default)]
pub struct Forest {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) index: HashMap<String, NodeId>,
}

impl Forest {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Roots in sibling order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn node_id(&self, version_id: &str) -> Option<NodeId> {
        self.index.get(version_id).copied()
    }

    pub fn get(&self, version_id: &str) -> Option<&TreeNode> {
        self.node_id(version_id).map(|id| self.node(id))
    }

    pub fn contains(&self, version_id: &str) -> bool {
        self.index.contains_key(version_id)
    }

    /// Nodes in ingestion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }
}
