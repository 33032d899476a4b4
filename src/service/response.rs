//! Response shapes returned by the service

use serde::Serialize;

use crate::model::Version;
use crate::snapshot::Revision;
use crate::tree::{Connector, HighlightSet, LinearRow, TreeNode};

/// Query for one page of the linear tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based; `None` means page 1
    pub page: Option<i64>,
    pub selected: Option<String>,
}

impl PageQuery {
    pub fn new(page: Option<i64>, selected: Option<&str>) -> Self {
        Self {
            page,
            selected: selected
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

/// One row of the current page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub version: Version,
    pub depth: usize,
    pub connectors: Vec<Connector>,
    pub is_last_child: bool,
    pub highlighted: bool,
}

impl NodeView {
    pub(crate) fn new(row: &LinearRow, node: &TreeNode, highlight: &HighlightSet) -> Self {
        Self {
            version: node.version().clone(),
            depth: row.depth,
            connectors: row.connectors.clone(),
            is_last_child: row.is_last_child,
            highlighted: highlight.contains(&row.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResponse {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_nodes: usize,
    pub revision: Revision,
    /// Echoed only when the selection resolved
    pub selected_id: Option<String>,
    pub highlighted_ids: HighlightSet,
    pub nodes: Vec<NodeView>,
}

/// A single version with its ancestry, parent first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionDetail {
    pub node: NodeView,
    /// 0-based position in the linear sequence
    pub position: usize,
    /// Page the version appears on
    pub page: usize,
    pub ancestry: Vec<Version>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub loaded: usize,
    pub total_nodes: usize,
    pub revision: Revision,
    /// False when a concurrent seed with a later revision went live instead
    pub installed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugTree {
    pub tree: String,
}
