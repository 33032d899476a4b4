//! Linearizer - pre-order rows with connector descriptors
//!
//! Walks the forest depth-first with an explicit stack. Each stack frame
//! carries whether its node still has a later sibling; `open[k]` mirrors
//! that flag for the node on the current path at depth `k`.
//!
//! Row layout for a node at depth `d`:
//!
//! ```text
//! d = 0:  [•]
//! d > 0:  [open[1] .. open[d-1] as │ or blank] + [├── or └──] + [•]
//! ```
//!
//! so every row has exactly `d + 1` connectors.

use std::fmt;

use serde::{Serialize, Serializer};

use super::forest::{Forest, NodeId};

/// One symbol of a row's connector descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// Ancestor level still has a pending sibling
    Vertical,
    /// Ancestor level is closed
    Blank,
    /// Node has a later sibling
    Tee,
    /// Node is the last child
    Corner,
    /// Terminal marker for the node itself
    Node,
}

impl Connector {
    pub fn symbol(&self) -> &'static str {
        match self {
            Connector::Vertical => "│",
            Connector::Blank => "   ",
            Connector::Tee => "├──",
            Connector::Corner => "└──",
            Connector::Node => "•",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Connector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// A node's position in the linear sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearRow {
    pub node: NodeId,
    pub id: String,
    pub depth: usize,
    pub is_last_child: bool,
    pub connectors: Vec<Connector>,
}

struct Frame {
    node: NodeId,
    has_later_sibling: bool,
}

/// Pure function of the forest; repeated calls yield identical rows.
pub fn linearize(forest: &Forest) -> Vec<LinearRow> {
    let mut rows = Vec::with_capacity(forest.len());
    let mut stack: Vec<Frame> = Vec::new();
    let mut open: Vec<bool> = Vec::new();

    push_frames(&mut stack, forest.roots());

    while let Some(frame) = stack.pop() {
        let node = forest.node(frame.node);
        let depth = node.depth();

        open.truncate(depth);
        rows.push(LinearRow {
            node: frame.node,
            id: node.id().to_string(),
            depth,
            is_last_child: !frame.has_later_sibling,
            connectors: connectors_for(&open, depth, frame.has_later_sibling),
        });
        open.push(frame.has_later_sibling);

        push_frames(&mut stack, node.children());
    }

    rows
}

fn push_frames(stack: &mut Vec<Frame>, siblings: &[NodeId]) {
    let last = siblings.len().saturating_sub(1);
    for (i, &node) in siblings.iter().enumerate().rev() {
        stack.push(Frame {
            node,
            has_later_sibling: i != last,
        });
    }
}

fn connectors_for(open: &[bool], depth: usize, has_later_sibling: bool) -> Vec<Connector> {
    let mut connectors = Vec::with_capacity(depth + 1);
    if depth > 0 {
        // Level 0 holds roots, which never draw a column.
        for &pending in &open[1..depth] {
            connectors.push(if pending {
                Connector::Vertical
            } else {
                Connector::Blank
            });
        }
        connectors.push(if has_later_sibling {
            Connector::Tee
        } else {
            Connector::Corner
        });
    }
    connectors.push(Connector::Node);
    connectors
}
