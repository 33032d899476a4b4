//! TreeBuilder - flat version list to forest
//!
//! Two passes over the input:
//! 1. Map every id to an arena slot
//! 2. Resolve parents, reject cycles, attach children in sibling order
//!
//! A parent id that resolves to nothing makes the node an extra root.
//! A cycle is the only fatal condition.

use std::collections::HashMap;

use crate::model::{TreeError, TreeResult, Version};

use super::forest::{Forest, NodeId, TreeNode};

/// Builds a [`Forest`] from validated versions
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn build(versions: Vec<Version>) -> TreeResult<Forest> {
        let mut index = HashMap::with_capacity(versions.len());
        let mut nodes = Vec::with_capacity(versions.len());

        for (i, version) in versions.into_iter().enumerate() {
            if index.insert(version.id.clone(), NodeId(i)).is_some() {
                return Err(TreeError::validation(&version.id, "duplicate id"));
            }
            nodes.push(TreeNode::detached(version));
        }

        for node in nodes.iter_mut() {
            node.parent = node
                .version
                .parent_id
                .as_deref()
                .and_then(|parent_id| index.get(parent_id).copied());
        }

        verify_acyclic(&nodes)?;

        let mut roots = Vec::new();
        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];
        for (i, node) in nodes.iter().enumerate() {
            match node.parent {
                Some(parent) => children[parent.0].push(NodeId(i)),
                None => roots.push(NodeId(i)),
            }
        }

        sort_siblings(&nodes, &mut roots);
        for list in children.iter_mut() {
            sort_siblings(&nodes, list);
        }
        for (node, list) in nodes.iter_mut().zip(children) {
            node.children = list;
        }

        assign_positions(&mut nodes, &roots);

        Ok(Forest {
            nodes,
            roots,
            index,
        })
    }
}

/// Every parent chain must reach a root within `nodes.len()` steps.
///
/// Nodes already proven to reach a root short-circuit later walks.
fn verify_acyclic(nodes: &[TreeNode]) -> TreeResult<()> {
    let limit = nodes.len();
    let mut reaches_root = vec![false; limit];
    let mut path = Vec::new();

    for start in 0..limit {
        let mut current = start;
        let mut steps = 0;
        path.clear();

        while !reaches_root[current] {
            path.push(current);
            match nodes[current].parent {
                None => break,
                Some(parent) => {
                    current = parent.0;
                    steps += 1;
                    if steps > limit {
                        // After more steps than nodes, `current` sits on the cycle.
                        return Err(TreeError::cycle(&nodes[current].version.id));
                    }
                }
            }
        }

        for &i in &path {
            reaches_root[i] = true;
        }
    }

    Ok(())
}

fn sort_siblings(nodes: &[TreeNode], siblings: &mut [NodeId]) {
    siblings.sort_by(|a, b| nodes[a.0].version.sort_key().cmp(&nodes[b.0].version.sort_key()));
}

/// Fill in depth and last-child flags top-down with an explicit stack.
fn assign_positions(nodes: &mut [TreeNode], roots: &[NodeId]) {
    let mut stack: Vec<(NodeId, usize, bool)> = Vec::with_capacity(roots.len());
    push_siblings(&mut stack, roots, 0);

    while let Some((id, depth, is_last)) = stack.pop() {
        let node = &mut nodes[id.0];
        node.depth = depth;
        node.is_last_child = is_last;
        let children = node.children.clone();
        push_siblings(&mut stack, &children, depth + 1);
    }
}

fn push_siblings(stack: &mut Vec<(NodeId, usize, bool)>, siblings: &[NodeId], depth: usize) {
    let last = siblings.len().saturating_sub(1);
    for (i, &id) in siblings.iter().enumerate().rev() {
        stack.push((id, depth, i == last));
    }
}
