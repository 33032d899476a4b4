//! AncestryIndex - O(1) parent lookup, bounded ancestor walks
//!
//! Built from the forest, so parents are the *resolved* ones: an orphan
//! whose declared parent is missing is a root here too.

use std::collections::HashMap;

use crate::model::{TreeError, TreeResult};

use super::forest::Forest;

#[derive(Debug, Clone, Default)]
pub struct AncestryIndex {
    parents: HashMap<String, Option<String>>,
}

impl AncestryIndex {
    pub fn from_forest(forest: &Forest) -> Self {
        let parents = forest
            .iter()
            .map(|(_, node)| {
                let parent = node.parent().map(|p| forest.node(p).id().to_string());
                (node.id().to_string(), parent)
            })
            .collect();
        Self { parents }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.parents.contains_key(id)
    }

    /// Immediate parent; `None` for roots and unknown ids
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.parents.get(id).and_then(|p| p.as_deref())
    }

    /// Chain from immediate parent up to the root.
    ///
    /// Empty for roots and unknown ids. A walk longer than the node count
    /// means the index was built from a cyclic graph, which the builder
    /// should have rejected.
    pub fn ancestors_of(&self, id: &str) -> TreeResult<Vec<String>> {
        let mut chain = Vec::new();
        let mut current = id;

        while let Some(parent) = self.parent_of(current) {
            if chain.len() >= self.parents.len() {
                return Err(TreeError::cycle(id));
            }
            chain.push(parent.to_string());
            current = parent;
        }

        Ok(chain)
    }
}
