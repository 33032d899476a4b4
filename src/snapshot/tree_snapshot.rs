//! TreeSnapshot - one immutable, fully derived view of a version set

use std::collections::HashMap;

use crate::model::{validate_all, TreeResult, Version, VersionRecord};
use crate::tree::{linearize, AncestryIndex, Forest, LinearRow, TreeBuilder, TreeNode};

use super::revision::Revision;

/// Forest, linear rows and ancestry index derived from the same records.
///
/// Built in one step and never mutated; readers share it through an `Arc`.
#[derive(Debug, Default)]
pub struct TreeSnapshot {
    revision: Revision,
    forest: Forest,
    rows: Vec<LinearRow>,
    row_positions: HashMap<String, usize>,
    ancestry: AncestryIndex,
}

impl TreeSnapshot {
    /// Revision 0, no versions
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn build(revision: Revision, versions: Vec<Version>) -> TreeResult<Self> {
        let forest = TreeBuilder::build(versions)?;
        let rows = linearize(&forest);
        let ancestry = AncestryIndex::from_forest(&forest);
        let row_positions = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.id.clone(), i))
            .collect();

        Ok(Self {
            revision,
            forest,
            rows,
            row_positions,
            ancestry,
        })
    }

    /// Validate raw records, then build. Nothing is built if any record fails.
    pub fn from_records(revision: Revision, records: Vec<VersionRecord>) -> TreeResult<Self> {
        Self::build(revision, validate_all(records)?)
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Full pre-order sequence
    pub fn rows(&self) -> &[LinearRow] {
        &self.rows
    }

    pub fn ancestry(&self) -> &AncestryIndex {
        &self.ancestry
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row and node for a version id
    pub fn find(&self, id: &str) -> Option<(&LinearRow, &TreeNode)> {
        let row = &self.rows[*self.row_positions.get(id)?];
        Some((row, self.forest.node(row.node)))
    }

    /// Linear index of a version id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.row_positions.get(id).copied()
    }
}
