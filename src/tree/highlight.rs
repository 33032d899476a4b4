//! HighlightResolver - selected node plus its ancestry
//!
//! Computed over the whole tree, never the visible page.

use serde::Serialize;

use crate::model::TreeResult;

use super::ancestry::AncestryIndex;

/// Ids to emphasize: the selection first, then parent up to root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HighlightSet {
    ids: Vec<String>,
}

impl HighlightSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|h| h == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// The resolved selection, if any
    pub fn selected(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ids
    }
}

pub struct HighlightResolver<'a> {
    index: &'a AncestryIndex,
}

impl<'a> HighlightResolver<'a> {
    pub fn new(index: &'a AncestryIndex) -> Self {
        Self { index }
    }

    /// Absent or unknown selections resolve to the empty set.
    ///
    /// Only an internal invariant violation in the index can fail.
    pub fn resolve(&self, selected: Option<&str>) -> TreeResult<HighlightSet> {
        let selected = match selected {
            Some(id) if self.index.contains(id) => id,
            _ => return Ok(HighlightSet::empty()),
        };

        let mut ids = Vec::with_capacity(8);
        ids.push(selected.to_string());
        ids.extend(self.index.ancestors_of(selected)?);
        Ok(HighlightSet { ids })
    }
}

/// Next selection after a click: re-clicking the current selection clears it.
pub fn toggle_selection(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(id) if id == clicked => None,
        _ => Some(clicked.to_string()),
    }
}
