//! Plain-text rendering of the linear sequence, for debugging

use super::forest::Forest;
use super::linearizer::LinearRow;

/// One line per row: connector prefix (without the node marker), name, id.
pub fn render_ascii(forest: &Forest, rows: &[LinearRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let prefix: String = row.connectors[..row.connectors.len().saturating_sub(1)]
            .iter()
            .map(|c| c.symbol())
            .collect();
        let version = forest.node(row.node).version();
        lines.push(format!("{} {}  [{}]", prefix, version.name, version.id));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Version, VersionType};
    use crate::tree::{linearize, TreeBuilder};
    use chrono::NaiveDateTime;

    fn version(id: &str, parent: Option<&str>, name: &str) -> Version {
        Version {
            id: id.to_string(),
            parent_id: parent.map(str::to_string),
            name: name.to_string(),
            description: None,
            version_type: VersionType::Trunk,
            created_by: "test".to_string(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_render_small_tree() {
        let forest = TreeBuilder::build(vec![
            version("r", None, "Root"),
            version("a", Some("r"), "Alpha"),
            version("b", Some("r"), "Beta"),
        ])
        .unwrap();
        let text = render_ascii(&forest, &linearize(&forest));
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], " Root  [r]");
        assert_eq!(lines[1], "├── Alpha  [a]");
        assert_eq!(lines[2], "└── Beta  [b]");
    }

    #[test]
    fn test_render_empty() {
        let forest = Forest::default();
        assert_eq!(render_ascii(&forest, &[]), "");
    }
}
