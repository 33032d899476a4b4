//! Tree Invariant Tests
//!
//! - Parent before child in the linear sequence
//! - One connector per level plus the node marker
//! - Output independent of input order
//! - Highlight set equals selection plus ancestry

use std::collections::HashMap;

use verstree::model::{validate_all, TreeError, VersionRecord};
use verstree::snapshot::{Revision, TreeSnapshot};
use verstree::tree::{linearize, AncestryIndex, Connector, HighlightResolver, TreeBuilder};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(id: &str, parent: Option<&str>, tag: &str, minute: u32) -> VersionRecord {
    VersionRecord {
        id: Some(id.to_string()),
        parent_id: parent.map(str::to_string),
        name: Some(format!("Version {}", id)),
        version_type: Some(tag.to_string()),
        created_by: Some("tester".to_string()),
        created_at: Some(format!("2024-02-{:02}T{:02}:{:02}:00", 1 + minute / 1440, (minute / 60) % 24, minute % 60)),
        ..Default::default()
    }
}

/// Deterministic pseudo-random forest: about one in six nodes is a root,
/// the rest hang off an earlier node.
fn generated(n: usize, seed: u64) -> Vec<VersionRecord> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        state >> 33
    };

    (0..n)
        .map(|i| {
            let roll = next();
            let parent = if i == 0 || roll % 6 == 0 {
                None
            } else {
                Some(format!("n{}", roll as usize % i))
            };
            let minute = (next() % 5000) as u32;
            record(&format!("n{}", i), parent.as_deref(), "BRANCH", minute)
        })
        .collect()
}

fn snapshot(records: Vec<VersionRecord>) -> TreeSnapshot {
    TreeSnapshot::from_records(Revision::new(1), records).unwrap()
}

fn order(snapshot: &TreeSnapshot) -> Vec<String> {
    snapshot.rows().iter().map(|r| r.id.clone()).collect()
}

// =============================================================================
// Reference Example
// =============================================================================

fn abcd() -> Vec<VersionRecord> {
    vec![
        record("A", None, "TRUNK", 0),
        record("B", Some("A"), "BRANCH", 1),
        record("C", Some("A"), "RELEASE", 2),
        record("D", Some("B"), "TRUNK", 3),
    ]
}

#[test]
fn test_reference_linear_order() {
    assert_eq!(order(&snapshot(abcd())), vec!["A", "B", "D", "C"]);
}

#[test]
fn test_reference_connectors() {
    let snap = snapshot(abcd());
    let connectors: Vec<_> = snap.rows().iter().map(|r| r.connectors.clone()).collect();

    assert_eq!(connectors[0], vec![Connector::Node]);
    assert_eq!(connectors[1], vec![Connector::Tee, Connector::Node]);
    assert_eq!(
        connectors[2],
        vec![Connector::Vertical, Connector::Corner, Connector::Node]
    );
    assert_eq!(connectors[3], vec![Connector::Corner, Connector::Node]);
}

#[test]
fn test_reference_highlight() {
    let snap = snapshot(abcd());
    let resolver = HighlightResolver::new(snap.ancestry());

    assert_eq!(resolver.resolve(Some("D")).unwrap().ids(), &["D", "B", "A"]);
    assert!(resolver.resolve(Some("Z")).unwrap().is_empty());
}

// =============================================================================
// Structural Properties
// =============================================================================

/// Every node precedes its whole subtree.
#[test]
fn test_parent_before_child() {
    for seed in 1..20 {
        let snap = snapshot(generated(300, seed));
        let position: HashMap<&str, usize> = snap
            .rows()
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.as_str(), i))
            .collect();

        for row in snap.rows() {
            for ancestor in snap.ancestry().ancestors_of(&row.id).unwrap() {
                assert!(
                    position[ancestor.as_str()] < position[row.id.as_str()],
                    "seed {}: {} appears before ancestor {}",
                    seed,
                    row.id,
                    ancestor
                );
            }
        }
    }
}

/// Subtrees are contiguous: everything between a node and the end of its
/// subtree is a descendant.
#[test]
fn test_subtrees_contiguous() {
    let snap = snapshot(generated(200, 7));
    let rows = snap.rows();

    for (i, row) in rows.iter().enumerate() {
        let mut j = i + 1;
        while j < rows.len() && rows[j].depth > row.depth {
            let chain = snap.ancestry().ancestors_of(&rows[j].id).unwrap();
            assert!(chain.contains(&row.id));
            j += 1;
        }
    }
}

#[test]
fn test_every_node_emitted_once() {
    let records = generated(500, 3);
    let snap = snapshot(records);
    let mut ids = order(&snap);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 500);
}

#[test]
fn test_connector_length_is_depth_plus_one() {
    let snap = snapshot(generated(400, 11));
    for row in snap.rows() {
        assert_eq!(row.connectors.len(), row.depth + 1);
        assert_eq!(row.connectors.last(), Some(&Connector::Node));
    }
}

/// A vertical bar at column k means the ancestor at depth k+1 has a
/// sibling that appears later in the sequence.
#[test]
fn test_vertical_bars_match_pending_siblings() {
    let snap = snapshot(generated(250, 5));
    let forest = snap.forest();

    for row in snap.rows() {
        let mut chain = snap.ancestry().ancestors_of(&row.id).unwrap();
        chain.reverse(); // root first
        for (k, symbol) in row.connectors.iter().take(row.depth.saturating_sub(1)).enumerate() {
            let ancestor = forest.get(&chain[k + 1]).unwrap();
            let expected = if ancestor.is_last_child() {
                Connector::Blank
            } else {
                Connector::Vertical
            };
            assert_eq!(*symbol, expected, "row {} column {}", row.id, k);
        }
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_repeated_builds_identical() {
    let a = snapshot(generated(300, 9));
    let b = snapshot(generated(300, 9));
    assert_eq!(a.rows(), b.rows());
}

#[test]
fn test_input_order_irrelevant() {
    let records = generated(300, 13);
    let mut reversed = records.clone();
    reversed.reverse();

    let forward = snapshot(records);
    let backward = snapshot(reversed);

    assert_eq!(order(&forward), order(&backward));
    let fc: Vec<_> = forward.rows().iter().map(|r| &r.connectors).collect();
    let bc: Vec<_> = backward.rows().iter().map(|r| &r.connectors).collect();
    assert_eq!(fc, bc);
}

#[test]
fn test_linearize_is_restartable() {
    let forest = TreeBuilder::build(validate_all(generated(100, 2)).unwrap()).unwrap();
    let first = linearize(&forest);
    let second = linearize(&forest);
    assert_eq!(first, second);
}

// =============================================================================
// Highlighting
// =============================================================================

#[test]
fn test_highlight_is_selection_plus_ancestors() {
    let snap = snapshot(generated(150, 17));
    let resolver = HighlightResolver::new(snap.ancestry());

    for row in snap.rows() {
        let set = resolver.resolve(Some(&row.id)).unwrap();
        let mut expected = vec![row.id.clone()];
        expected.extend(snap.ancestry().ancestors_of(&row.id).unwrap());
        assert_eq!(set.ids(), expected.as_slice());
        assert_eq!(set.len(), row.depth + 1);
    }
}

// =============================================================================
// Ingestion Errors
// =============================================================================

#[test]
fn test_orphans_are_roots() {
    let snap = snapshot(vec![
        record("a", Some("ghost"), "TRUNK", 0),
        record("b", Some("a"), "TRUNK", 1),
    ]);
    assert_eq!(snap.forest().roots().len(), 1);
    assert_eq!(snap.rows()[0].id, "a");
    assert_eq!(snap.rows()[1].depth, 1);
}

#[test]
fn test_cycle_rejected_with_id() {
    let err = TreeSnapshot::from_records(
        Revision::new(1),
        vec![
            record("root", None, "TRUNK", 0),
            record("x", Some("y"), "TRUNK", 1),
            record("y", Some("x"), "TRUNK", 2),
        ],
    )
    .unwrap_err();

    match err {
        TreeError::Cycle { id } => assert!(id == "x" || id == "y"),
        other => panic!("expected cycle, got {:?}", other),
    }
}

#[test]
fn test_validation_rejected_before_build() {
    let mut bad = record("bad", None, "TRUNK", 0);
    bad.version_type = Some("not a tag".to_string());

    let err = TreeSnapshot::from_records(Revision::new(1), vec![record("ok", None, "TRUNK", 0), bad])
        .unwrap_err();
    assert_eq!(err.code(), "VERSTREE_VALIDATION");
    assert_eq!(err.version_id(), "bad");
}

#[test]
fn test_ancestry_index_matches_forest() {
    let versions = validate_all(generated(120, 21)).unwrap();
    let forest = TreeBuilder::build(versions).unwrap();
    let index = AncestryIndex::from_forest(&forest);

    assert_eq!(index.len(), forest.len());
    for (_, node) in forest.iter() {
        let expected = node.parent().map(|p| forest.node(p).id());
        assert_eq!(index.parent_of(node.id()), expected);
    }
}
