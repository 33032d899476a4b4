//! VersionTreeService - composes the tree transforms per request
//!
//! Every read grabs one snapshot up front and computes the whole response
//! from it, so a concurrent publish can never leak into half a page.

use std::sync::Arc;

use crate::model::{TreeError, TreeResult, VersionRecord};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::snapshot::{Published, SnapshotStore, TreeSnapshot};
use crate::tree::{render_ascii, HighlightResolver, HighlightSet, Paginator};

use super::errors::{ServiceError, ServiceResult};
use super::response::{DebugTree, NodeView, PageQuery, PageResponse, SeedSummary, VersionDetail};

pub struct VersionTreeService {
    store: SnapshotStore,
    paginator: Paginator,
    metrics: Arc<MetricsRegistry>,
}

impl VersionTreeService {
    /// Service over an empty snapshot
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            store: SnapshotStore::new(),
            paginator: Paginator::new(),
            metrics,
        }
    }

    /// Service with `records` already published
    pub fn with_records(records: Vec<VersionRecord>, metrics: Arc<MetricsRegistry>) -> ServiceResult<Self> {
        let service = Self::new(metrics);
        service.seed(records)?;
        Ok(service)
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    pub fn snapshot(&self) -> Arc<TreeSnapshot> {
        self.store.current()
    }

    /// One page of the linear tree plus the highlight set for `selected`.
    pub fn page(&self, query: &PageQuery) -> ServiceResult<PageResponse> {
        let snapshot = self.store.current();
        self.metrics.increment_pages_served();
        if query.selected.is_some() {
            self.metrics.increment_highlight_requests();
        }

        let highlight = self.highlight(&snapshot, query.selected.as_deref())?;
        let page = self.paginator.paginate(snapshot.rows(), query.page);
        let nodes = page
            .rows
            .iter()
            .map(|row| NodeView::new(row, snapshot.forest().node(row.node), &highlight))
            .collect();

        Ok(PageResponse {
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total_nodes: snapshot.len(),
            revision: snapshot.revision(),
            selected_id: highlight.selected().map(str::to_string),
            highlighted_ids: highlight,
            nodes,
        })
    }

    /// A version, where it sits in the sequence, and its ancestors.
    pub fn lookup(&self, id: &str) -> ServiceResult<VersionDetail> {
        let snapshot = self.store.current();
        self.metrics.increment_lookups();

        let Some((row, node)) = snapshot.find(id) else {
            self.metrics.increment_lookup_misses();
            log_event_with_fields(Event::LookupMiss, &[("id", id)]);
            return Err(ServiceError::NotFound(id.to_string()));
        };

        let highlight = self.highlight(&snapshot, Some(id))?;
        let ancestry = highlight
            .ids()
            .iter()
            .skip(1)
            .filter_map(|ancestor| snapshot.forest().get(ancestor))
            .map(|n| n.version().clone())
            .collect();
        let position = snapshot.position_of(id).unwrap_or_default();

        Ok(VersionDetail {
            node: NodeView::new(row, node, &highlight),
            position,
            page: position / self.paginator.page_size() + 1,
            ancestry,
        })
    }

    /// Replace the whole data set. On failure the previous data stays live.
    pub fn seed(&self, records: Vec<VersionRecord>) -> ServiceResult<SeedSummary> {
        let loaded = records.len();
        let outcome = self.store.publish(records);
        self.report_seed(loaded, outcome)
    }

    fn report_seed(&self, loaded: usize, outcome: TreeResult<Published>) -> ServiceResult<SeedSummary> {
        let published = match outcome {
            Ok(published) => published,
            Err(e) => {
                self.metrics.increment_snapshots_rejected();
                log_event_with_fields(
                    Event::SnapshotRejected,
                    &[("code", e.code()), ("id", e.version_id()), ("reason", &e.to_string())],
                );
                return Err(ServiceError::Ingestion(e));
            }
        };

        let snapshot = &published.snapshot;
        let fields = [
            ("revision", snapshot.revision().value().to_string()),
            ("nodes", snapshot.len().to_string()),
        ];
        let fields: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        if published.installed {
            self.metrics.increment_snapshots_published();
            log_event_with_fields(Event::SnapshotPublished, &fields);
        } else {
            self.metrics.increment_snapshots_superseded();
            log_event_with_fields(Event::SnapshotSuperseded, &fields);
        }

        Ok(SeedSummary {
            loaded,
            total_nodes: snapshot.len(),
            revision: snapshot.revision(),
            installed: published.installed,
        })
    }

    /// Whole tree as text
    pub fn debug_tree(&self) -> DebugTree {
        let snapshot = self.store.current();
        let tree = if snapshot.is_empty() {
            "(empty)".to_string()
        } else {
            render_ascii(snapshot.forest(), snapshot.rows())
        };
        DebugTree { tree }
    }

    fn highlight(&self, snapshot: &TreeSnapshot, selected: Option<&str>) -> ServiceResult<HighlightSet> {
        HighlightResolver::new(snapshot.ancestry())
            .resolve(selected)
            .map_err(|e: TreeError| {
                log_event_with_fields(Event::InvariantViolated, &[("reason", &e.to_string())]);
                ServiceError::Invariant(e)
            })
    }
}
