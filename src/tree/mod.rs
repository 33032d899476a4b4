//! Version tree transforms
//!
//! Data flow:
//!
//! ```text
//! Vec<Version> ─→ TreeBuilder ─→ Forest ─┬─→ linearize ─→ Vec<LinearRow> ─→ Paginator ─→ Page
//!                                        └─→ AncestryIndex ─→ HighlightResolver ─→ HighlightSet
//! ```
//!
//! Every step is a pure function of its input. Nothing here mutates a
//! forest after it is built.

mod ancestry;
mod builder;
mod forest;
mod highlight;
mod linearizer;
mod paginator;
mod render;

pub use ancestry::AncestryIndex;
pub use builder::TreeBuilder;
pub use forest::{Forest, NodeId, TreeNode};
pub use highlight::{toggle_selection, HighlightResolver, HighlightSet};
pub use linearizer::{linearize, Connector, LinearRow};
pub use paginator::{parse_page_param, Page, Paginator, PAGE_SIZE};
pub use render::render_ascii;
