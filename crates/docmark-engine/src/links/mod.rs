//! # Links
//!
//! Wikilink extraction and reverse lookup over a corpus of markup documents.
//!
//! - **`wikilinks`**: regex scan for `[[target]]` / `[[target#anchor]]`
//! - **`backlinks`**: `find_backlinks` - which lines elsewhere link here
//! - **`graph`**: outgoing/incoming link graph with stem-based resolution
//! - **`title`**: document titles from frontmatter, first heading or file name

pub mod backlinks;
pub mod graph;
pub mod title;
pub mod wikilinks;

pub use backlinks::{Backlink, CorpusDocument, find_backlinks};
pub use graph::{DocumentKind, GraphNode, LinkGraph, build_link_graph, resolve_link};
pub use title::{extract_title, title_from_path};
pub use wikilinks::{WikiLinkRef, links_to, parse_wikilinks};
