pub mod editing;
pub mod io;
pub mod links;
pub mod models;
pub mod parsing;
pub mod serializing;


// Re-export key types for easier usage
pub use editing::{AnnotateError, ManualMarkerRecord, annotate, extract_manual_markers, try_annotate};
pub use io::*;
pub use links::{
    Backlink, CorpusDocument, DocumentKind, LinkGraph, build_link_graph, extract_title,
    find_backlinks, parse_wikilinks,
};
pub use models::*;
pub use parsing::{ParseDiagnostic, ParsedDoc, inline::tokenize, parse, parse_with_diagnostics};
pub use serializing::serialize;
