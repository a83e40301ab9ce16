use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::{backlinks::CorpusDocument, wikilinks::parse_wikilinks};

/// Role of a document, from the top-level directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Chapter,
    Note,
    Reference,
    Unknown,
}

impl DocumentKind {
    pub fn from_path(path: &str) -> Self {
        match path.split('/').next() {
            Some("chapters") if path.contains('/') => DocumentKind::Chapter,
            Some("notes") if path.contains('/') => DocumentKind::Note,
            Some("references") if path.contains('/') => DocumentKind::Reference,
            _ => DocumentKind::Unknown,
        }
    }

    /// Lower ranks win when several documents share a file stem.
    fn resolution_rank(self) -> u8 {
        match self {
            DocumentKind::Note => 0,
            DocumentKind::Reference => 1,
            DocumentKind::Chapter => 2,
            DocumentKind::Unknown => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub path: String,
    pub kind: DocumentKind,
    pub title: String,
    /// Distinct resolved paths this document links to.
    pub links_to: Vec<String>,
    /// Paths of documents linking here.
    pub linked_from: Vec<String>,
    /// Distinct targets that resolve to no document in the corpus.
    pub dangling: Vec<String>,
}

/// Bidirectional link graph over a corpus, keyed by document path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkGraph {
    pub nodes: BTreeMap<String, GraphNode>,
}

fn file_stem(path: &str) -> Option<&str> {
    Path::new(path).file_stem().and_then(|s| s.to_str())
}

/// Resolves a wikilink target to a corpus path by file stem, preferring
/// `notes/`, then `references/`, then `chapters/`, then anything else.
pub fn resolve_link<'c>(target: &str, corpus: &'c [CorpusDocument]) -> Option<&'c str> {
    corpus
        .iter()
        .enumerate()
        .filter(|(_, doc)| file_stem(&doc.path) == Some(target))
        .min_by_key(|(index, doc)| (DocumentKind::from_path(&doc.path).resolution_rank(), *index))
        .map(|(_, doc)| doc.path.as_str())
}

/// Builds outgoing links for every document, then inverts them into
/// incoming links.
pub fn build_link_graph(corpus: &[CorpusDocument]) -> LinkGraph {
    let mut nodes = BTreeMap::new();

    for doc in corpus {
        let mut links_to = BTreeSet::new();
        let mut dangling = BTreeSet::new();
        for link in parse_wikilinks(&doc.markup) {
            match resolve_link(&link.target, corpus) {
                Some(path) => links_to.insert(path.to_string()),
                None => dangling.insert(link.target),
            };
        }

        nodes.insert(
            doc.path.clone(),
            GraphNode {
                path: doc.path.clone(),
                kind: DocumentKind::from_path(&doc.path),
                title: doc.title.clone(),
                links_to: links_to.into_iter().collect(),
                linked_from: vec![],
                dangling: dangling.into_iter().collect(),
            },
        );
    }

    let edges: Vec<(String, String)> = nodes
        .values()
        .flat_map(|node| {
            node.links_to
                .iter()
                .map(move |target| (node.path.clone(), target.clone()))
        })
        .collect();

    for (source, target) in edges {
        if let Some(node) = nodes.get_mut(&target) {
            node.linked_from.push(source);
        }
    }

    log::info!("Built link graph with {} nodes", nodes.len());
    LinkGraph { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn corpus() -> Vec<CorpusDocument> {
        vec![
            CorpusDocument::new(
                "chapters/order-entry.md",
                "Order Entry",
                "See [[order-tips]] and [[glossary#terms]].",
            ),
            CorpusDocument::new(
                "notes/order-tips.md",
                "Order Tips",
                "Back to [[order-entry]]. Also [[missing-page]].",
            ),
            CorpusDocument::new("chapters/order-tips.md", "Shadowed", ""),
            CorpusDocument::new("references/glossary.md", "Glossary", "[[order-tips]]"),
        ]
    }

    #[test]
    fn kinds_from_top_directory() {
        assert_eq!(DocumentKind::from_path("chapters/a.md"), DocumentKind::Chapter);
        assert_eq!(DocumentKind::from_path("notes/sub/a.md"), DocumentKind::Note);
        assert_eq!(DocumentKind::from_path("references/a.md"), DocumentKind::Reference);
        assert_eq!(DocumentKind::from_path("notes.md"), DocumentKind::Unknown);
    }

    #[test]
    fn resolve_prefers_notes() {
        let corpus = corpus();
        assert_eq!(resolve_link("order-tips", &corpus), Some("notes/order-tips.md"));
        assert_eq!(resolve_link("glossary", &corpus), Some("references/glossary.md"));
        assert_eq!(resolve_link("nowhere", &corpus), None);
    }

    #[test]
    fn graph_has_both_directions() {
        let graph = build_link_graph(&corpus());

        let entry = &graph.nodes["chapters/order-entry.md"];
        assert_eq!(
            entry.links_to,
            vec!["notes/order-tips.md", "references/glossary.md"]
        );
        assert_eq!(entry.linked_from, vec!["notes/order-tips.md"]);

        let tips = &graph.nodes["notes/order-tips.md"];
        assert_eq!(tips.dangling, vec!["missing-page"]);
        assert_eq!(
            tips.linked_from,
            vec!["chapters/order-entry.md", "references/glossary.md"]
        );

        assert!(graph.nodes["chapters/order-tips.md"].linked_from.is_empty());
    }
}
