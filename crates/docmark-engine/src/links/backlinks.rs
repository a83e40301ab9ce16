use serde::Serialize;

use super::wikilinks::links_to;

/// One document of the corpus a backlink query scans.
///
/// Where the documents come from (a directory tree, a database) is up to
/// the caller; see [`crate::io::load_corpus`] for the file-tree case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusDocument {
    pub path: String,
    pub title: String,
    pub markup: String,
}

impl CorpusDocument {
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            markup: markup.into(),
        }
    }
}

impl<P, T, M> From<(P, T, M)> for CorpusDocument
where
    P: Into<String>,
    T: Into<String>,
    M: Into<String>,
{
    fn from((path, title, markup): (P, T, M)) -> Self {
        Self::new(path, title, markup)
    }
}

/// A line elsewhere in the corpus that links to the queried document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Backlink {
    pub source_path: String,
    pub source_title: String,
    /// The full line containing the link.
    pub snippet: String,
    /// 1-indexed.
    pub line_number: usize,
}

/// Finds every line in `corpus` that links to `target_id` (`[[target_id]]`
/// or `[[target_id#anchor]]`).
///
/// Results are per line, not per occurrence: a line linking to the target
/// twice yields one backlink. Order follows the corpus, then line number.
pub fn find_backlinks(corpus: &[CorpusDocument], target_id: &str) -> Vec<Backlink> {
    let target_id = target_id.trim();
    let backlinks: Vec<Backlink> = corpus
        .iter()
        .flat_map(|doc| {
            doc.markup
                .lines()
                .enumerate()
                .filter(move |(_, line)| links_to(line, target_id))
                .map(move |(index, line)| Backlink {
                    source_path: doc.path.clone(),
                    source_title: doc.title.clone(),
                    snippet: line.to_string(),
                    line_number: index + 1,
                })
        })
        .collect();

    log::info!(
        "Found {} backlinks to {target_id} across {} documents",
        backlinks.len(),
        corpus.len()
    );
    backlinks
}
