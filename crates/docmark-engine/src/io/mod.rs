use crate::links::{CorpusDocument, extract_title};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid corpus root: {0}")]
    InvalidRoot(String),
    #[error("Path is not relative to the corpus root: {0}")]
    InvalidPath(#[from] relative_path::FromPathError),
}

/// Read a markup file relative to the corpus root
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    Ok(fs::read_to_string(&absolute_path)?)
}

/// All `.md` files under `root`, recursively, sorted by path.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_root(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_root(root: &Path) -> Result<(), IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidRoot(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    Ok(())
}

/// Loads every markup file under `root` as a corpus for link queries.
///
/// Paths are relative to `root` with `/` separators, so they compare the
/// same on every platform.
pub fn load_corpus(root: &Path) -> Result<Vec<CorpusDocument>, IoError> {
    let files = scan_markdown_files(root)?;
    let mut corpus = Vec::with_capacity(files.len());

    for file in files {
        let relative = match file.strip_prefix(root) {
            Ok(relative) => RelativePathBuf::from_path(relative)?,
            Err(_) => {
                log::warn!("Skipping {} outside corpus root", file.display());
                continue;
            }
        };
        let markup = read_file(&relative, root)?;
        let title = extract_title(&markup, relative.as_str());
        corpus.push(CorpusDocument::new(relative.as_str(), title, markup));
    }

    log::info!("Loaded {} documents from {}", corpus.len(), root.display());
    Ok(corpus)
}
