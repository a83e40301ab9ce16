/// Recoverable problems found while parsing. None of them stop the parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDiagnostic {
    /// An open tag with no close tag before end of input (or before the next
    /// open tag). The marker is closed implicitly.
    #[error("Manual marker by {author} opened on line {line} is never closed")]
    MalformedMarker { line: usize, author: String },
    /// A close tag with no open marker. The line is dropped.
    #[error("Manual marker close tag on line {line} has no matching open tag")]
    StrayMarkerClose { line: usize },
}

impl ParseDiagnostic {
    /// 1-indexed line the diagnostic refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseDiagnostic::MalformedMarker { line, .. }
            | ParseDiagnostic::StrayMarkerClose { line } => *line,
        }
    }
}
