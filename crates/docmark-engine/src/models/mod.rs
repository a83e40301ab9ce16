pub mod document;

pub use document::{
    Block, CalloutKind, Document, InlineSpan, ListItem, Mark, TableCell, TableRow, TreeError,
    UnknownCalloutKind,
};
