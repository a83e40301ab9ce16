pub mod block_quote;
pub mod callout;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod manual_marker;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use callout::Callout;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{ListKind, ListMarker};
pub use manual_marker::ManualMarkerTag;
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
