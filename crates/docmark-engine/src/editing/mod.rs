//! # Editing
//!
//! Save-time transforms over markup text. A "manual annotation" save runs
//! [`annotate`] over the previously persisted text and the edited text so
//! the newly typed region is wrapped in a manual marker.

pub mod annotate;
pub mod markers;

pub use annotate::{AnnotateError, ChangedRegion, annotate, changed_region, try_annotate};
pub use markers::{ManualMarkerRecord, extract_manual_markers};
