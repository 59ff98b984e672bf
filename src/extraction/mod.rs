/// Reference extraction from interpolation strings.
///
/// A heuristic scanner cuts the interpolation into identifier-like spots,
/// which are then validated against the node catalog.
mod extractor;
pub mod lexer;

pub use extractor::{extract_references, ReferenceExtractor};
