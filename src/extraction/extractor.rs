use tracing::debug;

use crate::catalog::NodeCatalog;
use crate::errors::{HclExprError, Result};
use crate::extraction::lexer::{
    candidate_spots, comprehension_source, is_reference_candidate, strip_markers, MARKER_OPEN,
};
use crate::types::Reference;

/// Splat syntax marker (`resource.name.*.property`).
const SPLAT: &str = ".*";

/// Finds references to catalog entities inside interpolation strings.
///
/// Borrows the catalog; extraction itself holds no state between calls.
pub struct ReferenceExtractor<'a> {
    catalog: &'a NodeCatalog,
}

impl<'a> ReferenceExtractor<'a> {
    pub fn new(catalog: &'a NodeCatalog) -> Self {
        Self { catalog }
    }

    /// Extracts every reference in `input`, in discovery order.
    ///
    /// Strings that do not start with `${` are plain literals and yield no
    /// references. Fails on splat expressions and on any identifier-like spot
    /// the catalog does not know; no partial result is returned.
    pub fn extract(&self, input: &str) -> Result<Vec<Reference>> {
        if input.contains(SPLAT) {
            return Err(HclExprError::UnsupportedFeature {
                feature: "splat operations (resource.name.*.property) are not yet supported"
                    .to_string(),
                expression: input.to_string(),
            });
        }

        if !input.starts_with(MARKER_OPEN) {
            return Ok(Vec::new());
        }

        let expression = comprehension_source(strip_markers(input));

        let mut refs: Vec<Reference> = Vec::new();
        for spot in candidate_spots(expression) {
            if !is_reference_candidate(spot) {
                continue;
            }
            let search_from = refs.last().map_or(0, |r| r.end);
            refs.push(self.resolve_spot(input, spot, search_from)?);
        }

        debug!(input, count = refs.len(), "extracted references");
        Ok(refs)
    }

    /// Matches one candidate spot against the catalog and anchors it at its
    /// first occurrence in `input` at or after `search_from`.
    ///
    /// Spots are discovered left to right, so starting after the previous
    /// reference keeps repeated references (`${var.a}-${var.a}`) from
    /// collapsing onto one span.
    fn resolve_spot(&self, input: &str, spot: &str, search_from: usize) -> Result<Reference> {
        let segments: Vec<&str> = spot.split('.').collect();

        let entry = self
            .catalog
            .find_match(&segments)
            .ok_or_else(|| HclExprError::UnknownReference {
                expression: input.to_string(),
                catalog: self.catalog.to_json(),
            })?;

        // The spot was cut out of `input`, so it always occurs there.
        let start = input
            .get(search_from..)
            .and_then(|rest| rest.find(spot))
            .map(|rel| search_from + rel)
            .or_else(|| input.find(spot))
            .unwrap_or_default();
        debug!(spot, id = %entry.raw, start, "resolved reference");

        Ok(Reference::new(start, &entry.raw, spot))
    }
}

/// Extracts references from `input`, validating them against `node_ids`.
///
/// Convenience wrapper that builds a throwaway [`NodeCatalog`].
pub fn extract_references<S: AsRef<str>>(input: &str, node_ids: &[S]) -> Result<Vec<Reference>> {
    let catalog = NodeCatalog::new(node_ids);
    ReferenceExtractor::new(&catalog).extract(input)
}
