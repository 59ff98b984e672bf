use std::path::Path;

use tracing::debug;

use crate::catalog::NodeCatalog;
use crate::config::{load_catalog, load_config, DiscardPolicy, HclExprConfig};
use crate::errors::Result;
use crate::extraction::ReferenceExtractor;
use crate::synthesis::Synthesizer;
use crate::types::{Expression, Reference};

/// Runs extraction and synthesis for interpolation strings against one catalog.
pub struct ExpressionConverter {
    catalog: NodeCatalog,
    config: HclExprConfig,
}

impl ExpressionConverter {
    pub fn new(catalog: NodeCatalog, config: HclExprConfig) -> Self {
        Self { catalog, config }
    }

    /// Loads the catalog and configuration from disk.
    ///
    /// A missing config file falls back to defaults; a missing catalog is an error.
    pub fn open(catalog_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let catalog = load_catalog(catalog_path)?;
        let config = match config_path {
            Some(path) => load_config(path)?,
            None => HclExprConfig::default(),
        };
        debug!(
            entries = catalog.len(),
            policy = config.discard_policy.as_str(),
            "opened converter"
        );
        Ok(Self::new(catalog, config))
    }

    /// Replaces the configured discard policy, e.g. from a command-line flag.
    pub fn with_discard_policy(mut self, policy: DiscardPolicy) -> Self {
        self.config.discard_policy = policy;
        self
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &HclExprConfig {
        &self.config
    }

    /// Extracts the references in `input` without synthesizing.
    pub fn references(&self, input: &str) -> Result<Vec<Reference>> {
        ReferenceExtractor::new(&self.catalog).extract(input)
    }

    /// Converts one interpolation string into an expression tree.
    pub fn convert(&self, input: &str) -> Result<Expression> {
        let refs = self.references(input)?;
        Synthesizer::new(self.config.discard_policy).synthesize(input, &refs)
    }

    /// Converts a batch of strings, stopping at the first failure.
    pub fn convert_all<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<Expression>> {
        inputs.iter().map(|input| self.convert(input.as_ref())).collect()
    }
}
