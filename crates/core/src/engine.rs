//! Main diff engine that orchestrates tokenizing, alignment and coalescing

use std::time::Instant;

use log::{debug, trace};

use crate::algorithm::{
    script_counts, DiffAlgorithm as DiffAlgoTrait, LcsAlgorithm, MyersAlgorithm,
};
use crate::config::{DiffAlgorithm, DiffConfig, DiffMode};
use crate::diff::DiffResult;
use crate::export::ExportFormat;
use crate::stats::Stats;
use crate::tokenizers::{self, Tokenizer};

/// The main diff engine
///
/// Holds a configuration and the tokenizer built from it. Every call to
/// [`DiffEngine::diff`] is a pure computation over its two inputs.
#[derive(Clone)]
pub struct DiffEngine {
    config: DiffConfig,
    tokenizer: Box<dyn Tokenizer>,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        let tokenizer = tokenizers::for_config(&config);
        Self { config, tokenizer }
    }

    /// Create a diff engine comparing at `mode` with defaults otherwise
    pub fn with_mode(mode: DiffMode) -> Self {
        Self::new(DiffConfig::new().with_mode(mode))
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compute the diff between two strings
    ///
    /// 1. Tokenize both inputs at the configured granularity
    /// 2. Align the token sequences with the configured algorithm
    /// 3. Coalesce the edit script into segments
    pub fn diff(&self, original: &str, modified: &str) -> DiffResult {
        let started = Instant::now();

        let original_tokens = self.tokenizer.tokenize(original);
        let modified_tokens = self.tokenizer.tokenize(modified);
        trace!(
            "tokenized with {}: {} old units, {} new units",
            self.tokenizer.name(),
            original_tokens.len(),
            modified_tokens.len()
        );

        let algorithm = self.algorithm(original_tokens.len(), modified_tokens.len());
        let edits = algorithm.compute(&original_tokens, &modified_tokens);
        let (equal, deleted, inserted) = script_counts(&edits);
        trace!(
            "{} kept {} units, removed {}, added {}",
            algorithm.name(),
            equal,
            deleted,
            inserted
        );

        let result = DiffResult::from_edits(
            self.config.mode,
            &original_tokens,
            &modified_tokens,
            &edits,
        );

        debug!(
            "{} diff of {}/{} bytes: {} segments in {:?}",
            self.config.mode,
            original.len(),
            modified.len(),
            result.len(),
            started.elapsed()
        );

        result
    }

    /// Compute the diff and its stats in one call
    pub fn diff_with_stats(&self, original: &str, modified: &str) -> (DiffResult, Stats) {
        let result = self.diff(original, modified);
        let stats = Stats::from(&result);
        (result, stats)
    }

    /// Render a result using this engine's export settings
    pub fn export(&self, result: &DiffResult, format: ExportFormat) -> String {
        format.render(result, &self.config)
    }

    fn algorithm(&self, old_units: usize, new_units: usize) -> &'static dyn DiffAlgoTrait {
        match self.config.algorithm {
            DiffAlgorithm::Lcs
                if old_units.saturating_mul(new_units) <= self.config.lcs_cell_limit =>
            {
                &LcsAlgorithm
            }
            DiffAlgorithm::Lcs => {
                debug!(
                    "{old_units}x{new_units} units exceed the lcs limit of {}, using myers",
                    self.config.lcs_cell_limit
                );
                &MyersAlgorithm
            }
            DiffAlgorithm::Myers => &MyersAlgorithm,
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(DiffConfig::default())
    }
}

impl std::fmt::Debug for DiffEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffEngine")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
