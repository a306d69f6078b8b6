//! Configuration for the diff engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Comparison granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// One unit per character
    Char,
    /// Runs of word characters and runs of everything else
    Word,
    /// One unit per line, terminator included
    #[default]
    Line,
}

impl DiffMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffMode::Char => "char",
            DiffMode::Word => "word",
            DiffMode::Line => "line",
        }
    }

    /// Plural unit name used in summaries ("3 words added")
    pub fn unit_name(&self) -> &'static str {
        match self {
            DiffMode::Char => "characters",
            DiffMode::Word => "words",
            DiffMode::Line => "lines",
        }
    }
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode name is not one of `char`, `word`, `line`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diff mode `{0}` (expected char, word or line)")]
pub struct ParseModeError(pub String);

impl FromStr for DiffMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" | "character" | "chars" => Ok(DiffMode::Char),
            "word" | "words" => Ok(DiffMode::Word),
            "line" | "lines" => Ok(DiffMode::Line),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Diff algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Dynamic-programming LCS (default, deterministic earliest-match tie-break)
    #[default]
    Lcs,
    /// Myers O(ND) algorithm (same output, cheaper when the inputs are large but similar)
    Myers,
}

/// Configuration for diff computation and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Comparison granularity
    pub mode: DiffMode,

    /// Algorithm used to align the token sequences
    pub algorithm: DiffAlgorithm,

    /// In char mode, compare extended grapheme clusters instead of code points
    pub graphemes: bool,

    /// Title of exported HTML documents
    pub html_title: String,

    /// `lang` attribute of exported HTML documents
    pub html_lang: String,

    /// Largest old × new token product aligned with [`DiffAlgorithm::Lcs`].
    /// Bigger inputs go through Myers, which gives the same result.
    pub lcs_cell_limit: usize,
}

/// Default for [`DiffConfig::lcs_cell_limit`]
pub const DEFAULT_LCS_CELL_LIMIT: usize = 1 << 22;

impl Default for DiffConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            mode: DiffMode::default(),
            algorithm: DiffAlgorithm::default(),
            graphemes: false,
            html_title: "Text Diff".to_string(),
            html_lang: "en".to_string(),
            lcs_cell_limit: DEFAULT_LCS_CELL_LIMIT,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the comparison mode
    pub fn with_mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the diff algorithm
    pub fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Compare grapheme clusters rather than code points in char mode
    pub fn with_graphemes(mut self, graphemes: bool) -> Self {
        self.graphemes = graphemes;
        self
    }

    /// Set the HTML export title
    pub fn with_html_title(mut self, title: impl Into<String>) -> Self {
        self.html_title = title.into();
        self
    }

    /// Set the HTML export language tag
    pub fn with_html_lang(mut self, lang: impl Into<String>) -> Self {
        self.html_lang = lang.into();
        self
    }

    /// Set the token product above which LCS hands over to Myers
    pub fn with_lcs_cell_limit(mut self, limit: usize) -> Self {
        self.lcs_cell_limit = limit;
        self
    }

    /// Character mode with defaults everywhere else
    pub fn minimal() -> Self {
        Self::new().with_mode(DiffMode::Char)
    }

    /// Line mode with the O(ND) algorithm, for file-sized inputs
    pub fn for_large_inputs() -> Self {
        Self::new()
            .with_mode(DiffMode::Line)
            .with_algorithm(DiffAlgorithm::Myers)
    }
}
