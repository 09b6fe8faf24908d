use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::{ComparisonCriteria, ScoringConfig};

/// Top-level config file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catalog file (YAML or JSON). The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default criteria, overridable from the command line
    #[serde(default)]
    pub criteria: Option<ComparisonCriteria>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
