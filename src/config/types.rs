//! Configuration type definitions.

use super::enums::Representation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Compositing settings.
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct CompositingConfig {
    /// Alpha convention used by `colorf over` ("premultiplied" or "straight")
    #[serde(default)]
    pub representation: Representation,
}

/// Output formatting settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Decimal digits printed for float channels (valid range: 1 - 12)
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_precision() -> usize {
    4
}
