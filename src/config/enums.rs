//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Alpha convention used when compositing colors from the command line.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// Channels scaled by alpha; linear "over" without division
    #[default]
    Premultiplied,
    /// Channels independent of alpha; "over" divides by the result alpha
    Straight,
}
