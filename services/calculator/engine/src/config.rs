use serde::Deserialize;

use crate::format::DEFAULT_SIGNIFICANT_DIGITS;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    /// Significant digits answers are rounded to
    pub significant_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}
