// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause before the assistant reply appears (milliseconds)
    pub typing_delay_ms: u64,

    /// Helpline number shown to the user
    pub helpline_number: String,

    /// Dial string for the helpline
    pub helpline_dial: String,

    /// JSON array of knowledge entries replacing the built-in base
    pub knowledge_path: Option<PathBuf>,

    /// JSON crisis keyword lists replacing the built-in ones
    pub crisis_keywords_path: Option<PathBuf>,

    /// Fixed seed for opener/follow-up selection
    pub seed: Option<u64>,

    /// Force debug-level logging
    pub debug_logging: bool,
}

impl Config {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typing_delay_ms: 1000,
            helpline_number: "1800-121-3721".to_string(),
            helpline_dial: "tel:18001213721".to_string(),
            knowledge_path: None,
            crisis_keywords_path: None,
            seed: None,
            debug_logging: false,
        }
    }
}
