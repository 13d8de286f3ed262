// Emergency keyword detector

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Severity category of a detected emergency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyCategory {
    Suicide,
    Crisis,
}

impl EmergencyCategory {
    pub fn as_str(&self) -> &str {
        match self {
            EmergencyCategory::Suicide => "suicide",
            EmergencyCategory::Crisis => "crisis",
        }
    }
}

impl fmt::Display for EmergencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrase lists, checked in declaration order: suicide before crisis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisKeywords {
    pub suicide: Vec<String>,
    pub crisis: Vec<String>,
}

impl Default for CrisisKeywords {
    fn default() -> Self {
        Self {
            suicide: to_strings(&[
                "kill myself",
                "suicide",
                "end my life",
                "don't want to live",
                "better off dead",
            ]),
            crisis: to_strings(&[
                "emergency",
                "immediate danger",
                "crisis",
                "hurt myself",
                "hurt someone",
            ]),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[derive(Debug, Clone, Default)]
pub struct EmergencyDetector {
    keywords: CrisisKeywords,
}

impl EmergencyDetector {
    pub fn new(keywords: CrisisKeywords) -> Self {
        Self { keywords }
    }

    /// Load crisis keywords from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crisis keywords file: {}", path.display()))?;

        let keywords: CrisisKeywords = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Self { keywords })
    }

    /// Classify text; the first matching phrase wins
    pub fn detect(&self, text: &str) -> Option<EmergencyCategory> {
        let text_lower = text.to_lowercase();

        for keyword in &self.keywords.suicide {
            if text_lower.contains(&keyword.to_lowercase()) {
                tracing::warn!("Emergency detected: suicide keyword '{}'", keyword);
                return Some(EmergencyCategory::Suicide);
            }
        }

        for keyword in &self.keywords.crisis {
            if text_lower.contains(&keyword.to_lowercase()) {
                tracing::warn!("Emergency detected: crisis keyword '{}'", keyword);
                return Some(EmergencyCategory::Crisis);
            }
        }

        None
    }
}
