// Knowledge entries and the immutable base that holds them

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One static topic record used for keyword matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub topic: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(id: &str, topic: &str, content: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            topic: topic.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate knowledge entry id '{0}'")]
    DuplicateId(String),

    #[error("knowledge base has no entries")]
    Empty,
}

/// Ordered, immutable collection of knowledge entries.
///
/// Insertion order matters: the scorer breaks ties by it.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Build a knowledge base, rejecting duplicate ids
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self, KnowledgeError> {
        if entries.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(KnowledgeError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The built-in mental health knowledge base
    pub fn builtin() -> Self {
        Self {
            entries: super::builtin::entries(),
        }
    }

    /// Load entries from a JSON array file
    pub fn load_from_file(path: &Path) -> Result<Self, KnowledgeError> {
        let contents = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<KnowledgeEntry> =
            serde_json::from_str(&contents).map_err(|source| KnowledgeError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} knowledge entries from {}",
            entries.len(),
            path.display()
        );

        Self::new(entries)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_ids_unique() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), 15);
        assert!(KnowledgeBase::new(kb.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_order_preserved() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.entries()[0].id, "stress-general");
        assert_eq!(kb.entries()[14].id, "medication-info");
        assert_eq!(kb.get("crisis-help").unwrap().topic, "crisis");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entries = vec![
            KnowledgeEntry::new("a", "sleep", "Rest well.", &["sleep"]),
            KnowledgeEntry::new("a", "stress", "Breathe.", &["stress"]),
        ];
        match KnowledgeBase::new(entries) {
            Err(KnowledgeError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            KnowledgeBase::new(Vec::new()),
            Err(KnowledgeError::Empty)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "flood-prep", "topic": "flood", "content": "Keep a go-bag ready.", "tags": ["flood", "disaster"]}}]"#
        )
        .unwrap();

        let kb = KnowledgeBase::load_from_file(file.path()).unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.entries()[0].tags, vec!["flood", "disaster"]);
    }

    #[test]
    fn test_load_from_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = KnowledgeBase::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse { .. }));
    }
}
