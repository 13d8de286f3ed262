// Keyword/tag relevance scoring with emergency override

use std::sync::Arc;

use super::keywords::extract_keywords;
use crate::crisis::{EmergencyCategory, EmergencyDetector, EmergencyResource};
use crate::knowledge::{KnowledgeBase, KnowledgeEntry};

/// Returned when no entry scores above zero
pub const FALLBACK_MESSAGE: &str = "I understand you're reaching out for support. Could you tell me more about what you're experiencing? I'm here to listen and help.";

/// At most this many entries are concatenated into a reply
pub const MAX_RESULTS: usize = 2;

const TOPIC_WEIGHT: u32 = 5;
const CONTENT_WEIGHT: u32 = 2;
const TAG_WEIGHT: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    pub entry: KnowledgeEntry,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    knowledge: Arc<KnowledgeBase>,
    detector: Arc<EmergencyDetector>,
}

impl RelevanceScorer {
    pub fn new(knowledge: Arc<KnowledgeBase>, detector: Arc<EmergencyDetector>) -> Self {
        Self {
            knowledge,
            detector,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn detector(&self) -> &EmergencyDetector {
        &self.detector
    }

    /// Produce the informational part of a reply for `query`
    pub fn retrieve(&self, query: &str) -> String {
        self.retrieve_classified(query, self.detector.detect(query))
    }

    /// Like [`retrieve`](Self::retrieve), with the emergency scan already done
    /// by the caller
    pub fn retrieve_classified(
        &self,
        query: &str,
        emergency: Option<EmergencyCategory>,
    ) -> String {
        if let Some(category) = emergency {
            return EmergencyResource::for_category(category).render();
        }

        let top = self.rank(query);
        if top.is_empty() {
            tracing::debug!("No knowledge entry matched, using fallback");
            return FALLBACK_MESSAGE.to_string();
        }

        top.iter()
            .map(|scored| scored.entry.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Entries with a positive score, best first, at most `MAX_RESULTS`.
    ///
    /// Ties keep knowledge-base order.
    pub fn rank(&self, query: &str) -> Vec<ScoredEntry> {
        let query_lower = query.to_lowercase();
        let keywords = extract_keywords(&query_lower);

        let mut scored: Vec<ScoredEntry> = self
            .knowledge
            .entries()
            .iter()
            .map(|entry| ScoredEntry {
                entry: entry.clone(),
                score: score_entry(entry, &query_lower, &keywords),
            })
            .filter(|scored| scored.score > 0)
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(MAX_RESULTS);

        for s in &scored {
            tracing::debug!("Matched '{}' with score {}", s.entry.id, s.score);
        }

        scored
    }
}

fn score_entry(entry: &KnowledgeEntry, query_lower: &str, keywords: &[String]) -> u32 {
    let mut score = 0;

    if query_lower.contains(entry.topic.as_str()) {
        score += TOPIC_WEIGHT;
    }

    let content_lower = entry.content.to_lowercase();
    for keyword in keywords {
        if content_lower.contains(keyword.as_str()) {
            score += CONTENT_WEIGHT;
        }
        // Tags are compared as written; "CBT" never matches a lower-cased keyword
        if entry
            .tags
            .iter()
            .any(|tag| tag.contains(keyword.as_str()) || keyword.contains(tag.as_str()))
        {
            score += TAG_WEIGHT;
        }
    }

    score
}
