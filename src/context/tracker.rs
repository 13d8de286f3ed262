// Context tracker
//
// Topics and sentiments only grow; urgency only escalates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::crisis::{EmergencyCategory, EmergencyDetector};

/// Session-level severity: low < medium < high
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub topics: BTreeSet<String>,
    pub sentiments: BTreeSet<String>,
    pub urgency: Urgency,
}

impl ConversationContext {
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.contains(topic)
    }
}

const TOPIC_TRIGGERS: &[(&str, &[&str])] = &[
    ("stress", &["stress", "overwhelm", "pressure", "burnout"]),
    ("anxiety", &["anxiety", "worry", "nervous", "panic", "fear"]),
    ("depression", &["depress", "sad", "hopeless", "empty", "worthless"]),
    ("sleep", &["sleep", "insomnia", "tired", "exhausted", "rest"]),
    ("grief", &["grief", "loss", "death", "died", "funeral"]),
    ("trauma", &["trauma", "ptsd", "abuse", "assault", "accident"]),
    ("disaster", &["disaster", "earthquake", "flood", "hurricane", "fire"]),
];

const SENTIMENT_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "negative",
        &["sad", "angry", "upset", "hurt", "afraid", "scared", "lonely", "hopeless"],
    ),
    (
        "positive",
        &["better", "good", "happy", "hopeful", "grateful", "calm", "peaceful"],
    ),
    ("neutral", &["okay", "fine", "alright", "normal", "so-so"]),
];

const MEDIUM_URGENCY_PHRASES: &[&str] = &["need help", "urgent", "right now", "bad"];

fn matching_labels(text_lower: &str, triggers: &[(&str, &[&str])]) -> Vec<String> {
    triggers
        .iter()
        .filter(|(_, words)| words.iter().any(|w| text_lower.contains(w)))
        .map(|(label, _)| label.to_string())
        .collect()
}

#[derive(Debug, Clone)]
pub struct ContextTracker {
    detector: Arc<EmergencyDetector>,
}

impl ContextTracker {
    pub fn new(detector: Arc<EmergencyDetector>) -> Self {
        Self { detector }
    }

    /// Urgency of a single message, ignoring history
    pub fn assess_urgency(&self, text: &str) -> Urgency {
        urgency_for(text, self.detector.detect(text))
    }

    /// Merge one user message into `context`, returning the new context
    pub fn update(&self, context: &ConversationContext, text: &str) -> ConversationContext {
        self.update_classified(context, text, self.detector.detect(text))
    }

    /// [`update`](Self::update) for a message whose emergency scan has
    /// already run
    pub fn update_classified(
        &self,
        context: &ConversationContext,
        text: &str,
        emergency: Option<EmergencyCategory>,
    ) -> ConversationContext {
        let text_lower = text.to_lowercase();

        let mut next = context.clone();
        next.topics
            .extend(matching_labels(&text_lower, TOPIC_TRIGGERS));
        next.sentiments
            .extend(matching_labels(&text_lower, SENTIMENT_TRIGGERS));
        next.urgency = context.urgency.max(urgency_for(text, emergency));

        if next.urgency != context.urgency {
            tracing::info!("Urgency escalated: {} -> {}", context.urgency, next.urgency);
        }

        next
    }
}

fn urgency_for(text: &str, emergency: Option<EmergencyCategory>) -> Urgency {
    if emergency.is_some() {
        return Urgency::High;
    }

    let text_lower = text.to_lowercase();
    if MEDIUM_URGENCY_PHRASES
        .iter()
        .any(|phrase| text_lower.contains(phrase))
    {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

impl Default for ContextTracker {
    fn default() -> Self {
        Self::new(Arc::new(EmergencyDetector::default()))
    }
}
