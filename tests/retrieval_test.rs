// Retrieval, detection and context properties over the built-in data
//
// This test suite verifies that:
// 1. Suicide phrases always win over crisis phrases
// 2. Retrieval returns at most two entries, or the fixed fallback
// 3. Context merging is monotonic and idempotent

use carebot::context::{ContextTracker, ConversationContext, Urgency};
use carebot::crisis::{EmergencyCategory, EmergencyDetector, EmergencyResource};
use carebot::knowledge::{KnowledgeBase, KnowledgeEntry};
use carebot::retrieval::{RelevanceScorer, FALLBACK_MESSAGE, MAX_RESULTS};
use std::io::Write;
use std::sync::Arc;

fn scorer() -> RelevanceScorer {
    RelevanceScorer::new(
        Arc::new(KnowledgeBase::builtin()),
        Arc::new(EmergencyDetector::default()),
    )
}

#[test]
fn test_kill_myself_is_always_suicide() {
    let detector = EmergencyDetector::default();
    let texts = [
        "I want to kill myself",
        "KILL MYSELF",
        "emergency! I might kill myself",
        "I could hurt someone or Kill Myself, this is a crisis",
    ];
    for text in texts {
        assert_eq!(
            detector.detect(text),
            Some(EmergencyCategory::Suicide),
            "{}",
            text
        );
    }
}

#[test]
fn test_hurt_myself_without_suicide_phrase_is_crisis() {
    let detector = EmergencyDetector::default();
    for text in ["I want to hurt myself", "I HURT MYSELF yesterday"] {
        assert_eq!(detector.detect(text), Some(EmergencyCategory::Crisis));
    }
}

#[test]
fn test_crisis_message_overrides_scoring() {
    assert_eq!(
        scorer().retrieve("I might hurt myself"),
        EmergencyResource::for_category(EmergencyCategory::Crisis).render()
    );
}

#[test]
fn test_stress_query_returns_stress_content() {
    let scorer = scorer();
    let kb = KnowledgeBase::builtin();

    let ranked = scorer.rank("I'm feeling stressed");
    assert!(ranked
        .iter()
        .any(|s| s.score > 0 && s.entry.tags.iter().any(|t| t == "stress")));

    let text = scorer.retrieve("I'm feeling stressed");
    let included = kb
        .entries()
        .iter()
        .filter(|e| text.contains(e.content.as_str()))
        .count();
    assert!(included >= 1 && included <= MAX_RESULTS);
    assert_eq!(text.split("\n\n").count(), included);
}

#[test]
fn test_nonsense_returns_fallback() {
    assert_eq!(scorer().retrieve("xyzzyzzy nonsense"), FALLBACK_MESSAGE);
}

#[test]
fn test_custom_knowledge_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let entries = vec![
        KnowledgeEntry::new(
            "heat-safety",
            "heat",
            "During heatwaves, drink water often and stay in shaded or cooled spaces.",
            &["heatwave", "hydration"],
        ),
        KnowledgeEntry::new(
            "air-quality",
            "air",
            "When air quality is poor, limit outdoor exercise and keep windows closed.",
            &["pollution", "breathing"],
        ),
    ];
    write!(file, "{}", serde_json::to_string(&entries).unwrap()).unwrap();

    let kb = KnowledgeBase::load_from_file(file.path()).unwrap();
    let scorer = RelevanceScorer::new(Arc::new(kb), Arc::new(EmergencyDetector::default()));

    let ranked = scorer.rank("the heatwave is exhausting");
    assert_eq!(ranked[0].entry.id, "heat-safety");
}

#[test]
fn test_urgency_never_drops_from_high() {
    let tracker = ContextTracker::default();
    let mut ctx = tracker.update(&ConversationContext::default(), "I don't want to live");
    assert_eq!(ctx.urgency, Urgency::High);

    for text in ["fine", "good", "I need help", "", "okay bye"] {
        ctx = tracker.update(&ctx, text);
        assert_eq!(ctx.urgency, Urgency::High);
    }
}

#[test]
fn test_topic_accumulation_idempotent() {
    let tracker = ContextTracker::default();
    let text = "grief after the funeral and the flood";

    let once = tracker.update(&ConversationContext::default(), text);
    let twice = tracker.update(&once, text);
    assert_eq!(once.topics, twice.topics);
}
