// Suggested quick-reply prompts derived from the conversation context

use crate::context::{ConversationContext, Urgency};

pub const DEFAULT_PROMPTS: [&str; 4] = [
    "I'm feeling stressed",
    "I'm having trouble sleeping",
    "I'm feeling anxious",
    "I need someone to talk to",
];

const URGENT_PROMPTS: [&str; 2] = [
    "I need immediate help",
    "Can you connect me with professional help?",
];

const TOPIC_PROMPTS: [(&str, &str); 3] = [
    ("stress", "Tell me some stress relief techniques"),
    ("anxiety", "How can I manage anxiety attacks?"),
    ("sleep", "What are good sleep habits?"),
];

/// Never empty; urgent prompts come first when present
pub fn suggest(context: &ConversationContext) -> Vec<String> {
    let mut prompts: Vec<String> = Vec::new();

    if context.urgency == Urgency::High {
        prompts.extend(URGENT_PROMPTS.iter().map(|p| p.to_string()));
    }

    for (topic, prompt) in TOPIC_PROMPTS {
        if context.has_topic(topic) {
            prompts.push(prompt.to_string());
        }
    }

    if prompts.is_empty() {
        return DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect();
    }

    prompts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(topics: &[&str], urgency: Urgency) -> ConversationContext {
        ConversationContext {
            topics: topics.iter().map(|t| t.to_string()).collect(),
            urgency,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_for_empty_context() {
        assert_eq!(suggest(&ConversationContext::default()), DEFAULT_PROMPTS);
    }

    #[test]
    fn test_untracked_topics_fall_back_to_defaults() {
        let prompts = suggest(&context(&["grief", "disaster"], Urgency::Medium));
        assert_eq!(prompts, DEFAULT_PROMPTS);
    }

    #[test]
    fn test_topic_prompts_in_fixed_order() {
        let prompts = suggest(&context(&["sleep", "stress"], Urgency::Low));
        assert_eq!(
            prompts,
            vec!["Tell me some stress relief techniques", "What are good sleep habits?"]
        );
    }

    #[test]
    fn test_urgent_prompts_first() {
        let prompts = suggest(&context(&["anxiety"], Urgency::High));
        assert_eq!(
            prompts,
            vec![
                "I need immediate help",
                "Can you connect me with professional help?",
                "How can I manage anxiety attacks?",
            ]
        );
    }

    #[test]
    fn test_high_urgency_alone() {
        let prompts = suggest(&context(&[], Urgency::High));
        assert_eq!(prompts.len(), 2);
    }
}
