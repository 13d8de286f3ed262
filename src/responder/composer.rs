// Response composer
//
// reply = opener + personalization + retrieved info + "\n\n" + follow-up

use super::picker::PhrasePicker;
use crate::crisis::EmergencyCategory;
use crate::retrieval::RelevanceScorer;
use crate::session::{Message, Sender};

pub const SUPPORTIVE_OPENERS: [&str; 4] = [
    "I'm here to support you. ",
    "Thank you for sharing that with me. ",
    "I appreciate you opening up. ",
    "I'm listening and here to help. ",
];

pub const FOLLOW_UP_QUESTIONS: [&str; 5] = [
    "How have you been coping with this?",
    "Is there anything specific that triggered these feelings?",
    "What strategies have worked for you in the past?",
    "Would you like to know more about any particular aspect?",
    "How can I best support you right now?",
];

/// (trigger substring, topic name) pairs, reported in this order
const REMEMBERED_TOPICS: [(&str, &str); 4] = [
    ("stress", "stress"),
    ("anxiety", "anxiety"),
    ("depress", "depression"),
    ("sleep", "sleep"),
];

pub struct ResponseComposer {
    scorer: RelevanceScorer,
    picker: Box<dyn PhrasePicker>,
}

impl ResponseComposer {
    pub fn new(scorer: RelevanceScorer, picker: Box<dyn PhrasePicker>) -> Self {
        Self { scorer, picker }
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Build a reply to `query`.
    ///
    /// `history` is the conversation as it stood before `query` was sent.
    pub fn compose(&mut self, query: &str, history: &[Message]) -> String {
        let emergency = self.scorer.detector().detect(query);
        self.compose_classified(query, history, emergency)
    }

    /// [`compose`](Self::compose) with the emergency scan already done
    pub fn compose_classified(
        &mut self,
        query: &str,
        history: &[Message],
        emergency: Option<EmergencyCategory>,
    ) -> String {
        let relevant_info = self.scorer.retrieve_classified(query, emergency);
        let personalization = personalize(history);

        let opener = SUPPORTIVE_OPENERS[self.picker.pick(SUPPORTIVE_OPENERS.len())];
        let follow_up = FOLLOW_UP_QUESTIONS[self.picker.pick(FOLLOW_UP_QUESTIONS.len())];

        format!("{opener}{personalization}{relevant_info}\n\n{follow_up}")
    }
}

/// Sentence naming topics from earlier user messages, or empty
fn personalize(history: &[Message]) -> String {
    let user_messages: Vec<String> = history
        .iter()
        .filter(|m| m.sender == Sender::User)
        .map(|m| m.text.to_lowercase())
        .collect();

    if user_messages.len() <= 1 {
        return String::new();
    }

    let topics: Vec<&str> = REMEMBERED_TOPICS
        .iter()
        .filter(|(trigger, _)| user_messages.iter().any(|m| m.contains(trigger)))
        .map(|(_, topic)| *topic)
        .collect();

    if topics.is_empty() {
        return String::new();
    }

    format!("I see you've mentioned {} before. ", topics.join(" and "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crisis::{EmergencyDetector, EmergencyResource};
    use crate::knowledge::KnowledgeBase;
    use crate::responder::{FixedPicker, RandomPicker, ScriptedPicker};
    use crate::retrieval::FALLBACK_MESSAGE;
    use std::sync::Arc;

    fn scorer() -> RelevanceScorer {
        RelevanceScorer::new(
            Arc::new(KnowledgeBase::builtin()),
            Arc::new(EmergencyDetector::default()),
        )
    }

    #[test]
    fn test_compose_layout() {
        let mut composer = ResponseComposer::new(scorer(), Box::new(FixedPicker(0)));
        let reply = composer.compose("xyzzyzzy nonsense", &[]);

        assert_eq!(
            reply,
            format!(
                "I'm here to support you. {}\n\nHow have you been coping with this?",
                FALLBACK_MESSAGE
            )
        );
    }

    #[test]
    fn test_independent_picks() {
        let mut composer =
            ResponseComposer::new(scorer(), Box::new(ScriptedPicker::new(vec![3, 4])));
        let reply = composer.compose("xyzzyzzy", &[]);

        assert!(reply.starts_with(SUPPORTIVE_OPENERS[3]));
        assert!(reply.ends_with(FOLLOW_UP_QUESTIONS[4]));
    }

    #[test]
    fn test_random_reply_uses_known_phrases() {
        let mut composer = ResponseComposer::new(scorer(), Box::new(RandomPicker::new()));
        for _ in 0..20 {
            let reply = composer.compose("I'm feeling stressed", &[]);
            assert!(SUPPORTIVE_OPENERS.iter().any(|o| reply.starts_with(o)));
            assert!(FOLLOW_UP_QUESTIONS.iter().any(|q| reply.ends_with(q)));
        }
    }

    #[test]
    fn test_emergency_block_included() {
        let mut composer = ResponseComposer::new(scorer(), Box::new(FixedPicker(0)));
        let reply = composer.compose("I don't want to live anymore", &[]);
        let block = EmergencyResource::for_category(EmergencyCategory::Suicide).render();
        assert!(reply.contains(&block));
    }

    #[test]
    fn test_classified_compose_uses_given_category() {
        let mut composer = ResponseComposer::new(scorer(), Box::new(FixedPicker(0)));
        let reply =
            composer.compose_classified("xyzzyzzy", &[], Some(EmergencyCategory::Crisis));
        let block = EmergencyResource::for_category(EmergencyCategory::Crisis).render();
        assert_eq!(
            reply,
            format!("I'm here to support you. {block}\n\nHow have you been coping with this?")
        );
    }

    #[test]
    fn test_personalization_needs_two_user_messages() {
        let one = vec![
            Message::assistant("Hello!"),
            Message::user("I'm so stressed"),
        ];
        assert_eq!(personalize(&one), "");

        let two = vec![
            Message::assistant("Hello!"),
            Message::user("I'm so stressed"),
            Message::assistant("..."),
            Message::user("and I can't sleep, I feel depressed"),
        ];
        assert_eq!(
            personalize(&two),
            "I see you've mentioned stress and depression and sleep before. "
        );
    }

    #[test]
    fn test_personalization_ignores_assistant_text() {
        let history = vec![
            Message::assistant("Stress and anxiety are common."),
            Message::user("hello"),
            Message::user("thanks"),
        ];
        assert_eq!(personalize(&history), "");
    }

    #[test]
    fn test_personalization_in_reply() {
        let mut composer = ResponseComposer::new(scorer(), Box::new(FixedPicker(1)));
        let history = vec![
            Message::user("Anxiety is wearing me down"),
            Message::assistant("..."),
            Message::user("still here"),
            Message::assistant("..."),
        ];
        let reply = composer.compose("xyzzyzzy", &history);
        assert!(reply.starts_with(
            "Thank you for sharing that with me. I see you've mentioned anxiety before. "
        ));
    }
}
