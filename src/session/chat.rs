// Chat session
//
// One session owns its log and context; turns run Idle -> AwaitingResponse -> Idle.

use anyhow::{bail, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use super::conversation::{ConversationHistory, Message};
use crate::config::Config;
use crate::context::{ContextTracker, ConversationContext, Urgency};
use crate::crisis::{EmergencyCategory, EmergencyDetector};
use crate::errors::{file_not_found_error, knowledge_load_error};
use crate::knowledge::KnowledgeBase;
use crate::responder::{suggest, PhrasePicker, RandomPicker, ResponseComposer};
use crate::retrieval::RelevanceScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a reply is still pending for the previous message")]
    TurnInProgress,
}

/// A submitted user message waiting for its reply
#[derive(Debug)]
pub struct PendingTurn {
    query: String,
    history: Vec<Message>,
    emergency: Option<EmergencyCategory>,
    generation: u64,
}

impl PendingTurn {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn emergency(&self) -> Option<EmergencyCategory> {
        self.emergency
    }
}

/// What the display surface renders after a turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnOutcome {
    pub reply: String,
    pub emergency: Option<EmergencyCategory>,
    pub urgency: Urgency,
    pub suggestions: Vec<String>,
}

pub struct ChatSession {
    id: Uuid,
    conversation: ConversationHistory,
    context: ConversationContext,
    suggestions: Vec<String>,
    state: TurnState,
    /// Bumped on clear so replies to pre-clear turns are not appended
    generation: u64,
    composer: ResponseComposer,
    tracker: ContextTracker,
    typing_delay: Duration,
}

impl ChatSession {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        detector: Arc<EmergencyDetector>,
        picker: Box<dyn PhrasePicker>,
    ) -> Self {
        let scorer = RelevanceScorer::new(knowledge, detector.clone());
        let context = ConversationContext::default();

        Self {
            id: Uuid::new_v4(),
            conversation: ConversationHistory::new(),
            suggestions: suggest(&context),
            context,
            state: TurnState::Idle,
            generation: 0,
            composer: ResponseComposer::new(scorer, picker),
            tracker: ContextTracker::new(detector),
            typing_delay: Duration::ZERO,
        }
    }

    /// Build a session from configuration, loading any replacement data files
    pub fn from_config(config: &Config) -> Result<Self> {
        let knowledge = match &config.knowledge_path {
            Some(path) => {
                if !path.exists() {
                    bail!(file_not_found_error(
                        &path.display().to_string(),
                        "Knowledge base"
                    ));
                }
                KnowledgeBase::load_from_file(path)
                    .map_err(|e| anyhow::anyhow!(knowledge_load_error(&path.display().to_string(), e)))?
            }
            None => KnowledgeBase::builtin(),
        };

        let detector = match &config.crisis_keywords_path {
            Some(path) => {
                if !path.exists() {
                    bail!(file_not_found_error(
                        &path.display().to_string(),
                        "Crisis keywords file"
                    ));
                }
                EmergencyDetector::load_from_file(path)?
            }
            None => EmergencyDetector::default(),
        };

        let picker: Box<dyn PhrasePicker> = match config.seed {
            Some(seed) => Box::new(RandomPicker::with_seed(seed)),
            None => Box::new(RandomPicker::new()),
        };

        Ok(Self::new(Arc::new(knowledge), Arc::new(detector), picker)
            .with_typing_delay(config.typing_delay()))
    }

    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn conversation(&self) -> &ConversationHistory {
        &self.conversation
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// 1-based access to the current suggested prompts
    pub fn suggestion(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    /// Accept a user message and start a turn.
    ///
    /// Blank input is ignored and yields `Ok(None)` without touching state.
    pub fn begin_turn(&mut self, text: &str) -> Result<Option<PendingTurn>, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if self.state == TurnState::AwaitingResponse {
            return Err(SessionError::TurnInProgress);
        }

        let history = self.conversation.messages().to_vec();
        let emergency = self.composer.scorer().detector().detect(text);

        self.conversation.add_user_message(text.to_string());
        self.context = self
            .tracker
            .update_classified(&self.context, text, emergency);
        self.state = TurnState::AwaitingResponse;

        tracing::debug!(
            session = %self.id,
            urgency = %self.context.urgency,
            "Turn started"
        );

        Ok(Some(PendingTurn {
            query: text.to_string(),
            history,
            emergency,
            generation: self.generation,
        }))
    }

    /// Produce the reply for a pending turn and return to idle
    pub fn complete_turn(&mut self, pending: PendingTurn) -> TurnOutcome {
        let reply = self.composer.compose_classified(
            &pending.query,
            &pending.history,
            pending.emergency,
        );

        if pending.generation == self.generation {
            self.conversation.add_assistant_message(reply.clone());
            self.suggestions = suggest(&self.context);
            self.state = TurnState::Idle;
        } else {
            tracing::info!(session = %self.id, "Dropping reply to a turn from before clear");
        }

        TurnOutcome {
            reply,
            emergency: pending.emergency,
            urgency: self.context.urgency,
            suggestions: self.suggestions.clone(),
        }
    }

    /// Run a full turn, pausing for the typing delay before the reply
    pub async fn submit(&mut self, text: &str) -> Result<Option<TurnOutcome>, SessionError> {
        let Some(pending) = self.begin_turn(text)? else {
            return Ok(None);
        };

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        Ok(Some(self.complete_turn(pending)))
    }

    /// Reset log, context and suggestions to the initial greeting state
    pub fn clear(&mut self) {
        self.conversation.clear();
        self.context = ConversationContext::default();
        self.suggestions = suggest(&self.context);
        self.state = TurnState::Idle;
        self.generation += 1;

        tracing::info!(session = %self.id, "Conversation cleared");
    }
}
