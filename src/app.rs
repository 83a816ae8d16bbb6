use crate::api::ApiClient;
use crate::constants::{APOLOGY_MESSAGE, WELCOME_MESSAGE};
use crate::errors::CharlaResult;
use crate::models::{ChatResponse, ConnectionStatus, Message};
use crate::status_indicator::StatusIndicator;
use ratatui::layout::Rect;
use std::sync::Arc;

/// All mutable UI state. One instance lives behind an `Arc<Mutex<_>>` owned
/// by the event loop; the spawned health and chat tasks mutate it through
/// the same lock.
pub struct App {
    pub api: Arc<ApiClient>,
    pub messages: Vec<Message>,
    pub input: String,
    pub thinking: bool,
    pub connection_status: ConnectionStatus,
    pub chat_scroll: u16,
    pub mounted: bool,
    pub suggestion_cursor: Option<usize>,
    pub suggestion_rows: Vec<(Rect, usize)>,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: Arc<ApiClient>) -> App {
        App {
            api,
            messages: vec![Message::bot(WELCOME_MESSAGE, Vec::new())],
            input: String::new(),
            thinking: false,
            connection_status: ConnectionStatus::Connecting,
            chat_scroll: 0,
            mounted: false,
            suggestion_cursor: None,
            suggestion_rows: Vec::new(),
            status_indicator: StatusIndicator::new(),
            should_quit: false,
        }
    }

    /// Whether the input line accepts edits. Mirrors the disabled state of
    /// the text box: typing is rejected while a request is pending or the
    /// backend is unreachable.
    pub fn input_enabled(&self) -> bool {
        !self.thinking && self.connection_status != ConnectionStatus::Error
    }

    /// The suggestion palette shows only while the conversation still holds
    /// just the welcome message and nothing is pending.
    pub fn suggestions_visible(&self) -> bool {
        self.messages.len() <= 1 && !self.thinking
    }

    /// First half of the submit path. Trims the text, drops blank input and
    /// anything submitted while a request is already in flight, appends the
    /// user message, clears the input line and raises the in-flight flag.
    /// Returns the query to send, or `None` when the submission was dropped.
    pub fn begin_submission(&mut self, text: &str) -> Option<String> {
        let content = text.trim();
        if content.is_empty() || self.thinking {
            return None;
        }
        let content = content.to_string();

        self.push_message(Message::user(content.clone()));
        self.input.clear();
        self.suggestion_cursor = None;
        self.thinking = true;
        log::info!("chat request started ({} chars)", content.len());
        Some(content)
    }

    /// Second half of the submit path, run when the request settles. A
    /// failure of any kind becomes the fixed apology message; connection
    /// status is left untouched either way.
    pub fn complete_submission(&mut self, result: CharlaResult<ChatResponse>) {
        match result {
            Ok(answer) => {
                log::info!(
                    "chat answered with {} sources (totalSources={})",
                    answer.sources.len(),
                    answer.total_sources
                );
                self.push_message(Message::bot(answer.response, answer.sources));
            }
            Err(e) => {
                log::warn!("chat request failed: {}", e);
                self.push_message(Message::bot(APOLOGY_MESSAGE, Vec::new()));
            }
        }
        self.thinking = false;
    }

    /// Applies the one-shot health probe outcome.
    pub fn apply_health(&mut self, reachable: bool) {
        self.connection_status = if reachable {
            log::info!("backend reachable");
            ConnectionStatus::Connected
        } else {
            log::warn!("backend unreachable at {}", self.api.base_url());
            ConnectionStatus::Error
        };
    }

    fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        // Pin the transcript to the newest message; the draw pass clamps
        // this to the real maximum.
        self.chat_scroll = u16::MAX;
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CharlaError;
    use crate::models::{Sender, SourceRef};
    use crate::suggested_questions::SUGGESTED_QUESTIONS;

    fn test_app() -> App {
        App::new(Arc::new(ApiClient::new("http://localhost:9")))
    }

    fn ok_answer(text: &str, sources: Vec<SourceRef>) -> CharlaResult<ChatResponse> {
        Ok(ChatResponse {
            response: text.to_string(),
            total_sources: sources.len() as u32,
            sources,
        })
    }

    #[test]
    fn starts_with_the_welcome_message_and_connecting_status() {
        let app = test_app();
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].sender, Sender::Bot);
        assert_eq!(app.messages[0].content, WELCOME_MESSAGE);
        assert_eq!(app.connection_status, ConnectionStatus::Connecting);
        assert!(app.suggestions_visible());
    }

    #[test]
    fn whitespace_submission_is_dropped() {
        let mut app = test_app();
        assert_eq!(app.begin_submission("   \n  "), None);
        assert_eq!(app.begin_submission(""), None);
        assert_eq!(app.messages.len(), 1);
        assert!(!app.thinking);
    }

    #[test]
    fn submission_while_in_flight_is_dropped() {
        let mut app = test_app();
        assert!(app.begin_submission("primera").is_some());
        assert!(app.thinking);
        assert_eq!(app.begin_submission("segunda"), None);
        // Only the first user message made it in.
        assert_eq!(app.messages.len(), 2);
        assert_eq!(app.messages[1].content, "primera");
    }

    #[test]
    fn successful_round_trip_appends_user_then_bot() {
        let mut app = test_app();
        app.input = "¿Qué es Wompi?".to_string();
        let query = app.begin_submission(&app.input.clone()).unwrap();
        assert_eq!(query, "¿Qué es Wompi?");
        assert!(app.input.is_empty());

        let sources = vec![SourceRef {
            title: "intro.md".to_string(),
            source: "docs/intro.md".to_string(),
            score: 0.3,
        }];
        app.complete_submission(ok_answer("Una pasarela de pagos.", sources));

        assert!(!app.thinking);
        assert_eq!(app.messages.len(), 3);
        assert_eq!(app.messages[1].sender, Sender::User);
        assert_eq!(app.messages[1].content, "¿Qué es Wompi?");
        assert_eq!(app.messages[2].sender, Sender::Bot);
        assert_eq!(app.messages[2].content, "Una pasarela de pagos.");
        assert_eq!(app.messages[2].sources.len(), 1);
        assert!(!app.suggestions_visible());
    }

    #[test]
    fn failed_round_trip_appends_the_apology() {
        let mut app = test_app();
        app.begin_submission("hola").unwrap();
        app.complete_submission(Err(CharlaError::api_error("backend returned 500")));

        assert!(!app.thinking);
        assert_eq!(app.messages.len(), 3);
        assert_eq!(app.messages[2].content, APOLOGY_MESSAGE);
        assert!(app.messages[2].sources.is_empty());
        // A chat failure never touches connectivity.
        assert_eq!(app.connection_status, ConnectionStatus::Connecting);
    }

    #[test]
    fn health_outcome_drives_status_and_input() {
        let mut app = test_app();
        app.apply_health(true);
        assert_eq!(app.connection_status, ConnectionStatus::Connected);
        assert!(app.input_enabled());

        app.apply_health(false);
        assert_eq!(app.connection_status, ConnectionStatus::Error);
        assert!(!app.input_enabled());
    }

    #[test]
    fn suggested_question_matches_a_typed_submission() {
        let mut typed = test_app();
        typed.input = SUGGESTED_QUESTIONS[0].to_string();
        let from_input = typed.begin_submission(&typed.input.clone()).unwrap();

        let mut clicked = test_app();
        let from_click = clicked.begin_submission(SUGGESTED_QUESTIONS[0]).unwrap();

        assert_eq!(from_input, from_click);
        assert_eq!(typed.messages[1].content, clicked.messages[1].content);
    }

    #[test]
    fn palette_hides_while_a_request_is_pending() {
        let mut app = test_app();
        app.begin_submission("hola").unwrap();
        assert!(!app.suggestions_visible());
    }
}
