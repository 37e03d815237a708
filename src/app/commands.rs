//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::{JSON_SAMPLES, MAX_HISTORY, QUICK_REQUESTS, REGEX_EXAMPLES};
use crate::messages::ui_events::{AppTab, InputMode, SnippetField};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{HistoryEntry, RequestForm};
use crate::pipeline::Outcome;
use crate::tools::cheatsheet;
use crate::tools::json_formatter::JsonMode;
use crate::tools::snippets::SnippetDraft;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn switch_tab(&mut self, tab: AppTab) {
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        match self.active_tab {
            AppTab::Regex => self.regex_field = self.regex_field.next(),
            AppTab::Http => self.http_field = self.http_field.next(),
            AppTab::Snippets if self.snippet_form_open => {
                self.snippet_field = self.snippet_field.next();
            }
            _ => {}
        }
        self.cursor_position = self.current_input().map_or(0, String::len);
    }

    pub fn scroll_up(&mut self) {
        match self.active_tab {
            AppTab::Http => self.response_scroll = self.response_scroll.saturating_sub(1),
            AppTab::Cheatsheet => self.cheatsheet_scroll = self.cheatsheet_scroll.saturating_sub(1),
            AppTab::Snippets => self.snippet_scroll = self.snippet_scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn scroll_down(&mut self) {
        match self.active_tab {
            AppTab::Http => self.response_scroll = self.response_scroll.saturating_add(1),
            AppTab::Cheatsheet => self.cheatsheet_scroll = self.cheatsheet_scroll.saturating_add(1),
            AppTab::Snippets => self.snippet_scroll = self.snippet_scroll.saturating_add(1),
            _ => {}
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if let Some(input) = self.current_input() {
            self.cursor_position = input.len();
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let pos = self.cursor_position;
        if let Some(input) = self.current_input() {
            if pos > 0 {
                self.cursor_position = input[..pos]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
            }
        }
    }

    pub fn move_cursor_right(&mut self) {
        let pos = self.cursor_position;
        if let Some(input) = self.current_input() {
            if pos < input.len() {
                self.cursor_position = input[pos..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| pos + i)
                    .unwrap_or(input.len());
            }
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if pos <= input.len() {
                input.insert(pos, c);
                self.cursor_position = pos + c.len_utf8();
            }
        }
        self.refresh_active_pipeline();
    }

    pub fn delete_char(&mut self) {
        let pos = self.cursor_position;
        if pos == 0 {
            return;
        }
        if let Some(input) = self.current_input_mut() {
            let prev = input[..pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev);
            self.cursor_position = prev;
        }
        self.refresh_active_pipeline();
    }

    /// Recompute the reactive tool of the active tab after an edit
    fn refresh_active_pipeline(&mut self) {
        match self.active_tab {
            AppTab::Regex => {
                self.regex_pipeline.refresh(&self.regex_input);
            }
            AppTab::Json => {
                self.json_pipeline.refresh(&self.json_input);
            }
            _ => {}
        }
    }

    // ========================
    // Regex tester
    // ========================

    pub fn apply_regex_example(&mut self) {
        let example = &REGEX_EXAMPLES[self.regex_example_index % REGEX_EXAMPLES.len()];
        self.regex_example_index += 1;
        self.regex_input.pattern = example.value.to_owned();
        self.cursor_position = self.regex_input.pattern.len();
        self.regex_pipeline.refresh(&self.regex_input);
    }

    // ========================
    // JSON formatter
    // ========================

    pub fn set_json_mode(&mut self, mode: JsonMode) {
        self.json_input.mode = mode;
        self.json_pipeline.refresh(&self.json_input);
    }

    pub fn clear_json(&mut self) {
        self.json_input.text.clear();
        self.json_input.mode = JsonMode::Pretty;
        self.cursor_position = 0;
        self.json_pipeline.reset();
    }

    pub fn apply_json_sample(&mut self) {
        let sample = &JSON_SAMPLES[self.json_sample_index % JSON_SAMPLES.len()];
        self.json_sample_index += 1;
        self.json_input.text = sample.value.to_owned();
        self.cursor_position = self.json_input.text.len();
        self.json_pipeline.refresh(&self.json_input);
    }

    // ========================
    // HTTP client
    // ========================

    pub fn cycle_method(&mut self) {
        if !self.is_loading {
            self.form.method = self.form.method.next();
        }
    }

    pub fn clear_http(&mut self) {
        if self.is_loading {
            return;
        }
        self.form = RequestForm {
            url: String::new(),
            ..RequestForm::default()
        };
        self.http_outcome = Outcome::Idle;
        self.response_scroll = 0;
        self.history_index = None;
        self.cursor_position = 0;
    }

    pub fn apply_quick_request(&mut self) {
        if self.is_loading {
            return;
        }
        let preset = &QUICK_REQUESTS[self.quick_request_index % QUICK_REQUESTS.len()];
        self.quick_request_index += 1;
        self.form.method = preset.method.clone();
        self.form.url = preset.url.to_owned();
        self.cursor_position = self.form.url.len();
    }

    /// Validate the form and, if it passes, mark the app busy and hand a
    /// dispatch command to the network layer.
    ///
    /// While a request is outstanding this returns `None`: sending is
    /// not reentrant, and a validation failure never reaches the wire.
    pub fn send_request(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            return None;
        }

        let plan = match self.form.validate() {
            Ok(plan) => plan,
            Err(message) => {
                self.http_outcome = Outcome::Failure(message);
                return None;
            }
        };

        self.is_loading = true;
        self.http_outcome = Outcome::Idle;
        self.response_scroll = 0;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::Dispatch { id, plan })
    }

    /// Apply a network response, ignoring anything that does not match
    /// the request currently outstanding
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            return;
        }

        match response {
            NetworkResponse::Completed { exchange, .. } => {
                let status = exchange.status;
                self.http_outcome = Outcome::Success(exchange);
                self.finalize_request(Some(status));
            }
            NetworkResponse::Failed { message, .. } => {
                self.http_outcome = Outcome::Failure(message);
                self.finalize_request(None);
            }
        }
    }

    /// Record the finished request in history and leave the busy state
    fn finalize_request(&mut self, status: Option<u16>) {
        self.is_loading = false;
        self.pending_request_id = None;
        self.response_scroll = 0;

        if self.history.len() >= MAX_HISTORY {
            self.history.pop_back();
        }
        self.history.push_front(HistoryEntry {
            form: self.form.clone(),
            status,
            timestamp: chrono::Utc::now(),
        });
        self.history_index = None;
    }

    pub fn history_prev(&mut self) {
        if self.history.is_empty() || self.is_loading {
            return;
        }

        let idx = match self.history_index {
            None => 0,
            Some(i) if i + 1 < self.history.len() => i + 1,
            Some(i) => i,
        };
        if let Some(entry) = self.history.get(idx) {
            self.form = entry.form.clone();
            self.history_index = Some(idx);
            self.cursor_position = self.form.url.len();
        }
    }

    pub fn history_next(&mut self) {
        if self.is_loading {
            return;
        }
        match self.history_index {
            Some(idx) if idx > 0 => {
                if let Some(entry) = self.history.get(idx - 1) {
                    self.form = entry.form.clone();
                    self.history_index = Some(idx - 1);
                    self.cursor_position = self.form.url.len();
                }
            }
            Some(_) => {
                // Back past the newest entry: a fresh form
                self.form = RequestForm::default();
                self.history_index = None;
                self.cursor_position = self.form.url.len();
            }
            None => {}
        }
    }

    // ========================
    // Git cheatsheet
    // ========================

    pub fn next_category(&mut self) {
        let count = cheatsheet::categories().len() + 1;
        self.category_index = (self.category_index + 1) % count;
        self.cheatsheet_scroll = 0;
    }

    pub fn prev_category(&mut self) {
        let count = cheatsheet::categories().len() + 1;
        self.category_index = self.category_index.checked_sub(1).unwrap_or(count - 1);
        self.cheatsheet_scroll = 0;
    }

    // ========================
    // Snippets
    // ========================

    pub fn toggle_snippet_form(&mut self) {
        self.snippet_form_open = !self.snippet_form_open;
        self.snippet_field = SnippetField::Title;
        if !self.snippet_form_open {
            // Cancel discards the draft
            self.snippet_draft = SnippetDraft::default();
        }
    }

    /// Append the draft. An incomplete draft is silently ignored and the
    /// form stays open, mirroring the add form this reimplements.
    pub fn save_snippet(&mut self) {
        let next = self.book.append(&self.snippet_draft);
        if next.len() > self.book.len() {
            self.book = next;
            self.snippet_draft = SnippetDraft::default();
            self.snippet_form_open = false;
            self.snippet_field = SnippetField::Title;
            self.input_mode = InputMode::Normal;
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exchange;
    use std::collections::BTreeMap;

    fn exchange(status: u16) -> Exchange {
        Exchange {
            status,
            headers: BTreeMap::new(),
            body: String::from("{}"),
            elapsed_ms: 12,
        }
    }

    fn typing(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_send_is_not_reentrant() {
        let mut state = AppState::new();

        let first = state.send_request();
        assert!(first.is_some());
        assert!(state.is_loading);

        // A second send while one is outstanding is rejected
        assert!(state.send_request().is_none());
    }

    #[test]
    fn test_invalid_headers_block_dispatch() {
        let mut state = AppState::new();
        state.form.headers_text = String::from("{bad json");

        assert!(state.send_request().is_none());
        assert_eq!(state.http_outcome.failure(), Some("Invalid headers JSON"));
        assert!(!state.is_loading);
        assert!(state.pending_request_id.is_none());
    }

    #[test]
    fn test_blank_url_blocks_dispatch() {
        let mut state = AppState::new();
        state.form.url = String::from("  ");

        assert!(state.send_request().is_none());
        assert_eq!(state.http_outcome.failure(), Some("Please enter a URL"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = AppState::new();
        let cmd = state.send_request().unwrap();
        let id = match cmd {
            NetworkCommand::Dispatch { id, .. } => id,
            _ => unreachable!(),
        };

        // A response for some other request must change nothing
        state.handle_response(NetworkResponse::Completed {
            id: id + 1,
            exchange: exchange(200),
        });
        assert!(state.is_loading);
        assert!(state.http_outcome.is_idle());

        // The matching response lands
        state.handle_response(NetworkResponse::Completed {
            id,
            exchange: exchange(200),
        });
        assert!(!state.is_loading);
        assert_eq!(state.http_outcome.success().map(|e| e.status), Some(200));
    }

    #[test]
    fn test_completed_request_is_recorded_in_history() {
        let mut state = AppState::new();
        let cmd = state.send_request().unwrap();
        let id = match cmd {
            NetworkCommand::Dispatch { id, .. } => id,
            _ => unreachable!(),
        };
        state.handle_response(NetworkResponse::Completed {
            id,
            exchange: exchange(201),
        });

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].status, Some(201));
    }

    #[test]
    fn test_history_is_capped() {
        let mut state = AppState::new();
        for _ in 0..(MAX_HISTORY + 5) {
            let cmd = state.send_request().unwrap();
            let id = match cmd {
                NetworkCommand::Dispatch { id, .. } => id,
                _ => unreachable!(),
            };
            state.handle_response(NetworkResponse::Completed {
                id,
                exchange: exchange(200),
            });
        }
        assert_eq!(state.history.len(), MAX_HISTORY);
    }

    #[test]
    fn test_typing_a_pattern_recomputes_matches() {
        let mut state = AppState::new();
        state.switch_tab(AppTab::Regex);

        // Fill the test text first
        state.next_field();
        typing(&mut state, "aa b aaa");

        // Then the pattern
        state.next_field();
        typing(&mut state, "a+");

        assert_eq!(
            state.regex_pipeline.outcome().success(),
            Some(&vec![String::from("aa"), String::from("aaa")])
        );
    }

    #[test]
    fn test_deleting_pattern_back_to_blank_goes_idle() {
        let mut state = AppState::new();
        state.switch_tab(AppTab::Regex);
        typing(&mut state, "a");
        assert!(state.regex_pipeline.outcome().is_success());

        state.delete_char();
        assert!(state.regex_pipeline.outcome().is_idle());
    }

    #[test]
    fn test_json_mode_switch_recomputes() {
        let mut state = AppState::new();
        state.switch_tab(AppTab::Json);
        typing(&mut state, r#"{"a":1}"#);

        state.set_json_mode(JsonMode::Minified);
        assert_eq!(
            state.json_pipeline.outcome().success().map(String::as_str),
            Some(r#"{"a":1}"#)
        );

        state.set_json_mode(JsonMode::Pretty);
        assert_eq!(
            state.json_pipeline.outcome().success().map(String::as_str),
            Some("{\n  \"a\": 1\n}")
        );
    }

    #[test]
    fn test_clear_json_resets_everything() {
        let mut state = AppState::new();
        state.switch_tab(AppTab::Json);
        typing(&mut state, "{oops");
        assert!(state.json_pipeline.outcome().is_failure());

        state.clear_json();
        assert!(state.json_input.text.is_empty());
        assert!(state.json_pipeline.outcome().is_idle());
    }

    #[test]
    fn test_save_snippet_through_the_form() {
        let mut state = AppState::new();
        state.switch_tab(AppTab::Snippets);
        let before = state.book.len();

        state.toggle_snippet_form();
        typing(&mut state, "Greet");
        for _ in 0..3 {
            state.next_field(); // Title -> Language -> Category -> Code
        }
        typing(&mut state, "println!(\"hi\");");
        state.save_snippet();

        assert_eq!(state.book.len(), before + 1);
        assert!(!state.snippet_form_open);
        assert_eq!(state.snippet_draft, SnippetDraft::default());
    }

    #[test]
    fn test_save_incomplete_snippet_is_silent() {
        let mut state = AppState::new();
        state.switch_tab(AppTab::Snippets);
        let before = state.book.len();

        state.toggle_snippet_form();
        typing(&mut state, "Title only");
        state.save_snippet();

        assert_eq!(state.book.len(), before);
        assert!(state.snippet_form_open);
    }

    #[test]
    fn test_category_cycle_wraps_both_ways() {
        let mut state = AppState::new();
        let count = cheatsheet::categories().len() + 1;

        state.prev_category();
        assert_eq!(state.category_index, count - 1);
        state.next_category();
        assert_eq!(state.category_index, 0);
    }

    #[test]
    fn test_history_navigation_restores_forms() {
        let mut state = AppState::new();

        state.form.url = String::from("https://example.com/a");
        let cmd = state.send_request().unwrap();
        let id = match cmd {
            NetworkCommand::Dispatch { id, .. } => id,
            _ => unreachable!(),
        };
        state.handle_response(NetworkResponse::Completed {
            id,
            exchange: exchange(200),
        });

        state.form.url = String::from("https://example.com/b");
        state.history_prev();
        assert_eq!(state.form.url, "https://example.com/a");
        assert_eq!(state.history_index, Some(0));

        state.history_next();
        assert_eq!(state.form.url, RequestForm::default().url);
        assert_eq!(state.history_index, None);
    }

    #[test]
    fn test_cursor_moves_respect_char_boundaries() {
        let mut state = AppState::new();
        state.switch_tab(AppTab::Json);
        typing(&mut state, "aé");

        state.move_cursor_left();
        assert_eq!(state.cursor_position, 1);
        state.move_cursor_left();
        assert_eq!(state.cursor_position, 0);
        state.move_cursor_right();
        assert_eq!(state.cursor_position, 1);
    }
}
