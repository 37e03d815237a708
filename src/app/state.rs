//! App state - pure data structure with no I/O logic

use std::collections::VecDeque;

use crate::messages::ui_events::{AppTab, HttpField, InputMode, RegexField, SnippetField};
use crate::messages::RenderState;
use crate::models::{Exchange, HistoryEntry, RequestForm};
use crate::pipeline::{Outcome, Pipeline};
use crate::tools::json_formatter::{self, JsonInput};
use crate::tools::regex_tester::{self, RegexInput};
use crate::tools::snippets::{SnippetBook, SnippetDraft};

/// Main application state - pure data, no I/O
pub struct AppState {
    // Tab navigation
    pub active_tab: AppTab,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub show_help: bool,

    // Regex tester
    pub regex_input: RegexInput,
    pub regex_field: RegexField,
    pub regex_pipeline: Pipeline<RegexInput, Vec<String>>,
    pub regex_example_index: usize,

    // JSON formatter
    pub json_input: JsonInput,
    pub json_pipeline: Pipeline<JsonInput, String>,
    pub json_sample_index: usize,

    // HTTP client
    pub form: RequestForm,
    pub http_field: HttpField,
    pub http_outcome: Outcome<Exchange>,
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub response_scroll: u16,
    pub history: VecDeque<HistoryEntry>,
    pub history_index: Option<usize>,
    pub quick_request_index: usize,

    // Git cheatsheet; index 0 means "All"
    pub category_index: usize,
    pub cheatsheet_scroll: u16,

    // Snippets
    pub book: SnippetBook,
    pub snippet_draft: SnippetDraft,
    pub snippet_form_open: bool,
    pub snippet_field: SnippetField,
    pub snippet_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            active_tab: AppTab::Regex,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            show_help: false,
            regex_input: RegexInput::default(),
            regex_field: RegexField::Pattern,
            regex_pipeline: regex_tester::pipeline(),
            regex_example_index: 0,
            json_input: JsonInput::default(),
            json_pipeline: json_formatter::pipeline(),
            json_sample_index: 0,
            form: RequestForm::default(),
            http_field: HttpField::Url,
            http_outcome: Outcome::Idle,
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
            response_scroll: 0,
            history: VecDeque::new(),
            history_index: None,
            quick_request_index: 0,
            category_index: 0,
            cheatsheet_scroll: 0,
            book: SnippetBook::seeded(),
            snippet_draft: SnippetDraft::default(),
            snippet_form_open: false,
            snippet_field: SnippetField::Title,
            snippet_scroll: 0,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// The text of the field that currently holds edit focus
    pub fn current_input(&self) -> Option<&String> {
        match self.active_tab {
            AppTab::Regex => Some(match self.regex_field {
                RegexField::Pattern => &self.regex_input.pattern,
                RegexField::Text => &self.regex_input.haystack,
            }),
            AppTab::Json => Some(&self.json_input.text),
            AppTab::Http => Some(match self.http_field {
                HttpField::Url => &self.form.url,
                HttpField::Headers => &self.form.headers_text,
                HttpField::Body => &self.form.body,
            }),
            AppTab::Cheatsheet => None,
            AppTab::Snippets => {
                if !self.snippet_form_open {
                    return None;
                }
                Some(match self.snippet_field {
                    SnippetField::Title => &self.snippet_draft.title,
                    SnippetField::Language => &self.snippet_draft.language,
                    SnippetField::Category => &self.snippet_draft.category,
                    SnippetField::Code => &self.snippet_draft.code,
                })
            }
        }
    }

    /// Mutable access to the focused field, if the tab has one
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.active_tab {
            AppTab::Regex => Some(match self.regex_field {
                RegexField::Pattern => &mut self.regex_input.pattern,
                RegexField::Text => &mut self.regex_input.haystack,
            }),
            AppTab::Json => Some(&mut self.json_input.text),
            AppTab::Http => Some(match self.http_field {
                HttpField::Url => &mut self.form.url,
                HttpField::Headers => &mut self.form.headers_text,
                HttpField::Body => &mut self.form.body,
            }),
            AppTab::Cheatsheet => None,
            AppTab::Snippets => {
                if !self.snippet_form_open {
                    return None;
                }
                Some(match self.snippet_field {
                    SnippetField::Title => &mut self.snippet_draft.title,
                    SnippetField::Language => &mut self.snippet_draft.language,
                    SnippetField::Category => &mut self.snippet_draft.category,
                    SnippetField::Code => &mut self.snippet_draft.code,
                })
            }
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_tab: self.active_tab,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            show_help: self.show_help,
            regex_input: self.regex_input.clone(),
            regex_field: self.regex_field,
            regex_outcome: self.regex_pipeline.outcome().clone(),
            json_input: self.json_input.clone(),
            json_outcome: self.json_pipeline.outcome().clone(),
            form: self.form.clone(),
            http_field: self.http_field,
            http_outcome: self.http_outcome.clone(),
            is_loading: self.is_loading,
            response_scroll: self.response_scroll,
            history_index: self.history_index,
            category_index: self.category_index,
            cheatsheet_scroll: self.cheatsheet_scroll,
            snippets: self.book.snippets().to_vec(),
            snippet_form_open: self.snippet_form_open,
            snippet_draft: self.snippet_draft.clone(),
            snippet_field: self.snippet_field,
            snippet_scroll: self.snippet_scroll,
        }
    }
}
