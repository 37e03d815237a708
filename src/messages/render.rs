//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{
    AppTab, HttpField, InputMode, KeyContext, RegexField, SnippetField,
};
use crate::models::{Exchange, RequestForm};
use crate::pipeline::Outcome;
use crate::tools::json_formatter::JsonInput;
use crate::tools::regex_tester::RegexInput;
use crate::tools::snippets::{Snippet, SnippetDraft};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub active_tab: AppTab,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub show_help: bool,

    // Regex tester
    pub regex_input: RegexInput,
    pub regex_field: RegexField,
    pub regex_outcome: Outcome<Vec<String>>,

    // JSON formatter
    pub json_input: JsonInput,
    pub json_outcome: Outcome<String>,

    // HTTP client
    pub form: RequestForm,
    pub http_field: HttpField,
    pub http_outcome: Outcome<Exchange>,
    pub is_loading: bool,
    pub response_scroll: u16,
    pub history_index: Option<usize>,

    // Git cheatsheet; index 0 means "All"
    pub category_index: usize,
    pub cheatsheet_scroll: u16,

    // Snippets
    pub snippets: Vec<Snippet>,
    pub snippet_form_open: bool,
    pub snippet_draft: SnippetDraft,
    pub snippet_field: SnippetField,
    pub snippet_scroll: u16,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            active_tab: AppTab::Regex,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            show_help: false,
            regex_input: RegexInput::default(),
            regex_field: RegexField::Pattern,
            regex_outcome: Outcome::Idle,
            json_input: JsonInput::default(),
            json_outcome: Outcome::Idle,
            form: RequestForm::default(),
            http_field: HttpField::Url,
            http_outcome: Outcome::Idle,
            is_loading: false,
            response_scroll: 0,
            history_index: None,
            category_index: 0,
            cheatsheet_scroll: 0,
            snippets: Vec::new(),
            snippet_form_open: false,
            snippet_draft: SnippetDraft::default(),
            snippet_field: SnippetField::Title,
            snippet_scroll: 0,
        }
    }
}

impl RenderState {
    /// Context slice handed to the key mapper
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            tab: self.active_tab,
            input_mode: self.input_mode,
            show_help: self.show_help,
            regex_field: self.regex_field,
            http_field: self.http_field,
            snippet_form_open: self.snippet_form_open,
            snippet_field: self.snippet_field,
        }
    }
}
