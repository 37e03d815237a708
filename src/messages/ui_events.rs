//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application tabs, one per tool
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum AppTab {
    #[default]
    Regex,
    Json,
    Http,
    Cheatsheet,
    Snippets,
}

impl AppTab {
    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Regex => "1:Regex",
            AppTab::Json => "2:JSON",
            AppTab::Http => "3:HTTP",
            AppTab::Cheatsheet => "4:Git",
            AppTab::Snippets => "5:Snippets",
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Focusable field on the regex tab
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum RegexField {
    #[default]
    Pattern,
    Text,
}

impl RegexField {
    pub fn next(&self) -> RegexField {
        match self {
            RegexField::Pattern => RegexField::Text,
            RegexField::Text => RegexField::Pattern,
        }
    }
}

/// Focusable field on the HTTP tab
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum HttpField {
    #[default]
    Url,
    Headers,
    Body,
}

impl HttpField {
    pub fn next(&self) -> HttpField {
        match self {
            HttpField::Url => HttpField::Headers,
            HttpField::Headers => HttpField::Body,
            HttpField::Body => HttpField::Url,
        }
    }
}

/// Focusable field in the snippet add form
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum SnippetField {
    #[default]
    Title,
    Language,
    Category,
    Code,
}

impl SnippetField {
    pub fn next(&self) -> SnippetField {
        match self {
            SnippetField::Title => SnippetField::Language,
            SnippetField::Language => SnippetField::Category,
            SnippetField::Category => SnippetField::Code,
            SnippetField::Code => SnippetField::Title,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Tab navigation
    SwitchTab(AppTab),

    // Input editing (routed to the focused field of the active tab)
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    NextField,

    // Scrolling (routed per active tab)
    ScrollUp,
    ScrollDown,

    // Regex tester
    ApplyRegexExample,

    // JSON formatter
    FormatPretty,
    FormatMinified,
    ClearJson,
    ApplyJsonSample,

    // HTTP client
    SendRequest,
    CycleMethod,
    ClearHttp,
    ApplyQuickRequest,
    HistoryPrev,
    HistoryNext,

    // Git cheatsheet
    NextCategory,
    PrevCategory,

    // Snippets
    ToggleSnippetForm,
    SaveSnippet,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// What the key mapper needs to know about the current UI state
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyContext {
    pub tab: AppTab,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub regex_field: RegexField,
    pub http_field: HttpField,
    pub snippet_form_open: bool,
    pub snippet_field: SnippetField,
}

impl KeyContext {
    /// Whether the focused field accepts literal newlines
    fn multiline(&self) -> bool {
        match self.tab {
            AppTab::Regex => self.regex_field == RegexField::Text,
            AppTab::Json => true,
            AppTab::Http => matches!(self.http_field, HttpField::Headers | HttpField::Body),
            AppTab::Cheatsheet => false,
            AppTab::Snippets => self.snippet_field == SnippetField::Code,
        }
    }

    /// Whether the active tab currently has an editable field
    fn editable(&self) -> bool {
        match self.tab {
            AppTab::Cheatsheet => false,
            AppTab::Snippets => self.snippet_form_open,
            _ => true,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: &KeyContext) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Up if ctx.tab == AppTab::Http => return Some(UiEvent::HistoryPrev),
            KeyCode::Down if ctx.tab == AppTab::Http => return Some(UiEvent::HistoryNext),
            _ => {}
        }
    }

    // Any key dismisses the help popup
    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    match ctx.input_mode {
        InputMode::Normal => normal_mode_event(key, ctx),
        InputMode::Editing => editing_mode_event(key, ctx),
    }
}

fn normal_mode_event(key: KeyEvent, ctx: &KeyContext) -> Option<UiEvent> {
    // Tab switching with the number keys
    match key.code {
        KeyCode::Char('1') => return Some(UiEvent::SwitchTab(AppTab::Regex)),
        KeyCode::Char('2') => return Some(UiEvent::SwitchTab(AppTab::Json)),
        KeyCode::Char('3') => return Some(UiEvent::SwitchTab(AppTab::Http)),
        KeyCode::Char('4') => return Some(UiEvent::SwitchTab(AppTab::Cheatsheet)),
        KeyCode::Char('5') => return Some(UiEvent::SwitchTab(AppTab::Snippets)),
        _ => {}
    }

    // Shared keys
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Tab if ctx.editable() => return Some(UiEvent::NextField),
        KeyCode::Char('e') | KeyCode::Enter if ctx.editable() => {
            return Some(UiEvent::StartEditing)
        }
        KeyCode::Up => return Some(UiEvent::ScrollUp),
        KeyCode::Down => return Some(UiEvent::ScrollDown),
        _ => {}
    }

    // Tab-specific keys
    match ctx.tab {
        AppTab::Regex => match key.code {
            KeyCode::Char('x') => Some(UiEvent::ApplyRegexExample),
            _ => None,
        },
        AppTab::Json => match key.code {
            KeyCode::Char('f') => Some(UiEvent::FormatPretty),
            KeyCode::Char('n') => Some(UiEvent::FormatMinified),
            KeyCode::Char('c') => Some(UiEvent::ClearJson),
            KeyCode::Char('x') => Some(UiEvent::ApplyJsonSample),
            _ => None,
        },
        AppTab::Http => match key.code {
            KeyCode::Char('s') => Some(UiEvent::SendRequest),
            KeyCode::Char('m') => Some(UiEvent::CycleMethod),
            KeyCode::Char('c') => Some(UiEvent::ClearHttp),
            KeyCode::Char('x') => Some(UiEvent::ApplyQuickRequest),
            _ => None,
        },
        AppTab::Cheatsheet => match key.code {
            KeyCode::Right => Some(UiEvent::NextCategory),
            KeyCode::Left => Some(UiEvent::PrevCategory),
            _ => None,
        },
        AppTab::Snippets => match key.code {
            KeyCode::Char('a') => Some(UiEvent::ToggleSnippetForm),
            KeyCode::Char('s') if ctx.snippet_form_open => Some(UiEvent::SaveSnippet),
            _ => None,
        },
    }
}

fn editing_mode_event(key: KeyEvent, ctx: &KeyContext) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::Enter => {
            // Enter sends from the URL field, inserts a newline in
            // multiline fields and otherwise ends the edit
            if ctx.tab == AppTab::Http && ctx.http_field == HttpField::Url {
                Some(UiEvent::SendRequest)
            } else if ctx.multiline() {
                Some(UiEvent::CharInput('\n'))
            } else {
                Some(UiEvent::StopEditing)
            }
        }
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_digits_switch_tabs_in_normal_mode() {
        let ctx = KeyContext::default();
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('3')), &ctx),
            Some(UiEvent::SwitchTab(AppTab::Http))
        ));
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('5')), &ctx),
            Some(UiEvent::SwitchTab(AppTab::Snippets))
        ));
    }

    #[test]
    fn test_digits_are_literal_while_editing() {
        let ctx = KeyContext {
            input_mode: InputMode::Editing,
            ..KeyContext::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('2')), &ctx),
            Some(UiEvent::CharInput('2'))
        ));
    }

    #[test]
    fn test_send_key_on_http_tab() {
        let ctx = KeyContext {
            tab: AppTab::Http,
            ..KeyContext::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('s')), &ctx),
            Some(UiEvent::SendRequest)
        ));
    }

    #[test]
    fn test_enter_in_url_field_sends() {
        let ctx = KeyContext {
            tab: AppTab::Http,
            input_mode: InputMode::Editing,
            http_field: HttpField::Url,
            ..KeyContext::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Enter), &ctx),
            Some(UiEvent::SendRequest)
        ));
    }

    #[test]
    fn test_enter_inserts_newline_in_multiline_fields() {
        let ctx = KeyContext {
            tab: AppTab::Json,
            input_mode: InputMode::Editing,
            ..KeyContext::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Enter), &ctx),
            Some(UiEvent::CharInput('\n'))
        ));
    }

    #[test]
    fn test_cheatsheet_has_no_edit_key() {
        let ctx = KeyContext {
            tab: AppTab::Cheatsheet,
            ..KeyContext::default()
        };
        assert!(key_to_ui_event(press(KeyCode::Char('e')), &ctx).is_none());
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Right), &ctx),
            Some(UiEvent::NextCategory)
        ));
    }

    #[test]
    fn test_snippet_save_requires_open_form() {
        let closed = KeyContext {
            tab: AppTab::Snippets,
            ..KeyContext::default()
        };
        assert!(key_to_ui_event(press(KeyCode::Char('s')), &closed).is_none());

        let open = KeyContext {
            snippet_form_open: true,
            ..closed
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('s')), &open),
            Some(UiEvent::SaveSnippet)
        ));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let ctx = KeyContext {
            show_help: true,
            ..KeyContext::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('s')), &ctx),
            Some(UiEvent::CloseHelp)
        ));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let ctx = KeyContext::default();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(key_to_ui_event(release, &ctx).is_none());
    }
}
