//! Toolbelt TUI - Actor-based terminal developer toolbox
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use toolbelt_tui::app::AppActor;
use toolbelt_tui::constants::LOG_FILE;
use toolbelt_tui::messages::ui_events::{
    key_to_ui_event, AppTab, HttpField, InputMode, RegexField, SnippetField,
};
use toolbelt_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use toolbelt_tui::network::NetworkActor;
use toolbelt_tui::pipeline::Outcome;
use toolbelt_tui::tools::cheatsheet;
use toolbelt_tui::tools::json_formatter::JsonMode;
use toolbelt_tui::ui::{highlight_json, method_color, render_tabs, status_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, &current_state.key_context()) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    // Main layout with tab bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);

    match state.active_tab {
        AppTab::Regex => draw_regex_tab(f, state, main_chunks[1]),
        AppTab::Json => draw_json_tab(f, state, main_chunks[1]),
        AppTab::Http => draw_http_tab(f, state, main_chunks[1]),
        AppTab::Cheatsheet => draw_cheatsheet_tab(f, state, main_chunks[1]),
        AppTab::Snippets => draw_snippets_tab(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    const TABS: [AppTab; 5] = [
        AppTab::Regex,
        AppTab::Json,
        AppTab::Http,
        AppTab::Cheatsheet,
        AppTab::Snippets,
    ];

    let mut spans = Vec::new();
    for tab in TABS {
        let style = if state.active_tab == tab {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Border style shared by every input field
fn field_border(focused: bool, editing: bool) -> Style {
    if focused && editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Place the cursor inside a bordered single-line input
fn set_input_cursor(f: &mut Frame, area: Rect, cursor_position: usize) {
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + cursor_position as u16 + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, area.y + 1));
}

// ----------------------------------------------------------------------------
// Regex tester
// ----------------------------------------------------------------------------

fn draw_regex_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pattern
            Constraint::Length(8), // Test text
            Constraint::Min(4),    // Matches
        ])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;

    // Pattern input; a broken pattern paints the border red
    let pattern_focused = state.regex_field == RegexField::Pattern;
    let border = if state.regex_outcome.is_failure() {
        Style::default().fg(Color::Red)
    } else {
        field_border(pattern_focused, editing)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Pattern (e:edit x:example Tab:switch) ");
    f.render_widget(
        Paragraph::new(state.regex_input.pattern.as_str()).block(block),
        chunks[0],
    );
    if pattern_focused && editing {
        set_input_cursor(f, chunks[0], state.cursor_position);
    }

    // Test text
    let text_focused = state.regex_field == RegexField::Text;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(text_focused, editing))
        .title(" Test Text ");
    f.render_widget(
        Paragraph::new(state.regex_input.haystack.as_str())
            .block(block)
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    // Matches
    let (title, lines) = match &state.regex_outcome {
        Outcome::Idle => (
            String::from(" Matches "),
            vec![Line::from(Span::styled(
                "Enter a pattern to see matches.",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        Outcome::Success(matches) if matches.is_empty() => (
            String::from(" Matches (0) "),
            vec![Line::from(Span::styled(
                "No matches found",
                Style::default().fg(Color::DarkGray).italic(),
            ))],
        ),
        Outcome::Success(matches) => (
            format!(" Matches ({}) ", matches.len()),
            matches
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    Line::from(vec![
                        Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                        Span::styled(m.clone(), Style::default().fg(Color::Green)),
                    ])
                })
                .collect(),
        ),
        Outcome::Failure(message) => (
            String::from(" Matches (0) "),
            message
                .lines()
                .map(|l| Line::from(Span::styled(l.to_owned(), Style::default().fg(Color::Red))))
                .collect(),
        ),
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[2],
    );
}

// ----------------------------------------------------------------------------
// JSON formatter
// ----------------------------------------------------------------------------

fn draw_json_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Input
            Constraint::Min(4),     // Output
        ])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;
    let mode_label = match state.json_input.mode {
        JsonMode::Pretty => "Pretty",
        JsonMode::Minified => "Minified",
    };

    let border = if state.json_outcome.is_failure() {
        Style::default().fg(Color::Red)
    } else {
        field_border(true, editing)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(
            " Input JSON [{}] (e:edit f:format n:minify c:clear x:sample) ",
            mode_label
        ));
    f.render_widget(
        Paragraph::new(state.json_input.text.as_str())
            .block(block)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let lines = match &state.json_outcome {
        Outcome::Idle => vec![Line::from(Span::styled(
            "Paste or type JSON above to format it.",
            Style::default().fg(Color::DarkGray),
        ))],
        Outcome::Success(text) => highlight_json(text),
        Outcome::Failure(message) => message
            .lines()
            .map(|l| Line::from(Span::styled(l.to_owned(), Style::default().fg(Color::Red))))
            .collect(),
    };

    let block = Block::default().borders(Borders::ALL).title(" Output ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[1],
    );
}

// ----------------------------------------------------------------------------
// HTTP client
// ----------------------------------------------------------------------------

fn draw_http_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Method + URL
            Constraint::Length(6), // Headers
            Constraint::Length(6), // Body
            Constraint::Min(5),    // Response
        ])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;

    // URL bar with method, busy marker and history position
    let url_focused = state.http_field == HttpField::Url;
    let mcolor = method_color(state.form.method.as_str());
    let loading = if state.is_loading { " [...]" } else { "" };
    let history = state
        .history_index
        .map(|i| format!(" [{}]", i + 1))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(url_focused, editing))
        .title(format!(" {}{}{} ", state.form.method.as_str(), loading, history))
        .title_style(Style::default().fg(mcolor).bold());
    f.render_widget(
        Paragraph::new(state.form.url.as_str()).block(block),
        chunks[0],
    );
    if url_focused && editing {
        set_input_cursor(f, chunks[0], state.cursor_position);
    }

    // Headers
    let headers_focused = state.http_field == HttpField::Headers;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(headers_focused, editing))
        .title(" Headers (JSON) ");
    f.render_widget(
        Paragraph::new(state.form.headers_text.as_str())
            .block(block)
            .wrap(Wrap { trim: false }),
        chunks[1],
    );

    // Body
    let body_focused = state.http_field == HttpField::Body;
    let title = if state.form.method.has_body() {
        " Body (JSON) "
    } else {
        " Body (disabled for GET/DELETE) "
    };
    let content = if state.form.method.has_body() {
        state.form.body.as_str()
    } else {
        ""
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(body_focused, editing))
        .title(title);
    f.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
        chunks[2],
    );

    draw_response(f, state, chunks[3]);
}

fn draw_response(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut block = Block::default().borders(Borders::ALL);

    let lines: Vec<Line> = match &state.http_outcome {
        Outcome::Idle => {
            let hint = if state.is_loading {
                "Sending request..."
            } else {
                "Press 's' to send the request.\n\
                 'm' cycles the method, 'x' loads a quick example,\n\
                 Ctrl+Up/Down walks the request history."
            };
            block = block.title(" Response ");
            hint.lines()
                .map(|l| Line::from(Span::styled(l.to_owned(), Style::default().fg(Color::DarkGray))))
                .collect()
        }
        Outcome::Success(exchange) => {
            let color = status_color(exchange.status);
            block = block
                .title(Span::styled(
                    format!(" {} ", exchange.status),
                    Style::default().fg(color).bold(),
                ))
                .title_bottom(
                    Line::from(format!(" {}ms ", exchange.elapsed_ms)).right_aligned(),
                );

            let headers_json = serde_json::to_string_pretty(&exchange.headers)
                .unwrap_or_else(|_| String::from("{}"));

            let mut lines = vec![Line::from(Span::styled(
                "Headers:",
                Style::default().bold(),
            ))];
            lines.extend(highlight_json(&headers_json));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Body:", Style::default().bold())));
            lines.extend(highlight_json(&exchange.body));
            lines
        }
        Outcome::Failure(message) => {
            block = block.title(" Response ");
            format!("Error: {}", message)
                .lines()
                .map(|l| Line::from(Span::styled(l.to_owned(), Style::default().fg(Color::Red))))
                .collect()
        }
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.response_scroll, 0)),
        area,
    );
}

// ----------------------------------------------------------------------------
// Git cheatsheet
// ----------------------------------------------------------------------------

fn draw_cheatsheet_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category filter
            Constraint::Min(3),    // Command list
        ])
        .split(area);

    let mut titles = vec!["All"];
    titles.extend(cheatsheet::categories());
    f.render_widget(render_tabs(&titles, state.category_index), chunks[0]);

    let category = if state.category_index == 0 {
        None
    } else {
        titles.get(state.category_index).copied()
    };
    let commands = cheatsheet::filtered(category);

    let mut lines = Vec::new();
    for command in &commands {
        lines.push(Line::from(Span::styled(
            command.command,
            Style::default().fg(Color::Cyan).bold(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", command.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("  [{}]", command.category),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    let block = Block::default().borders(Borders::ALL).title(format!(
        " Git Commands ({}) (Left/Right:category Up/Down:scroll) ",
        commands.len()
    ));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.cheatsheet_scroll, 0)),
        chunks[1],
    );
}

// ----------------------------------------------------------------------------
// Snippets
// ----------------------------------------------------------------------------

fn draw_snippets_tab(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.snippet_form_open {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Language
                Constraint::Length(3), // Category
                Constraint::Length(8), // Code
                Constraint::Min(3),    // List
            ])
            .split(area);

        draw_snippet_field(f, state, chunks[0], SnippetField::Title, " Title ", &state.snippet_draft.title);
        draw_snippet_field(f, state, chunks[1], SnippetField::Language, " Language ", &state.snippet_draft.language);
        draw_snippet_field(f, state, chunks[2], SnippetField::Category, " Category ", &state.snippet_draft.category);
        draw_snippet_field(f, state, chunks[3], SnippetField::Code, " Code (s:save a:cancel) ", &state.snippet_draft.code);
        draw_snippet_list(f, state, chunks[4]);
    } else {
        draw_snippet_list(f, state, area);
    }
}

fn draw_snippet_field(
    f: &mut Frame,
    state: &RenderState,
    area: Rect,
    field: SnippetField,
    title: &str,
    content: &str,
) {
    let editing = state.input_mode == InputMode::Editing;
    let focused = state.snippet_field == field;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(focused, editing))
        .title(title.to_owned());
    f.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
        area,
    );

    if focused && editing && field != SnippetField::Code {
        set_input_cursor(f, area, state.cursor_position);
    }
}

fn draw_snippet_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines = Vec::new();
    for snippet in &state.snippets {
        lines.push(Line::from(vec![
            Span::styled(
                snippet.title.clone(),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled(
                format!("  [{} / {}]", snippet.language, snippet.category),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for code_line in snippet.code.lines() {
            lines.push(Line::from(Span::raw(format!("  {}", code_line))));
        }
        lines.push(Line::default());
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No snippets yet. Press 'a' to add one.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title(format!(
        " Snippets ({}) (a:add Up/Down:scroll) ",
        state.snippets.len()
    ));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.snippet_scroll, 0)),
        area,
    );
}

// ----------------------------------------------------------------------------
// Chrome
// ----------------------------------------------------------------------------

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        " Loading... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Tab:next field "
    } else {
        match state.active_tab {
            AppTab::Regex => " 1-5:tabs | Tab:field | e:edit | x:example | ?:help | q:quit ",
            AppTab::Json => " 1-5:tabs | e:edit | f:format | n:minify | c:clear | x:sample | q:quit ",
            AppTab::Http => " 1-5:tabs | Tab:field | e:edit | m:method | s:send | c:clear | q:quit ",
            AppTab::Cheatsheet => " 1-5:tabs | Left/Right:category | Up/Down:scroll | q:quit ",
            AppTab::Snippets => " 1-5:tabs | a:add | s:save | Tab:field | e:edit | q:quit ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 TOOLBELT TUI - Keyboard Shortcuts

 GLOBAL
   1-5                Switch tool tab
   Tab                Next input field
   e / Enter          Edit focused field
   Esc                Stop editing
   ?                  Toggle this help
   q / Ctrl+C         Quit

 REGEX TESTER
   x                  Cycle example patterns

 JSON FORMATTER
   f / n              Pretty / minified output
   c                  Clear input
   x                  Cycle sample documents

 HTTP CLIENT
   m                  Cycle HTTP method
   s / Enter          Send request
   c                  Clear the form
   x                  Cycle quick requests
   Ctrl+Up / Ctrl+Down  Request history

 GIT CHEATSHEET
   Left / Right       Filter by category

 SNIPPETS
   a                  Open / cancel the add form
   s                  Save the draft

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
