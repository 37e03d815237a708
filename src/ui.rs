use ratatui::{prelude::*, widgets::*};

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Simple JSON syntax highlighting
///
/// Heuristic and line-based; non-JSON text passes through unstyled, so
/// it is safe to run over any response body.
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_line).collect()
}

fn highlight_line(line: &str) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    let flush = |plain: &mut String, spans: &mut Vec<Span<'static>>| {
        if !plain.is_empty() {
            spans.push(Span::raw(std::mem::take(plain)));
        }
    };

    while i < chars.len() {
        match chars[i] {
            '"' => {
                flush(&mut plain, &mut spans);
                let start = i;
                i += 1;
                while i < chars.len() {
                    match chars[i] {
                        '\\' => i += 2,
                        '"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                let end = i.min(chars.len());
                let literal: String = chars[start..end].iter().collect();
                // A string is a key when a colon follows it
                let is_key = chars[end..]
                    .iter()
                    .find(|c| !c.is_whitespace())
                    .is_some_and(|c| *c == ':');
                let color = if is_key { Color::Cyan } else { Color::Green };
                spans.push(Span::styled(literal, Style::default().fg(color)));
            }
            '{' | '}' | '[' | ']' => {
                flush(&mut plain, &mut spans);
                spans.push(Span::styled(
                    chars[i].to_string(),
                    Style::default().fg(Color::Yellow),
                ));
                i += 1;
            }
            c if c.is_ascii_digit() || (c == '-' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit())) => {
                flush(&mut plain, &mut spans);
                let start = i;
                i += 1;
                while i < chars.len()
                    && (chars[i].is_ascii_digit() || matches!(chars[i], '.' | 'e' | 'E' | '+' | '-'))
                {
                    i += 1;
                }
                let number: String = chars[start..i].iter().collect();
                spans.push(Span::styled(number, Style::default().fg(Color::Yellow)));
            }
            c if c.is_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_alphabetic() {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if matches!(word.as_str(), "true" | "false" | "null") {
                    flush(&mut plain, &mut spans);
                    spans.push(Span::styled(word, Style::default().fg(Color::Magenta)));
                } else {
                    plain.push_str(&word);
                }
            }
            c => {
                plain.push(c);
                i += 1;
            }
        }
    }

    flush(&mut plain, &mut spans);
    Line::from(spans)
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let source = "{\n  \"a\": [1, true, null],\n  \"b\": \"x:y\"\n}";
        let lines = highlight_json(source);
        let rebuilt: Vec<String> = lines.iter().map(line_text).collect();
        let expected: Vec<String> = source.lines().map(String::from).collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn test_keys_and_values_get_different_colors() {
        let lines = highlight_json(r#"  "name": "Alice","#);
        let spans = &lines[0].spans;
        let key = spans.iter().find(|s| s.content.contains("name")).unwrap();
        let value = spans.iter().find(|s| s.content.contains("Alice")).unwrap();
        assert_eq!(key.style.fg, Some(Color::Cyan));
        assert_eq!(value.style.fg, Some(Color::Green));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let lines = highlight_json("not json at all");
        assert_eq!(line_text(&lines[0]), "not json at all");
    }
}
