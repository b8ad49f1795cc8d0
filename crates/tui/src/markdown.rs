//! Line-oriented markdown styling for report bodies.
//!
//! Covers what the analysis service actually emits: headings, bullet and
//! numbered lists, inline bold, italic and code. Unterminated markers stay
//! literal text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    text.lines().map(render_line).collect()
}

fn render_line(line: &str) -> Line<'static> {
    let trimmed = line.trim_start();

    if let Some(heading) = trimmed
        .strip_prefix("### ")
        .or_else(|| trimmed.strip_prefix("## "))
        .or_else(|| trimmed.strip_prefix("# "))
    {
        return Line::from(Span::styled(
            heading.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        let mut spans = vec![Span::raw("  • ")];
        spans.extend(inline_spans(item));
        return Line::from(spans);
    }

    if let Some((number, rest)) = split_numbered_item(trimmed) {
        let mut spans = vec![Span::raw(format!("  {number} "))];
        spans.extend(inline_spans(rest));
        return Line::from(spans);
    }

    Line::from(inline_spans(line))
}

fn split_numbered_item(line: &str) -> Option<(&str, &str)> {
    let dot = line.find('.')?;
    let number = &line[..dot];
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rest = line[dot + 1..].strip_prefix(' ')?;
    Some((&line[..dot + 1], rest))
}

fn inline_spans(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(pos) = rest.find(['*', '`']) else {
            plain.push_str(rest);
            break;
        };
        plain.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let (marker, style) = if rest.starts_with("**") {
            ("**", Style::default().add_modifier(Modifier::BOLD))
        } else if rest.starts_with('`') {
            ("`", Style::default().fg(Color::Yellow))
        } else {
            ("*", Style::default().add_modifier(Modifier::ITALIC))
        };

        match rest[marker.len()..].find(marker) {
            Some(end) if end > 0 => {
                if !plain.is_empty() {
                    spans.push(Span::raw(std::mem::take(&mut plain)));
                }
                let inner = &rest[marker.len()..marker.len() + end];
                spans.push(Span::styled(inner.to_string(), style));
                rest = &rest[marker.len() + end + marker.len()..];
            }
            _ => {
                // No closing marker: keep the characters as-is.
                plain.push_str(marker);
                rest = &rest[marker.len()..];
            }
        }
    }

    if !plain.is_empty() {
        spans.push(Span::raw(plain));
    }
    if spans.is_empty() {
        spans.push(Span::raw(String::new()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_span_is_styled() {
        let lines = render_markdown("texto **fuerte** final");
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "texto ");
        assert_eq!(spans[1].content, "fuerte");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[2].content, " final");
    }

    #[test]
    fn italic_and_code_are_styled() {
        let lines = render_markdown("con *énfasis* y `codigo`");
        let spans = &lines[0].spans;
        assert!(spans
            .iter()
            .any(|s| s.content == "énfasis" && s.style.add_modifier.contains(Modifier::ITALIC)));
        assert!(spans
            .iter()
            .any(|s| s.content == "codigo" && s.style.fg == Some(Color::Yellow)));
    }

    #[test]
    fn headings_render_bold() {
        let lines = render_markdown("## Totales");
        assert_eq!(lines[0].spans[0].content, "Totales");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn bullets_get_a_dot_prefix() {
        let lines = render_markdown("- primero\n* segundo");
        assert_eq!(lines[0].spans[0].content, "  • ");
        assert_eq!(lines[1].spans[0].content, "  • ");
        assert_eq!(lines[1].spans[1].content, "segundo");
    }

    #[test]
    fn numbered_items_keep_their_number() {
        let lines = render_markdown("2. elemento");
        assert_eq!(lines[0].spans[0].content, "  2. ");
        assert_eq!(lines[0].spans[1].content, "elemento");
    }

    #[test]
    fn unterminated_markers_stay_literal() {
        let lines = render_markdown("abierto **sin cierre");
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].content, "abierto **sin cierre");
    }

    #[test]
    fn plain_prose_is_a_single_raw_span() {
        let lines = render_markdown("El archivo tiene 100 filas.");
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].style, Style::default());
    }
}
