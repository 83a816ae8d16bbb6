use crate::constants::{BOT_LABEL, SOURCES_HEADING, USER_LABEL};
use crate::models::{Message, Sender};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one transcript entry as a bordered block of lines. `show_clock`
/// gates the timestamp: the very first frame is drawn before the app counts
/// as mounted, so the clock only appears from the second frame on.
pub fn render(message: &Message, area: Rect, show_clock: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let style = base_style(message.sender);
    let indent = indent_for(message.sender);

    render_header(message, &mut lines, style, indent, show_clock);
    render_content(message, &mut lines, area, style, indent);
    render_sources(message, &mut lines, style, indent);
    render_footer(&mut lines, style, indent);

    lines
}

fn base_style(sender: Sender) -> Style {
    Style::default().fg(match sender {
        Sender::User => Color::Rgb(255, 223, 128),
        Sender::Bot => Color::Rgb(144, 238, 144),
    })
}

fn indent_for(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "  ",
        Sender::Bot => "",
    }
}

fn render_header(
    message: &Message,
    lines: &mut Vec<Line<'static>>,
    style: Style,
    indent: &str,
    show_clock: bool,
) {
    let label = match message.sender {
        Sender::User => USER_LABEL,
        Sender::Bot => BOT_LABEL,
    };

    let mut spans = vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─ ".to_string(), style),
        Span::styled(label.to_string(), style.add_modifier(Modifier::BOLD)),
    ];
    if show_clock {
        spans.push(Span::styled(
            format!(" · {}", message.timestamp.format("%H:%M")),
            style.add_modifier(Modifier::DIM),
        ));
    }

    lines.push(Line::from(spans));
}

fn render_content(
    message: &Message,
    lines: &mut Vec<Line<'static>>,
    area: Rect,
    style: Style,
    indent: &str,
) {
    let wrap_width = (area.width as usize).saturating_sub(4).max(1);
    for paragraph in message.content.lines() {
        if paragraph.is_empty() {
            lines.push(body_line(String::new(), style, indent));
            continue;
        }
        for wrapped in wrap(paragraph, wrap_width) {
            lines.push(body_line(wrapped.to_string(), style, indent));
        }
    }
}

fn render_sources(message: &Message, lines: &mut Vec<Line<'static>>, style: Style, indent: &str) {
    if message.sources.is_empty() {
        return;
    }

    let dim = style.add_modifier(Modifier::DIM);
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("│ ".to_string(), style),
        Span::styled(SOURCES_HEADING.to_string(), dim),
    ]));
    for source in &message.sources {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(
                format!("📄 {} (similitud: {})", source.title, source.similarity()),
                dim,
            ),
        ]));
    }
}

fn render_footer(lines: &mut Vec<Line<'static>>, style: Style, indent: &str) {
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));
}

fn body_line(text: String, style: Style, indent: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("│ ".to_string(), style),
        Span::styled(text, style),
    ])
}
