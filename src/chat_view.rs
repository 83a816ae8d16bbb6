use crate::app::App;
use crate::chat_message;
use crate::constants::{
    CONNECTION_BANNER, HEADER_SUBTITLE, HEADER_TITLE, INPUT_PLACEHOLDER, STATUS_CONNECTED,
    STATUS_CONNECTING, STATUS_ERROR,
};
use crate::models::ConnectionStatus;
use crate::suggested_questions;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.status_indicator.set_thinking(app.thinking);

    let show_suggestions = app.suggestions_visible();
    let show_banner = app.connection_status == ConnectionStatus::Error;

    let mut constraints = vec![
        Constraint::Length(3), // header
        Constraint::Min(1),    // transcript
        Constraint::Length(1), // thinking indicator
    ];
    if show_suggestions {
        constraints.push(Constraint::Length(suggested_questions::PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(input_height(app)));
    if show_banner {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(size);

    let mut idx = 0;
    draw_header(f, app, chunks[idx]);
    idx += 1;
    draw_messages(f, app, chunks[idx]);
    idx += 1;
    app.status_indicator.render(f, chunks[idx]);
    idx += 1;
    if show_suggestions {
        suggested_questions::render(f, app, chunks[idx]);
        idx += 1;
    } else {
        app.suggestion_rows.clear();
    }
    draw_input(f, app, chunks[idx]);
    idx += 1;
    if show_banner {
        draw_banner(f, app, chunks[idx]);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                HEADER_TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                HEADER_SUBTITLE,
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        area,
    );

    let (symbol, text, color) = match app.connection_status {
        ConnectionStatus::Connected => ("●", STATUS_CONNECTED, Color::Green),
        ConnectionStatus::Connecting => ("◌", STATUS_CONNECTING, Color::Yellow),
        ConnectionStatus::Error => ("✖", STATUS_ERROR, Color::Red),
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(symbol, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(color)),
        ]))
        .alignment(Alignment::Right),
        Rect { height: 1, ..area },
    );

    if area.height >= 3 {
        let separator = "─".repeat(area.width as usize);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                separator,
                Style::default().fg(Color::DarkGray),
            ))),
            Rect {
                x: area.x,
                y: area.y + 2,
                width: area.width,
                height: 1,
            },
        );
    }
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = Vec::new();
    for message in &app.messages {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(chat_message::render(message, area, app.mounted));
    }

    // Clamp the scroll and write it back so keyboard scrolling operates on
    // the real position instead of the pin-to-bottom sentinel.
    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let msgs_para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(msgs_para.scroll((app.chat_scroll, 0)), area);
}

fn input_height(app: &App) -> u16 {
    let rows = app.input.split('\n').count().clamp(1, 4) as u16;
    rows + 2
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 3 {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let sep_style = Style::default().fg(Color::DarkGray);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator.clone(), sep_style))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator, sep_style))),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );

    let enabled = app.input_enabled();
    let content_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 2,
    };
    let prefix_style = Style::default().fg(Color::DarkGray);

    if app.input.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("→ ", prefix_style),
                Span::styled(
                    INPUT_PLACEHOLDER,
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                ),
            ])),
            content_area,
        );
        if enabled {
            f.set_cursor_position((content_area.x + 2, content_area.y));
        }
        return;
    }

    let text_style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let all_lines: Vec<&str> = app.input.split('\n').collect();
    let visible_rows = content_area.height as usize;
    let start = all_lines.len().saturating_sub(visible_rows);

    let mut lines = Vec::new();
    for (offset, text) in all_lines[start..].iter().enumerate() {
        let prefix = if start + offset == 0 { "→ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(prefix, prefix_style),
            Span::styled((*text).to_string(), text_style),
        ]));
    }

    let last_line = all_lines.last().copied().unwrap_or("");
    let visible_width = content_area.width.saturating_sub(2);
    let text_width = last_line.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(lines).scroll((0, scroll_offset)),
        content_area,
    );

    if enabled {
        let cursor_x = (content_area.x + 2 + text_width - scroll_offset)
            .min(content_area.x + content_area.width.saturating_sub(1));
        let cursor_y = content_area.y + (all_lines.len() - start) as u16 - 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_banner(f: &mut Frame, app: &App, area: Rect) {
    let text = format!("⚠ {} {}", CONNECTION_BANNER, app.api.base_url());
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Red),
        ))),
        area,
    );
}

/// One-shot startup probe. Locks the app only to read the client and to
/// store the outcome, never across the network call.
pub async fn check_connection(app: Arc<Mutex<App>>) {
    let api = app.lock().await.api.clone();
    let reachable = api.health().await;
    app.lock().await.apply_health(reachable);
}

/// Runs one chat request to completion. The in-flight flag was raised by
/// `begin_submission`; `complete_submission` lowers it whatever happens.
pub async fn submit_query(app: Arc<Mutex<App>>, query: String) {
    let api = app.lock().await.api.clone();
    let result = api.chat(&query).await;
    app.lock().await.complete_submission(result);
}
