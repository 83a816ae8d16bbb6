use crate::app::App;
use crate::constants::SUGGESTIONS_HEADING;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The canned prompt palette. The list is fixed; the host owns the highlight
/// cursor and the submit path, this module only renders and hit-tests.
pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "¿Qué es Wompi?",
    "¿Cómo funciona Wompi?",
    "¿Qué métodos de pago acepta?",
    "¿Cómo integrar Wompi en mi sitio web?",
    "¿Cuáles son las tarifas de Wompi?",
    "¿Qué medidas de seguridad tiene Wompi?",
];

/// Heading row plus one row per question.
pub const PANEL_HEIGHT: u16 = SUGGESTED_QUESTIONS.len() as u16 + 1;

/// Draws the palette and records the screen row of every question so mouse
/// clicks can be resolved back to an index.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    app.suggestion_rows.clear();

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            SUGGESTIONS_HEADING,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            height: 1,
            ..area
        },
    );

    for (idx, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
        let y = area.y + 1 + idx as u16;
        if y >= area.y + area.height {
            break;
        }
        let row = Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        };

        let selected = app.suggestion_cursor == Some(idx);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(144, 238, 144))
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "▸ " } else { "  " };

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled((*question).to_string(), style.add_modifier(Modifier::BOLD)),
            ])),
            row,
        );
        app.suggestion_rows.push((row, idx));
    }
}

/// Maps a click position to the question under it, if any.
pub fn hit_test(rows: &[(Rect, usize)], column: u16, row: u16) -> Option<usize> {
    rows.iter()
        .find(|(rect, _)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(_, idx)| *idx)
}

/// Advances the highlight cursor, wrapping past the end back to none.
pub fn cycle(cursor: Option<usize>, backwards: bool) -> Option<usize> {
    let len = SUGGESTED_QUESTIONS.len();
    match cursor {
        None if backwards => Some(len - 1),
        None => Some(0),
        Some(0) if backwards => None,
        Some(i) if backwards => Some(i - 1),
        Some(i) if i + 1 >= len => None,
        Some(i) => Some(i + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_palette_has_six_questions() {
        assert_eq!(SUGGESTED_QUESTIONS.len(), 6);
    }

    #[test]
    fn hit_test_resolves_the_row_under_the_click() {
        let rows = vec![
            (Rect::new(2, 10, 40, 1), 0),
            (Rect::new(2, 11, 40, 1), 1),
        ];
        assert_eq!(hit_test(&rows, 5, 10), Some(0));
        assert_eq!(hit_test(&rows, 41, 11), Some(1));
        assert_eq!(hit_test(&rows, 5, 12), None);
        assert_eq!(hit_test(&rows, 1, 10), None);
        assert_eq!(hit_test(&rows, 42, 10), None);
    }

    #[test]
    fn cycling_walks_every_question_then_clears() {
        let mut cursor = None;
        for expected in 0..SUGGESTED_QUESTIONS.len() {
            cursor = cycle(cursor, false);
            assert_eq!(cursor, Some(expected));
        }
        assert_eq!(cycle(cursor, false), None);
        assert_eq!(cycle(None, true), Some(SUGGESTED_QUESTIONS.len() - 1));
        assert_eq!(cycle(Some(0), true), None);
    }
}
