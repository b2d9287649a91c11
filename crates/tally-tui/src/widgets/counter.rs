use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tally_core::{PunctuationRole, VisualElement};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Rows taken by a bordered digit tile
pub const TILE_HEIGHT: u16 = 3;

pub struct CounterWidget;

impl CounterWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let elements = app.counter.elements();
        let widths: Vec<u16> = elements.iter().map(element_width).collect();

        // While the row closes up after removals, keep one extra column
        let closing = app
            .board
            .reflow_progress(now)
            .map(|t| if t < 0.5 { 1 } else { 0 })
            .unwrap_or(0);
        let gap = app.config.ui.spacing + closing;

        let theme = &app.theme;
        let negative = app.counter.cents() < 0;

        for (element, slot) in elements.iter().zip(layout_row(&widths, gap, area)) {
            if slot.width == 0 || element.is_hidden() {
                continue;
            }

            let reveal = app.board.reveal_progress(element.id(), now).unwrap_or(1.0);

            match element {
                VisualElement::Digit(tile) => {
                    let rolling = app.board.rolling_glyph(tile.id(), now);
                    let glyph = rolling.unwrap_or(tile.current_glyph());

                    let fg = if rolling.is_some() {
                        theme.rolling
                    } else if negative {
                        theme.negative
                    } else {
                        theme.fg1
                    };

                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.fade_in(theme.tile_border, reveal)));
                    let paragraph = Paragraph::new(glyph)
                        .alignment(Alignment::Center)
                        .style(
                            Style::default()
                                .fg(theme.fade_in(fg, reveal))
                                .add_modifier(Modifier::BOLD),
                        )
                        .block(block);
                    frame.render_widget(paragraph, slot);
                }
                VisualElement::Punctuation(label) => {
                    let fg = match label.role() {
                        PunctuationRole::NegativeSign => theme.negative,
                        PunctuationRole::CurrencySymbol => theme.accent,
                        _ => theme.grey2,
                    };
                    // Sits on the glyph row of the tiles
                    let line = Rect {
                        y: slot.y + TILE_HEIGHT / 2,
                        height: 1,
                        ..slot
                    };
                    let paragraph = Paragraph::new(label.text())
                        .style(Style::default().fg(theme.fade_in(fg, reveal)));
                    frame.render_widget(paragraph, line);
                }
            }
        }
    }
}

fn element_width(element: &VisualElement) -> u16 {
    match element {
        VisualElement::Digit(tile) => {
            let glyph = tile
                .glyphs()
                .as_slice()
                .iter()
                .map(|g| g.width())
                .max()
                .unwrap_or(1);
            glyph as u16 + 2
        }
        VisualElement::Punctuation(label) => label.text().width().max(1) as u16,
    }
}

/// Slots for a row of elements `gap` columns apart, centered in `area`
///
/// Slots running past the right edge are clipped, down to zero width.
pub fn layout_row(widths: &[u16], gap: u16, area: Rect) -> Vec<Rect> {
    let total = widths.iter().sum::<u16>() + gap * widths.len().saturating_sub(1) as u16;
    let height = TILE_HEIGHT.min(area.height);
    let y = area.y + area.height.saturating_sub(TILE_HEIGHT) / 2;
    let mut x = area.x + area.width.saturating_sub(total) / 2;

    widths
        .iter()
        .map(|&width| {
            let clipped = width.min(area.right().saturating_sub(x));
            let slot = Rect::new(x, y, clipped, height);
            x = x.saturating_add(width + gap);
            slot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use tally_core::AppConfig;

    use crate::theme::Theme;

    #[test]
    fn test_layout_row_is_centered() {
        let area = Rect::new(0, 0, 20, 5);
        let slots = layout_row(&[1, 3, 3], 1, area);
        // total 9, offset 5
        assert_eq!(slots[0], Rect::new(5, 1, 1, 3));
        assert_eq!(slots[1], Rect::new(7, 1, 3, 3));
        assert_eq!(slots[2], Rect::new(11, 1, 3, 3));
    }

    #[test]
    fn test_layout_row_clips_overflow() {
        let area = Rect::new(0, 0, 6, 3);
        let slots = layout_row(&[3, 3, 3], 0, area);
        assert_eq!(slots[1], Rect::new(3, 0, 3, 3));
        assert_eq!(slots[2].width, 0);
    }

    #[test]
    fn test_renders_committed_value() {
        let mut config = AppConfig::default();
        config.counter.animated = false;
        let app = App::new(Arc::new(config), Theme::default()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| CounterWidget::render(frame, frame.area(), &app, Instant::now()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let glyph_row: String = (0..40)
            .map(|x| buffer[(x, 2)].symbol().to_string())
            .collect::<String>()
            .chars()
            .filter(|c| *c != '│' && *c != ' ')
            .collect();
        assert_eq!(glyph_row, "$6,306.45");
    }
}
