use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let (mode_str, mode_color) = if app.paused {
            ("PAUSED", theme.paused)
        } else {
            ("LIVE", theme.accent)
        };
        let animation_str = if app.animated { "animated" } else { "instant" };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | Updates: {} | Rolling: {}",
                app.locale_id(),
                animation_str,
                app.updates,
                app.board.active_rolls()
            )
        };

        let help_hint = " q:quit space:pause a:anim j/k:±1 h/l:±0.01 -:negate ";
        let used = mode_str.len() + 2 + status_text.chars().count() + help_hint.chars().count();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", mode_str),
                Style::default().fg(theme.bg0).bg(mode_color),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
