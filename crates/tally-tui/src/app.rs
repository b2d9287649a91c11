use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tally_core::{AppConfig, Counter, LocaleFormat, ValueChange};
use tracing::debug;

use crate::input::Action;
use crate::motion::TransitionBoard;
use crate::theme::Theme;

/// Terminal application state
pub struct App {
    pub counter: Counter,
    pub board: TransitionBoard,
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Roll and fade on updates instead of jumping
    pub animated: bool,
    /// Ignore driver values while set; manual input still applies
    pub paused: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Number of value changes shown so far
    pub updates: u64,
}

impl App {
    /// App for the locale named in the config
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Result<Self> {
        let mut board = TransitionBoard::new(config.animation.clone());
        let counter = Counter::with_builtin(
            &config.counter.locale,
            config.counter.initial_cents,
            &mut board,
        )?;
        Ok(Self::assemble(counter, board, config, theme))
    }

    /// App for any locale implementation
    pub fn with_locale(
        locale: Box<dyn LocaleFormat>,
        config: Arc<AppConfig>,
        theme: Theme,
    ) -> Result<Self> {
        let mut board = TransitionBoard::new(config.animation.clone());
        let counter = Counter::new(locale, config.counter.initial_cents, &mut board)?;
        Ok(Self::assemble(counter, board, config, theme))
    }

    fn assemble(counter: Counter, board: TransitionBoard, config: Arc<AppConfig>, theme: Theme) -> Self {
        Self {
            counter,
            board,
            animated: config.counter.animated,
            config,
            theme,
            paused: false,
            should_quit: false,
            status_message: None,
            updates: 0,
        }
    }

    /// Show `cents`; repeated values are skipped
    pub fn apply_value(&mut self, cents: i64) -> Result<Option<ValueChange>> {
        if cents == self.counter.cents() {
            return Ok(None);
        }

        let change = self.counter.set_value(cents, self.animated, &mut self.board)?;
        self.board.prune(&change.destroyed);
        self.updates += 1;
        Ok(Some(change))
    }

    /// Value produced by the driver
    pub fn on_driver_value(&mut self, cents: i64) -> Result<Option<ValueChange>> {
        if self.paused {
            debug!("Paused, dropping driver value {}", cents);
            return Ok(None);
        }
        self.apply_value(cents)
    }

    pub fn nudge(&mut self, delta: i64) -> Result<Option<ValueChange>> {
        self.apply_value(self.counter.cents().saturating_add(delta))
    }

    pub fn negate(&mut self) -> Result<Option<ValueChange>> {
        self.apply_value(self.counter.cents().saturating_neg())
    }

    pub fn reset(&mut self) -> Result<Option<ValueChange>> {
        self.apply_value(self.config.counter.initial_cents)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.set_status(if self.paused { "Paused" } else { "Resumed" });
    }

    pub fn toggle_animation(&mut self) {
        self.animated = !self.animated;
        self.set_status(if self.animated {
            "Animation on"
        } else {
            "Animation off"
        });
    }

    /// Apply a key action
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => self.toggle_pause(),
            Action::ToggleAnimation => self.toggle_animation(),
            Action::Nudge(delta) => {
                self.nudge(delta)?;
            }
            Action::Negate => {
                self.negate()?;
            }
            Action::Reset => {
                self.reset()?;
            }
            Action::None => {}
        }
        Ok(())
    }

    /// Advance transitions; returns whether a fast redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.board.update(now)
    }

    pub fn is_animating(&self) -> bool {
        self.board.is_animating()
    }

    pub fn locale_id(&self) -> &str {
        self.counter.tokenizer().locale().identifier()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()), Theme::default()).unwrap()
    }

    #[test]
    fn test_starts_on_configured_value() {
        let app = app();
        assert_eq!(app.counter.render_text(), "$6,306.45");
        assert_eq!(app.locale_id(), "en_US");
        assert!(app.animated);
        assert!(!app.is_animating());
    }

    #[test]
    fn test_unknown_locale_fails() {
        let mut config = AppConfig::default();
        config.counter.locale = "xx_YY".to_string();
        assert!(App::new(Arc::new(config), Theme::default()).is_err());
    }

    #[test]
    fn test_repeated_value_is_skipped() {
        let mut app = app();
        assert!(app.apply_value(630_645).unwrap().is_none());
        assert_eq!(app.updates, 0);

        assert!(app.apply_value(630_654).unwrap().is_some());
        assert_eq!(app.updates, 1);
        assert!(app.is_animating());
    }

    #[test]
    fn test_pause_drops_driver_values_only() {
        let mut app = app();
        app.handle_action(Action::TogglePause).unwrap();
        assert!(app.paused);

        assert!(app.on_driver_value(1).unwrap().is_none());
        assert_eq!(app.counter.cents(), 630_645);

        app.handle_action(Action::Nudge(100)).unwrap();
        assert_eq!(app.counter.cents(), 630_745);
    }

    #[test]
    fn test_negate_and_reset() {
        let mut app = app();
        app.handle_action(Action::Negate).unwrap();
        assert_eq!(app.counter.render_text(), "-$6,306.45");

        app.handle_action(Action::Reset).unwrap();
        assert_eq!(app.counter.cents(), 630_645);
    }

    #[test]
    fn test_without_animation_nothing_moves() {
        let mut app = app();
        app.handle_action(Action::ToggleAnimation).unwrap();
        app.nudge(-630_000).unwrap();
        assert!(!app.is_animating());
        assert_eq!(app.counter.render_text(), "$6.45");
        assert_eq!(app.status_message.as_deref(), Some("Animation off"));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_action(Action::Quit).unwrap();
        assert!(app.should_quit);
    }
}
