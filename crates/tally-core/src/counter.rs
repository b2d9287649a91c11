use tracing::debug;

use crate::animation::{AnimationRunner, Effect, LayoutScope, Transition};
use crate::digit::RollDirection;
use crate::element::{ElementId, VisualElement};
use crate::locale::{BuiltinLocale, LocaleFormat};
use crate::reconcile::Reconciler;
use crate::token::Tokenizer;
use crate::{Error, Result};

/// Outcome of [`Counter::set_value`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub previous: i64,
    pub current: i64,
    /// Roll direction handed to the tiles; `None` when not animated
    pub direction: Option<RollDirection>,
    /// Elements dropped by this update
    pub destroyed: Vec<ElementId>,
    /// Elements that were hidden and have now been revealed
    pub revealed: Vec<ElementId>,
}

/// Owns the displayed value and its elements
#[derive(Debug)]
pub struct Counter {
    tokenizer: Tokenizer,
    reconciler: Reconciler,
    cents: i64,
    elements: Vec<VisualElement>,
}

impl Counter {
    /// Bind a counter to `locale` and render `cents` without animation
    pub fn new(
        locale: Box<dyn LocaleFormat>,
        cents: i64,
        runner: &mut dyn AnimationRunner,
    ) -> Result<Self> {
        let tokenizer = Tokenizer::new(locale)?;
        let reconciler = Reconciler::new(tokenizer.punctuation().clone(), tokenizer.glyphs().clone());

        let mut counter = Self {
            tokenizer,
            reconciler,
            cents,
            elements: Vec::new(),
        };
        counter.set_value(cents, false, runner)?;
        Ok(counter)
    }

    /// Counter for one of the built-in locales
    pub fn with_builtin(
        identifier: &str,
        cents: i64,
        runner: &mut dyn AnimationRunner,
    ) -> Result<Self> {
        let locale = BuiltinLocale::lookup(identifier)
            .ok_or_else(|| Error::UnsupportedLocale(identifier.to_string()))?;
        Self::new(Box::new(locale.clone()), cents, runner)
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Elements in display order
    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Committed text of every element, concatenated
    pub fn render_text(&self) -> String {
        self.elements.iter().map(VisualElement::text).collect()
    }

    /// Show a new value
    ///
    /// Tiles roll up when the value grows and down otherwise. Newly created
    /// elements are revealed inside one transition; when something was
    /// destroyed the row re-flows within that same transition, otherwise the
    /// row is laid out first, with the additions still hidden, so only they
    /// animate. A rejected value leaves the counter untouched.
    pub fn set_value(
        &mut self,
        cents: i64,
        animated: bool,
        runner: &mut dyn AnimationRunner,
    ) -> Result<ValueChange> {
        let direction = if cents > self.cents {
            RollDirection::Increasing
        } else {
            RollDirection::Decreasing
        };
        let direction = animated.then_some(direction);

        let tokens = self.tokenizer.tokenize(cents);
        let reconciliation = self
            .reconciler
            .reconcile(&tokens, &mut self.elements, direction, runner)?;

        let any_destroyed = reconciliation.any_destroyed();
        let previous = self.cents;
        self.elements = reconciliation.elements;
        self.cents = cents;

        // New elements are still hidden during this pass
        if animated && !any_destroyed {
            runner.layout_pass(LayoutScope::Counter);
        }

        let revealed = self.reveal_all();

        if animated {
            let effect = Effect::Reveal {
                elements: revealed.clone(),
                relayout: any_destroyed,
            };
            runner.run_transition(Transition::new(effect));
        }

        debug!(
            "Counter {} -> {} ({:?}): {} elements, {} revealed, {} destroyed",
            previous,
            cents,
            direction,
            self.elements.len(),
            revealed.len(),
            reconciliation.destroyed.len()
        );

        Ok(ValueChange {
            previous,
            current: cents,
            direction,
            destroyed: reconciliation.destroyed,
            revealed,
        })
    }

    fn reveal_all(&mut self) -> Vec<ElementId> {
        self.elements
            .iter_mut()
            .filter_map(|element| element.reveal().then(|| element.id()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{NoopRunner, RecordingRunner, RunnerEvent};
    use crate::token::Token;

    fn counter(cents: i64) -> Counter {
        Counter::with_builtin("en_US", cents, &mut NoopRunner).unwrap()
    }

    #[test]
    fn test_initial_render_is_visible() {
        let counter = counter(630_645);
        assert_eq!(counter.render_text(), "$6,306.45");
        assert_eq!(counter.cents(), 630_645);
        assert!(counter.elements().iter().all(|e| !e.is_hidden()));
    }

    #[test]
    fn test_initial_render_has_no_transitions() {
        let mut runner = RecordingRunner::default();
        Counter::with_builtin("en_US", 123_456, &mut runner).unwrap();
        assert!(runner.events().is_empty());
    }

    #[test]
    fn test_unknown_locale() {
        let err = Counter::with_builtin("tlh_KX", 0, &mut NoopRunner).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLocale(_)));
    }

    #[test]
    fn test_direction_follows_value() {
        let mut counter = counter(1_000);
        let mut runner = RecordingRunner::default();

        let up = counter.set_value(1_009, true, &mut runner).unwrap();
        assert_eq!(up.direction, Some(RollDirection::Increasing));

        let down = counter.set_value(1_000, true, &mut runner).unwrap();
        assert_eq!(down.direction, Some(RollDirection::Decreasing));

        let same = counter.set_value(1_000, true, &mut runner).unwrap();
        assert_eq!(same.direction, Some(RollDirection::Decreasing));

        let jump = counter.set_value(5_000, false, &mut runner).unwrap();
        assert_eq!(jump.direction, None);
    }

    #[test]
    fn test_growth_lays_out_then_reveals() {
        let mut counter = counter(99_999);
        let mut runner = RecordingRunner::default();

        let change = counter.set_value(100_000, true, &mut runner).unwrap();
        assert!(change.destroyed.is_empty());
        // new leading "1" and the grouping separator
        assert_eq!(change.revealed.len(), 2);
        assert_eq!(counter.render_text(), "$1,000.00");

        let events = runner.events();
        let layout_at = events
            .iter()
            .position(|e| *e == RunnerEvent::Layout(LayoutScope::Counter))
            .unwrap();
        let reveal_at = events
            .iter()
            .position(|e| matches!(e, RunnerEvent::Transition(t) if matches!(t.effect, Effect::Reveal { .. })))
            .unwrap();
        assert!(layout_at < reveal_at);

        let reveals: Vec<_> = runner.reveals().collect();
        assert_eq!(reveals.len(), 1);
        assert_eq!(reveals[0].0, change.revealed.as_slice());
        assert!(!reveals[0].1);
    }

    #[test]
    fn test_shrink_reveals_with_relayout() {
        let mut counter = counter(123_456);
        let mut runner = RecordingRunner::default();

        let change = counter.set_value(99_999, true, &mut runner).unwrap();
        assert_eq!(change.destroyed.len(), 2);

        assert!(!runner
            .events()
            .contains(&RunnerEvent::Layout(LayoutScope::Counter)));
        let reveals: Vec<_> = runner.reveals().collect();
        assert_eq!(reveals.len(), 1);
        assert!(reveals[0].0.is_empty());
        assert!(reveals[0].1);
    }

    /// en_US, except amounts of five dollars or more carry a "US" prefix
    struct PrefixedAbove(BuiltinLocale);

    impl LocaleFormat for PrefixedAbove {
        fn identifier(&self) -> &str {
            self.0.identifier()
        }

        fn currency_symbol(&self) -> Option<&str> {
            self.0.currency_symbol()
        }

        fn grouping_separator(&self) -> Option<&str> {
            self.0.grouping_separator()
        }

        fn decimal_separator(&self) -> Option<&str> {
            self.0.decimal_separator()
        }

        fn format_currency(&self, amount: crate::locale::Amount) -> String {
            let formatted = self.0.format_currency(amount);
            if amount.cents() >= 500 {
                format!("US{}", formatted)
            } else {
                formatted
            }
        }

        fn format_decimal_digit(&self, digit: u8) -> String {
            self.0.format_decimal_digit(digit)
        }
    }

    #[test]
    fn test_rejected_value_keeps_elements() {
        let locale = BuiltinLocale::lookup("en_US").unwrap().clone();
        let mut counter = Counter::new(Box::new(PrefixedAbove(locale)), 123, &mut NoopRunner).unwrap();
        let before: Vec<ElementId> = counter.elements().iter().map(VisualElement::id).collect();
        let mut runner = RecordingRunner::default();

        let err = counter.set_value(999, true, &mut runner).unwrap_err();
        assert!(matches!(err, Error::UnknownGlyph { ref glyph } if glyph == "U"));

        assert_eq!(counter.cents(), 123);
        assert_eq!(counter.render_text(), "$1.23");
        let after: Vec<ElementId> = counter.elements().iter().map(VisualElement::id).collect();
        assert_eq!(after, before);
        assert!(runner.events().is_empty());

        // Still usable afterwards
        counter.set_value(456, true, &mut runner).unwrap();
        assert_eq!(counter.render_text(), "$4.56");
    }

    #[test]
    fn test_unanimated_update_reveals_without_runner() {
        let mut counter = counter(5);
        let mut runner = RecordingRunner::default();

        let change = counter.set_value(-123_456, false, &mut runner).unwrap();
        assert!(runner.events().is_empty());
        assert!(!change.revealed.is_empty());
        assert!(counter.elements().iter().all(|e| !e.is_hidden()));
        assert_eq!(counter.render_text(), "-$1,234.56");
    }

    #[test]
    fn test_tiles_commit_even_while_rolling() {
        let mut counter = counter(0);
        let mut runner = RecordingRunner::default();

        counter.set_value(987, true, &mut runner).unwrap();
        counter.set_value(321, true, &mut runner).unwrap();

        assert_eq!(counter.render_text(), "$3.21");
        assert_eq!(runner.rolls().count(), 6);
    }

    #[test]
    fn test_elements_follow_token_order() {
        let mut counter = counter(0);
        for cents in [1, -1, 1_000_000, -99_999_999, 42] {
            counter.set_value(cents, true, &mut NoopRunner).unwrap();
            let tokens = counter.tokenizer().tokenize(cents);
            assert_eq!(tokens.len(), counter.elements().len());
            for (token, element) in tokens.iter().zip(counter.elements()) {
                match token {
                    Token::Digit(glyph) => assert_eq!(element.text(), glyph),
                    other => assert_eq!(
                        element.kind(),
                        crate::element::ElementKind::Punctuation(other.role().unwrap())
                    ),
                }
            }
        }
    }
}
