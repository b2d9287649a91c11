//! Digit tile roll state machine
//!
//! A tile shows one glyph through a one-glyph window over a vertical strip of
//! all ten glyphs. Changing the digit rearranges the strip so the target can
//! be reached by sliding in one direction, then moves the anchor (the slot
//! aligned with the window) from the current glyph to the target.

use std::sync::Arc;

use tracing::trace;

use crate::animation::{AnimationRunner, Effect, LayoutScope, Transition};
use crate::element::{ElementId, Visibility};
use crate::locale::LocaleFormat;
use crate::{Error, Result};

/// Number of glyphs on a tile
pub const GLYPH_COUNT: usize = 10;

/// Which way a tile rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollDirection {
    /// Passes through larger digits, wrapping 9 -> 0
    Increasing,
    /// Passes through smaller digits, wrapping 0 -> 9
    Decreasing,
}

/// The ten digit glyphs of a locale in canonical 0..=9 order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGlyphs(Arc<[String; GLYPH_COUNT]>);

impl DigitGlyphs {
    pub fn from_locale(locale: &dyn LocaleFormat) -> Self {
        Self(Arc::new(std::array::from_fn(|digit| {
            locale.format_decimal_digit(digit as u8)
        })))
    }

    /// Plain `0`..`9`
    pub fn ascii() -> Self {
        Self(Arc::new(std::array::from_fn(|digit| digit.to_string())))
    }

    pub fn get(&self, digit: usize) -> &str {
        &self.0[digit % GLYPH_COUNT]
    }

    /// Numeric value of a glyph
    pub fn position(&self, glyph: &str) -> Option<usize> {
        self.0.iter().position(|g| g == glyph)
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.position(glyph).is_some()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0[..]
    }

    /// Strip arrangement used to reach digit `target`
    ///
    /// The strip is the reversed glyph order (9 at the top, 0 at the bottom)
    /// rotated so the target sits at the top slot when increasing, or at the
    /// bottom slot when decreasing or not animating.
    fn arrangement(&self, target: usize, direction: Option<RollDirection>) -> Vec<String> {
        let mut strip: Vec<String> = self.0.iter().rev().cloned().collect();
        let shift = match direction {
            Some(RollDirection::Increasing) => GLYPH_COUNT - 1 - target,
            Some(RollDirection::Decreasing) | None => (GLYPH_COUNT - target) % GLYPH_COUNT,
        };
        strip.rotate_left(shift);
        strip
    }
}

/// One strip movement of a digit tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    pub element: ElementId,
    /// Strip arrangement the movement happens on, top slot first
    pub strip: Vec<String>,
    pub from_slot: usize,
    pub to_slot: usize,
    wraps: bool,
}

impl Roll {
    fn new(element: ElementId, strip: Vec<String>, from_slot: usize, to_slot: usize, glyphs: &DigitGlyphs) -> Self {
        let mut roll = Self {
            element,
            strip,
            from_slot,
            to_slot,
            wraps: false,
        };

        let zero = glyphs.get(0);
        let nine = glyphs.get(GLYPH_COUNT - 1);
        let mut wraps = false;
        let mut previous = roll.strip[from_slot].as_str();
        for glyph in roll.path() {
            if (previous == nine && glyph == zero) || (previous == zero && glyph == nine) {
                wraps = true;
            }
            previous = glyph;
        }
        roll.wraps = wraps;
        roll
    }

    /// Number of slots travelled
    pub fn steps(&self) -> usize {
        self.from_slot.abs_diff(self.to_slot)
    }

    /// Glyphs passed, in travel order, ending with the target
    pub fn path(&self) -> Vec<&str> {
        if self.from_slot > self.to_slot {
            (self.to_slot..self.from_slot)
                .rev()
                .map(|slot| self.strip[slot].as_str())
                .collect()
        } else {
            (self.from_slot + 1..=self.to_slot)
                .map(|slot| self.strip[slot].as_str())
                .collect()
        }
    }

    /// Whether the movement crosses between 9 and 0
    pub fn wraps(&self) -> bool {
        self.wraps
    }
}

/// A digit shown as a rolling strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitTile {
    id: ElementId,
    glyphs: DigitGlyphs,
    current: String,
    strip: Vec<String>,
    anchor: usize,
    visibility: Visibility,
}

impl DigitTile {
    /// New visible tile resting on `0`
    pub fn new(id: ElementId, glyphs: DigitGlyphs) -> Self {
        let strip = glyphs.arrangement(0, None);
        let anchor = GLYPH_COUNT - 1;
        Self {
            id,
            current: glyphs.get(0).to_string(),
            glyphs,
            strip,
            anchor,
            visibility: Visibility::Visible,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn glyphs(&self) -> &DigitGlyphs {
        &self.glyphs
    }

    /// Glyph last committed through [`DigitTile::set_digit`]
    pub fn current_glyph(&self) -> &str {
        &self.current
    }

    pub fn strip(&self) -> &[String] {
        &self.strip
    }

    /// Strip slot aligned with the tile window
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Move the tile to `glyph`
    ///
    /// With a direction the runner gets a layout pass at the start slot and
    /// a roll transition to the end slot; without one the anchor jumps. The
    /// new glyph is committed before returning in both cases. Returns `None`
    /// when the tile already shows `glyph`.
    pub fn set_digit(
        &mut self,
        glyph: &str,
        direction: Option<RollDirection>,
        runner: &mut dyn AnimationRunner,
    ) -> Result<Option<Roll>> {
        if glyph == self.current {
            return Ok(None);
        }

        let unknown = |glyph: &str| Error::UnknownGlyph {
            glyph: glyph.to_string(),
        };
        let index = self.glyphs.position(glyph).ok_or_else(|| unknown(glyph))?;

        let strip = self.glyphs.arrangement(index, direction);
        let from_slot = strip
            .iter()
            .position(|g| *g == self.current)
            .ok_or_else(|| unknown(&self.current))?;
        let to_slot = strip
            .iter()
            .position(|g| g == glyph)
            .ok_or_else(|| unknown(glyph))?;

        self.strip = strip;
        let roll = Roll::new(self.id, self.strip.clone(), from_slot, to_slot, &self.glyphs);

        if direction.is_some() {
            self.anchor = from_slot;
            runner.layout_pass(LayoutScope::Tile {
                element: self.id,
                anchor: from_slot,
            });

            self.anchor = to_slot;
            runner.run_transition(Transition::new(Effect::Roll(roll.clone())));
        } else {
            self.anchor = to_slot;
        }

        trace!(
            "Tile {} {} -> {} ({:?}, {} steps)",
            self.id,
            self.current,
            glyph,
            direction,
            roll.steps()
        );

        self.current = glyph.to_string();
        Ok(Some(roll))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{NoopRunner, RecordingRunner, RunnerEvent};

    fn tile_at(glyph: &str) -> DigitTile {
        let mut tile = DigitTile::new(ElementId::new(1), DigitGlyphs::ascii());
        tile.set_digit(glyph, None, &mut NoopRunner).unwrap();
        tile
    }

    #[test]
    fn test_new_tile_rests_on_zero() {
        let tile = DigitTile::new(ElementId::new(1), DigitGlyphs::ascii());
        assert_eq!(tile.current_glyph(), "0");
        assert_eq!(tile.strip()[tile.anchor()], "0");
        assert_eq!(tile.strip().first().map(String::as_str), Some("9"));
    }

    #[test]
    fn test_increasing_without_wrap() {
        let mut tile = tile_at("5");
        let roll = tile
            .set_digit("8", Some(RollDirection::Increasing), &mut NoopRunner)
            .unwrap()
            .unwrap();

        assert_eq!(roll.steps(), 3);
        assert_eq!(roll.path(), vec!["6", "7", "8"]);
        assert!(!roll.wraps());
        assert_eq!(tile.current_glyph(), "8");
        assert_eq!(tile.strip()[tile.anchor()], "8");
    }

    #[test]
    fn test_increasing_wraps_forward() {
        let mut tile = tile_at("5");
        let roll = tile
            .set_digit("2", Some(RollDirection::Increasing), &mut NoopRunner)
            .unwrap()
            .unwrap();

        assert!(roll.wraps());
        assert!(roll.path().ends_with(&["9", "0", "1", "2"]));
        assert_eq!(roll.path(), vec!["6", "7", "8", "9", "0", "1", "2"]);
        assert_eq!(roll.steps(), 7);
        assert!(roll.to_slot < roll.from_slot);
    }

    #[test]
    fn test_decreasing_slides_back() {
        let mut tile = tile_at("5");
        let roll = tile
            .set_digit("2", Some(RollDirection::Decreasing), &mut NoopRunner)
            .unwrap()
            .unwrap();

        assert_eq!(roll.steps(), 3);
        assert_eq!(roll.path(), vec!["4", "3", "2"]);
        assert!(!roll.wraps());
        assert!(roll.to_slot > roll.from_slot);
    }

    #[test]
    fn test_decreasing_wraps_backward() {
        let mut tile = tile_at("2");
        let roll = tile
            .set_digit("5", Some(RollDirection::Decreasing), &mut NoopRunner)
            .unwrap()
            .unwrap();

        assert!(roll.wraps());
        assert_eq!(roll.path(), vec!["1", "0", "9", "8", "7", "6", "5"]);
    }

    #[test]
    fn test_no_direction_uses_settled_arrangement() {
        let mut settled = tile_at("5");
        let mut decreasing = tile_at("5");
        settled.set_digit("3", None, &mut NoopRunner).unwrap();
        decreasing
            .set_digit("3", Some(RollDirection::Decreasing), &mut NoopRunner)
            .unwrap();

        assert_eq!(settled.strip(), decreasing.strip());
        assert_eq!(settled.anchor(), GLYPH_COUNT - 1);
        assert_eq!(settled.anchor(), decreasing.anchor());
    }

    #[test]
    fn test_same_glyph_is_noop() {
        let mut tile = tile_at("7");
        let before = tile.clone();
        let mut runner = RecordingRunner::default();

        for direction in [None, Some(RollDirection::Increasing), Some(RollDirection::Decreasing)] {
            assert_eq!(tile.set_digit("7", direction, &mut runner).unwrap(), None);
        }

        assert_eq!(tile, before);
        assert!(runner.events().is_empty());
    }

    #[test]
    fn test_animated_roll_lays_out_start_then_transitions() {
        let mut tile = tile_at("5");
        let mut runner = RecordingRunner::default();
        tile.set_digit("8", Some(RollDirection::Increasing), &mut runner)
            .unwrap();

        match runner.events() {
            [RunnerEvent::Layout(LayoutScope::Tile { element, anchor }), RunnerEvent::Transition(transition)] =>
            {
                assert_eq!(*element, tile.id());
                assert_eq!(*anchor, 3);
                match &transition.effect {
                    Effect::Roll(roll) => {
                        assert_eq!(roll.from_slot, 3);
                        assert_eq!(roll.to_slot, 0);
                    }
                    other => panic!("unexpected effect {:?}", other),
                }
            }
            other => panic!("unexpected runner events {:?}", other),
        }
    }

    #[test]
    fn test_unanimated_roll_skips_runner() {
        let mut tile = tile_at("5");
        let mut runner = RecordingRunner::default();
        tile.set_digit("1", None, &mut runner).unwrap();
        assert!(runner.events().is_empty());
        assert_eq!(tile.current_glyph(), "1");
    }

    #[test]
    fn test_unknown_glyph_fails() {
        let mut tile = tile_at("5");
        let err = tile
            .set_digit("x", Some(RollDirection::Increasing), &mut NoopRunner)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownGlyph { ref glyph } if glyph == "x"));
        assert_eq!(tile.current_glyph(), "5");
    }

    #[test]
    fn test_localized_glyphs() {
        let ar = crate::locale::BuiltinLocale::lookup("ar_EG").unwrap();
        let glyphs = DigitGlyphs::from_locale(ar);
        let mut tile = DigitTile::new(ElementId::new(9), glyphs);
        assert_eq!(tile.current_glyph(), "٠");

        let roll = tile
            .set_digit("٣", Some(RollDirection::Increasing), &mut NoopRunner)
            .unwrap()
            .unwrap();
        assert_eq!(roll.path(), vec!["١", "٢", "٣"]);
    }
}
