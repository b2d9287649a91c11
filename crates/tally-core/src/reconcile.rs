//! Element reconciliation
//!
//! Maps a fresh token sequence onto the elements rendered for the previous
//! value. Elements are reused by kind from pools rather than by position, so a
//! tile keeps its identity (and its running roll) when a separator or a new
//! leading digit shifts everything around it. Matching runs from the least
//! significant end, which keeps the cents tiles stable as the magnitude
//! changes.

use std::collections::VecDeque;

use tracing::debug;

use crate::animation::AnimationRunner;
use crate::digit::{DigitGlyphs, DigitTile, RollDirection};
use crate::element::{ElementId, PunctuationLabel, Visibility, VisualElement};
use crate::token::{Punctuation, PunctuationRole, Token};
use crate::{Error, Result};

/// Result of one reconciliation pass
#[derive(Debug)]
pub struct Reconciliation {
    /// Elements in token order
    pub elements: Vec<VisualElement>,
    /// Elements left over and dropped
    pub destroyed: Vec<ElementId>,
}

impl Reconciliation {
    pub fn any_destroyed(&self) -> bool {
        !self.destroyed.is_empty()
    }
}

/// Previously rendered elements sorted by kind, rightmost first
#[derive(Debug, Default)]
struct ReusePools {
    currency_symbol: Option<PunctuationLabel>,
    negative_sign: Option<PunctuationLabel>,
    decimal_separator: Option<PunctuationLabel>,
    grouping_separators: VecDeque<PunctuationLabel>,
    digits: VecDeque<DigitTile>,
    overflow: Vec<ElementId>,
}

impl ReusePools {
    fn drain(existing: Vec<VisualElement>) -> Self {
        let mut pools = Self::default();

        for element in existing.into_iter().rev() {
            match element {
                VisualElement::Digit(tile) => pools.digits.push_back(tile),
                VisualElement::Punctuation(label) => match label.role() {
                    PunctuationRole::GroupingSeparator => pools.grouping_separators.push_back(label),
                    PunctuationRole::CurrencySymbol => {
                        Self::stash(&mut pools.currency_symbol, label, &mut pools.overflow)
                    }
                    PunctuationRole::NegativeSign => {
                        Self::stash(&mut pools.negative_sign, label, &mut pools.overflow)
                    }
                    PunctuationRole::DecimalSeparator => {
                        Self::stash(&mut pools.decimal_separator, label, &mut pools.overflow)
                    }
                },
            }
        }

        pools
    }

    fn stash(slot: &mut Option<PunctuationLabel>, label: PunctuationLabel, overflow: &mut Vec<ElementId>) {
        if slot.is_some() {
            overflow.push(label.id());
        } else {
            *slot = Some(label);
        }
    }

    fn take_label(&mut self, role: PunctuationRole) -> Option<PunctuationLabel> {
        match role {
            PunctuationRole::CurrencySymbol => self.currency_symbol.take(),
            PunctuationRole::NegativeSign => self.negative_sign.take(),
            PunctuationRole::DecimalSeparator => self.decimal_separator.take(),
            PunctuationRole::GroupingSeparator => self.grouping_separators.pop_front(),
        }
    }

    fn take_digit(&mut self) -> Option<DigitTile> {
        self.digits.pop_front()
    }

    /// Ids of every element nobody claimed
    fn into_leftovers(self) -> Vec<ElementId> {
        let mut leftovers = self.overflow;
        leftovers.extend(
            [self.currency_symbol, self.negative_sign, self.decimal_separator]
                .into_iter()
                .flatten()
                .map(|label| label.id()),
        );
        leftovers.extend(self.grouping_separators.iter().map(PunctuationLabel::id));
        leftovers.extend(self.digits.iter().map(DigitTile::id));
        leftovers
    }
}

/// Reshapes the element pool for each new token sequence
#[derive(Debug)]
pub struct Reconciler {
    punctuation: Punctuation,
    glyphs: DigitGlyphs,
    next_id: u64,
}

impl Reconciler {
    pub fn new(punctuation: Punctuation, glyphs: DigitGlyphs) -> Self {
        Self {
            punctuation,
            glyphs,
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Reject sequences that break the singleton roles or carry a digit the
    /// tiles cannot show, before any element is touched
    fn validate(&self, tokens: &[Token]) -> Result<()> {
        let mut seen: Vec<PunctuationRole> = Vec::new();

        for token in tokens {
            match token {
                Token::Digit(glyph) => {
                    if !self.glyphs.contains(glyph) {
                        return Err(Error::UnknownGlyph {
                            glyph: glyph.clone(),
                        });
                    }
                }
                other => {
                    if let Some(role) = other.role().filter(|role| role.is_singleton()) {
                        if seen.contains(&role) {
                            return Err(Error::DuplicateSingleton(role));
                        }
                        seen.push(role);
                    }
                }
            }
        }

        Ok(())
    }

    fn place_label(&mut self, pools: &mut ReusePools, role: PunctuationRole, created: &mut usize) -> VisualElement {
        let label = match pools.take_label(role) {
            Some(label) => label,
            None => {
                *created += 1;
                let id = self.allocate_id();
                PunctuationLabel::new(id, role, self.punctuation.text(role)).hidden()
            }
        };
        VisualElement::Punctuation(label)
    }

    fn place_digit(
        &mut self,
        pools: &mut ReusePools,
        glyph: &str,
        direction: Option<RollDirection>,
        runner: &mut dyn AnimationRunner,
        created: &mut usize,
    ) -> Result<VisualElement> {
        let tile = match pools.take_digit() {
            Some(mut tile) => {
                tile.set_digit(glyph, direction, runner)?;
                tile
            }
            None => {
                *created += 1;
                let mut tile = DigitTile::new(self.allocate_id(), self.glyphs.clone());
                tile.set_digit(glyph, None, runner)?;
                tile.set_visibility(Visibility::Hidden);
                tile
            }
        };
        Ok(VisualElement::Digit(tile))
    }

    /// Reuse, create and destroy elements so they match `tokens`
    ///
    /// Reused tiles roll in `direction` (`None` jumps). New elements are
    /// returned hidden. Everything in `existing` that was not reused is
    /// dropped and its id reported in [`Reconciliation::destroyed`]. When the
    /// tokens are rejected `existing` is left as it was.
    pub fn reconcile(
        &mut self,
        tokens: &[Token],
        existing: &mut Vec<VisualElement>,
        direction: Option<RollDirection>,
        runner: &mut dyn AnimationRunner,
    ) -> Result<Reconciliation> {
        self.validate(tokens)?;

        let existing = std::mem::take(existing);
        let previous = existing.len();
        let mut pools = ReusePools::drain(existing);
        let mut elements = Vec::with_capacity(tokens.len());
        let mut created = 0;

        for token in tokens.iter().rev() {
            let element = match token {
                Token::Digit(glyph) => {
                    self.place_digit(&mut pools, glyph, direction, runner, &mut created)?
                }
                Token::CurrencySymbol => {
                    self.place_label(&mut pools, PunctuationRole::CurrencySymbol, &mut created)
                }
                Token::GroupingSeparator => {
                    self.place_label(&mut pools, PunctuationRole::GroupingSeparator, &mut created)
                }
                Token::DecimalSeparator => {
                    self.place_label(&mut pools, PunctuationRole::DecimalSeparator, &mut created)
                }
                Token::NegativeSign => {
                    self.place_label(&mut pools, PunctuationRole::NegativeSign, &mut created)
                }
            };
            elements.push(element);
        }
        elements.reverse();

        let destroyed = pools.into_leftovers();

        debug!(
            "Reconciled {} tokens: {} previous, {} created, {} destroyed",
            tokens.len(),
            previous,
            created,
            destroyed.len()
        );

        Ok(Reconciliation {
            elements,
            destroyed,
        })
    }
}
