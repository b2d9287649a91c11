use std::fmt;

use crate::digit::DigitTile;
use crate::token::PunctuationRole;

/// Stable identity of a rendered element across updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether an element is shown
///
/// New elements start hidden so the host can animate them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// A fixed punctuation string (symbol, separator or sign)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationLabel {
    id: ElementId,
    role: PunctuationRole,
    text: String,
    visibility: Visibility,
}

impl PunctuationLabel {
    pub fn new(id: ElementId, role: PunctuationRole, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            visibility: Visibility::Visible,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visibility = Visibility::Hidden;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn role(&self) -> PunctuationRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// Kind tag of a [`VisualElement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Digit,
    Punctuation(PunctuationRole),
}

/// One rendered piece of the counter, laid out left to right by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualElement {
    Digit(DigitTile),
    Punctuation(PunctuationLabel),
}

impl VisualElement {
    pub fn id(&self) -> ElementId {
        match self {
            VisualElement::Digit(tile) => tile.id(),
            VisualElement::Punctuation(label) => label.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            VisualElement::Digit(_) => ElementKind::Digit,
            VisualElement::Punctuation(label) => ElementKind::Punctuation(label.role()),
        }
    }

    /// Committed text: the tile's current glyph or the label text
    pub fn text(&self) -> &str {
        match self {
            VisualElement::Digit(tile) => tile.current_glyph(),
            VisualElement::Punctuation(label) => label.text(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            VisualElement::Digit(tile) => tile.visibility(),
            VisualElement::Punctuation(label) => label.visibility(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility() == Visibility::Hidden
    }

    /// Make the element visible; returns whether it was hidden
    pub fn reveal(&mut self) -> bool {
        let was_hidden = self.is_hidden();
        match self {
            VisualElement::Digit(tile) => tile.set_visibility(Visibility::Visible),
            VisualElement::Punctuation(label) => label.visibility = Visibility::Visible,
        }
        was_hidden
    }
}
