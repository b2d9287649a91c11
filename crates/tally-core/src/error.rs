use thiserror::Error;

use crate::token::PunctuationRole;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Digit glyph {glyph:?} is not part of the tile's glyph set")]
    UnknownGlyph { glyph: String },

    #[error("Formatted value contains more than one {0}")]
    DuplicateSingleton(PunctuationRole),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
