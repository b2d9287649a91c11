pub mod animation;
pub mod config;
pub mod counter;
pub mod digit;
pub mod driver;
pub mod element;
pub mod error;
pub mod locale;
pub mod reconcile;
pub mod token;

pub use animation::{AnimationRunner, Effect, LayoutScope, NoopRunner, RecordingRunner, Transition};
pub use config::{AppConfig, DriverMode, EasingType};
pub use counter::{Counter, ValueChange};
pub use digit::{DigitGlyphs, DigitTile, Roll, RollDirection};
pub use driver::ValueDriver;
pub use element::{ElementId, ElementKind, VisualElement, Visibility};
pub use error::{Error, Result};
pub use locale::{Amount, BuiltinLocale, LocaleFormat};
pub use token::{PunctuationRole, Token, Tokenizer};
