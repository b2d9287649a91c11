pub mod locales;
pub mod run;
pub mod simulate;
pub mod tokens;

use anyhow::{anyhow, Result};
use tally_core::BuiltinLocale;

/// Built-in locale named by the config
fn builtin_locale(identifier: &str) -> Result<&'static BuiltinLocale> {
    BuiltinLocale::lookup(identifier).ok_or_else(|| {
        anyhow!(
            "Unsupported locale: {}\nRun `tally locales` to see the available ones.",
            identifier
        )
    })
}
