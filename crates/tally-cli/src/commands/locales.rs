use anyhow::Result;

use tally_core::{Amount, BuiltinLocale, LocaleFormat};

pub fn run() -> Result<()> {
    let sample = Amount::from_cents(-123_456_789);

    println!("Built-in locales ({}):\n", BuiltinLocale::all().len());

    for locale in BuiltinLocale::all() {
        println!(
            "  {:<6} {:<28} {}",
            locale.identifier(),
            locale.name(),
            locale.format_currency(sample)
        );
    }

    Ok(())
}
