use anyhow::Result;

use tally_core::{AppConfig, Token, Tokenizer};

use super::builtin_locale;

pub fn run(config: &AppConfig, cents: i64, json: bool) -> Result<()> {
    let locale = builtin_locale(&config.counter.locale)?;
    let tokenizer = Tokenizer::new(Box::new(locale.clone()))?;
    let tokens = tokenizer.tokenize(cents);

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    println!("{} ({})\n", tokenizer.format(cents), tokenizer.locale().identifier());
    for token in &tokens {
        let text = match token {
            Token::Digit(glyph) => glyph.as_str(),
            other => other
                .role()
                .map(|role| tokenizer.punctuation().text(role))
                .unwrap_or_default(),
        };
        println!("  {:<20} {:?}", token.to_string(), text);
    }

    Ok(())
}
