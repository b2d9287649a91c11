use anyhow::Result;

use tally_core::{AppConfig, Counter, RecordingRunner, ValueDriver};

use super::builtin_locale;

pub fn run(config: &AppConfig, ticks: u32) -> Result<()> {
    let locale = builtin_locale(&config.counter.locale)?;
    let animated = config.counter.animated;

    let mut runner = RecordingRunner::default();
    let mut counter = Counter::new(Box::new(locale.clone()), config.counter.initial_cents, &mut runner)?;
    let mut driver = ValueDriver::new(counter.cents(), &config.driver);

    println!("{:>5}  {}", 0, counter.render_text());

    for tick in 1..=ticks {
        let cents = driver.next_value();
        let change = counter.set_value(cents, animated, &mut runner)?;

        let rolls = runner.rolls().count();
        let wraps = runner.rolls().filter(|roll| roll.wraps()).count();
        runner.take();

        println!(
            "{:>5}  {}  rolls: {} (wrapping {}), revealed: {}, destroyed: {}",
            tick,
            counter.render_text(),
            rolls,
            wraps,
            change.revealed.len(),
            change.destroyed.len()
        );
    }

    Ok(())
}
