//! Periodic value source
//!
//! The driver owns its schedule and only holds the sending half of a channel.
//! Whoever owns the counter owns the receiver; once that is dropped the next
//! send fails and the driver stops on its own.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::config::{DriverConfig, DriverMode};

/// Produces successive cent values
#[derive(Debug, Clone)]
pub struct ValueDriver {
    cents: i64,
    ticks: u32,
    mode: DriverMode,
    step_cents: i64,
    jump_every: u32,
    max_jump_cents: i64,
    rng: StdRng,
}

impl ValueDriver {
    pub fn new(start: i64, config: &DriverConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            cents: start,
            ticks: 0,
            mode: config.mode,
            step_cents: config.step_cents,
            jump_every: config.jump_every,
            max_jump_cents: config.max_jump_cents.saturating_abs(),
            rng,
        }
    }

    /// Last value produced
    pub fn cents(&self) -> i64 {
        self.cents
    }

    fn jump(&mut self) -> i64 {
        if self.max_jump_cents == 0 {
            0
        } else {
            self.rng
                .gen_range(-self.max_jump_cents..=self.max_jump_cents)
        }
    }

    /// Advance one tick
    pub fn next_value(&mut self) -> i64 {
        let delta = match self.mode {
            DriverMode::Random => self.jump(),
            DriverMode::Stepped => {
                if self.jump_every > 0 && self.ticks + 1 >= self.jump_every {
                    self.ticks = 0;
                    self.jump()
                } else {
                    self.ticks += 1;
                    self.step_cents
                }
            }
        };

        self.cents = self.cents.saturating_add(delta);
        self.cents
    }

    /// Send a value every `interval` until the receiver is gone or shutdown
    /// is signalled
    pub async fn run(
        mut self,
        interval: Duration,
        tx: mpsc::UnboundedSender<i64>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        if interval.is_zero() {
            info!("Value driver disabled (interval_ms = 0)");
            let _ = shutdown.changed().await;
            return;
        }

        info!("Value driver started: every {:?}, {:?} mode", interval, self.mode);

        let mut ticker = tokio::time::interval(interval);
        // Skip the first tick (fires immediately)
        ticker.tick().await;

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Value driver received shutdown signal");
                        break;
                    }
                }

                _ = ticker.tick() => {
                    let value = self.next_value();
                    if tx.send(value).is_err() {
                        warn!("Counter dropped, stopping value driver");
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: DriverMode, seed: u64) -> DriverConfig {
        DriverConfig {
            mode,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_stepped_schedule() {
        let mut driver = ValueDriver::new(630_645, &config(DriverMode::Stepped, 42));
        let values: Vec<i64> = (0..20).map(|_| driver.next_value()).collect();

        for (i, value) in values.iter().take(9).enumerate() {
            assert_eq!(*value, 630_645 + 9 * (i as i64 + 1));
        }
        assert!((values[9] - values[8]).abs() <= 1_000_000);
        for i in 10..19 {
            assert_eq!(values[i] - values[i - 1], 9);
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut a = ValueDriver::new(0, &config(DriverMode::Random, 7));
        let mut b = ValueDriver::new(0, &config(DriverMode::Random, 7));
        let left: Vec<i64> = (0..50).map(|_| a.next_value()).collect();
        let right: Vec<i64> = (0..50).map(|_| b.next_value()).collect();
        assert_eq!(left, right);
        assert_eq!(a.cents(), *left.last().unwrap());
    }

    #[test]
    fn test_random_jumps_stay_in_range() {
        let mut driver = ValueDriver::new(0, &config(DriverMode::Random, 3));
        let mut previous = 0;
        for _ in 0..200 {
            let value = driver.next_value();
            assert!((value - previous).abs() <= 1_000_000);
            previous = value;
        }
    }

    #[test]
    fn test_no_jumps_when_disabled() {
        let mut driver = ValueDriver::new(
            0,
            &DriverConfig {
                jump_every: 0,
                seed: Some(1),
                ..Default::default()
            },
        );
        for _ in 0..30 {
            driver.next_value();
        }
        assert_eq!(driver.cents(), 270);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let driver = ValueDriver::new(100, &config(DriverMode::Stepped, 1));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(driver.run(Duration::from_secs(1), tx, shutdown_rx));

        assert_eq!(rx.recv().await, Some(109));
        assert_eq!(rx.recv().await, Some(118));
        drop(rx);

        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_shutdown() {
        let driver = ValueDriver::new(0, &config(DriverMode::Stepped, 1));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(driver.run(Duration::from_millis(10), tx, shutdown_rx));
        assert_eq!(rx.recv().await, Some(9));

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
        // Sender dropped with the task
        while rx.recv().await.is_some() {}
    }
}
