use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::{mpsc, watch};
use tracing::info;

use tally_core::{AppConfig, ValueDriver};
use tally_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    motion::AnimationConfigExt,
    widgets::{CounterWidget, StatusBarWidget},
    Theme,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let mut app = App::new(config.clone(), Theme::default())?;

    // Driver feeds values through a channel; dropping the receiver stops it
    let (value_tx, mut value_rx) = mpsc::unbounded_channel::<i64>();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let driver = ValueDriver::new(app.counter.cents(), &config.driver);
    let driver_handle = tokio::spawn(driver.run(
        Duration::from_millis(config.driver.interval_ms),
        value_tx,
        shutdown_rx,
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Tally"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::with_frame_rate(
        config.ui.tick_rate_ms,
        config.animation.frame_duration(),
    );

    info!("Counter started at {} ({})", app.counter.render_text(), app.locale_id());
    let result = main_loop(&mut terminal, &mut app, &event_handler, &mut value_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let _ = shutdown_tx.send(true);
    drop(value_rx);
    driver_handle.await?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
    value_rx: &mut mpsc::UnboundedReceiver<i64>,
) -> Result<()> {
    loop {
        // Apply any values the driver produced (non-blocking)
        while let Ok(cents) = value_rx.try_recv() {
            app.on_driver_value(cents)?;
        }

        let now = Instant::now();
        let animating = app.tick(now);

        // Draw UI
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            CounterWidget::render(frame, layout[0], app, now);
            StatusBarWidget::render(frame, layout[1], app);
        })?;

        // Redraw at the animation frame rate while something is moving
        let event = if animating {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(AppEvent::Key(key)) = event {
            app.clear_status();
            app.handle_action(handle_key_event(key))?;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
