//! Terminal presentation of the Pomodoro widget.
//!
//! - `view`: pure projection of the state into what is displayed
//! - `render`: ratatui drawing of a view
//! - `input`: key bindings standing in for the widget's buttons
//!
//! [`run`] owns the terminal for the lifetime of the widget and drives a
//! single-threaded loop: each pass redraws, then waits for exactly one
//! event (a tick, a key press, or Ctrl-C) and applies it to completion.

pub mod input;
pub mod render;
pub mod view;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use crate::sound::{create_alert_player, AlertPlayer};
use crate::timer::{PomodoroWidget, Tick, Ticker, TICK_PERIOD};
use crate::types::WidgetConfig;

pub use input::{map_key, Command};
pub use view::{LengthControl, View};

/// Runs the widget until the user quits.
///
/// The terminal is restored and the countdown task cancelled even when the
/// loop fails.
pub async fn run(config: &WidgetConfig) -> Result<()> {
    let alert = create_alert_player(config.sound_enabled);
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut widget = PomodoroWidget::new(alert, Ticker::new(TICK_PERIOD, tick_tx));

    let mut terminal = enter_terminal()?;
    info!("widget started");

    let result = event_loop(&mut terminal, &mut widget, &mut tick_rx).await;

    widget.shutdown();
    let restored = leave_terminal(&mut terminal);
    info!("widget stopped");

    result.and(restored)
}

async fn event_loop<B, P>(
    terminal: &mut Terminal<B>,
    widget: &mut PomodoroWidget<P>,
    tick_rx: &mut mpsc::UnboundedReceiver<Tick>,
) -> Result<()>
where
    B: Backend,
    P: AlertPlayer,
{
    let mut events = EventStream::new();

    loop {
        let view = View::from_state(widget.state());
        terminal
            .draw(|frame| render::render(frame, &view))
            .context("draw widget")?;

        tokio::select! {
            Some(tick) = tick_rx.recv() => {
                widget.handle_tick(tick);
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match map_key(key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Widget(action)) => widget.dispatch(action),
                    None => {}
                },
                // Resize and other events only need the redraw at the top of the loop.
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("read terminal input"),
                None => return Ok(()),
            },
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(e).context("enter alternate screen");
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            disable_raw_mode().ok();
            return Err(e).context("create terminal");
        }
    };
    terminal.hide_cursor().ok();
    terminal.clear().ok();
    Ok(terminal)
}

fn leave_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}
