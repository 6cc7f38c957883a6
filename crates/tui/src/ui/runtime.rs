//! Runtime: terminal lifecycle and the single event loop.
//!
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - A dedicated blocking task reads crossterm events and forwards them over
//!   a channel so `read()` never stalls the loop.
//! - Route input to the main view, apply returned `Effect`s, and redraw only
//!   when the `App` is dirty or the picker's regions changed.
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tintband_types::Effect;
use tokio::{signal, sync::mpsc};
use tracing::{debug, warn};

use crate::app::App;
use crate::ui::main_component::MainView;

/// Spawn a blocking task that reads terminal input and forwards it.
///
/// `poll()` and `read()` stay on the same OS thread; the loop ends when the
/// receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(50);
        loop {
            if sender.is_closed() {
                break;
            }
            match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Err(e) = sender.blocking_send(event) {
                            debug!("Input receiver dropped: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!("Failed to poll events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Route one crossterm event to the main view.
///
/// Resizes produce no effects; the loop redraws after every event, and the
/// next `mount` relays the picker out.
fn handle_input_event(main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => {
            if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
                return vec![Effect::Quit];
            }
            main_view.handle_key_events(key_event)
        }
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(mouse_event),
        Event::Resize(..) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Run the loop until a `Quit` effect, Ctrl+C, or the input channel closes.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut last_revision = main_view.picker.revision();

    loop {
        if app.dirty || main_view.picker.revision() != last_revision {
            terminal.draw(|frame| {
                let area = frame.area();
                main_view.render(frame, area, app);
            })?;
            app.dirty = false;
            last_revision = main_view.picker.revision();
        }

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("Input channel closed; shutting down");
                    break;
                };
                let effects = handle_input_event(main_view, event);
                app.apply_effects(effects);
                // Buffer edits and cursor moves are not effects but still need a frame.
                app.dirty = true;
            }
            _ = signal::ctrl_c() => { break; }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the loop, and
/// always restores the terminal on the way out.
pub async fn run_app(main_view: MainView) -> Result<()> {
    let mut main_view = main_view;
    let mut app = App::new();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    use crate::ui::components::ColorPickerComponent;

    #[test]
    fn ctrl_c_quits_and_resize_only_redraws() {
        let mut main_view = MainView::new(ColorPickerComponent::new());
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_input_event(&mut main_view, ctrl_c), vec![Effect::Quit]);
        assert!(handle_input_event(&mut main_view, Event::Resize(80, 24)).is_empty());
    }
}
