//! TUI module using ratatui.
//!
//! The loop polls the terminal for keys, feeds them to the [`Controller`] as
//! messages and redraws from the form's view model.

pub mod components;

use crate::controller::Controller;
use crate::form::Msg;
use crate::webhook::Summarizer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for a key before checking for settlements again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Launch the TUI and block until the user quits.
pub async fn run(summarizer: Arc<dyn Summarizer>) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, Controller::new(summarizer));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut controller: Controller) -> anyhow::Result<()> {
    let mut tick: usize = 0;
    let mut redraw = true;
    loop {
        controller.pump();
        // The spinner animates while a request is in flight.
        if controller.state_mut().consume_dirty() || controller.state().is_loading() {
            redraw = true;
        }
        if redraw {
            let view = controller.state().view();
            terminal.draw(|frame| components::render(frame, &view, tick))?;
            redraw = false;
        }

        // Blocks this worker only; request tasks run on the other runtime threads.
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match map_key(key, controller.state().input()) {
                        KeyAction::Dispatch(msg) => controller.dispatch(msg),
                        KeyAction::Quit => break,
                        KeyAction::Ignore => {}
                    }
                }
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }
        tick = tick.wrapping_add(1);
    }

    controller.shutdown();
    Ok(())
}

/// Translate a key press into an action given the current URL input.
pub fn map_key(key: KeyEvent, input: &str) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('n') if ctrl => KeyAction::Dispatch(Msg::ResetClicked),
        KeyCode::Char('u') if ctrl => KeyAction::Dispatch(Msg::InputChanged(String::new())),
        KeyCode::Char(_) if ctrl => KeyAction::Ignore,
        KeyCode::Char(c) => {
            let mut next = input.to_string();
            next.push(c);
            KeyAction::Dispatch(Msg::InputChanged(next))
        }
        KeyCode::Backspace => {
            let mut next = input.to_string();
            if next.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(Msg::InputChanged(next))
        }
        KeyCode::Enter => KeyAction::Dispatch(Msg::Submitted),
        _ => KeyAction::Ignore,
    }
}
