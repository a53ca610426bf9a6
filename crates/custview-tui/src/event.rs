//! Terminal event handling.
//!
//! Key presses come from crossterm's async [`EventStream`]; a tokio
//! interval interleaves periodic ticks for applying fetch results.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::time::{Interval, MissedTickBehavior};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick for applying fetch results and redrawing.
    Tick,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Return to the prior view.
    Back,
    /// Retry a failed fetch.
    Retry,
    /// Open the typed customer ID.
    Submit,
    /// Append a character to the ID prompt.
    Input(char),
    /// Delete the last character of the ID prompt.
    DeleteChar,
    /// Nothing.
    None,
}

/// Maps a key press to an action.
///
/// `editing` is `true` while the ID prompt has focus; there, letters are
/// typed instead of acting as shortcuts.
#[must_use]
pub fn action_for(key: KeyEvent, editing: bool) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match (key.code, editing) {
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Enter, true) => Action::Submit,
        (KeyCode::Backspace, true) => Action::DeleteChar,
        (KeyCode::Char(c), true) => Action::Input(c),
        (KeyCode::Char('q'), false) => Action::Quit,
        (KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left, false) => Action::Back,
        (KeyCode::Char('r'), false) => Action::Retry,
        _ => Action::None,
    }
}

/// Merged stream of terminal input and ticks.
pub struct EventSource {
    stream: EventStream,
    ticks: Interval,
}

impl EventSource {
    /// Creates a source ticking every `tick_rate`.
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self {
        let mut ticks = tokio::time::interval(tick_rate);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            stream: EventStream::new(),
            ticks,
        }
    }

    /// Waits for the next event. `None` once terminal input has ended.
    pub async fn next(&mut self) -> Option<TerminalEvent> {
        loop {
            tokio::select! {
                _ = self.ticks.tick() => return Some(TerminalEvent::Tick),
                maybe_event = self.stream.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => return Some(TerminalEvent::Key(key)),
                    Some(Ok(Event::Resize(w, h))) => return Some(TerminalEvent::Resize(w, h)),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(error = %e, "terminal read failed");
                        return None;
                    }
                    None => return None,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_outside_prompt() {
        assert_eq!(action_for(press(KeyCode::Char('q')), false), Action::Quit);
    }

    #[test]
    fn q_is_typed_inside_prompt() {
        assert_eq!(action_for(press(KeyCode::Char('q')), true), Action::Input('q'));
    }

    #[test]
    fn b_and_backspace_go_back() {
        assert_eq!(action_for(press(KeyCode::Char('b')), false), Action::Back);
        assert_eq!(action_for(press(KeyCode::Backspace), false), Action::Back);
    }

    #[test]
    fn backspace_deletes_inside_prompt() {
        assert_eq!(action_for(press(KeyCode::Backspace), true), Action::DeleteChar);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key, true), Action::Quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key, false), Action::None);
    }
}
