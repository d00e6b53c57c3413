//! Navigation state machine.
//!
//! [`AppState`] is the only mutable application state. It is owned by the
//! main loop and changed exclusively through [`AppState::apply`], one input
//! event at a time.
//!
//! # Transitions
//!
//! | Screen   | Event        | Effect                                  |
//! |----------|--------------|-----------------------------------------|
//! | Home     | Up / Left    | select previous item (wraps)            |
//! | Home     | Down / Right | select next item (wraps)                |
//! | Home     | Confirm      | open the selected item's screen         |
//! | Home     | Back         | nothing                                 |
//! | any app  | Back         | return to Home, keep selection          |
//! | Terminal | Secondary    | append a space to the command line      |
//! | Terminal | Confirm      | trim the command line and run it        |

use super::screen::{MENU, MENU_LEN, Screen};
use super::terminal::TerminalSession;
use crate::input::InputEvent;

/// What the main loop has to do after an event was applied.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Update {
    /// The event had no effect on this screen.
    Ignored,
    /// State changed; the next frame reflects it.
    Changed,
    /// Run this command line and record the outcome in the terminal session.
    RunCommand(String),
}

/// Current screen, menu selection and terminal session.
#[derive(Debug, Default)]
pub struct AppState {
    screen: Screen,
    selected: usize,
    terminal: TerminalSession,
}

impl AppState {
    /// Startup state: Home with the first item selected.
    pub const fn new() -> Self {
        Self {
            screen: Screen::Home,
            selected: 0,
            terminal: TerminalSession::new(),
        }
    }

    /// Screen currently shown.
    #[inline]
    pub const fn screen(&self) -> Screen { self.screen }

    /// Index of the highlighted menu item, always in `0..MENU_LEN`.
    #[inline]
    pub const fn selected(&self) -> usize { self.selected }

    /// Terminal command line and last result.
    #[inline]
    pub const fn terminal(&self) -> &TerminalSession { &self.terminal }

    /// Mutable access for recording command results.
    #[inline]
    pub const fn terminal_mut(&mut self) -> &mut TerminalSession { &mut self.terminal }

    /// Apply one input event.
    pub fn apply(
        &mut self,
        event: InputEvent,
    ) -> Update {
        match (self.screen, event) {
            (Screen::Home, InputEvent::Up | InputEvent::Left) => {
                self.selected = (self.selected + MENU_LEN - 1) % MENU_LEN;
                Update::Changed
            }
            (Screen::Home, InputEvent::Down | InputEvent::Right) => {
                self.selected = (self.selected + 1) % MENU_LEN;
                Update::Changed
            }
            (Screen::Home, InputEvent::Confirm) => {
                self.screen = MENU[self.selected].target;
                Update::Changed
            }
            (Screen::Terminal, InputEvent::Secondary) => {
                self.terminal.push(' ');
                Update::Changed
            }
            (Screen::Terminal, InputEvent::Confirm) => match self.terminal.commit() {
                Some(line) => Update::RunCommand(line),
                None => Update::Changed,
            },
            (Screen::Browser | Screen::Clock | Screen::Terminal, InputEvent::Back) => {
                if self.screen == Screen::Terminal {
                    self.terminal.reset();
                }
                self.screen = Screen::Home;
                Update::Changed
            }
            _ => Update::Ignored,
        }
    }
}
