//! The launcher main loop.
//!
//! One tick: sample the input lines, apply at most one event, run a Terminal
//! command if one was confirmed, draw the current screen and present it if it
//! changed. [`App::run`] repeats that every [`POLL_INTERVAL`] until the
//! shutdown flag is raised.
//!
//! # Tick Order
//!
//! ```text
//! sample ─► InputReader ─► AppState::apply ─┬─► Update::RunCommand ─► CommandRunner
//!                                           │
//!                                           ▼
//!                        draw_screen ─► RenderState ─► PixelSink::present
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use chrono::{DateTime, Local, TimeZone};
use log::{debug, info, warn};

use crate::config::POLL_INTERVAL;
use crate::display::PixelSink;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::input::{InputEvent, InputLines, InputReader};
use crate::render::RenderState;
use crate::screens::{draw_screen, list_entries};
use crate::shell::CommandRunner;
use crate::state::{AppState, Screen, Update};

/// Launcher state plus everything needed to turn it into frames.
pub struct App<R> {
    state: AppState,
    input: InputReader,
    render: RenderState,
    frame: FrameBuffer,
    runner: R,
    browser_root: PathBuf,
    /// Listing taken when the Browser was last entered.
    browser_entries: Vec<String>,
}

impl<R: CommandRunner> App<R> {
    /// Start on Home with the first item selected.
    pub fn new(
        runner: R,
        browser_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            state: AppState::new(),
            input: InputReader::new(),
            render: RenderState::new(),
            frame: FrameBuffer::new(),
            runner,
            browser_root: browser_root.into(),
            browser_entries: Vec::new(),
        }
    }

    /// Current navigation state.
    #[inline]
    pub const fn state(&self) -> &AppState { &self.state }

    /// The last frame drawn.
    #[inline]
    pub const fn frame(&self) -> &FrameBuffer { &self.frame }

    /// Directory listed by the Browser screen.
    #[inline]
    pub fn browser_root(&self) -> &Path { &self.browser_root }

    /// Entries shown by the Browser screen.
    #[inline]
    pub fn browser_entries(&self) -> &[String] { &self.browser_entries }

    /// One loop iteration using the current time.
    pub fn tick<B>(
        &mut self,
        board: &mut B,
    ) -> Result<(), Error>
    where
        B: InputLines + PixelSink,
    {
        self.tick_at(board, Instant::now(), &Local::now())
    }

    /// One loop iteration with explicit timestamps.
    ///
    /// `now` drives debouncing, `clock` is what the Clock screen shows.
    pub fn tick_at<B, Tz>(
        &mut self,
        board: &mut B,
        now: Instant,
        clock: &DateTime<Tz>,
    ) -> Result<(), Error>
    where
        B: InputLines + PixelSink,
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        if let Some(event) = self.input.process(board.sample(), now) {
            self.handle(event);
        }

        draw_screen(&mut self.frame, &self.state, clock, &self.browser_entries);
        if !self.render.needs_present(&self.frame) {
            return Ok(());
        }

        if let Err(err) = board.present(&self.frame) {
            self.render.invalidate();
            return Err(err);
        }
        self.render.mark_presented(&self.frame);
        Ok(())
    }

    /// Apply one input event, running a command when the Terminal asks for it.
    pub fn handle(
        &mut self,
        event: InputEvent,
    ) -> Update {
        let before = self.state.screen();
        let update = self.state.apply(event);

        match &update {
            Update::Ignored => debug!("{event:?} ignored on {}", before.name()),
            Update::Changed => {
                let after = self.state.screen();
                if after != before {
                    info!("{} -> {}", before.name(), after.name());
                    if after == Screen::Browser {
                        self.browser_entries = list_entries(&self.browser_root);
                    }
                } else {
                    debug!("{event:?} on {}, selected {}", after.name(), self.state.selected());
                }
            }
            Update::RunCommand(line) => {
                info!("running `{line}`");
                let outcome = self.runner.run(line);
                match &outcome {
                    Ok(output) => debug!("`{line}` printed {} bytes", output.len()),
                    Err(err) => warn!("`{line}` failed: {err}"),
                }
                self.state.terminal_mut().record(outcome);
            }
        }
        update
    }

    /// Tick every [`POLL_INTERVAL`] until `shutdown` is set.
    pub fn run<B>(
        &mut self,
        board: &mut B,
        shutdown: &AtomicBool,
    ) -> Result<(), Error>
    where
        B: InputLines + PixelSink,
    {
        info!("launcher running, browsing {}", self.browser_root.display());
        while !shutdown.load(Ordering::Relaxed) {
            let started = Instant::now();
            self.tick(board)?;

            // A command may already have used up the period
            if let Some(rest) = POLL_INTERVAL.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
        info!("shutdown requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use embedded_graphics::prelude::*;

    use super::*;
    use crate::colors::WHITE;
    use crate::input::{Line, LineLevels};
    use crate::shell::{CommandError, CommandOutcome};

    /// Board that replays samples and counts presented frames.
    #[derive(Default)]
    struct FakeBoard {
        samples: Vec<LineLevels>,
        presented: usize,
        fail_present: bool,
    }

    impl InputLines for FakeBoard {
        fn sample(&mut self) -> LineLevels {
            if self.samples.is_empty() { LineLevels::released() } else { self.samples.remove(0) }
        }
    }

    impl PixelSink for FakeBoard {
        fn present(
            &mut self,
            _frame: &FrameBuffer,
        ) -> Result<(), Error> {
            if self.fail_present {
                return Err(Error::Spi(embedded_hal::spi::ErrorKind::Other));
            }
            self.presented += 1;
            Ok(())
        }
    }

    /// Runner that records the lines it was asked to run.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl CommandRunner for Recorder {
        fn run(
            &mut self,
            line: &str,
        ) -> CommandOutcome {
            self.0.push(line.to_owned());
            if line == "boom" {
                Err(CommandError::NotFound("boom".to_owned()))
            } else {
                Ok(format!("ran {line}"))
            }
        }
    }

    fn clock() -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339("2026-10-18T09:30:00+00:00").expect("valid timestamp")
    }

    fn app() -> App<Recorder> { App::new(Recorder::default(), std::env::temp_dir()) }

    /// Press then release `line`, far enough apart to clear debouncing.
    fn press(
        app: &mut App<Recorder>,
        board: &mut FakeBoard,
        start: Instant,
        line: Line,
    ) -> Instant {
        board.samples.push(LineLevels::pressed(&[line]));
        board.samples.push(LineLevels::released());
        app.tick_at(board, start, &clock()).expect("present succeeds");
        let later = start + Duration::from_millis(100);
        app.tick_at(board, later, &clock()).expect("present succeeds");
        later + Duration::from_millis(100)
    }

    #[test]
    fn test_first_tick_presents_home() {
        let mut app = app();
        let mut board = FakeBoard::default();
        app.tick_at(&mut board, Instant::now(), &clock()).expect("present succeeds");

        assert_eq!(board.presented, 1);
        assert_eq!(app.state().screen(), Screen::Home);
    }

    #[test]
    fn test_unchanged_frame_is_not_presented_again() {
        let mut app = app();
        let mut board = FakeBoard::default();
        let t0 = Instant::now();
        for i in 0..5 {
            app.tick_at(&mut board, t0 + Duration::from_millis(100 * i), &clock())
                .expect("present succeeds");
        }
        assert_eq!(board.presented, 1, "Idle Home draws once");
    }

    #[test]
    fn test_selection_change_presents_new_frame() {
        let mut app = app();
        let mut board = FakeBoard::default();
        let t0 = Instant::now();
        app.tick_at(&mut board, t0, &clock()).expect("present succeeds");
        assert_eq!(board.presented, 1, "Initial Home frame");

        press(&mut app, &mut board, t0 + Duration::from_millis(100), Line::JoystickDown);
        assert_eq!(app.state().selected(), 1);
        assert_eq!(board.presented, 2, "Press redraws once, release changes nothing");
    }

    #[test]
    fn test_browser_round_trip_restores_home() {
        let mut app = app();
        let mut board = FakeBoard::default();
        let mut t = Instant::now();
        let home_frame = {
            app.tick_at(&mut board, t, &clock()).expect("present succeeds");
            app.frame().clone()
        };
        t += Duration::from_millis(100);

        t = press(&mut app, &mut board, t, Line::Key1);
        assert_eq!(app.state().screen(), Screen::Browser);

        press(&mut app, &mut board, t, Line::Key3);
        assert_eq!(app.state().screen(), Screen::Home);
        assert_eq!(app.state().selected(), 0);
        assert_eq!(*app.frame(), home_frame, "Home looks the same as before");
    }

    #[test]
    fn test_browser_lists_on_entry_only() {
        let root = std::env::temp_dir().join(format!("lcd-hat-app-browser-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).expect("create temp dir");
        let mut app = App::new(Recorder::default(), &root);
        let mut board = FakeBoard::default();

        let t = press(&mut app, &mut board, Instant::now(), Line::Key1);
        assert_eq!(app.state().screen(), Screen::Browser);
        assert!(app.browser_entries().is_empty());
        let presented = board.presented;

        std::fs::write(root.join("added"), b"").expect("create file");
        app.tick_at(&mut board, t, &clock()).expect("present succeeds");
        assert!(app.browser_entries().is_empty(), "Directory is not reread while open");
        assert_eq!(board.presented, presented, "Unchanged listing is not redrawn");

        let t = press(&mut app, &mut board, t + Duration::from_millis(100), Line::Key3);
        press(&mut app, &mut board, t, Line::Key1);
        assert_eq!(app.browser_entries(), ["added"], "Reentering lists again");

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_browser_root_shows_placeholder() {
        let root = std::env::temp_dir().join(format!("lcd-hat-app-missing-{}", std::process::id()));
        let mut app = App::new(Recorder::default(), &root);
        app.handle(InputEvent::Confirm);
        assert_eq!(app.browser_entries(), [crate::screens::NOT_FOUND]);
    }

    #[test]
    fn test_terminal_confirm_runs_command_once() {
        let mut app = app();
        let mut board = FakeBoard::default();
        let mut t = Instant::now();
        t = press(&mut app, &mut board, t, Line::JoystickUp); // select Terminal
        t = press(&mut app, &mut board, t, Line::Key1);
        assert_eq!(app.state().screen(), Screen::Terminal);

        // Only spaces can be typed on the HAT, so a blank confirm runs nothing
        t = press(&mut app, &mut board, t, Line::Key2);
        press(&mut app, &mut board, t, Line::Key1);
        assert!(app.runner.0.is_empty());

        app.state.terminal_mut().push('l');
        app.handle(InputEvent::Confirm);
        assert_eq!(app.runner.0, ["l"]);
        assert_eq!(app.state().terminal().output_text(), "ran l");
    }

    #[test]
    fn test_command_failure_is_shown_not_raised() {
        let mut app = app();
        app.handle(InputEvent::Up);
        app.handle(InputEvent::Confirm);
        for c in "boom".chars() {
            app.state.terminal_mut().push(c);
        }

        assert_eq!(app.handle(InputEvent::Confirm), Update::RunCommand("boom".to_owned()));
        assert_eq!(app.state().terminal().output_text(), "command not found: boom");
    }

    #[test]
    fn test_failed_present_is_retried() {
        let mut app = app();
        let mut board = FakeBoard {
            fail_present: true,
            ..FakeBoard::default()
        };
        let t0 = Instant::now();
        assert!(app.tick_at(&mut board, t0, &clock()).is_err());

        board.fail_present = false;
        app.tick_at(&mut board, t0 + Duration::from_millis(100), &clock())
            .expect("present succeeds");
        assert_eq!(board.presented, 1, "Same frame is sent again after a failure");
    }

    #[test]
    fn test_app_screens_have_white_background() {
        let mut app = app();
        let mut board = FakeBoard::default();
        press(&mut app, &mut board, Instant::now(), Line::Key1);

        assert_eq!(app.state().screen(), Screen::Browser);
        assert_eq!(app.frame().pixel(Point::new(120, 120)), Some(WHITE));
    }

    #[test]
    fn test_run_stops_when_flag_is_set() {
        let mut app = app();
        let mut board = FakeBoard::default();
        let shutdown = AtomicBool::new(true);
        app.run(&mut board, &shutdown).expect("no frames, no errors");
        assert_eq!(board.presented, 0);
    }
}
