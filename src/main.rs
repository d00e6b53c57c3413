//! Joystick-driven app launcher for a Raspberry Pi with a 128x128 LCD HAT.
//!
//! Shows a three-icon home menu (Browser, Clock, Terminal) and polls the HAT's
//! joystick and keys every 100 ms. Runs until interrupted with Ctrl-C.
//!
//! # Controls
//!
//! | Input     | Home             | Apps                         |
//! |-----------|------------------|------------------------------|
//! | Joystick  | move selection   | (ignored)                    |
//! | KEY1      | open app         | Terminal: run command line   |
//! | KEY2      | (ignored)        | Terminal: type a space       |
//! | KEY3      | (ignored)        | back to Home                 |
//!
//! Built with `--features simulator`, the launcher opens a desktop window and
//! reads the keyboard instead (see `simulator` for the key map).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use lcd_hat_launcher::App;
use lcd_hat_launcher::config::{BROWSER_ROOT, COMMAND_TIMEOUT, LOG_LEVEL};
use lcd_hat_launcher::logging;
use lcd_hat_launcher::shell::ShellRunner;
use log::info;

#[cfg(not(any(feature = "simulator", target_os = "linux")))]
compile_error!("the launcher drives Raspberry Pi hardware; build on Linux or enable the `simulator` feature");

fn main() -> Result<()> {
    logging::init(LOG_LEVEL).context("installing logger")?;
    info!("lcd-hat-launcher v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || shutdown.store(true, Ordering::Relaxed)).context("installing Ctrl-C handler")?;
    }

    let mut board = open_board(&shutdown)?;
    let mut app = App::new(ShellRunner::new(COMMAND_TIMEOUT), BROWSER_ROOT);

    // The board is dropped on both paths, which turns the display off.
    // anyhow reports the error once main returns.
    app.run(&mut board, &shutdown).context("main loop stopped")
}

#[cfg(feature = "simulator")]
fn open_board(shutdown: &Arc<AtomicBool>) -> Result<lcd_hat_launcher::simulator::SimulatorBoard> {
    Ok(lcd_hat_launcher::simulator::SimulatorBoard::new(Arc::clone(shutdown)))
}

#[cfg(all(not(feature = "simulator"), target_os = "linux"))]
fn open_board(_shutdown: &Arc<AtomicBool>) -> Result<lcd_hat_launcher::hardware::HatBoard> {
    lcd_hat_launcher::hardware::HatBoard::open()
}
