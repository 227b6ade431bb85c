use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// The spinner currently on screen, if any. Output is routed around it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn active() -> MutexGuard<'static, Option<ProgressBar>> {
    ACTIVE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Keeps the spinner alive; clears it when dropped.
pub struct SpinnerGuard {
    spinner: ProgressBar,
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
        active().take();
    }
}

/// Shows a spinner with `message` until the returned guard is dropped.
pub fn start(message: String) -> SpinnerGuard {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        spinner.set_style(style.tick_strings(TICK_STRINGS));
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(TICK);

    *active() = Some(spinner.clone());
    SpinnerGuard { spinner }
}

/// Runs `f` with the spinner, if any, hidden.
pub fn suspend<F: FnOnce() -> R, R>(f: F) -> R {
    let spinner = active().clone();
    match spinner {
        Some(spinner) => spinner.suspend(f),
        None => f(),
    }
}

/// `tracing` writer that prints above the spinner instead of through it.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        suspend(|| io::stdout().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
