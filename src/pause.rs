//! Blocking wait that keeps a caller's event loop responsive
//!
//! The wait runs on a helper thread while the calling thread keeps invoking a
//! yield callback, so whichever UI toolkit the caller drives can keep
//! processing its events.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::image_pipeline::{ConversionError, Result};

pub const DEFAULT_MESSAGE: &str = "Paused. Hit return to continue.";

const YIELD_INTERVAL: Duration = Duration::from_millis(10);

/// Blocks until `timeout` elapses, or until a line is entered on stdin when
/// `timeout` is `None`, calling `yield_fn` every 10 ms meanwhile.
///
/// `message` is printed before waiting. Waiting for input without a message
/// prints [`DEFAULT_MESSAGE`].
pub fn pause<F: FnMut()>(timeout: Option<Duration>, message: Option<&str>, mut yield_fn: F) -> Result<()> {
    let message = match (timeout, message) {
        (None, None) => Some(DEFAULT_MESSAGE.to_owned()),
        (_, message) => message.map(str::to_owned),
    };

    debug!(?timeout, "Pausing");

    let waiter = thread::spawn(move || -> io::Result<()> {
        let mut stdout = io::stdout();
        if let Some(message) = message {
            writeln!(stdout, "{}", message)?;
            stdout.flush()?;
        }
        match timeout {
            Some(timeout) => thread::sleep(timeout),
            None => {
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line)?;
            }
        }
        Ok(())
    });

    while !waiter.is_finished() {
        yield_fn();
        thread::sleep(YIELD_INTERVAL);
    }

    waiter
        .join()
        .map_err(|_| ConversionError::IoError(io::Error::other("pause thread panicked")))??;

    debug!("Resuming");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_timeout_keeps_yielding() {
        let mut yields = 0;
        let started = Instant::now();
        pause(Some(Duration::from_millis(60)), Some("waiting"), || yields += 1).unwrap();

        assert!(started.elapsed() >= Duration::from_millis(60));
        assert!(yields >= 1);
    }

    #[test]
    fn test_zero_timeout_returns() {
        pause(Some(Duration::ZERO), None, || {}).unwrap();
    }
}
