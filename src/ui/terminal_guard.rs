use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal on drop and on panic.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        *self.cleanup.lock() = Some(Box::new(cleanup));
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(cleanup) = cleanup.lock().take() {
                cleanup();
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        let cleanup = self.cleanup.lock().take();
        if let Some(cleanup) = cleanup {
            cleanup();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Run `enter` with `guard` already armed. If `enter` fails, the guard is
/// dropped and undoes whatever part of the setup had already happened.
fn enter_guarded<T>(
    guard: TerminalGuard,
    enter: impl FnOnce() -> io::Result<T>,
) -> io::Result<(T, TerminalGuard)> {
    let value = enter()?;
    Ok((value, guard))
}

pub fn setup_terminal(
    mouse: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    // Every cleanup step tolerates running against a terminal that was only
    // partly set up.
    let guard = TerminalGuard::new();
    guard.set_cleanup(move || {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if mouse {
            let _ = stdout.execute(DisableMouseCapture);
        }
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    enter_guarded(guard, || {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        if mouse {
            stdout.execute(EnableMouseCapture)?;
        }
        stdout.execute(TermClear(ClearType::All))?;
        stdout.execute(Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_guard() -> (TerminalGuard, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let guard = TerminalGuard::new();
        let counter = Arc::clone(&runs);
        guard.set_cleanup(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (guard, runs)
    }

    #[test]
    fn failed_setup_runs_cleanup() {
        let (guard, runs) = counting_guard();
        let result: io::Result<((), TerminalGuard)> =
            enter_guarded(guard, || Err(io::Error::other("alternate screen refused")));
        assert!(result.is_err());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn successful_setup_defers_cleanup_to_drop() {
        let (guard, runs) = counting_guard();
        let (value, guard) = enter_guarded(guard, || Ok(7)).unwrap();
        assert_eq!(value, 7);
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        guard.restore();
        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
