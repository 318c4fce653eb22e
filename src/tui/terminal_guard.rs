//! Raw mode + alternate screen lifecycle. The terminal is restored exactly
//! once, whether the app quits, panics or receives SIGINT/SIGTERM.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Optional input reporting switched on next to raw mode. Clicks drive the
/// tree and panel; bracketed paste feeds folder names and field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputModes {
    pub mouse: bool,
    pub bracketed_paste: bool,
}

impl InputModes {
    pub const NONE: Self = Self {
        mouse: false,
        bracketed_paste: false,
    };
}

impl Default for InputModes {
    fn default() -> Self {
        Self {
            mouse: true,
            bracketed_paste: true,
        }
    }
}

pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self, modes: InputModes) -> io::Result<()>;
    fn leave(&self, modes: InputModes) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl TerminalOps for CrosstermTerminal {
    fn enter(&self, modes: InputModes) -> io::Result<()> {
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        let mut out = io::stdout();
        crossterm::execute!(out, EnterAlternateScreen)?;
        if modes.mouse {
            crossterm::execute!(out, EnableMouseCapture)?;
        }
        if modes.bracketed_paste {
            crossterm::execute!(out, EnableBracketedPaste)?;
        }
        Ok(())
    }

    fn leave(&self, modes: InputModes) -> io::Result<()> {
        use crossterm::cursor::Show;
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Run every step; report the first failure.
        let mut out = io::stdout();
        let paste = if modes.bracketed_paste {
            crossterm::execute!(out, DisableBracketedPaste)
        } else {
            Ok(())
        };
        let mouse = if modes.mouse {
            crossterm::execute!(out, DisableMouseCapture)
        } else {
            Ok(())
        };
        let raw = disable_raw_mode();
        let screen = crossterm::execute!(out, LeaveAlternateScreen, Show);
        paste.and(mouse).and(raw).and(screen)
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    modes: InputModes,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave(self.modes)
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }

    /// Leaves the alternate screen before the previous panic hook runs, so
    /// the panic message lands on the normal screen.
    pub fn install_panic_hook(&self) {
        let restorer = self.clone();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new(modes: InputModes) -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminal), modes)
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>, modes: InputModes) -> io::Result<Self> {
        if let Err(err) = ops.enter(modes) {
            // Partially entered: undo whatever did switch on.
            let _ = ops.leave(modes);
            return Err(err);
        }
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                modes,
                ops,
            },
        })
    }

    pub fn modes(&self) -> InputModes {
        self.restorer.modes
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to `tx`. If the event loop does not exit within
/// the grace period the watcher restores the terminal and exits itself.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("codearchitect-signals".to_string())
        .spawn(move || {
            let Some(raw) = signals.forever().next() else {
                return;
            };
            let signal = if raw == SIGINT {
                TerminationSignal::Interrupt
            } else {
                TerminationSignal::Terminate
            };
            tracing::info!(?signal, "termination signal received");
            let _ = tx.send(signal);

            std::thread::sleep(Duration::from_secs(2));
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        })
}

#[cfg(not(unix))]
pub fn install_termination_signals(
    _restorer: TerminalRestorer,
    _tx: Sender<TerminationSignal>,
) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
