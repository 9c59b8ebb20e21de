//! Process-wide Ctrl+C handling
//!
//! The handler is registered once. While a wizard is prompting, an interrupt
//! prints "Cancelled." and exits 0. While a backup-then-write pair runs the
//! interrupt is only recorded; [`CancelGuard::checkpoint`] turns it into
//! [`PromptError::Cancelled`] before the next target starts.

#[cfg(test)]
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Once;

use console::Term;
use tracing::debug;

use super::PromptError;

const IDLE: u8 = 0;
const PROMPTING: u8 = 1;
const COMMITTING: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(IDLE);
static PENDING: AtomicBool = AtomicBool::new(false);
static HANDLED: AtomicBool = AtomicBool::new(false);
static INSTALL: Once = Once::new();

/// What the handler does for an interrupt in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Interrupt {
    /// Print "Cancelled." and exit 0
    Exit,
    /// Remember it for the next checkpoint
    Defer,
    /// Behave like an unhandled SIGINT
    Abort,
}

fn classify(state: u8) -> Interrupt {
    match state {
        PROMPTING => Interrupt::Exit,
        COMMITTING => Interrupt::Defer,
        _ => Interrupt::Abort,
    }
}

/// Classify an interrupt and record it when it has to wait
fn record(state: &AtomicU8, pending: &AtomicBool) -> Interrupt {
    let action = classify(state.load(Ordering::SeqCst));
    if action == Interrupt::Defer {
        pending.store(true, Ordering::SeqCst);
    }
    action
}

fn on_interrupt() {
    match record(&STATE, &PENDING) {
        Interrupt::Defer => {}
        Interrupt::Exit => {
            if !HANDLED.swap(true, Ordering::SeqCst) {
                let _ = Term::stdout().show_cursor();
                println!("\n  Cancelled.");
                std::process::exit(0);
            }
        }
        Interrupt::Abort => std::process::exit(130),
    }
}

/// Armed for the lifetime of an interactive run; dropping it disarms
#[derive(Debug)]
pub struct CancelGuard {
    state: &'static AtomicU8,
    pending: &'static AtomicBool,
    /// Commits left before one is interrupted
    #[cfg(test)]
    interrupt_after: Cell<Option<usize>>,
}

impl CancelGuard {
    /// Register the handler (first call only) and arm it
    ///
    /// # Errors
    /// Returns an error if the signal handler cannot be registered.
    pub fn arm() -> Result<Self, ctrlc::Error> {
        let mut result = Ok(());
        INSTALL.call_once(|| {
            result = ctrlc::set_handler(on_interrupt);
        });
        result?;

        PENDING.store(false, Ordering::SeqCst);
        STATE.store(PROMPTING, Ordering::SeqCst);
        debug!("interrupt handler armed");
        Ok(Self {
            state: &STATE,
            pending: &PENDING,
            #[cfg(test)]
            interrupt_after: Cell::new(None),
        })
    }

    /// Guard with its own state that never touches the signal handler
    #[cfg(test)]
    pub fn detached() -> Self {
        Self {
            state: Box::leak(Box::new(AtomicU8::new(PROMPTING))),
            pending: Box::leak(Box::new(AtomicBool::new(false))),
            interrupt_after: Cell::new(None),
        }
    }

    /// Detached guard that receives Ctrl+C during commit number `n` (from 0)
    #[cfg(test)]
    pub fn interrupted_in_commit(n: usize) -> Self {
        let guard = Self::detached();
        guard.interrupt_after.set(Some(n));
        guard
    }

    /// Deliver an interrupt to this guard as the handler would
    #[cfg(test)]
    pub(crate) fn interrupt(&self) -> Interrupt {
        record(self.state, self.pending)
    }

    /// Run `f` with interrupts deferred
    pub fn commit<T>(&self, f: impl FnOnce() -> T) -> T {
        let previous = self.state.swap(COMMITTING, Ordering::SeqCst);
        let out = f();
        #[cfg(test)]
        match self.interrupt_after.get() {
            Some(0) => {
                self.interrupt_after.set(None);
                self.interrupt();
            }
            Some(n) => self.interrupt_after.set(Some(n - 1)),
            None => {}
        }
        self.state.store(previous, Ordering::SeqCst);
        out
    }

    /// Fail with `Cancelled` if an interrupt arrived during a commit
    ///
    /// # Errors
    /// Returns `PromptError::Cancelled` when an interrupt is pending.
    pub fn checkpoint(&self) -> Result<(), PromptError> {
        if self.pending.swap(false, Ordering::SeqCst) {
            Err(PromptError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.state.store(IDLE, Ordering::SeqCst);
    }
}
