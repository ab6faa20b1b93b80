//! crossterm front end: raw-mode session, cell surface, keyboard/mouse input

pub mod clock;
pub mod input;
pub mod loader;
pub mod surface;

pub use clock::SystemClock;
pub use input::TerminalInput;
pub use loader::{Skin, SkinLoader};
pub use surface::TerminalSurface;

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, execute, terminal};
use tracing::{debug, warn};

// Mirrors the live session for the panic hook, which cannot reach the guard
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);
static SESSION_ENHANCED: AtomicBool = AtomicBool::new(false);

/// Raw mode + alternate screen for as long as the guard lives
pub struct TerminalSession {
    enhanced_keys: bool,
}

impl TerminalSession {
    pub fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide,
            EnableMouseCapture,
        )?;

        // Key release events are optional; input falls back to a hold window
        let enhanced_keys = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
            && execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .is_ok();
        debug!(enhanced_keys, "terminal session started");
        SESSION_ENHANCED.store(enhanced_keys, Ordering::SeqCst);
        SESSION_ACTIVE.store(true, Ordering::SeqCst);

        Ok(Self { enhanced_keys })
    }

    pub fn enhanced_keys(&self) -> bool {
        self.enhanced_keys
    }

    /// Terminal size in cells
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

/// Restore the terminal from a panic hook, if a session is still open
///
/// Whichever of this and the session's drop runs first does the restore.
pub fn restore_after_panic() -> io::Result<()> {
    if SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        restore(SESSION_ENHANCED.load(Ordering::SeqCst))
    } else {
        Ok(())
    }
}

/// Put the terminal back the way the shell expects it
fn restore(enhanced_keys: bool) -> io::Result<()> {
    let mut out = io::stdout();
    if enhanced_keys {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    execute!(
        out,
        DisableMouseCapture,
        cursor::Show,
        terminal::EnableLineWrap,
        terminal::LeaveAlternateScreen,
    )?;
    terminal::disable_raw_mode()
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Err(err) = restore(self.enhanced_keys) {
            warn!(%err, "failed to restore terminal");
        }
    }
}
