use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type StudyTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and bracketed paste so pasted material arrives
/// as a single event instead of a burst of key presses.
pub fn init() -> io::Result<StudyTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    io::stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableBracketedPaste)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout()
        .execute(DisableBracketedPaste)?
        .execute(LeaveAlternateScreen)?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
