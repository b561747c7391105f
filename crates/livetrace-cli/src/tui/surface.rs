//! Terminal render surface.
//!
//! Owns the alternate screen for the lifetime of the plot. The surface counts
//! as open until the user presses `q`, `Esc` or `Ctrl-C`; key presses are
//! read while the loop pauses and, so that an overrunning loop can still be
//! closed, whenever it checks [`RenderSurface::is_open`].

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use livetrace_core::{RenderSurface, Snapshot};

pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    open: bool,
    restored: bool,
}

impl TerminalSurface {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        Ok(Self {
            terminal,
            open: true,
            restored: false,
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.open = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open = false
            }
            _ => {}
        }
    }

    /// Handle one pending event, waiting at most `timeout` for it.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            self.handle_key(key);
        }
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let _ = std::panic::take_hook(); // remove our hook
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )
    }
}

impl RenderSurface for TerminalSurface {
    fn is_open(&mut self) -> io::Result<bool> {
        while self.open && event::poll(Duration::ZERO)? {
            self.poll_event(Duration::ZERO)?;
        }
        Ok(self.open)
    }

    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.terminal.draw(|f| super::ui::draw(f, snapshot))?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> io::Result<()> {
        let deadline = Instant::now() + duration;
        while self.open {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                break;
            }
            self.poll_event(left)?;
        }
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        self.restore()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
