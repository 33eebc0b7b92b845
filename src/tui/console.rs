//! # Console
//!
//! The seam between Easel's screens and the real terminal.
//!
//! Screens never touch stdin/stdout directly. They ask a [`Console`] to draw
//! a component, read a key, read a line, print a message or open a URL.
//! `TerminalConsole` is the crossterm + ratatui implementation; tests use a
//! scripted console instead.
//!
//! ## Drawing and prompts on one screen
//!
//! Raw mode is only held while a single key is being read, so between reads
//! the terminal is in its normal line mode. `draw` clears the screen, lets
//! ratatui paint the component, then parks the cursor on the first row below
//! it. Anything printed or prompted afterwards lands under the table, and the
//! next `draw` wipes it again.

use std::io::{self, Stdout, Write, stdout};

use log::warn;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::tui::component::Component;
use crate::tui::event::{self, Key};

/// Width assumed when the terminal size cannot be queried.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

pub trait Console {
    /// Block until one keypress is available.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Show `prompt` and read one line, without its line ending.
    /// End of input is an `UnexpectedEof` error.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print one line of text.
    fn print(&mut self, line: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    /// Clear the screen and render `screen` at the current terminal size.
    fn draw(&mut self, screen: &mut dyn Component) -> io::Result<()>;

    /// Ask the desktop to open `url` in the default browser.
    fn open_url(&mut self, url: &str) -> io::Result<()>;
}

pub struct TerminalConsole {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalConsole {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = match crossterm::terminal::size() {
            Ok(_) => Terminal::new(backend)?,
            Err(e) => {
                warn!(
                    "Terminal size unavailable ({e}), assuming {DEFAULT_WIDTH}x{DEFAULT_HEIGHT}"
                );
                Terminal::with_options(
                    backend,
                    TerminalOptions {
                        viewport: Viewport::Fixed(Rect::new(0, 0, DEFAULT_WIDTH, DEFAULT_HEIGHT)),
                    },
                )?
            }
        };
        Ok(Self { terminal })
    }
}

impl Console for TerminalConsole {
    fn read_key(&mut self) -> io::Result<Key> {
        event::read_key()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut out = stdout();
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a line",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        let mut out = stdout();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()?;
        self.terminal.set_cursor_position((0, 0))
    }

    fn draw(&mut self, screen: &mut dyn Component) -> io::Result<()> {
        // Forget the previous frame: prompts may have scrolled it away
        self.terminal.clear()?;
        let completed = self.terminal.draw(|frame| {
            let area = frame.area();
            screen.render(frame, area);
        })?;
        let area = completed.area;
        let below = screen
            .height(area.width)
            .min(area.height.saturating_sub(1));
        self.terminal.set_cursor_position((0, below))?;
        self.terminal.show_cursor()
    }

    fn open_url(&mut self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}
