//! # Key Decoder
//!
//! Blocks until one logical keypress arrives and classifies it as a [`Key`].
//!
//! The normal path puts the terminal in raw mode for the length of a single
//! read and lets crossterm decode the escape sequences. If raw mode is not
//! available (stdin is a pipe, or the platform call fails) the decoder
//! falls back to reading a whole line and classifying its bytes with
//! [`decode_bytes`], which knows both the ANSI arrow sequences
//! (`ESC [ A`, `ESC O A`, `ESC [ 1 ; 5 A`) and the DOS-style prefixed
//! scan codes (`0xE0 H`, `0x00 P`).

use std::io::{self, BufRead, IsTerminal};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::{debug, warn};

/// A classified keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Char(char),
}

/// Raw mode for as long as the guard lives.
///
/// Restores the mode that was active before, so nesting or a terminal that
/// was already raw is left as found.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        let was_raw = terminal::is_raw_mode_enabled()?;
        if !was_raw {
            terminal::enable_raw_mode()?;
        }
        Ok(Self { restore: !was_raw })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Read one keypress from the terminal.
pub fn read_key() -> io::Result<Key> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return read_key_line_buffered(&mut stdin.lock());
    }

    let _guard = match RawModeGuard::acquire() {
        Ok(guard) => guard,
        Err(e) => {
            warn!("Raw mode unavailable ({e}), reading keys line by line");
            return read_key_line_buffered(&mut stdin.lock());
        }
    };

    loop {
        if let Event::Key(key_event) = event::read()? {
            debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code, key_event.modifiers
            );
            if let Some(key) = classify_key_event(key_event) {
                return Ok(key);
            }
        }
    }
}

/// Map a crossterm key event to a [`Key`]. Releases and keys with no
/// meaning here (F-keys, Tab, Left/Right) give `None`.
pub fn classify_key_event(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        // Raw mode swallows SIGINT, so Ctrl+C has to mean "get out"
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Escape),
        (_, KeyCode::Up) => Some(Key::Up),
        (_, KeyCode::Down) => Some(Key::Down),
        (_, KeyCode::Enter) => Some(Key::Enter),
        (_, KeyCode::Esc) => Some(Key::Escape),
        (_, KeyCode::Char(c)) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Classify the bytes of one keypress as delivered by a terminal.
///
/// Returns `None` for sequences that are recognisably a key but not one we
/// use (e.g. `ESC [ C`, right arrow).
pub fn decode_bytes(bytes: &[u8]) -> Option<Key> {
    match bytes {
        [] | [b'\r'] | [b'\n'] | [b'\r', b'\n'] => Some(Key::Enter),
        [0x1b] | [0x03] => Some(Key::Escape),
        [0x1b, b'O', b'A'] | [0x1b, b'[', .., b'A'] => Some(Key::Up),
        [0x1b, b'O', b'B'] | [0x1b, b'[', .., b'B'] => Some(Key::Down),
        [0x1b, ..] => None,
        [0xe0 | 0x00, b'H'] => Some(Key::Up),
        [0xe0 | 0x00, b'P'] => Some(Key::Down),
        [0xe0 | 0x00, _] => None,
        _ => String::from_utf8_lossy(bytes).chars().next().map(Key::Char),
    }
}

/// Fallback when raw mode is unavailable: one line is one keypress.
/// An empty line is Enter.
pub fn read_key_line_buffered<R: BufRead>(reader: &mut R) -> io::Result<Key> {
    loop {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a key",
            ));
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        if let Some(key) = decode_bytes(&line) {
            return Ok(key);
        }
        debug!("Ignoring unrecognised key sequence {:?}", line);
    }
}
