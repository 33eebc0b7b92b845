//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::currency::CurrencyFormat;
use crate::core::product::Product;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::console::Console;
use crate::tui::event::Key;

pub const TEST_BASE_URL: &str = "https://shop.example.com/products/";

/// A console driven by a fixed script of keys and input lines.
///
/// Prompts and printed lines are collected in `printed`, every drawn screen
/// in `frames`, and every URL handed to the browser in `opened`. Running out
/// of script is an `UnexpectedEof` error, like a closed stdin.
///
/// `width` is the emulated terminal width every frame is drawn at.
pub struct ScriptedConsole {
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
    pub printed: Vec<String>,
    pub frames: Vec<Buffer>,
    pub opened: Vec<String>,
    pub clears: usize,
    pub width: u16,
    pub fail_open: bool,
}

impl ScriptedConsole {
    pub fn new<'a>(
        keys: impl IntoIterator<Item = Key>,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            lines: lines.into_iter().map(str::to_string).collect(),
            printed: Vec::new(),
            frames: Vec::new(),
            opened: Vec::new(),
            clears: 0,
            width: 100,
            fail_open: false,
        }
    }

    pub fn printed_text(&self) -> String {
        self.printed.join("\n")
    }

    /// Rows of the most recent frame, trailing spaces kept.
    pub fn last_frame_rows(&self) -> Vec<String> {
        self.frames.last().map(buffer_rows).unwrap_or_default()
    }

    pub fn keys_left(&self) -> usize {
        self.keys.len()
    }
}

pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

fn script_exhausted(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, format!("script has no more {what}"))
}

impl Console for ScriptedConsole {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().ok_or_else(|| script_exhausted("keys"))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.printed.push(prompt.to_string());
        self.lines.pop_front().ok_or_else(|| script_exhausted("lines"))
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        self.printed.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn draw(&mut self, screen: &mut dyn Component) -> io::Result<()> {
        let height = screen.height(self.width).max(1);
        let mut terminal = Terminal::new(TestBackend::new(self.width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                screen.render(f, area);
            })
            .unwrap();
        self.frames.push(terminal.backend().buffer().clone());
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> io::Result<()> {
        self.opened.push(url.to_string());
        if self.fail_open {
            return Err(io::Error::other("no browser available"));
        }
        Ok(())
    }
}

/// The two-painting inventory used across the tests.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Harbour at dusk".to_string(),
            description: "Oil on canvas".to_string(),
            price: 10.0,
            quantity: 2,
            cost: 4.0,
            link_suffix: "a b".to_string(),
        },
        Product {
            id: 2,
            name: "Birches in snow".to_string(),
            description: "Watercolour".to_string(),
            price: 20.0,
            quantity: 1,
            cost: 6.0,
            link_suffix: String::new(),
        },
    ]
}

/// Creates a test App with Swedish currency and the test base URL.
pub fn test_app(products: Vec<Product>) -> App {
    App::new(products, CurrencyFormat::Swedish, TEST_BASE_URL.to_string())
}
