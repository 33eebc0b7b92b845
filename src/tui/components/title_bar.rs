//! # TitleBar Component
//!
//! One-line command bar at the top of every screen: the screen title
//! followed by the keys that work there.
//!
//! ```text
//! Products | ↑/↓ move | Enter open | a add | d delete | f find | q quit
//! ```
//!
//! Stateless: everything it shows comes in as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    /// Screen name (e.g. "Products")
    pub title: String,
    /// Key hints, shown after the title separated by `|`
    pub hints: Vec<String>,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, hints: &[&str]) -> Self {
        Self {
            title: title.into(),
            hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub fn text(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(self.hints.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }

    fn height(&self, _width: u16) -> u16 {
        1
    }
}
