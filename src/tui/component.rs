use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Height
///
/// Screens are painted in the terminal's normal line mode, and prompts are
/// printed on the row right after the last one a component uses. `height`
/// tells the console where that row is.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Number of rows the component occupies at `width` columns.
    fn height(&self, width: u16) -> u16;
}
