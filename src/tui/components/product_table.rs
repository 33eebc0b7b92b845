//! # ProductTable Component
//!
//! The fixed-width product list, with the cursor row shown in reverse video.
//!
//! ```text
//!    ID | Name                      | Description                                   |             Price |   Qty
//! ============================================================================================================
//!     1 | Harbour at dusk           | Oil on canvas, 60x80                          |       1 200,00 kr |     2
//! ▓▓▓▓2 | Birches                   | Watercolour                                   |         450,00 kr |     1▓▓▓
//! ============================================================================================================
//! ```
//!
//! A price too wide for its column is shown as `#` marks, the way a
//! spreadsheet does, rather than a cut-off number.
//!
//! Every row is cut or padded to the width of the area it is drawn in, which
//! the console takes from the live terminal size on each redraw. When there
//! are more products than rows, the window scrolls to keep the cursor row on
//! screen.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::core::currency::CurrencyFormat;
use crate::core::product::Product;
use crate::tui::component::Component;

pub const NAME_WIDTH: usize = 25;
pub const DESCRIPTION_WIDTH: usize = 45;
const ID_WIDTH: usize = 4;
pub const PRICE_WIDTH: usize = 17;
const QUANTITY_WIDTH: usize = 5;

/// Rows used by the header, the rule below it and the closing rule.
const CHROME_ROWS: usize = 3;

pub struct ProductTable<'a> {
    pub products: &'a [Product],
    pub cursor: usize,
    pub currency: CurrencyFormat,
}

impl<'a> ProductTable<'a> {
    pub fn new(products: &'a [Product], cursor: usize, currency: CurrencyFormat) -> Self {
        Self {
            products,
            cursor,
            currency,
        }
    }
}

impl Component for ProductTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = usize::from(area.width);
        let rule = "=".repeat(width);
        let body_rows = usize::from(area.height).saturating_sub(CHROME_ROWS);

        let mut lines = vec![
            Line::styled(fit(&header_row(), width), Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(rule.clone()),
        ];
        for index in visible_range(self.products.len(), self.cursor, body_rows) {
            let text = fit(&format_row(&self.products[index], self.currency), width);
            if index == self.cursor {
                lines.push(Line::styled(text, Style::default().add_modifier(Modifier::REVERSED)));
            } else {
                lines.push(Line::raw(text));
            }
        }
        lines.push(Line::raw(rule));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn height(&self, _width: u16) -> u16 {
        u16::try_from(self.products.len() + CHROME_ROWS).unwrap_or(u16::MAX)
    }
}

/// The header line, before fitting to the terminal width.
pub fn header_row() -> String {
    format!(
        " {:>ID_WIDTH$} | {} | {} | {:>PRICE_WIDTH$} | {:>QUANTITY_WIDTH$}",
        "ID",
        fit("Name", NAME_WIDTH),
        fit("Description", DESCRIPTION_WIDTH),
        "Price",
        "Qty",
    )
}

/// One product line, before fitting to the terminal width.
pub fn format_row(product: &Product, currency: CurrencyFormat) -> String {
    format!(
        " {:>ID_WIDTH$} | {} | {} | {:>PRICE_WIDTH$} | {:>QUANTITY_WIDTH$}",
        product.id,
        fit(&product.name, NAME_WIDTH),
        fit(&product.description, DESCRIPTION_WIDTH),
        fit_right(&currency.format(product.price), PRICE_WIDTH),
        product.quantity,
    )
}

/// Cut `text` to at most `width` display columns, then pad with spaces to
/// exactly `width`. Control characters (e.g. newlines inside a quoted CSV
/// field) are shown as spaces.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let c = if c.is_control() { ' ' } else { c };
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Right-align `text` in exactly `width` columns. Text that does not fit
/// becomes a run of `#`.
pub fn fit_right(text: &str, width: usize) -> String {
    let used: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if used > width {
        return "#".repeat(width);
    }
    format!("{}{text}", " ".repeat(width - used))
}

/// Which products fit in `rows` lines while keeping `cursor` visible.
pub fn visible_range(len: usize, cursor: usize, rows: usize) -> Range<usize> {
    if rows == 0 {
        return 0..0;
    }
    let start = (cursor + 1).saturating_sub(rows).min(len.saturating_sub(rows));
    start..len.min(start + rows)
}
