//! # List Browser
//!
//! The product list with a moving cursor. Runs until a product is chosen
//! or the user asks to quit.
//!
//! ```text
//!            ┌──────── a (add) ────────┐
//!            ▼                         │
//!       ┌─────────┐   a (add)    ┌──────────┐  ↑/↓ (wrap), a, d, f
//!       │  Empty  │ ───────────▶ │ Listing  │ ◀──────────┐
//!       └─────────┘              └──────────┘ ───────────┘
//!         │  q/Esc/Enter             │   │  d on the last product
//!         ▼                          │   ▼
//!       Exit                 Enter   │  Exit
//!                                    ▼
//!                               Selected(cursor)
//! ```
//!
//! The screen is redrawn before every key read, even after a move that
//! changed nothing, so a resized terminal is picked up straight away.

use std::io;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;

use crate::core::action::{BrowseOutcome, ListAction};
use crate::core::currency::CurrencyFormat;
use crate::core::product::{Product, parse_quantity};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ProductTable, TitleBar};
use crate::tui::console::Console;
use crate::tui::event::Key;
use crate::tui::form;

const EMPTY_MESSAGE: &str =
    "No products in stock. Press 'a' to add one, or 'q'/Enter to quit.";

/// What a key does in the list. Letters are case-insensitive.
pub fn list_action(key: Key) -> ListAction {
    match key {
        Key::Up => ListAction::MoveUp,
        Key::Down => ListAction::MoveDown,
        Key::Enter => ListAction::Select,
        Key::Escape => ListAction::Quit,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'q' => ListAction::Quit,
            'a' => ListAction::Add,
            'd' => ListAction::Delete,
            'f' => ListAction::Find,
            _ => ListAction::Ignore,
        },
    }
}

/// Run the list until a product is selected or the user exits.
///
/// The cursor lives in `app`, so returning here after the detail view lands
/// on the same row.
pub fn browse(console: &mut dyn Console, app: &mut App) -> io::Result<BrowseOutcome> {
    app.cursor.clamp(app.inventory.len());
    loop {
        console.draw(&mut ListScreen::new(
            app.inventory.products(),
            app.cursor.index(),
            app.currency,
        ))?;

        let mut action = list_action(console.read_key()?);
        if app.inventory.is_empty() {
            action = action.on_empty_list();
        }
        debug!("List action: {:?}", action);

        let len = app.inventory.len();
        match action {
            ListAction::MoveUp => app.cursor.up(len),
            ListAction::MoveDown => app.cursor.down(len),
            ListAction::Select => return Ok(BrowseOutcome::Selected(app.cursor.index())),
            ListAction::Quit => return Ok(BrowseOutcome::Exit),
            ListAction::Add => {
                form::add_product(console, app)?;
                app.cursor.clamp(app.inventory.len());
            }
            ListAction::Delete => {
                if delete_selected(console, app)? && app.inventory.is_empty() {
                    return Ok(BrowseOutcome::Exit);
                }
            }
            ListAction::Find => find_by_id(console, app)?,
            ListAction::Ignore => {}
        }
    }
}

/// Confirm, then remove the product under the cursor. Returns whether
/// anything was removed.
fn delete_selected(console: &mut dyn Console, app: &mut App) -> io::Result<bool> {
    let index = app.cursor.index();
    let Some(product) = app.inventory.get(index) else {
        return Ok(false);
    };
    let question = format!("Delete \"{}\" (id {})?", product.name, product.id);
    if !form::confirm(console, &question)? {
        return Ok(false);
    }
    app.inventory.remove(index);
    app.cursor.clamp(app.inventory.len());
    Ok(true)
}

/// Ask for an id and move the cursor to that product.
fn find_by_id(console: &mut dyn Console, app: &mut App) -> io::Result<()> {
    let input = console.read_line("Product id: ")?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }
    let found = parse_quantity(input).and_then(|id| app.inventory.position_of(id));
    match found {
        Some(index) => app.cursor.jump_to(index, app.inventory.len()),
        None => {
            console.print(&format!("No product with id {input}."))?;
            form::pause(console)?;
        }
    }
    Ok(())
}

// ============================================================================
// Screen
// ============================================================================

/// Title bar plus either the product table or the empty-stock message.
pub struct ListScreen<'a> {
    title: TitleBar,
    table: ProductTable<'a>,
}

impl<'a> ListScreen<'a> {
    pub fn new(products: &'a [Product], cursor: usize, currency: CurrencyFormat) -> Self {
        let hints: &[&str] = if products.is_empty() {
            &["a add", "q quit"]
        } else {
            &["↑/↓ move", "Enter open", "a add", "d delete", "f find", "q quit"]
        };
        Self {
            title: TitleBar::new("Products", hints),
            table: ProductTable::new(products, cursor, currency),
        }
    }
}

impl Component for ListScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        self.title.render(frame, title_area);
        if self.table.products.is_empty() {
            frame.render_widget(Line::raw(EMPTY_MESSAGE), body_area);
        } else {
            self.table.render(frame, body_area);
        }
    }

    fn height(&self, width: u16) -> u16 {
        let body = if self.table.products.is_empty() {
            1
        } else {
            self.table.height(width)
        };
        self.title.height(width).saturating_add(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedConsole, sample_products, test_app};
    use ratatui::style::Modifier;

    fn browse_with(
        products: Vec<Product>,
        keys: Vec<Key>,
        lines: Vec<&str>,
    ) -> (App, ScriptedConsole, BrowseOutcome) {
        let mut app = test_app(products);
        let mut console = ScriptedConsole::new(keys, lines);
        let outcome = browse(&mut console, &mut app).unwrap();
        (app, console, outcome)
    }

    #[test]
    fn test_list_action_mapping() {
        assert_eq!(list_action(Key::Up), ListAction::MoveUp);
        assert_eq!(list_action(Key::Enter), ListAction::Select);
        assert_eq!(list_action(Key::Escape), ListAction::Quit);
        assert_eq!(list_action(Key::Char('Q')), ListAction::Quit);
        assert_eq!(list_action(Key::Char('a')), ListAction::Add);
        assert_eq!(list_action(Key::Char('D')), ListAction::Delete);
        assert_eq!(list_action(Key::Char('x')), ListAction::Ignore);
    }

    #[test]
    fn test_enter_selects_cursor_row() {
        let (_, _, outcome) =
            browse_with(sample_products(), vec![Key::Down, Key::Enter], vec![]);
        assert_eq!(outcome, BrowseOutcome::Selected(1));
    }

    #[test]
    fn test_up_from_first_wraps_to_last() {
        let (_, _, outcome) = browse_with(sample_products(), vec![Key::Up, Key::Enter], vec![]);
        assert_eq!(outcome, BrowseOutcome::Selected(1));
    }

    #[test]
    fn test_down_len_times_returns_to_start() {
        let (_, _, outcome) = browse_with(
            sample_products(),
            vec![Key::Down, Key::Down, Key::Enter],
            vec![],
        );
        assert_eq!(outcome, BrowseOutcome::Selected(0));
    }

    #[test]
    fn test_quit_keys_exit() {
        for key in [Key::Char('q'), Key::Escape] {
            let (_, _, outcome) = browse_with(sample_products(), vec![key], vec![]);
            assert_eq!(outcome, BrowseOutcome::Exit);
        }
    }

    #[test]
    fn test_empty_list_enter_exits_and_ignores_navigation() {
        let (_, console, outcome) =
            browse_with(Vec::new(), vec![Key::Down, Key::Char('d'), Key::Enter], vec![]);
        assert_eq!(outcome, BrowseOutcome::Exit);
        assert_eq!(console.frames.len(), 3);
        assert!(console.last_frame_rows()[1].starts_with(EMPTY_MESSAGE));
    }

    #[test]
    fn test_redraws_on_every_key_including_noops() {
        let (_, console, _) = browse_with(
            sample_products(),
            vec![Key::Char('x'), Key::Char('z'), Key::Char('q')],
            vec![],
        );
        assert_eq!(console.frames.len(), 3);
    }

    #[test]
    fn test_cursor_row_is_highlighted() {
        let (_, console, _) =
            browse_with(sample_products(), vec![Key::Down, Key::Char('q')], vec![]);
        let frame = console.frames.last().unwrap();
        // Rows: title, header, rule, product 1, product 2
        assert!(frame[(0, 4)].modifier.contains(Modifier::REVERSED));
        assert!(!frame[(0, 3)].modifier.contains(Modifier::REVERSED));
        assert!(console.last_frame_rows()[4].contains("Birches in snow"));
    }

    #[test]
    fn test_add_from_empty_list() {
        let (app, _, outcome) = browse_with(
            Vec::new(),
            vec![Key::Char('a'), Key::Enter],
            vec!["Harbour", "Oil", "1200", "1", "400", "", ""],
        );
        assert_eq!(app.inventory.len(), 1);
        assert_eq!(app.inventory.products()[0].id, 1);
        assert_eq!(outcome, BrowseOutcome::Selected(0));
    }

    #[test]
    fn test_add_keeps_cursor() {
        let (app, _, outcome) = browse_with(
            sample_products(),
            vec![Key::Down, Key::Char('a'), Key::Enter],
            vec!["Fjäll", "", "300", "1", "100", "", ""],
        );
        assert_eq!(app.inventory.len(), 3);
        assert_eq!(app.inventory.products()[2].id, 3);
        assert_eq!(outcome, BrowseOutcome::Selected(1));
    }

    #[test]
    fn test_delete_declined_keeps_product() {
        let (app, console, _) = browse_with(
            sample_products(),
            vec![Key::Char('d'), Key::Char('q')],
            vec!["nope"],
        );
        assert_eq!(app.inventory.len(), 2);
        assert!(console.printed_text().contains("Delete \"Harbour at dusk\" (id 1)? (y/n): "));
    }

    #[test]
    fn test_delete_last_row_clamps_cursor() {
        let (app, _, outcome) = browse_with(
            sample_products(),
            vec![Key::Up, Key::Char('d'), Key::Enter],
            vec!["y"],
        );
        assert_eq!(app.inventory.len(), 1);
        assert_eq!(app.cursor.index(), 0);
        assert_eq!(outcome, BrowseOutcome::Selected(0));
    }

    #[test]
    fn test_delete_only_product_exits() {
        let mut products = sample_products();
        products.truncate(1);
        let (app, console, outcome) =
            browse_with(products, vec![Key::Char('d')], vec!["yes"]);
        assert!(app.inventory.is_empty());
        assert_eq!(outcome, BrowseOutcome::Exit);
        assert_eq!(console.keys_left(), 0);
    }

    #[test]
    fn test_find_moves_cursor() {
        let (_, _, outcome) = browse_with(
            sample_products(),
            vec![Key::Char('f'), Key::Enter],
            vec!["2"],
        );
        assert_eq!(outcome, BrowseOutcome::Selected(1));
    }

    #[test]
    fn test_find_unknown_id_reports_and_stays() {
        let (_, console, outcome) = browse_with(
            sample_products(),
            vec![Key::Char('f'), Key::Enter],
            vec!["42", ""],
        );
        assert_eq!(outcome, BrowseOutcome::Selected(0));
        assert!(console.printed_text().contains("No product with id 42."));
    }

    #[test]
    fn test_row_width_follows_terminal_width() {
        let mut app = test_app(sample_products());
        let mut console = ScriptedConsole::new(vec![Key::Char('q')], vec![]);
        console.width = 40;
        browse(&mut console, &mut app).unwrap();
        let rows = console.last_frame_rows();
        assert!(rows.iter().all(|row| row.chars().count() == 40));
        assert_eq!(rows[2], "=".repeat(40));
    }
}
