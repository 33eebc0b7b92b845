//! # TUI Adapter
//!
//! The terminal layer. Reads keys, draws screens with ratatui and
//! translates keypresses into `core::action` values.
//!
//! ## Session Flow
//!
//! ```text
//! load store ──▶ browse ──Selected──▶ detail ──Back/Deleted──┐
//!                  ▲  │                                      │
//!                  │  └──Exit──▶ save store                  │
//!                  └─────────────────────────────────────────┘
//! ```
//!
//! The store is saved on the way out even when the session ends in an
//! error (for instance stdin closing mid-prompt), so edits made up to that
//! point are not lost.

pub mod browser;
pub mod component;
pub mod components;
pub mod console;
pub mod detail;
pub mod event;
pub mod form;

use std::error::Error;
use std::io;

use log::{debug, info, warn};

use crate::core::action::BrowseOutcome;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store::RecordStore;
use crate::tui::console::{Console, TerminalConsole};

/// Run Easel against the real terminal.
///
/// A data file that fails to load stops the program before any screen is
/// shown.
pub fn run(config: &ResolvedConfig) -> Result<(), Box<dyn Error>> {
    let store = RecordStore::new(&config.data_file);
    store.ensure_exists()?;
    let products = store.load()?;

    let mut app = App::from_config(products, config);
    let mut console = TerminalConsole::new()?;

    let session = interact(&mut console, &mut app);
    if let Err(e) = &session {
        warn!("Session ended with an error: {e}");
    }

    store.save(app.inventory.products())?;
    session?;
    info!("Easel exiting normally");
    Ok(())
}

/// The browse → detail loop, until the user exits.
pub fn interact(console: &mut dyn Console, app: &mut App) -> io::Result<()> {
    loop {
        match browser::browse(console, app)? {
            BrowseOutcome::Selected(index) => {
                let outcome = detail::show_detail(console, app, index)?;
                debug!("Detail view closed: {:?}", outcome);
            }
            BrowseOutcome::Exit => break,
        }
    }
    console.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedConsole, sample_products, test_app};
    use crate::tui::event::Key;

    #[test]
    fn test_select_edit_back_then_quit() {
        let mut app = test_app(sample_products());
        let mut console = ScriptedConsole::new(
            vec![
                Key::Down,
                Key::Enter,      // open "Birches in snow"
                Key::Char(' '),  // edit
                Key::Escape,     // back to list
                Key::Char('q'),
            ],
            vec!["", "", "25", "", "", ""],
        );

        interact(&mut console, &mut app).unwrap();

        assert_eq!(app.inventory.products()[1].price, 25.0);
        // Cursor survives the trip through the detail view
        assert_eq!(app.cursor.index(), 1);
        assert_eq!(console.keys_left(), 0);
    }

    #[test]
    fn test_delete_last_product_from_detail_returns_to_empty_list() {
        let mut products = sample_products();
        products.truncate(1);
        let mut app = test_app(products);
        let mut console = ScriptedConsole::new(
            vec![Key::Enter, Key::Char('d'), Key::Enter],
            vec!["y"],
        );

        interact(&mut console, &mut app).unwrap();

        assert!(app.inventory.is_empty());
        let rows = console.frames.last().map(crate::test_support::buffer_rows).unwrap();
        assert!(rows[1].starts_with("No products in stock."));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut app = test_app(sample_products());
        let mut console = ScriptedConsole::new(vec![Key::Down], vec![]);
        let err = interact(&mut console, &mut app).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
