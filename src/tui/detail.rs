//! # Detail View
//!
//! Shows one product and a small menu of things to do with it:
//!
//! | Key         | Action                                              |
//! |-------------|-----------------------------------------------------|
//! | Space       | Edit the product in place                           |
//! | d           | Delete it (after confirmation) and return to list   |
//! | s           | Statistics over the whole inventory                 |
//! | o           | Open the product's shop page in the browser         |
//! | Enter / Esc | Back to the list                                    |
//!
//! The product is addressed by its index in `app.inventory`, so edits made
//! here are the list's edits; nothing is copied.

use std::io;

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::action::{DetailAction, DetailOutcome};
use crate::core::currency::CurrencyFormat;
use crate::core::link::{self, LinkError};
use crate::core::product::Product;
use crate::core::state::App;
use crate::core::stats;
use crate::tui::component::Component;
use crate::tui::components::{DetailCard, TitleBar};
use crate::tui::console::Console;
use crate::tui::event::Key;
use crate::tui::form;

pub fn detail_action(key: Key) -> DetailAction {
    match key {
        Key::Enter | Key::Escape => DetailAction::Back,
        Key::Char(' ') => DetailAction::Edit,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'd' => DetailAction::Delete,
            's' => DetailAction::Stats,
            'o' => DetailAction::OpenLink,
            _ => DetailAction::Ignore,
        },
        Key::Up | Key::Down => DetailAction::Ignore,
    }
}

/// Run the detail menu for the product at `index` until the user goes back
/// or deletes it.
pub fn show_detail(
    console: &mut dyn Console,
    app: &mut App,
    index: usize,
) -> io::Result<DetailOutcome> {
    loop {
        let Some(product) = app.inventory.get(index) else {
            return Ok(DetailOutcome::Back);
        };
        console.draw(&mut DetailScreen::new(product, app.currency))?;

        let action = detail_action(console.read_key()?);
        debug!("Detail action: {:?}", action);
        match action {
            DetailAction::Edit => {
                if let Some(product) = app.inventory.get_mut(index) {
                    form::edit_product(console, product)?;
                }
            }
            DetailAction::Delete => {
                if delete_product(console, app, index)? {
                    console.clear()?;
                    return Ok(DetailOutcome::Deleted);
                }
            }
            DetailAction::Stats => {
                show_stats(console, app)?;
                form::pause(console)?;
            }
            DetailAction::OpenLink => {
                open_link(console, app, index)?;
                form::pause(console)?;
            }
            DetailAction::Back => return Ok(DetailOutcome::Back),
            DetailAction::Ignore => {}
        }
    }
}

fn delete_product(console: &mut dyn Console, app: &mut App, index: usize) -> io::Result<bool> {
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

/// Print the short statistics for the current inventory.
pub fn show_stats(console: &mut dyn Console, app: &App) -> io::Result<()> {
    console.print("")?;
    let Some(summary) = stats::short_stats(app.inventory.products()) else {
        return console.print("No products in stock.");
    };
    let money = |amount: f64| app.format_price(amount);
    let lines = [
        format!("Products:                {}", summary.product_count),
        format!("Total quantity in stock: {} st", summary.total_quantity),
        format!("Average price:           {}", money(summary.average_price)),
        format!("Profit per item:         {}", money(summary.profit_per_item)),
        format!("Stock value:             {}", money(summary.stock_value)),
        format!("Stock cost:              {}", money(summary.stock_cost)),
    ];
    for line in &lines {
        console.print(line)?;
    }
    Ok(())
}

/// Resolve the product's shop URL and hand it to the browser.
fn open_link(console: &mut dyn Console, app: &App, index: usize) -> io::Result<()> {
    let Some(product) = app.inventory.get(index) else {
        return Ok(());
    };
    console.print("")?;
    let url = match link::product_url(&app.link_base_url, &product.link_suffix) {
        Ok(url) => url,
        Err(LinkError::MissingSuffix) => {
            return console.print("Warning: this product has no link.");
        }
        Err(e) => return console.print(&format!("Warning: {e}")),
    };

    console.print(&format!("Opening {url}"))?;
    match console.open_url(url.as_str()) {
        Ok(()) => info!("Opened link for product {}: {}", product.id, url),
        Err(e) => console.print(&format!("Could not open the browser: {e}"))?,
    }
    Ok(())
}

// ============================================================================
// Screen
// ============================================================================

pub struct DetailScreen<'a> {
    title: TitleBar,
    card: DetailCard<'a>,
}

impl<'a> DetailScreen<'a> {
    pub fn new(product: &'a Product, currency: CurrencyFormat) -> Self {
        Self {
            title: TitleBar::new(
                format!("Product {}", product.id),
                &["Space edit", "d delete", "s stats", "o open link", "Enter/Esc back"],
            ),
            card: DetailCard::new(product, currency),
        }
    }
}

impl Component for DetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, _, card_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        self.title.render(frame, title_area);
        self.card.render(frame, card_area);
    }

    fn height(&self, width: u16) -> u16 {
        // Title, spacer, card, spacer before the prompts
        self.card.height(width).saturating_add(3)
    }
}
