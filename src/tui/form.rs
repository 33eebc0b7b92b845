//! # Forms
//!
//! Line-based prompts for adding and editing products, and for y/n
//! confirmation.
//!
//! One input policy applies to every field:
//! - A blank answer keeps the current value. When there is none (Add), a
//!   blank numeric answer is asked again.
//! - A non-blank answer that does not parse is rejected and asked again,
//!   as many times as it takes.

use std::io;

use log::info;

use crate::core::product::{NewProduct, Product, normalize_link_suffix, parse_amount, parse_quantity};
use crate::core::state::App;
use crate::tui::console::Console;

/// Ask a yes/no question. Only `y` / `yes` (any case) count as yes.
pub fn confirm(console: &mut dyn Console, question: &str) -> io::Result<bool> {
    let answer = console.read_line(&format!("{question} (y/n): "))?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Wait for Enter so the user can read what was printed.
pub fn pause(console: &mut dyn Console) -> io::Result<()> {
    console.read_line("Press Enter to continue...").map(|_| ())
}

/// Prompt until `parse` accepts the answer, or until a blank answer when
/// `current` supplies a value to keep.
fn prompt_value<T: Copy>(
    console: &mut dyn Console,
    prompt: &str,
    what: &str,
    parse: fn(&str) -> Option<T>,
    current: Option<T>,
) -> io::Result<T> {
    loop {
        let input = console.read_line(prompt)?;
        let input = input.trim();
        if input.is_empty() {
            if let Some(value) = current {
                return Ok(value);
            }
            console.print(&format!("A {what} is required."))?;
            continue;
        }
        match parse(input) {
            Some(value) => return Ok(value),
            None => console.print(&format!("'{input}' is not a valid {what}, try again."))?,
        }
    }
}

/// Prompt for a text field. Blank keeps `current`.
fn prompt_text(console: &mut dyn Console, prompt: &str, current: &str) -> io::Result<String> {
    let input = console.read_line(prompt)?;
    let input = input.trim();
    Ok(if input.is_empty() {
        current.to_string()
    } else {
        input.to_string()
    })
}

/// Ask for every field of a new product and append it. Returns the new id.
pub fn add_product(console: &mut dyn Console, app: &mut App) -> io::Result<u32> {
    console.print("")?;
    console.print("Add product")?;

    let name = prompt_text(console, "Name: ", "")?;
    let description = prompt_text(console, "Description: ", "")?;
    let price = prompt_value(console, "Price: ", "price", parse_amount, None)?;
    let quantity = prompt_value(console, "Quantity: ", "quantity", parse_quantity, None)?;
    let cost = prompt_value(console, "Cost: ", "cost", parse_amount, None)?;
    let link_suffix = normalize_link_suffix(&console.read_line("Link (optional): ")?);

    let id = app.inventory.add(NewProduct {
        name: name.clone(),
        description,
        price,
        quantity,
        cost,
        link_suffix,
    });
    console.print(&format!("Product \"{name}\" was added with id {id}."))?;
    pause(console)?;
    Ok(id)
}

/// Walk through every editable field, showing the current value first.
/// The id is never offered for editing.
pub fn edit_product(console: &mut dyn Console, product: &mut Product) -> io::Result<()> {
    console.print("")?;
    console.print(&format!(
        "Editing product {} (leave a field blank to keep it)",
        product.id
    ))?;

    console.print(&format!("Current name: {}", product.name))?;
    product.name = prompt_text(console, "New name: ", &product.name)?;

    console.print(&format!("Current description: {}", product.description))?;
    product.description = prompt_text(console, "New description: ", &product.description)?;

    console.print(&format!("Current price: {}", product.price))?;
    product.price = prompt_value(console, "New price: ", "price", parse_amount, Some(product.price))?;

    console.print(&format!("Current quantity: {}", product.quantity))?;
    product.quantity = prompt_value(
        console,
        "New quantity: ",
        "quantity",
        parse_quantity,
        Some(product.quantity),
    )?;

    console.print(&format!("Current cost: {}", product.cost))?;
    product.cost = prompt_value(console, "New cost: ", "cost", parse_amount, Some(product.cost))?;

    console.print(&format!("Current link: {}", product.link_suffix))?;
    let link = prompt_text(console, "New link: ", &product.link_suffix)?;
    product.link_suffix = normalize_link_suffix(&link);

    info!("Edited product {}", product.id);
    console.print(&format!("Product {} was updated.", product.id))
}
