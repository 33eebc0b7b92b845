//! # Actions
//!
//! Every menu choice in Easel is a variant here, not a string. The TUI
//! turns a decoded keypress into an action, and each action is handled by
//! its own function.
//!
//! ```text
//! Key  →  ListAction / DetailAction  →  handler
//! ```

/// What a keypress means in the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    MoveUp,
    MoveDown,
    /// Open the highlighted product.
    Select,
    Quit,
    Add,
    Delete,
    /// Jump the cursor to a product by id.
    Find,
    Ignore,
}

impl ListAction {
    /// Narrow an action to what an empty list supports: Enter exits like
    /// `q`, Add still works, everything else is ignored.
    pub fn on_empty_list(self) -> Self {
        match self {
            ListAction::Select | ListAction::Quit => ListAction::Quit,
            ListAction::Add => ListAction::Add,
            _ => ListAction::Ignore,
        }
    }
}

/// What a keypress means on the product detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Edit,
    Delete,
    Stats,
    OpenLink,
    Back,
    Ignore,
}

/// How a pass through the product list ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// The product at this index was chosen.
    Selected(usize),
    /// The user asked to leave the program.
    Exit,
}

/// How the detail screen ended. Both variants return to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Back,
    Deleted,
}
