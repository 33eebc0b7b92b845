//! # DetailCard Component
//!
//! All fields of one product, label on the left, value on the right.
//! Unlike the table nothing is truncated here; long descriptions wrap.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::currency::CurrencyFormat;
use crate::core::product::Product;
use crate::tui::component::Component;

pub struct DetailCard<'a> {
    pub product: &'a Product,
    pub currency: CurrencyFormat,
}

impl<'a> DetailCard<'a> {
    pub fn new(product: &'a Product, currency: CurrencyFormat) -> Self {
        Self { product, currency }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let p = self.product;
        let link = if p.link_suffix.is_empty() {
            "(none)".to_string()
        } else {
            p.link_suffix.clone()
        };
        let rows = [
            ("Id", p.id.to_string()),
            ("Name", p.name.clone()),
            ("Description", p.description.clone()),
            ("Price", self.currency.format(p.price)),
            ("Quantity", format!("{} st", p.quantity)),
            ("Cost", self.currency.format(p.cost)),
            ("Link", link),
        ];
        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {label:<13}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(value),
                ])
            })
            .collect();
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}

impl Component for DetailCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(), area);
    }

    fn height(&self, width: u16) -> u16 {
        u16::try_from(self.paragraph().line_count(width)).unwrap_or(u16::MAX)
    }
}
