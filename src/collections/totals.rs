//! Derived cart totals.
//!
//! Totals are recomputed from the lines on every call and never stored.
//! Rounding to cents happens only in [`format_amount`].

use serde::Serialize;

use crate::model::CartLine;

/// Total for a single cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotal {
    pub line_id: String,
    pub product_id: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub total: f64,
}

/// Line totals plus the grand total of a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub lines: Vec<LineTotal>,
    pub subtotal: f64,
    pub item_count: u32,
}

impl CartTotals {
    pub fn compute(lines: &[CartLine]) -> Self {
        let lines: Vec<LineTotal> = lines
            .iter()
            .map(|line| LineTotal {
                line_id: line.id.clone(),
                product_id: line.product_id.clone(),
                unit_price: line.price,
                quantity: line.quantity,
                total: line.line_total(),
            })
            .collect();

        Self {
            subtotal: lines.iter().map(|l| l.total).sum(),
            item_count: lines
                .iter()
                .fold(0u32, |acc, l| acc.saturating_add(l.quantity)),
            lines,
        }
    }
}

/// Format an amount with two decimals for display.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            product_id: format!("p-{}", id),
            name: id.to_string(),
            price,
            image: String::new(),
            quantity,
            selected_color: None,
            selected_size: None,
        }
    }

    #[test]
    fn test_empty_cart() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.item_count, 0);
        assert!(totals.lines.is_empty());
    }

    #[test]
    fn test_sums_lines() {
        let totals = CartTotals::compute(&[line("a", 2.5, 2), line("b", 10.0, 1)]);
        assert_eq!(totals.subtotal, 15.0);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.lines.first().map(|l| l.total), Some(5.0));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
        assert_eq!(format_amount(19.999), "20.00");
        assert_eq!(format_amount(5.0), "5.00");
    }
}
