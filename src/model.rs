//! Snapshot types stored by the collections.
//!
//! Field names serialize in camelCase so persisted state stays readable by
//! the surrounding web application.

use serde::{Deserialize, Serialize};

/// A product snapshot as shown on listing and detail pages.
///
/// Only `id`, `name`, `price` and `image` are required; the rest is carried
/// along when the backend supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            original_price: None,
            category: None,
            brand: None,
            rating: None,
            stock: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// One row of the cart.
///
/// `id` identifies the line, not the product: the same product added twice
/// yields two lines with distinct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl CartLine {
    /// `price × quantity`, unrounded.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A cart line before the cart assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub selected_color: Option<String>,
    pub selected_size: Option<String>,
}

impl NewCartLine {
    /// A line for `quantity` units of `product` with no variant selected.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            selected_color: None,
            selected_size: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.selected_color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.selected_size = Some(size.into());
        self
    }

    pub(crate) fn into_line(self, id: String) -> CartLine {
        CartLine {
            id,
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity: self.quantity.max(1),
            selected_color: self.selected_color,
            selected_size: self.selected_size,
        }
    }
}

/// A wishlist entry. At most one per `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self {
            id: format!("wish-{}", product.id),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}
