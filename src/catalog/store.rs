//! # Catalog Store
//!
//! The product and testimonial data behind every page of the kiosk.
//!
//! Records are loaded once at startup - either the built-in menu or a JSON
//! file passed on the command line - and never change afterwards. Widgets
//! hold product ids and borrow records back from the store when they need
//! the details.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A single cake on the menu. Identity is `id`; records never change after
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    /// Flavour family the search filter matches against, e.g. "Chocolate".
    #[serde(alias = "type")]
    pub category: String,
    /// Path-like reference to the product photo, kept verbatim from the
    /// data file. The terminal draws it as a placeholder tile.
    #[serde(rename = "image", alias = "img")]
    pub image_ref: String,
    #[serde(alias = "desc")]
    pub description: String,
}

/// A customer quote for the home page. No identity beyond list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialRecord {
    #[serde(alias = "name")]
    pub author: String,
    pub text: String,
}

/// Serialized shape of a `--catalog` file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductRecord>,
    #[serde(default)]
    testimonials: Vec<TestimonialRecord>,
}

/// Owns the ordered record lists. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Store {
    products: Vec<ProductRecord>,
    testimonials: Vec<TestimonialRecord>,
}

impl Store {
    /// The menu the kiosk ships with.
    pub fn built_in() -> Self {
        let products = [
            (1, "Classic Chocolate", "Chocolate", "images/5.jpg", "Rich chocolate sponge with ganache finish."),
            (2, "Vanilla Dream", "Vanilla", "images/1.jpg", "Light vanilla sponge, buttercream filling."),
            (3, "Red Velvet", "Red Velvet", "images/15.jpg", "Classic red velvet with cream cheese."),
            (4, "Carrot Celebration", "Carrot", "images/7.jpg", "Moist carrot cake with cinnamon notes."),
            (5, "Fruit & Cream", "Fruit", "images/18.jpg", "Seasonal fruit topping with whipped cream."),
            (6, "Luxe Raspberry", "Chocolate", "images/19.jpg", "Chocolate base with raspberry compote."),
        ]
        .into_iter()
        .map(|(id, name, category, image_ref, description)| ProductRecord {
            id,
            name: name.to_string(),
            category: category.to_string(),
            image_ref: image_ref.to_string(),
            description: description.to_string(),
        })
        .collect();

        let testimonials = [
            ("Nadia", "Best birthday cake — everyone loved it!"),
            ("Sipho", "Lovely service and delicious flavors."),
            ("Amelia", "Arrived on time and the design was perfect."),
        ]
        .into_iter()
        .map(|(author, text)| TestimonialRecord {
            author: author.to_string(),
            text: text.to_string(),
        })
        .collect();

        Self {
            products,
            testimonials,
        }
    }

    /// Build a store from explicit record lists, rejecting catalogs the
    /// widgets cannot work with (no products, or colliding ids).
    pub fn new(
        products: Vec<ProductRecord>,
        testimonials: Vec<TestimonialRecord>,
    ) -> Result<Self> {
        if products.is_empty() {
            bail!("catalog has no products");
        }
        let mut seen = HashSet::new();
        for record in &products {
            if !seen.insert(record.id) {
                bail!("duplicate product id {} in catalog", record.id);
            }
        }
        Ok(Self {
            products,
            testimonials,
        })
    }

    /// Load a replacement catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
        Self::new(file.products, file.testimonials)
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn testimonials(&self) -> &[TestimonialRecord] {
        &self.testimonials
    }

    /// Look a product up by id. Cards hold ids, never records.
    pub fn product_by_id(&self, id: u32) -> Option<&ProductRecord> {
        self.products.iter().find(|record| record.id == id)
    }
}
