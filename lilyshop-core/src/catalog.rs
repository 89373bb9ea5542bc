//! Bouquet and add-on catalog
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier for a bouquet in the catalog.
pub type BouquetId = u32;

/// Identifier for an add-on in the catalog.
pub type AddOnId = u32;

/// One ingredient line of a bouquet recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
}

/// A bouquet available for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bouquet {
    pub id: BouquetId,
    pub name: String,
    /// Price in cents to avoid floating-point issues
    pub price_cents: i64,
    pub occasion: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Whether the bouquet can currently be ordered
    #[serde(default = "default_available")]
    pub available: bool,
    /// Latest order time for same-day fulfillment, "HH:MM"
    #[serde(default)]
    pub cutoff_time: String,
}

const fn default_available() -> bool {
    true
}

/// An optional priced extra a customer may attach to a bouquet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddOnId,
    pub name: String,
    /// Price in cents to avoid floating-point issues
    pub price_cents: i64,
}

/// Complete catalog: everything a customer can put in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub bouquets: Vec<Bouquet>,
    pub add_ons: Vec<AddOn>,
    #[serde(default)]
    pub occasions: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Find a bouquet by ID.
    #[must_use]
    pub fn find_bouquet(&self, id: BouquetId) -> Option<&Bouquet> {
        self.bouquets.iter().find(|b| b.id == id)
    }

    /// Find an add-on by ID.
    #[must_use]
    pub fn find_add_on(&self, id: AddOnId) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Whether the given add-on ID exists in the catalog.
    #[must_use]
    pub fn has_add_on(&self, id: AddOnId) -> bool {
        self.find_add_on(id).is_some()
    }

    /// Bouquets filtered to a single occasion.
    #[must_use]
    pub fn bouquets_for_occasion(&self, occasion: &str) -> Vec<&Bouquet> {
        self.bouquets
            .iter()
            .filter(|b| b.occasion == occasion)
            .collect()
    }

    /// All add-ons as a flat map by ID.
    #[must_use]
    pub fn add_ons_by_id(&self) -> HashMap<AddOnId, &AddOn> {
        self.add_ons.iter().map(|a| (a.id, a)).collect()
    }
}

/// Format a cent amount as a dollar string, e.g. `$89` or `$12.50`.
#[must_use]
pub fn format_price(cents: i64) -> String {
    if cents % 100 == 0 {
        format!("${}", cents / 100)
    } else {
        format!("${}.{:02}", cents / 100, (cents % 100).abs())
    }
}
