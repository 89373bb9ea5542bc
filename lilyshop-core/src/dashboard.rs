//! Manager dashboard: metrics and inventory
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units added to a row by a quick restock.
const RESTOCK_AMOUNT: u32 = 50;

/// Stock health of an inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    #[default]
    Good,
    Low,
}

impl StockStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stock line: a flower or greenery kept on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// "stems" or "bunches"
    pub unit: String,
    /// Reorder threshold
    pub min_level: u32,
    pub status: StockStatus,
}

/// Headline numbers on the manager's overview. Static in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardMetrics {
    pub total_sales_cents: i64,
    pub orders_today: u32,
    pub pending_orders: u32,
    pub low_stock_items: u32,
    pub revenue_today_cents: i64,
    pub revenue_week_cents: i64,
}

/// Inventory held by the manager view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    #[must_use]
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Rows flagged low, in display order.
    #[must_use]
    pub fn low_stock(&self) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|i| i.status == StockStatus::Low)
            .collect()
    }

    /// Quick restock: add a fixed batch and clear the low flag.
    /// Unknown IDs are a silent no-op. Returns whether anything changed.
    pub fn restock(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity += RESTOCK_AMOUNT;
                item.status = StockStatus::Good;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{demo_inventory, demo_metrics};

    #[test]
    fn low_stock_matches_the_flagged_rows() {
        let inventory = Inventory::new(demo_inventory());
        let low: Vec<&str> = inventory.low_stock().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(low, ["Pink Peonies", "Sunflowers", "Ferns"]);
        assert_eq!(low.len() as u32, demo_metrics().low_stock_items);
    }

    #[test]
    fn restock_tops_up_and_clears_the_flag() {
        let mut inventory = Inventory::new(demo_inventory());
        assert!(inventory.restock(2));
        let peonies = inventory.find(2).unwrap();
        assert_eq!(peonies.quantity, 62);
        assert_eq!(peonies.status, StockStatus::Good);
        assert_eq!(inventory.low_stock().len(), 2);
    }

    #[test]
    fn restocking_unknown_row_is_a_no_op() {
        let mut inventory = Inventory::new(demo_inventory());
        let before = inventory.clone();
        assert!(!inventory.restock(999));
        assert_eq!(inventory, before);
    }
}
