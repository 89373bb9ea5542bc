//! Florist production board
//!
//! Three-column kanban of orders to assemble. The drag gesture lives in the
//! presentation layer; the board only owns the status transitions it causes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Bouquet, Ingredient};

/// Where an order sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProductionStatus {
    #[default]
    ToMake,
    InProgress,
    Completed,
}

impl ProductionStatus {
    /// Column order as displayed on the board.
    pub const COLUMNS: [Self; 3] = [Self::ToMake, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ToMake => "To Make",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToMake => "to-make",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Normal,
}

/// One card on the production board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub id: String,
    pub customer: String,
    pub bouquet: String,
    /// Recipe the florist assembles from
    pub ingredients: Vec<Ingredient>,
    pub status: ProductionStatus,
    pub priority: Priority,
    /// Promised hand-off time, "HH:MM"
    pub delivery_time: String,
    pub note: String,
}

impl ProductionOrder {
    /// Build a fresh `ToMake` card for a bouquet, recipe included.
    #[must_use]
    pub fn for_bouquet(id: impl Into<String>, customer: impl Into<String>, bouquet: &Bouquet) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            bouquet: bouquet.name.clone(),
            ingredients: bouquet.ingredients.clone(),
            status: ProductionStatus::ToMake,
            priority: Priority::Normal,
            delivery_time: bouquet.cutoff_time.clone(),
            note: String::new(),
        }
    }
}

/// The florist's kanban board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductionBoard {
    orders: Vec<ProductionOrder>,
}

impl ProductionBoard {
    #[must_use]
    pub fn new(orders: Vec<ProductionOrder>) -> Self {
        Self { orders }
    }

    #[must_use]
    pub fn orders(&self) -> &[ProductionOrder] {
        &self.orders
    }

    /// Orders in one column, in board order.
    #[must_use]
    pub fn orders_in(&self, status: ProductionStatus) -> Vec<&ProductionOrder> {
        self.orders.iter().filter(|o| o.status == status).collect()
    }

    #[must_use]
    pub fn find(&self, order_id: &str) -> Option<&ProductionOrder> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Orders not yet completed.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|o| o.status != ProductionStatus::Completed)
            .count()
    }

    /// Move an order to a column; this is the drop half of drag-and-drop.
    /// Unknown IDs are a silent no-op. Returns whether anything changed.
    pub fn move_order(&mut self, order_id: &str, status: ProductionStatus) -> bool {
        match self.orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) if order.status != status => {
                order.status = status;
                true
            }
            _ => false,
        }
    }

    /// Mark an in-progress order done.
    pub fn mark_done(&mut self, order_id: &str) -> bool {
        self.move_order(order_id, ProductionStatus::Completed)
    }

    /// Add a card to the board.
    pub fn admit(&mut self, order: ProductionOrder) {
        self.orders.push(order);
    }

    /// Next free order ID in the `ORD-2025-NNN` series.
    #[must_use]
    pub fn next_order_id(&self) -> String {
        let max_seen = self
            .orders
            .iter()
            .filter_map(|o| o.id.rsplit('-').next())
            .filter_map(|tail| tail.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("ORD-2025-{:03}", max_seen + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{demo_catalog, demo_production_orders};

    #[test]
    fn board_partitions_orders_by_status() {
        let board = ProductionBoard::new(demo_production_orders());
        assert_eq!(board.orders_in(ProductionStatus::ToMake).len(), 3);
        assert_eq!(board.orders_in(ProductionStatus::InProgress).len(), 2);
        assert_eq!(board.orders_in(ProductionStatus::Completed).len(), 0);
        assert_eq!(board.pending_count(), 5);
    }

    #[test]
    fn move_order_changes_status_once() {
        let mut board = ProductionBoard::new(demo_production_orders());
        assert!(board.move_order("ORD-2025-001", ProductionStatus::InProgress));
        assert!(!board.move_order("ORD-2025-001", ProductionStatus::InProgress));
        assert!(board.mark_done("ORD-2025-001"));
        assert_eq!(board.pending_count(), 4);
    }

    #[test]
    fn moving_unknown_order_is_a_no_op() {
        let mut board = ProductionBoard::new(demo_production_orders());
        let before = board.clone();
        assert!(!board.move_order("ORD-9999-999", ProductionStatus::Completed));
        assert_eq!(board, before);
    }

    #[test]
    fn admitted_card_carries_the_recipe() {
        let catalog = demo_catalog();
        let mut board = ProductionBoard::new(demo_production_orders());
        let id = board.next_order_id();
        assert_eq!(id, "ORD-2025-006");
        let bouquet = catalog.find_bouquet(2).unwrap();
        board.admit(ProductionOrder::for_bouquet(id.clone(), "Guest", bouquet));
        let card = board.find(&id).unwrap();
        assert_eq!(card.status, ProductionStatus::ToMake);
        assert_eq!(card.ingredients, bouquet.ingredients);
    }
}
