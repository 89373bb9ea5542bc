//! Finalized order records and the order sink seam
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{AddOnId, BouquetId};
use crate::checkout::{Address, Fulfillment, Identity};

/// An immutable order produced by a successful checkout.
///
/// Card details from the draft are deliberately not copied onto the record;
/// the record carries only which identity path was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub bouquet_id: BouquetId,
    pub bouquet_name: String,
    /// Bouquet unit price at the time of purchase, in cents
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub fulfillment: Fulfillment,
    /// Present only for delivery orders
    pub address: Option<Address>,
    pub add_ons: Vec<AddOnId>,
    pub identity: Identity,
    /// Total at completion, in cents
    pub total_cents: i64,
    pub placed_at: DateTime<Utc>,
}

/// Receiving collaborator for finalized orders.
///
/// The core does not decide how orders are stored or transmitted;
/// platform-specific implementations provide this.
pub trait OrderSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Accept a finalized order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be accepted.
    fn submit(&mut self, order: &Order) -> Result<(), Self::Error>;
}

/// In-memory sink that just collects orders. Used by the demo driver and
/// by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderSink {
    orders: Vec<Order>,
}

impl MemoryOrderSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderSink for MemoryOrderSink {
    type Error = std::convert::Infallible;

    fn submit(&mut self, order: &Order) -> Result<(), Self::Error> {
        self.orders.push(order.clone());
        Ok(())
    }
}
