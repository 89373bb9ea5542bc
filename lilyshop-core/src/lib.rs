//! Lily Shop Storefront Core
//!
//! Platform-agnostic logic for a role-based florist storefront demo:
//! customers run a multi-step checkout, the florist works a production
//! board, the driver confirms deliveries, and the manager watches metrics
//! and inventory. All data is compiled in; there is no persistence,
//! network, or authentication layer.

pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod data;
pub mod delivery;
pub mod order;
pub mod production;
pub mod shop;

// Re-export commonly used types
pub use catalog::{AddOn, AddOnId, Bouquet, BouquetId, Catalog, Ingredient, format_price};
pub use checkout::{
    Address, AdvanceOutcome, CheckoutError, CheckoutStep, CheckoutWizard, Fulfillment, Identity,
    OrderDraft, PaymentInfo, can_advance, compute_total,
};
pub use dashboard::{DashboardMetrics, Inventory, InventoryItem, StockStatus};
pub use data::{
    demo_catalog, demo_delivery_stops, demo_inventory, demo_metrics, demo_production_orders,
};
pub use delivery::{DeliveryRun, DeliveryStop, StopStatus};
pub use order::{MemoryOrderSink, Order, OrderSink};
pub use production::{
    Priority, ProductionBoard, ProductionOrder, ProductionStatus,
};
pub use shop::{Storefront, StorefrontError};
