//! Compiled-in demo data for the storefront
//!
//! The demo runs entirely on static data: no backend, no persistence.
//! Every board and dashboard seeds itself from the constructors here.

use crate::catalog::{AddOn, Bouquet, Catalog, Ingredient};
use crate::dashboard::{DashboardMetrics, InventoryItem, StockStatus};
use crate::delivery::{DeliveryStop, StopStatus};
use crate::production::{Priority, ProductionOrder, ProductionStatus};

fn ingredient(name: &str, quantity: u32) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        quantity,
    }
}

#[allow(clippy::too_many_lines)]
#[must_use]
pub fn demo_catalog() -> Catalog {
    Catalog {
        bouquets: vec![
            Bouquet {
                id: 1,
                name: "Valentine's Romance".to_string(),
                price_cents: 8900,
                occasion: "Romance".to_string(),
                description: "A stunning arrangement of red roses, pink peonies, and baby's breath."
                    .to_string(),
                ingredients: vec![
                    ingredient("Red Roses", 12),
                    ingredient("Pink Peonies", 5),
                    ingredient("Baby's Breath", 3),
                    ingredient("Eucalyptus", 4),
                ],
                available: true,
                cutoff_time: "14:00".to_string(),
            },
            Bouquet {
                id: 2,
                name: "Birthday Bliss".to_string(),
                price_cents: 6800,
                occasion: "Birthday".to_string(),
                description: "Bright sunflowers, daisies, and colorful gerberas to celebrate."
                    .to_string(),
                ingredients: vec![
                    ingredient("Sunflowers", 6),
                    ingredient("Daisies", 8),
                    ingredient("Gerberas", 4),
                    ingredient("Greenery", 5),
                ],
                available: true,
                cutoff_time: "12:00".to_string(),
            },
            Bouquet {
                id: 3,
                name: "Sympathy Whites".to_string(),
                price_cents: 9500,
                occasion: "Sympathy".to_string(),
                description: "Elegant white lilies and roses for moments of remembrance."
                    .to_string(),
                ingredients: vec![
                    ingredient("White Lilies", 6),
                    ingredient("White Roses", 8),
                    ingredient("Carnations", 5),
                    ingredient("Ferns", 6),
                ],
                available: true,
                cutoff_time: "13:00".to_string(),
            },
            Bouquet {
                id: 4,
                name: "Spring Garden".to_string(),
                price_cents: 7500,
                occasion: "Just because".to_string(),
                description: "A delightful mix of seasonal tulips, daffodils, and hyacinths."
                    .to_string(),
                ingredients: vec![
                    ingredient("Tulips", 10),
                    ingredient("Daffodils", 6),
                    ingredient("Hyacinths", 3),
                    ingredient("Pussy Willow", 4),
                ],
                available: true,
                cutoff_time: "14:00".to_string(),
            },
            Bouquet {
                id: 5,
                name: "Thank You Bouquet".to_string(),
                price_cents: 5800,
                occasion: "Thank you".to_string(),
                description: "Soft pink carnations and alstroemeria to express gratitude."
                    .to_string(),
                ingredients: vec![
                    ingredient("Pink Carnations", 8),
                    ingredient("Alstroemeria", 6),
                    ingredient("Statice", 4),
                    ingredient("Ruscus", 5),
                ],
                available: true,
                cutoff_time: "14:00".to_string(),
            },
            Bouquet {
                id: 6,
                name: "Sunset Dreams".to_string(),
                price_cents: 8200,
                occasion: "Romance".to_string(),
                description: "Warm oranges and peaches with roses and chrysanthemums.".to_string(),
                ingredients: vec![
                    ingredient("Orange Roses", 8),
                    ingredient("Chrysanthemums", 6),
                    ingredient("Peach Carnations", 5),
                    ingredient("Solidago", 4),
                ],
                available: true,
                cutoff_time: "14:00".to_string(),
            },
        ],
        add_ons: vec![
            AddOn {
                id: 1,
                name: "Scented Candle".to_string(),
                price_cents: 2400,
            },
            AddOn {
                id: 2,
                name: "Greeting Card".to_string(),
                price_cents: 600,
            },
            AddOn {
                id: 3,
                name: "Chocolate Box".to_string(),
                price_cents: 1800,
            },
            AddOn {
                id: 4,
                name: "Vase".to_string(),
                price_cents: 3200,
            },
            AddOn {
                id: 5,
                name: "Teddy Bear".to_string(),
                price_cents: 2800,
            },
            AddOn {
                id: 6,
                name: "Balloon".to_string(),
                price_cents: 800,
            },
        ],
        occasions: [
            "Birthday",
            "Romance",
            "Thank you",
            "Sympathy",
            "Just because",
        ]
        .iter()
        .map(ToString::to_string)
        .collect(),
    }
}

#[must_use]
pub fn demo_production_orders() -> Vec<ProductionOrder> {
    vec![
        ProductionOrder {
            id: "ORD-2025-001".to_string(),
            customer: "Sarah Johnson".to_string(),
            bouquet: "Valentine's Romance".to_string(),
            ingredients: vec![
                ingredient("Red Roses", 12),
                ingredient("Pink Peonies", 5),
                ingredient("Baby's Breath", 3),
                ingredient("Eucalyptus", 4),
            ],
            status: ProductionStatus::ToMake,
            priority: Priority::High,
            delivery_time: "14:00".to_string(),
            note: "Please include extra ribbon".to_string(),
        },
        ProductionOrder {
            id: "ORD-2025-002".to_string(),
            customer: "Michael Chen".to_string(),
            bouquet: "Birthday Bliss".to_string(),
            ingredients: vec![
                ingredient("Sunflowers", 6),
                ingredient("Daisies", 8),
                ingredient("Gerberas", 4),
                ingredient("Greenery", 5),
            ],
            status: ProductionStatus::ToMake,
            priority: Priority::Normal,
            delivery_time: "15:30".to_string(),
            note: String::new(),
        },
        ProductionOrder {
            id: "ORD-2025-003".to_string(),
            customer: "Emma Williams".to_string(),
            bouquet: "Spring Garden".to_string(),
            ingredients: vec![
                ingredient("Tulips", 10),
                ingredient("Daffodils", 6),
                ingredient("Hyacinths", 3),
                ingredient("Pussy Willow", 4),
            ],
            status: ProductionStatus::InProgress,
            priority: Priority::Normal,
            delivery_time: "16:00".to_string(),
            note: "Allergic to lilies - confirmed OK".to_string(),
        },
        ProductionOrder {
            id: "ORD-2025-004".to_string(),
            customer: "David Brown".to_string(),
            bouquet: "Sympathy Whites".to_string(),
            ingredients: vec![
                ingredient("White Lilies", 6),
                ingredient("White Roses", 8),
                ingredient("Carnations", 5),
                ingredient("Ferns", 6),
            ],
            status: ProductionStatus::ToMake,
            priority: Priority::High,
            delivery_time: "13:00".to_string(),
            note: "Funeral delivery - be discreet".to_string(),
        },
        ProductionOrder {
            id: "ORD-2025-005".to_string(),
            customer: "Lisa Garcia".to_string(),
            bouquet: "Thank You Bouquet".to_string(),
            ingredients: vec![
                ingredient("Pink Carnations", 8),
                ingredient("Alstroemeria", 6),
                ingredient("Statice", 4),
                ingredient("Ruscus", 5),
            ],
            status: ProductionStatus::InProgress,
            priority: Priority::Normal,
            delivery_time: "17:00".to_string(),
            note: String::new(),
        },
    ]
}

#[must_use]
pub fn demo_delivery_stops() -> Vec<DeliveryStop> {
    vec![
        DeliveryStop {
            id: "ORD-2025-001".to_string(),
            recipient: "Sarah Johnson".to_string(),
            address: "123 Maple Street, Apt 4B".to_string(),
            phone: "(555) 123-4567".to_string(),
            instructions: "Gate code: 4729. Leave with doorman.".to_string(),
            zone: "Downtown".to_string(),
            status: StopStatus::Ready,
            bouquet: "Valentine's Romance".to_string(),
        },
        DeliveryStop {
            id: "ORD-2025-002".to_string(),
            recipient: "Michael Chen".to_string(),
            address: "456 Oak Avenue, Suite 200".to_string(),
            phone: "(555) 234-5678".to_string(),
            instructions: "Office building. Call upon arrival.".to_string(),
            zone: "Midtown".to_string(),
            status: StopStatus::Ready,
            bouquet: "Birthday Bliss".to_string(),
        },
        DeliveryStop {
            id: "ORD-2025-003".to_string(),
            recipient: "Emma Williams".to_string(),
            address: "789 Pine Road".to_string(),
            phone: "(555) 345-6789".to_string(),
            instructions: "Ring doorbell. Dog may bark.".to_string(),
            zone: "Uptown".to_string(),
            status: StopStatus::Ready,
            bouquet: "Spring Garden".to_string(),
        },
        DeliveryStop {
            id: "ORD-2025-005".to_string(),
            recipient: "Lisa Garcia".to_string(),
            address: "321 Elm Boulevard".to_string(),
            phone: "(555) 456-7890".to_string(),
            instructions: "Side entrance. Text when arrived.".to_string(),
            zone: "Downtown".to_string(),
            status: StopStatus::Ready,
            bouquet: "Thank You Bouquet".to_string(),
        },
    ]
}

#[must_use]
pub fn demo_inventory() -> Vec<InventoryItem> {
    let stems = |id: u32, name: &str, quantity: u32, min_level: u32, status: StockStatus| {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity,
            unit: "stems".to_string(),
            min_level,
            status,
        }
    };
    let bunches = |id: u32, name: &str, quantity: u32, min_level: u32, status: StockStatus| {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity,
            unit: "bunches".to_string(),
            min_level,
            status,
        }
    };
    vec![
        stems(1, "Red Roses", 45, 20, StockStatus::Good),
        stems(2, "Pink Peonies", 12, 15, StockStatus::Low),
        stems(3, "White Lilies", 28, 15, StockStatus::Good),
        stems(4, "Sunflowers", 8, 12, StockStatus::Low),
        stems(5, "Tulips", 60, 25, StockStatus::Good),
        bunches(6, "Eucalyptus", 35, 10, StockStatus::Good),
        bunches(7, "Baby's Breath", 15, 8, StockStatus::Good),
        bunches(8, "Ferns", 10, 12, StockStatus::Low),
        stems(9, "Daisies", 42, 20, StockStatus::Good),
        stems(10, "Carnations", 55, 20, StockStatus::Good),
    ]
}

#[must_use]
pub const fn demo_metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_sales_cents: 284_700,
        orders_today: 24,
        pending_orders: 8,
        low_stock_items: 3,
        revenue_today_cents: 185_600,
        revenue_week_cents: 1_245_000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_consistent() {
        let catalog = demo_catalog();
        assert_eq!(catalog.bouquets.len(), 6);
        assert_eq!(catalog.add_ons.len(), 6);
        assert_eq!(catalog.occasions.len(), 5);
        for bouquet in &catalog.bouquets {
            assert!(bouquet.price_cents > 0);
            assert!(
                catalog.occasions.contains(&bouquet.occasion),
                "unknown occasion {}",
                bouquet.occasion
            );
        }
    }

    #[test]
    fn demo_boards_reference_known_bouquets() {
        let catalog = demo_catalog();
        let names: Vec<&str> = catalog.bouquets.iter().map(|b| b.name.as_str()).collect();
        for order in demo_production_orders() {
            assert!(names.contains(&order.bouquet.as_str()));
        }
        for stop in demo_delivery_stops() {
            assert!(names.contains(&stop.bouquet.as_str()));
        }
    }
}
