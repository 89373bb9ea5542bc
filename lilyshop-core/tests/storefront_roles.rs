//! Cross-role walkthrough: an order placed by a customer flows onto the
//! florist's board while the driver and manager work their own views.

use lilyshop_core::{
    AdvanceOutcome, DeliveryRun, Fulfillment, Inventory, MemoryOrderSink, ProductionBoard,
    ProductionOrder, ProductionStatus, Storefront, demo_delivery_stops, demo_inventory,
    demo_production_orders,
};

#[test]
fn placed_order_lands_on_the_production_board() {
    let mut shop = Storefront::with_demo_catalog(MemoryOrderSink::new());
    let mut board = ProductionBoard::new(demo_production_orders());

    let mut wizard = shop.begin_checkout(3, 1).unwrap();
    wizard.set_fulfillment(Fulfillment::Pickup);
    wizard.advance(shop.catalog());
    wizard.advance(shop.catalog());
    wizard.advance(shop.catalog());
    let AdvanceOutcome::Completed(order) = wizard.advance(shop.catalog()) else {
        panic!("checkout should have completed");
    };
    assert_eq!(order.total_cents, 9500);

    shop.place(&order).unwrap();
    assert_eq!(shop.sink().len(), 1);

    let card_id = board.next_order_id();
    let bouquet = shop.catalog().find_bouquet(order.bouquet_id).unwrap();
    board.admit(ProductionOrder::for_bouquet(card_id.clone(), "Guest", bouquet));

    let card = board.find(&card_id).unwrap();
    assert_eq!(card.bouquet, "Sympathy Whites");
    assert_eq!(card.status, ProductionStatus::ToMake);
    assert_eq!(board.pending_count(), 6);
}

#[test]
fn florist_walks_a_card_across_the_board() {
    let mut board = ProductionBoard::new(demo_production_orders());
    board.move_order("ORD-2025-004", ProductionStatus::InProgress);
    board.mark_done("ORD-2025-004");
    assert_eq!(
        board.find("ORD-2025-004").unwrap().status,
        ProductionStatus::Completed
    );
    assert_eq!(board.orders_in(ProductionStatus::Completed).len(), 1);
}

#[test]
fn driver_clears_the_run_stop_by_stop() {
    let mut run = DeliveryRun::new(demo_delivery_stops());
    let ids: Vec<String> = run.pending().iter().map(|s| s.id.clone()).collect();
    for id in &ids {
        assert!(run.mark_delivered(id));
    }
    assert!(run.pending().is_empty());
    assert_eq!(run.completed().len(), ids.len());
}

#[test]
fn manager_restocks_every_low_row() {
    let mut inventory = Inventory::new(demo_inventory());
    let low_ids: Vec<u32> = inventory.low_stock().iter().map(|i| i.id).collect();
    assert_eq!(low_ids.len(), 3);
    for id in low_ids {
        assert!(inventory.restock(id));
    }
    assert!(inventory.low_stock().is_empty());
}
