use lilyshop_core::{
    AdvanceOutcome, CheckoutStep, CheckoutWizard, Fulfillment, Identity, MemoryOrderSink,
    Storefront, compute_total, demo_catalog,
};

fn wizard(bouquet_id: u32, quantity: u32) -> CheckoutWizard {
    let shop = Storefront::with_demo_catalog(MemoryOrderSink::new());
    shop.begin_checkout(bouquet_id, quantity).unwrap()
}

#[test]
fn guest_delivery_checkout_end_to_end() {
    // Birthday Bliss ($68), delivery, full address, no add-ons, guest.
    let catalog = demo_catalog();
    let mut wizard = wizard(2, 1);

    wizard.set_fulfillment(Fulfillment::Delivery);
    assert_eq!(
        wizard.advance(&catalog),
        AdvanceOutcome::Moved(CheckoutStep::Address)
    );

    wizard.set_street("1 Main St");
    wizard.set_city("Springfield");
    wizard.set_postal_code("00000");
    wizard.set_phone("555-0000");
    assert_eq!(
        wizard.advance(&catalog),
        AdvanceOutcome::Moved(CheckoutStep::AddOns)
    );
    assert_eq!(
        wizard.advance(&catalog),
        AdvanceOutcome::Moved(CheckoutStep::Payment)
    );

    wizard.set_identity(Identity::Guest);
    let outcome = wizard.advance(&catalog);
    let AdvanceOutcome::Completed(order) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(order.total_cents, 6800);
    assert_eq!(order.quantity, 1);
    assert_eq!(order.fulfillment, Fulfillment::Delivery);
    assert_eq!(order.address.as_ref().unwrap().city, "Springfield");
    assert!(order.add_ons.is_empty());
    assert!(wizard.is_completed());
}

#[test]
fn delivery_with_missing_city_is_refused_at_the_address_step() {
    let catalog = demo_catalog();
    let mut wizard = wizard(2, 1);

    wizard.set_fulfillment(Fulfillment::Delivery);
    wizard.advance(&catalog);
    wizard.set_street("1 Main St");
    wizard.set_postal_code("00000");
    wizard.set_phone("555-0000");

    assert_eq!(
        wizard.advance(&catalog),
        AdvanceOutcome::Blocked(CheckoutStep::Address)
    );
    assert_eq!(wizard.step(), CheckoutStep::Address);
}

#[test]
fn step_stays_in_bounds_under_arbitrary_navigation() {
    let catalog = demo_catalog();
    let mut wizard = wizard(1, 1);
    wizard.set_fulfillment(Fulfillment::Pickup);

    // Hammer the controls; the step must always be a legal step.
    for round in 0..20 {
        if round % 3 == 0 {
            wizard.retreat();
        } else {
            match wizard.advance(&catalog) {
                AdvanceOutcome::Completed(_) => break,
                AdvanceOutcome::Moved(_) | AdvanceOutcome::Blocked(_) => {}
            }
        }
        assert!(wizard.step() >= CheckoutStep::FIRST);
        assert!(wizard.step() <= CheckoutStep::LAST);
    }
}

#[test]
fn double_toggle_restores_the_selection() {
    let catalog = demo_catalog();
    let mut wizard = wizard(1, 1);
    wizard.toggle_add_on(3, &catalog);
    let before = wizard.draft().selected_add_ons().clone();

    wizard.toggle_add_on(5, &catalog);
    wizard.toggle_add_on(5, &catalog);
    assert_eq!(wizard.draft().selected_add_ons(), &before);
}

#[test]
fn total_is_a_pure_function_of_the_draft() {
    let catalog = demo_catalog();
    let mut wizard = wizard(1, 2);
    wizard.toggle_add_on(1, &catalog); // Scented Candle $24
    wizard.toggle_add_on(2, &catalog); // Greeting Card $6

    // ($89 + $24 + $6) * 2
    assert_eq!(compute_total(wizard.draft(), &catalog), 23_800);
    // Recomputing changes nothing.
    assert_eq!(compute_total(wizard.draft(), &catalog), 23_800);

    wizard.set_quantity(3);
    assert_eq!(compute_total(wizard.draft(), &catalog), 35_700);
}
