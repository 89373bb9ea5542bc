//! Headless walkthrough of the Lily Shop storefront demo.
//!
//! Each role from the demo is a subcommand: browse the catalog, run a
//! scripted checkout, work the production board, run the deliveries, and
//! print the manager's report.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;

use lilyshop_core::{
    AdvanceOutcome, DeliveryRun, Fulfillment, Identity, Inventory, MemoryOrderSink, Order,
    OrderSink, PaymentInfo, Priority, ProductionBoard, ProductionOrder, ProductionStatus,
    Storefront, demo_delivery_stops, demo_inventory, demo_metrics, demo_production_orders,
    format_price,
};

#[derive(Debug, Parser)]
#[command(name = "lilyshop", version)]
#[command(about = "Walk through the Lily Shop florist demo from the command line")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List bouquets and add-ons
    Catalog,
    /// Run a scripted checkout and place the order
    Checkout(CheckoutArgs),
    /// Show the florist's production board
    Production,
    /// Run the driver's delivery route
    Deliveries,
    /// Print the manager's dashboard report
    Report {
        /// Emit the metrics block as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, clap::Args)]
struct CheckoutArgs {
    /// Bouquet ID to buy
    #[arg(long, default_value_t = 2)]
    bouquet: u32,

    /// How many of the bouquet
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Pick up at the studio instead of delivery
    #[arg(long)]
    pickup: bool,

    /// Add-on IDs to attach (comma-separated)
    #[arg(long, value_delimiter = ',')]
    add_ons: Vec<u32>,

    /// Check out against an account with demo card details
    #[arg(long)]
    account: bool,

    /// Delivery street address
    #[arg(long, default_value = "123 Maple Street, Apt 4B")]
    street: String,

    /// Delivery city
    #[arg(long, default_value = "Plant City")]
    city: String,

    /// Delivery postal code
    #[arg(long, default_value = "12345")]
    postal_code: String,

    /// Contact phone number
    #[arg(long, default_value = "(555) 123-4567")]
    phone: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Catalog => show_catalog(),
        Command::Checkout(checkout) => run_checkout_command(&checkout),
        Command::Production => show_production(),
        Command::Deliveries => run_deliveries(),
        Command::Report { json } => show_report(json),
    }
}

fn show_catalog() -> Result<()> {
    let shop = Storefront::with_demo_catalog(MemoryOrderSink::new());
    let catalog = shop.catalog();

    println!("{}", "Bouquets".bold().underline());
    for bouquet in &catalog.bouquets {
        println!(
            "  {:>2}  {:<22} {:>7}  {}",
            bouquet.id,
            bouquet.name,
            format_price(bouquet.price_cents).green(),
            bouquet.occasion.dimmed()
        );
    }
    println!();
    println!("{}", "Add-ons".bold().underline());
    for add_on in &catalog.add_ons {
        println!(
            "  {:>2}  {:<22} {:>7}",
            add_on.id,
            add_on.name,
            format_price(add_on.price_cents).green()
        );
    }
    Ok(())
}

/// Drive the wizard through every step and return the finalized order.
fn run_checkout<S>(shop: &Storefront<S>, args: &CheckoutArgs) -> Result<Order>
where
    S: OrderSink,
{
    let mut wizard = shop
        .begin_checkout(args.bouquet, args.quantity)
        .context("could not open the checkout")?;
    let catalog = shop.catalog();

    wizard.set_fulfillment(if args.pickup {
        Fulfillment::Pickup
    } else {
        Fulfillment::Delivery
    });
    wizard.set_street(args.street.clone());
    wizard.set_city(args.city.clone());
    wizard.set_postal_code(args.postal_code.clone());
    wizard.set_phone(args.phone.clone());

    for id in &args.add_ons {
        // Unknown IDs are silently ignored by the wizard; warn here instead.
        if !catalog.has_add_on(*id) {
            log::warn!("ignoring unknown add-on id {id}");
        }
        wizard.toggle_add_on(*id, catalog);
    }

    if args.account {
        wizard.set_identity(Identity::Account);
        wizard.set_payment(PaymentInfo {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry: "12/30".to_string(),
            cvv: "123".to_string(),
            cardholder: "Demo Customer".to_string(),
        });
    }

    loop {
        let step = wizard.step();
        match wizard.advance(catalog) {
            AdvanceOutcome::Moved(next) => {
                log::debug!("step '{step}' passed, now at '{next}'");
            }
            AdvanceOutcome::Blocked(step) => {
                bail!("checkout blocked at step '{step}': required fields missing");
            }
            AdvanceOutcome::Completed(order) => return Ok(order),
        }
    }
}

fn run_checkout_command(args: &CheckoutArgs) -> Result<()> {
    let mut shop = Storefront::with_demo_catalog(MemoryOrderSink::new());
    let mut board = ProductionBoard::new(demo_production_orders());

    let order = run_checkout(&shop, args)?;
    shop.place(&order).context("order sink refused the order")?;

    println!("{}", "Order placed".bold().green());
    println!(
        "  {} x{}  {}",
        order.bouquet_name,
        order.quantity,
        format_price(order.total_cents).green().bold()
    );
    match (&order.fulfillment, &order.address) {
        (Fulfillment::Delivery, Some(address)) => {
            println!("  Deliver to {}, {}", address.street, address.city);
        }
        _ => println!("  Studio pickup at 123 Bloom Street"),
    }

    // Hand the order to the florist.
    let card_id = board.next_order_id();
    let bouquet = shop
        .catalog()
        .find_bouquet(order.bouquet_id)
        .context("placed order references a missing bouquet")?;
    board.admit(ProductionOrder::for_bouquet(card_id.clone(), "Guest", bouquet));
    println!("  Production card {card_id} queued for the florist");

    Ok(())
}

fn show_production() -> Result<()> {
    let board = ProductionBoard::new(demo_production_orders());
    for status in ProductionStatus::COLUMNS {
        let cards = board.orders_in(status);
        println!("{} ({})", status.title().bold().underline(), cards.len());
        for card in cards {
            let flag = match card.priority {
                Priority::High => " PRIORITY".yellow().to_string(),
                Priority::Normal => String::new(),
            };
            println!("  {}  {:<22} {}{}", card.id.dimmed(), card.bouquet, card.delivery_time, flag);
            if !card.note.is_empty() {
                println!("      {}", card.note.italic());
            }
        }
        println!();
    }
    println!("{} orders pending", board.pending_count());
    Ok(())
}

fn run_deliveries() -> Result<()> {
    let mut run = DeliveryRun::new(demo_delivery_stops());
    let ids: Vec<String> = run.pending().iter().map(|s| s.id.clone()).collect();

    for id in &ids {
        let stop = run.find(id).context("pending stop vanished")?;
        println!(
            "{} {} -> {} ({})",
            "Delivering".cyan(),
            stop.bouquet,
            stop.recipient,
            stop.zone.dimmed()
        );
        if !stop.instructions.is_empty() {
            println!("    {}", stop.instructions.italic());
        }
        run.mark_delivered(id);
    }

    println!();
    println!(
        "{}: {} delivered, {} pending",
        "Route complete".bold().green(),
        run.completed().len(),
        run.pending().len()
    );
    Ok(())
}

fn show_report(json: bool) -> Result<()> {
    let metrics = demo_metrics();
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("{}", "Shop report".bold().underline());
    println!("  Total sales      {}", format_price(metrics.total_sales_cents).green());
    println!("  Orders today     {}", metrics.orders_today);
    println!("  Pending orders   {}", metrics.pending_orders);
    println!("  Revenue today    {}", format_price(metrics.revenue_today_cents).green());
    println!("  Revenue (week)   {}", format_price(metrics.revenue_week_cents).green());

    let inventory = Inventory::new(demo_inventory());
    let low = inventory.low_stock();
    println!();
    if low.is_empty() {
        println!("{}", "All stock levels healthy".green());
    } else {
        println!("{} ({})", "Low stock".yellow().bold(), low.len());
        for item in low {
            println!(
                "  {:<16} {:>3} {} (min {})",
                item.name, item.quantity, item.unit, item.min_level
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_args() -> CheckoutArgs {
        CheckoutArgs {
            bouquet: 2,
            quantity: 1,
            pickup: false,
            add_ons: Vec::new(),
            account: false,
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            postal_code: "00000".to_string(),
            phone: "555-0000".to_string(),
        }
    }

    #[test]
    fn scripted_checkout_reaches_completion() {
        let shop = Storefront::with_demo_catalog(MemoryOrderSink::new());
        let order = run_checkout(&shop, &demo_args()).unwrap();
        assert_eq!(order.total_cents, 6800);
        assert_eq!(order.fulfillment, Fulfillment::Delivery);
    }

    #[test]
    fn scripted_checkout_applies_add_ons_and_quantity() {
        let shop = Storefront::with_demo_catalog(MemoryOrderSink::new());
        let mut args = demo_args();
        args.bouquet = 1;
        args.quantity = 2;
        args.pickup = true;
        args.add_ons = vec![1, 2, 999];
        let order = run_checkout(&shop, &args).unwrap();
        // ($89 + $24 + $6) * 2, unknown id ignored
        assert_eq!(order.total_cents, 23_800);
        assert_eq!(order.add_ons, vec![1, 2]);
        assert!(order.address.is_none());
    }

    #[test]
    fn unknown_bouquet_fails_before_the_wizard_starts() {
        let shop = Storefront::with_demo_catalog(MemoryOrderSink::new());
        let mut args = demo_args();
        args.bouquet = 99;
        assert!(run_checkout(&shop, &args).is_err());
    }
}
