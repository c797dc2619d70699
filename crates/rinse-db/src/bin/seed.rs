//! # Seed Data Generator
//!
//! Populates a development database with customers, a week of orders,
//! settled payments, and supply stock.
//!
//! ## Usage
//! ```bash
//! cargo run -p rinse-db --bin seed
//! cargo run -p rinse-db --bin seed -- --db ./data/rinse.db --days 14
//! ```

use chrono::{Duration, Local, Utc};
use std::env;

use rinse_core::{NewCustomer, NewInventoryItem, NewOrder, NewPayment, OrderStatus, RateTable, ServiceType, Weight};
use rinse_db::{Database, DbConfig};

const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Budi Santoso", "Jl. Melati 4", "0812-3001"),
    ("Siti Rahayu", "Jl. Kenanga 11", "0812-3002"),
    ("Agus Wijaya", "Jl. Anggrek 7", "0813-3003"),
    ("Dewi Lestari", "Jl. Mawar 2", "0813-3004"),
    ("Rina Kurnia", "Jl. Dahlia 19", "0815-3005"),
    ("Hendra Gunawan", "Jl. Cempaka 5", "0815-3006"),
];

const SUPPLIES: &[(&str, i64, i64)] = &[
    ("Detergent 1L", 24, 18000),
    ("Fabric softener 1L", 18, 15000),
    ("Laundry bags", 150, 1200),
    ("Hangers (dozen)", 30, 9000),
    ("Stain remover", 10, 22000),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments.
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./rinse_dev.db");
    let mut days: i64 = 7;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--days" => {
                if i + 1 < args.len() {
                    days = args[i + 1].parse().unwrap_or(7);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Rinse POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./rinse_dev.db)");
                println!("      --days <N>     Days of order history to generate (default: 7)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Rinse POS Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("History:  {} days", days);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("Connected, migrations applied");

    let existing = db.customers().list().await?;
    if !existing.is_empty() {
        println!("Database already has {} customers, skipping seed.", existing.len());
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    // Customers.
    let mut customer_ids = Vec::new();
    for (name, address, phone) in CUSTOMERS {
        let id = db
            .customers()
            .insert(&NewCustomer {
                name: name.to_string(),
                address: Some(address.to_string()),
                phone: Some(phone.to_string()),
                email: None,
            })
            .await?;
        customer_ids.push(id);
    }
    println!("Seeded {} customers", customer_ids.len());

    // Orders spread over the trailing window, priced at the standard
    // rates; roughly a third already settled.
    let rates = RateTable::default();
    let today = Local::now().date_naive();
    let mut orders = 0;
    let mut settled = 0;

    for day_offset in 0..days {
        let order_date = today - Duration::days(day_offset);
        let per_day = 2 + (day_offset % 3);

        for slot in 0..per_day {
            let seed = (day_offset * 5 + slot) as usize;
            let customer_id = customer_ids[seed % customer_ids.len()];
            let service = ServiceType::ALL[seed % ServiceType::ALL.len()];
            let weight = Weight::from_grams(1500 + (seed as i64 % 6) * 500);
            let quote = rates.quote(service, weight);

            let order_id = db
                .orders()
                .insert(&NewOrder {
                    customer_id,
                    order_date,
                    service,
                    weight_grams: weight.grams(),
                    cost: quote.cost.amount(),
                    status: OrderStatus::Intake,
                })
                .await?;
            orders += 1;

            match seed % 3 {
                0 => {
                    // Paid: tender the cost rounded up to the next 5000.
                    let cost = quote.cost.amount();
                    let tendered = ((cost + 4999) / 5000) * 5000;
                    db.orders()
                        .settle(&NewPayment {
                            order_id,
                            paid_at: Utc::now(),
                            tendered,
                            change_due: tendered - cost,
                        })
                        .await?;
                    settled += 1;
                }
                1 => {
                    db.orders().set_status(order_id, OrderStatus::InProgress).await?;
                }
                _ => {}
            }
        }
    }
    println!("Seeded {} orders ({} settled)", orders, settled);

    // Supplies.
    for (name, stock, unit_cost) in SUPPLIES {
        db.inventory()
            .insert(&NewInventoryItem {
                name: name.to_string(),
                stock: *stock,
                unit_cost: *unit_cost,
            })
            .await?;
    }
    println!("Seeded {} inventory items", SUPPLIES.len());

    println!();
    println!("Seed complete");

    Ok(())
}
