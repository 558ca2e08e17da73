// ABOUTME: Demo data seeder for the sweet shop inventory
// ABOUTME: Populates the database with a catalogue of Indian sweets
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo data seeder for the Sweet Shop Management System API.
//!
//! Populates the database with a realistic Indian-sweets catalogue for
//! manual testing and demos.
//!
//! Usage:
//! ```bash
//! # Seed into the default database
//! cargo run --bin seed-demo-data
//!
//! # Clear existing sweets first
//! cargo run --bin seed-demo-data -- --reset
//! ```

use anyhow::Result;
use clap::Parser;
use sweet_shop_server::config::ServerConfig;
use sweet_shop_server::database::Database;
use sweet_shop_server::models::Sweet;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Sweet Shop demo data seeder",
    long_about = "Populate the database with a catalogue of Indian sweets for demos"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete existing sweets before seeding
    #[arg(long)]
    reset: bool,
}

/// Demo sweet configuration
struct DemoSweet {
    name: &'static str,
    category: &'static str,
    price: f64,
    quantity: i64,
}

const DEMO_SWEETS: &[DemoSweet] = &[
    DemoSweet { name: "Gulab Jamun", category: "Milk-based", price: 25.00, quantity: 50 },
    DemoSweet { name: "Rasgulla", category: "Milk-based", price: 20.00, quantity: 60 },
    DemoSweet { name: "Kaju Katli", category: "Dry Sweet", price: 45.00, quantity: 40 },
    DemoSweet { name: "Barfi", category: "Milk-based", price: 30.00, quantity: 55 },
    DemoSweet { name: "Jalebi", category: "Fried Sweet", price: 15.00, quantity: 80 },
    DemoSweet { name: "Ladoo", category: "Dry Sweet", price: 35.00, quantity: 45 },
    DemoSweet { name: "Rasmalai", category: "Milk-based", price: 40.00, quantity: 35 },
    DemoSweet { name: "Halwa", category: "Halwa", price: 28.00, quantity: 50 },
    DemoSweet { name: "Peda", category: "Milk-based", price: 32.00, quantity: 60 },
    DemoSweet { name: "Soan Papdi", category: "Dry Sweet", price: 22.00, quantity: 70 },
    DemoSweet { name: "Besan Ladoo", category: "Dry Sweet", price: 30.00, quantity: 55 },
    DemoSweet { name: "Kheer", category: "Milk-based", price: 35.00, quantity: 40 },
    DemoSweet { name: "Gajar Halwa", category: "Halwa", price: 38.00, quantity: 45 },
    DemoSweet { name: "Motichoor Ladoo", category: "Dry Sweet", price: 28.00, quantity: 65 },
    DemoSweet { name: "Rabri", category: "Milk-based", price: 42.00, quantity: 30 },
    DemoSweet { name: "Cham Cham", category: "Milk-based", price: 26.00, quantity: 50 },
    DemoSweet { name: "Sandesh", category: "Milk-based", price: 33.00, quantity: 55 },
    DemoSweet { name: "Kulfi", category: "Frozen", price: 20.00, quantity: 75 },
    DemoSweet { name: "Malpua", category: "Fried Sweet", price: 18.00, quantity: 60 },
    DemoSweet { name: "Gulab Jamun with Rabri", category: "Milk-based", price: 50.00, quantity: 25 },
    DemoSweet { name: "Badam Halwa", category: "Halwa", price: 45.00, quantity: 35 },
    DemoSweet { name: "Mysore Pak", category: "Dry Sweet", price: 40.00, quantity: 40 },
    DemoSweet { name: "Kalakand", category: "Milk-based", price: 36.00, quantity: 45 },
    DemoSweet { name: "Balushahi", category: "Fried Sweet", price: 24.00, quantity: 55 },
    DemoSweet { name: "Imarti", category: "Fried Sweet", price: 16.00, quantity: 70 },
];

#[tokio::main]
async fn main() -> Result<()> {
    sweet_shop_server::logging::init_from_env()?;

    let args = SeedArgs::parse();
    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database_url);

    let database = Database::new(&database_url).await?;

    if args.reset {
        sqlx::query("DELETE FROM sweets")
            .execute(database.pool())
            .await?;
        info!("cleared existing sweets");
    }

    let mut added = 0usize;
    for demo in DEMO_SWEETS {
        let sweet = Sweet::new(
            demo.name.to_owned(),
            demo.category.to_owned(),
            demo.price,
            demo.quantity,
        );
        database.create_sweet(&sweet).await?;
        added += 1;
    }

    let total = database.list_sweets().await?.len();
    info!("seeded {added} sweets ({total} total in database)");

    Ok(())
}
