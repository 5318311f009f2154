//! Database seeder for Bazaar development and testing.
//!
//! Seeds a seller holding an approved 50 USD listing and a buyer holding a
//! 100 USD wallet, so a purchase can be exercised end to end right after
//! seeding.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use bazaar_core::auth::hash_password;
use bazaar_db::entities::{
    accounts, item_entries, items, listings,
    sea_orm_active_enums::{AccountStatus, ListingStatus},
    wallets,
};

/// Seller account ID (consistent for all seeds)
const SELLER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Buyer account ID (consistent for all seeds)
const BUYER_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Item type ID (consistent for all seeds)
const ITEM_ID: &str = "00000000-0000-0000-0000-000000000010";
/// Item entry ID (consistent for all seeds)
const ENTRY_ID: &str = "00000000-0000-0000-0000-000000000011";
/// Listing ID (consistent for all seeds)
const LISTING_ID: &str = "00000000-0000-0000-0000-000000000020";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = bazaar_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding accounts...");
    seed_accounts(&db).await;

    println!("Seeding item and entry...");
    seed_item(&db).await;

    println!("Seeding wallets...");
    seed_wallets(&db).await;

    println!("Seeding approved listing...");
    seed_listing(&db).await;

    println!("Seeding complete!");
}

fn seller_id() -> Uuid {
    Uuid::parse_str(SELLER_ID).unwrap()
}

fn buyer_id() -> Uuid {
    Uuid::parse_str(BUYER_ID).unwrap()
}

fn item_id() -> Uuid {
    Uuid::parse_str(ITEM_ID).unwrap()
}

fn entry_id() -> Uuid {
    Uuid::parse_str(ENTRY_ID).unwrap()
}

fn listing_id() -> Uuid {
    Uuid::parse_str(LISTING_ID).unwrap()
}

/// Seeds the seller and buyer accounts.
async fn seed_accounts(db: &DatabaseConnection) {
    let seeds = [
        (seller_id(), "seller@bazaar.dev", "Seed Seller"),
        (buyer_id(), "buyer@bazaar.dev", "Seed Buyer"),
    ];

    for (id, email, name) in seeds {
        if accounts::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Account {email} already exists, skipping...");
            continue;
        }

        let password_hash = hash_password("password123").expect("Failed to hash password");
        let account = accounts::ActiveModel {
            id: Set(id),
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            display_name: Set(name.to_string()),
            status: Set(AccountStatus::Active),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = account.insert(db).await {
            eprintln!("Failed to insert account {email}: {e}");
        } else {
            println!("  Created account: {email} (password: password123)");
        }
    }
}

/// Seeds an item type and an entry owned by the seller.
async fn seed_item(db: &DatabaseConnection) {
    if items::Entity::find_by_id(item_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_none()
    {
        let item = items::ActiveModel {
            id: Set(item_id()),
            name: Set("Enchanted Sword".to_string()),
            description: Set(Some("A development seed item.".to_string())),
            is_trading: Set(true),
            created_at: Set(Utc::now().into()),
        };
        if let Err(e) = item.insert(db).await {
            eprintln!("Failed to insert item: {e}");
        } else {
            println!("  Created item: Enchanted Sword");
        }
    } else {
        println!("  Item already exists, skipping...");
    }

    if item_entries::Entity::find_by_id(entry_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_none()
    {
        let entry = item_entries::ActiveModel {
            id: Set(entry_id()),
            owner_id: Set(seller_id()),
            item_type_id: Set(item_id()),
            pseudonym: Set(Some("Sting".to_string())),
            created_at: Set(Utc::now().into()),
        };
        if let Err(e) = entry.insert(db).await {
            eprintln!("Failed to insert item entry: {e}");
        } else {
            println!("  Created item entry owned by seller");
        }
    } else {
        println!("  Item entry already exists, skipping...");
    }
}

/// Seeds the buyer's 100 USD wallet. The seller gets no wallet; settlement
/// auto-provisions it on the first sale.
async fn seed_wallets(db: &DatabaseConnection) {
    if wallets::Entity::find_by_id((buyer_id(), "USD".to_string()))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Buyer wallet already exists, skipping...");
        return;
    }

    let wallet = wallets::ActiveModel {
        account_id: Set(buyer_id()),
        currency_code: Set("USD".to_string()),
        balance: Set(dec!(100)),
        last_transaction_date: Set(None),
        is_active: Set(true),
    };

    if let Err(e) = wallet.insert(db).await {
        eprintln!("Failed to insert buyer wallet: {e}");
    } else {
        println!("  Created buyer wallet: 100 USD");
    }
}

/// Seeds an approved 50 USD listing for the seller's item entry.
async fn seed_listing(db: &DatabaseConnection) {
    if listings::Entity::find_by_id(listing_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Listing already exists, skipping...");
        return;
    }

    let listing = listings::ActiveModel {
        id: Set(listing_id()),
        seller_id: Set(seller_id()),
        item_entry_id: Set(entry_id()),
        currency_code: Set("USD".to_string()),
        price_amount: Set(dec!(50)),
        status: Set(ListingStatus::Approved),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    if let Err(e) = listing.insert(db).await {
        eprintln!("Failed to insert listing: {e}");
    } else {
        println!("  Created approved listing: 50 USD");
    }
}
