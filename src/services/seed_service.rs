use crate::data::database::Database;
use crate::data::models::account::{NewAccount, UpdateAccount};
use crate::data::models::menu_item::NewMenuItem;
use crate::data::models::money::Money;
use crate::data::repos::implementors::account_repo::AccountRepo;
use crate::data::repos::implementors::catalog_repo::CatalogRepo;
use crate::data::repos::traits::repository::Repository;
use crate::security::auth::PasswordService;
use crate::services::errors::SeedError;
use bigdecimal::BigDecimal;
use std::str::FromStr;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// (name, price, category, description)
const SAMPLE_MENU: [(&str, &str, &str, &str); 6] = [
    ("Classic Burger", "8.99", "Burgers", "Beef patty with lettuce, tomato and house sauce"),
    ("Cheeseburger", "9.99", "Burgers", "Classic burger topped with cheddar"),
    ("French Fries", "3.99", "Sides", "Crispy salted fries"),
    ("Onion Rings", "4.99", "Sides", "Beer-battered onion rings"),
    ("Cola", "2.49", "Drinks", "Chilled fountain cola"),
    ("Milkshake", "4.99", "Drinks", "Vanilla, chocolate or strawberry"),
];

/// Startup data: the bootstrap administrator and the optional sample menu.
pub struct SeedService {
    accounts: AccountRepo,
    catalog: CatalogRepo,
    passwords: PasswordService,
}

impl SeedService {
    pub fn new(db: Database) -> Self {
        SeedService {
            accounts: AccountRepo::new(db.clone()),
            catalog: CatalogRepo::new(db),
            passwords: PasswordService::new(),
        }
    }

    /// Makes sure an administrator named `admin` exists; returns its id.
    /// An existing non-admin `admin` account is promoted, never duplicated.
    pub async fn ensure_admin(&self, password: &str) -> Result<i32, SeedError> {
        if let Some(existing) = self
            .accounts
            .get_by_username(ADMIN_USERNAME)
            .await
            .map_err(db_error)?
        {
            if !existing.is_admin {
                let promote = UpdateAccount {
                    is_admin: Some(true),
                };
                self.accounts
                    .update(existing.account_id, promote)
                    .await
                    .map_err(db_error)?;
                tracing::info!(account_id = existing.account_id, "Promoted existing admin account");
            } else {
                tracing::debug!("Admin account already present");
            }
            return Ok(existing.account_id);
        }

        let password_hash = self
            .passwords
            .hash_password(password)
            .await
            .map_err(|_| SeedError::HashingError)?;

        let account_id = self
            .accounts
            .add(NewAccount {
                username: ADMIN_USERNAME,
                email: ADMIN_EMAIL,
                password_hash: &password_hash,
                is_admin: true,
            })
            .await
            .map_err(db_error)?;

        tracing::info!(account_id, "Admin account created");

        Ok(account_id)
    }

    /// Inserts the sample items whose names are not on the menu yet.
    /// Returns how many were added.
    pub async fn seed_menu(&self) -> Result<usize, SeedError> {
        let mut added = 0;

        for (name, price, category, description) in SAMPLE_MENU {
            if self.catalog.get_by_name(name).await.map_err(db_error)?.is_some() {
                continue;
            }

            let price = BigDecimal::from_str(price)
                .map(Money::new)
                .map_err(|_| SeedError::InvalidPrice(price.to_string()))?;

            self.catalog
                .add(NewMenuItem {
                    name,
                    price,
                    category,
                    description,
                    available: true,
                })
                .await
                .map_err(db_error)?;
            added += 1;
        }

        tracing::info!(added, "Sample menu seeded");

        Ok(added)
    }
}

fn db_error(e: diesel::result::Error) -> SeedError {
    tracing::error!("Seed step failed: {}", e);
    SeedError::DatabaseError(e.to_string())
}
