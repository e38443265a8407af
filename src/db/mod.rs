use std::time::Instant;

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{Product, User};
use crate::seed;

/// A record with an integer primary key.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Returns the first record in stored order whose id equals `id`.
///
/// Ids are unique in both tables, so first match and only match coincide. If a
/// table ever carries a duplicate id, the earliest inserted record wins.
pub fn find_by_id<T: Identified>(records: &[T], id: i64) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

// ── Tables ────────────────────────────────────────────────────────────────────

/// Both collections, built once at startup and only ever read afterwards.
/// No `&mut self` methods exist, so sharing behind an `Arc` needs no lock.
#[derive(Debug, Clone)]
pub struct Tables {
    users: Vec<User>,
    products: Vec<Product>,
}

impl Tables {
    pub fn new(users: Vec<User>, products: Vec<Product>) -> Self {
        Self { users, products }
    }

    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::products())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

pub fn fetch_user_by_id(tables: &Tables, id: i64) -> AppResult<&User> {
    let start = Instant::now();
    let user = find_by_id(tables.users(), id);
    debug!(id, found = user.is_some(), elapsed_us = start.elapsed().as_micros(), "User lookup");

    user.ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

// ── Products ──────────────────────────────────────────────────────────────────

pub fn fetch_product_by_id(tables: &Tables, id: i64) -> AppResult<&Product> {
    let start = Instant::now();
    let product = find_by_id(tables.products(), id);
    debug!(id, found = product.is_some(), elapsed_us = start.elapsed().as_micros(), "Product lookup");

    product.ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
