use serde::{Deserialize, Serialize};

use crate::db::Identified;

/// Catalogue entry. `price` is a plain decimal amount, never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl Identified for Product {
    fn id(&self) -> i64 {
        self.id
    }
}
