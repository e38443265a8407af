//! Fixed records the service is started with. Tests and chaos scenarios key off
//! these exact ids (product 123 exists, id 999 exists in neither table).

use crate::models::{Product, User};

pub fn users() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Widget", 9.99),
        Product::new(2, "Gadget", 19.99),
        Product::new(123, "Special Item", 99.99),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn user_ids_are_unique() {
        let users = users();
        let ids: HashSet<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn product_ids_are_unique() {
        let products = products();
        let ids: HashSet<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn prices_are_non_negative() {
        assert!(products().iter().all(|p| p.price >= 0.0));
    }
}
