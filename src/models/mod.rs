mod order;
mod product;
mod user;

pub use order::{OrderConfirmation, OrderRequest};
pub use product::Product;
pub use user::User;
