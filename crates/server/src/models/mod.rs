//! Domain models held in the in-memory stores.

pub mod product;
pub mod user;

pub use product::{Mockup, Product};
pub use user::User;
