pub mod models;
pub mod selector;

pub use models::{ProductScope, Promotion};
pub use selector::{PromotionSelector, SelectionPolicy};
