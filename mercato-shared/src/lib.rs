pub mod models;
pub mod money;
pub mod platform;

pub use money::{format_price, round_cents};
pub use platform::{Platform, PromotionPlatform};
