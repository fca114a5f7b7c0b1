pub mod product;
pub mod commission;
pub mod pricing;

pub use product::{Product, TierPrice};
pub use commission::{BufferType, CommissionRateTable, CommissionRule};
pub use pricing::{base_price, next_tier, resolve_price, AppliedDiscount, PriceResult, ValidationError};
