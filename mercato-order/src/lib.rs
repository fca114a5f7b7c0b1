pub mod models;
pub mod snapshot;
pub mod resolver;
pub mod cart;
pub mod compare;
pub mod bid;

pub use models::{BidPreview, CartQuote, Comparison, ComparisonRow, LineQuote, NextTierHint};
pub use snapshot::PricingSnapshot;
pub use resolver::PriceResolver;
pub use cart::{Cart, CartLine};
pub use compare::compare;
pub use bid::preview_bid;

use mercato_catalog::ValidationError;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Line {index}: {source}")]
    Line {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Line {index}: total quantity overflows")]
    QuantityOverflow { index: usize },
}

pub type QuoteResult<T> = Result<T, QuoteError>;
