use serde::{Deserialize, Serialize};
use uuid::Uuid;
use mercato_catalog::Product;
use mercato_shared::Platform;
use crate::models::{CartQuote, LineQuote};
use crate::resolver::PriceResolver;
use crate::{QuoteError, QuoteResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

/// A buyer's cart on one platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub platform: Platform,
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(platform: Platform) -> Self {
        Self { platform, lines: Vec::new() }
    }

    /// Add units of a product, merging into an existing line for the same product
    pub fn add(&mut self, product: Product, quantity: i64) -> QuoteResult<()> {
        match self.lines.iter().position(|line| line.product.id == product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(QuoteError::QuantityOverflow { index })?;
            }
            None => self.lines.push(CartLine { product, quantity }),
        }
        Ok(())
    }

    pub fn remove(&mut self, product_id: &Uuid) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| &line.product.id == product_id)?;
        Some(self.lines.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Price every line; tier selection uses each line's own quantity
    pub fn quote(&self, resolver: &PriceResolver<'_>) -> QuoteResult<CartQuote> {
        let mut quote = CartQuote::empty(self.platform);

        for (index, line) in self.lines.iter().enumerate() {
            let unit = resolver
                .resolve(&line.product, line.quantity, self.platform)
                .map_err(|e| match e {
                    QuoteError::Validation(source) => QuoteError::Line { index, source },
                    other => other,
                })?;

            quote.add_line(LineQuote::new(
                line.product.id,
                line.product.name.clone(),
                line.quantity,
                unit,
            ))?;
        }

        tracing::debug!(
            platform = %self.platform,
            lines = quote.lines.len(),
            subtotal = quote.subtotal,
            "Quoted cart"
        );

        Ok(quote)
    }
}
