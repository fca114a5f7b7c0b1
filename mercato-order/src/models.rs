use serde::{Deserialize, Serialize};
use uuid::Uuid;
use mercato_catalog::PriceResult;
use mercato_shared::Platform;
use crate::{QuoteError, QuoteResult};

/// One priced cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineQuote {
    pub product_id: Uuid,
    pub name: String,
    pub quantity: i64,
    pub unit: PriceResult,
    pub line_total: f64,
    pub line_original_total: f64,
}

impl LineQuote {
    pub fn new(product_id: Uuid, name: String, quantity: i64, unit: PriceResult) -> Self {
        let units = quantity as f64;
        Self {
            product_id,
            name,
            quantity,
            unit,
            line_total: unit.final_price * units,
            line_original_total: unit.original_price * units,
        }
    }
}

/// Priced cart; totals are unrounded sums of the line totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartQuote {
    pub platform: Platform,
    pub lines: Vec<LineQuote>,
    pub item_count: i64,
    pub subtotal: f64,
    pub original_subtotal: f64,
    pub savings: f64,
}

impl CartQuote {
    pub fn empty(platform: Platform) -> Self {
        Self {
            platform,
            lines: Vec::new(),
            item_count: 0,
            subtotal: 0.0,
            original_subtotal: 0.0,
            savings: 0.0,
        }
    }

    /// Add a line and update totals
    pub fn add_line(&mut self, line: LineQuote) -> QuoteResult<()> {
        self.item_count = self
            .item_count
            .checked_add(line.quantity)
            .ok_or(QuoteError::QuantityOverflow { index: self.lines.len() })?;
        self.subtotal += line.line_total;
        self.original_subtotal += line.line_original_total;
        self.savings = self.original_subtotal - self.subtotal;
        self.lines.push(line);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonRow {
    pub product_id: Uuid,
    pub name: String,
    pub unit: PriceResult,
    pub total: f64,
}

/// Side-by-side prices for the same quantity and platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub platform: Platform,
    pub quantity: i64,
    pub rows: Vec<ComparisonRow>,
    /// Index into `rows` of the lowest final unit price
    pub cheapest: Option<usize>,
}

/// What ordering up to the next volume breakpoint would cost
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextTierHint {
    pub quantity: i64,
    pub units_needed: i64,
    pub unit: PriceResult,
    pub savings_per_unit: f64,
}

/// Corporate bulk bid preview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BidPreview {
    pub product_id: Uuid,
    pub quantity: i64,
    pub unit: PriceResult,
    pub total: f64,
    pub next_tier: Option<NextTierHint>,
}
