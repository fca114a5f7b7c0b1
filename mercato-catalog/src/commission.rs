use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use mercato_shared::Platform;
use crate::pricing::ValidationError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BufferType {
    /// Added to the unit price
    Fixed,
    /// Percent markup on the unit price
    Percentage,
}

/// Marketplace markup applied on top of a vendor's base or tier price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CommissionRule {
    pub buffer_type: BufferType,
    pub buffer_value: f64,
}

impl CommissionRule {
    pub fn fixed(value: f64) -> Self {
        Self { buffer_type: BufferType::Fixed, buffer_value: value }
    }

    pub fn percentage(value: f64) -> Self {
        Self { buffer_type: BufferType::Percentage, buffer_value: value }
    }

    pub fn apply(&self, base_price: f64) -> f64 {
        match self.buffer_type {
            BufferType::Fixed => base_price + self.buffer_value,
            BufferType::Percentage => base_price * (1.0 + self.buffer_value / 100.0),
        }
    }

    /// Finite, and a percentage markdown never reaches -100% (a zero or negative price)
    pub fn validate(&self) -> Result<(), ValidationError> {
        let value = self.buffer_value;
        if !value.is_finite() || (self.buffer_type == BufferType::Percentage && value <= -100.0) {
            return Err(ValidationError::InvalidBuffer(value));
        }
        Ok(())
    }
}

/// Flat wire form of one table row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionEntry {
    pub platform: Platform,
    pub category: String,
    #[serde(flatten)]
    pub rule: CommissionRule,
}

/// Commission rules keyed by (platform, product category). At most one rule per pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<CommissionEntry>", into = "Vec<CommissionEntry>")]
pub struct CommissionRateTable {
    rates: HashMap<Platform, HashMap<String, CommissionRule>>,
}

impl CommissionRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rule for a pair, returning the one it replaced
    pub fn insert(
        &mut self,
        platform: Platform,
        category: impl Into<String>,
        rule: CommissionRule,
    ) -> Option<CommissionRule> {
        self.rates
            .entry(platform)
            .or_default()
            .insert(category.into(), rule)
    }

    pub fn with_rule(mut self, platform: Platform, category: impl Into<String>, rule: CommissionRule) -> Self {
        self.insert(platform, category, rule);
        self
    }

    pub fn rule_for(&self, platform: Platform, category: &str) -> Option<&CommissionRule> {
        self.rates.get(&platform)?.get(category)
    }

    pub fn remove(&mut self, platform: Platform, category: &str) -> Option<CommissionRule> {
        self.rates.get_mut(&platform)?.remove(category)
    }

    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = (Platform, &str, &CommissionRule)> {
        self.rates.iter().flat_map(|(platform, rules)| {
            rules
                .iter()
                .map(move |(category, rule)| (*platform, category.as_str(), rule))
        })
    }
}

impl From<Vec<CommissionEntry>> for CommissionRateTable {
    fn from(entries: Vec<CommissionEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            // later rows win
            table.insert(entry.platform, entry.category, entry.rule);
        }
        table
    }
}

impl From<CommissionRateTable> for Vec<CommissionEntry> {
    fn from(table: CommissionRateTable) -> Self {
        let mut entries: Vec<CommissionEntry> = table
            .entries()
            .map(|(platform, category, rule)| CommissionEntry {
                platform,
                category: category.to_string(),
                rule: *rule,
            })
            .collect();
        entries.sort_by(|a, b| {
            a.platform
                .as_str()
                .cmp(b.platform.as_str())
                .then_with(|| a.category.cmp(&b.category))
        });
        entries
    }
}
