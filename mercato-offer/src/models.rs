use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use mercato_catalog::{AppliedDiscount, Product};
use mercato_shared::{Platform, PromotionPlatform};

/// Which products a discount program covers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductScope {
    All,
    Products(HashSet<Uuid>),
}

impl ProductScope {
    pub fn includes(&self, product_id: &Uuid) -> bool {
        match self {
            ProductScope::All => true,
            ProductScope::Products(ids) => ids.contains(product_id),
        }
    }
}

/// A percentage discount program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub product_scope: ProductScope,
    pub platform: PromotionPlatform,
    pub reward_percentage: f64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool { true }

impl Promotion {
    /// Active, store-wide program with no time window
    pub fn new(name: impl Into<String>, platform: PromotionPlatform, reward_percentage: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            product_scope: ProductScope::All,
            platform,
            reward_percentage,
            active: true,
            starts_at: None,
            ends_at: None,
        }
    }

    pub fn for_products(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.product_scope = ProductScope::Products(ids.into_iter().collect());
        self
    }

    pub fn with_window(mut self, starts_at: Option<DateTime<Utc>>, ends_at: Option<DateTime<Utc>>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Active and inside `[starts_at, ends_at)`; open ends are unbounded
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        if !self.active {
            return false;
        }
        if self.starts_at.is_some_and(|start| now < start) {
            return false;
        }
        if self.ends_at.is_some_and(|end| now >= end) {
            return false;
        }
        true
    }

    pub fn applies_to(&self, product: &Product, platform: Platform, now: DateTime<Utc>) -> bool {
        self.is_live(now)
            && self.platform.covers(platform)
            && self.product_scope.includes(&product.id)
    }

    pub fn as_discount(&self) -> AppliedDiscount {
        AppliedDiscount::new(self.reward_percentage)
    }
}
